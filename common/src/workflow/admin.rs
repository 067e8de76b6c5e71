//! Administrator panel: create, edit and delete resources behind a shared secret code.
//!
//! The panel owns the add-form buffer, at most one edit session, a notice board and
//! its own copy of the listing. Every successful mutation re-fetches the whole list;
//! failures leave all buffers as they were so the user can correct and resubmit.
//!
//! `F` is the platform's handle for a chosen file (`web_sys::File` in the browser).
//! The workflow only stores it and hands it back inside request effects.

use crate::api::MutationError;
use crate::model::resource::Resource;

use super::form::{FormField, ResourceForm};
use super::listing::Listing;
use super::notice::{NoticeBoard, NoticeKind, NOTICE_DISPLAY_MS};
use super::secret::SecretCode;
use super::Phase;

pub const ADD_SUCCESS: &str = "Resource added successfully!";
pub const ADD_ERROR: &str = "Error adding resource";
pub const UPDATE_SUCCESS: &str = "Resource updated successfully!";
pub const UPDATE_ERROR: &str = "Error updating resource";
pub const DELETE_SUCCESS: &str = "Resource deleted successfully!";
pub const DELETE_ERROR: &str = "Error deleting resource";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this resource?";
pub const SECRET_CODE_LABEL: &str = "Admin Secret Code";

/// Edit surface bound to one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<F> {
    pub resource_id: String,
    pub form: ResourceForm,
    /// Replacement document; `None` keeps the stored one.
    pub document: Option<F>,
    pub secret_code: SecretCode,
    pub phase: Phase,
}

impl<F> EditSession<F> {
    /// Seeds the session from `resource`. The secret code is passed in explicitly; the
    /// panel hands over whatever the add form currently holds.
    pub fn open(resource: &Resource, secret_code: SecretCode) -> Self {
        Self {
            resource_id: resource.id.clone(),
            form: ResourceForm::from_resource(resource),
            document: None,
            secret_code,
            phase: Phase::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminEvent<F> {
    Activated,
    ResourcesLoaded(Result<Vec<Resource>, String>),

    AddFieldChanged(FormField, String),
    AddDocumentChosen(Option<F>),
    SecretCodeChanged(String),
    SubmitCreate,
    CreateFinished(Result<(), MutationError>),

    OpenEdit(String),
    EditFieldChanged(FormField, String),
    EditDocumentChosen(Option<F>),
    EditSecretCodeChanged(String),
    SubmitEdit,
    CancelEdit,
    UpdateFinished {
        id: String,
        result: Result<(), MutationError>,
    },

    DeleteRequested(String),
    /// The user answered the confirmation dialog with "yes".
    DeleteConfirmed(String),
    DeleteFinished(Result<(), MutationError>),

    NoticeExpired(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminEffect<F> {
    FetchResources,
    ScheduleNoticeExpiry {
        notice_id: u64,
        after_ms: u32,
    },
    CreateResource {
        form: ResourceForm,
        document: Option<F>,
        secret_code: SecretCode,
    },
    UpdateResource {
        id: String,
        form: ResourceForm,
        document: Option<F>,
        secret_code: SecretCode,
    },
    /// Ask the user; answer with `DeleteConfirmed` only on "yes".
    ConfirmDelete {
        id: String,
        prompt: &'static str,
    },
    DeleteResource {
        id: String,
        secret_code: SecretCode,
    },
    /// Developer-console trace of an unexpected failure.
    Trace {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminState<F> {
    pub listing: Listing,
    pub add_form: ResourceForm,
    pub add_document: Option<F>,
    /// Code typed into the add form. Also used for deletes and as the edit default.
    pub secret_code: SecretCode,
    pub create_phase: Phase,
    /// Bumped whenever the add form is cleared, so the view can reset its file input.
    pub form_revision: u32,
    pub edit: Option<EditSession<F>>,
    pub delete_phase: Phase,
    pub notice: NoticeBoard,
}

impl<F> Default for AdminState<F> {
    fn default() -> Self {
        Self {
            listing: Listing::Loading,
            add_form: ResourceForm::default(),
            add_document: None,
            secret_code: SecretCode::default(),
            create_phase: Phase::Idle,
            form_revision: 0,
            edit: None,
            delete_phase: Phase::Idle,
            notice: NoticeBoard::default(),
        }
    }
}

impl<F: Clone> AdminState<F> {
    pub fn transition(mut self, event: AdminEvent<F>) -> (Self, Vec<AdminEffect<F>>) {
        let mut effects = Vec::new();

        match event {
            AdminEvent::Activated => {
                self.listing = Listing::Loading;
                effects.push(AdminEffect::FetchResources);
            }
            AdminEvent::ResourcesLoaded(result) => {
                self.listing = Listing::from_fetch(result);
            }

            AdminEvent::AddFieldChanged(field, value) => self.add_form.set(field, value),
            AdminEvent::AddDocumentChosen(document) => self.add_document = document,
            AdminEvent::SecretCodeChanged(code) => self.secret_code = SecretCode::new(code),
            AdminEvent::SubmitCreate => {
                match missing_input(&self.add_form, &self.secret_code) {
                    Some(message) => notify(&mut self.notice, NoticeKind::Error, message, &mut effects),
                    None => {
                        self.create_phase = Phase::Submitting;
                        effects.push(AdminEffect::CreateResource {
                            form: self.add_form.clone(),
                            document: self.add_document.clone(),
                            secret_code: self.secret_code.clone(),
                        });
                    }
                }
            }
            AdminEvent::CreateFinished(result) => {
                self.create_phase = Phase::Idle;
                match result {
                    Ok(()) => {
                        // The secret code survives so the next submission can reuse it.
                        self.add_form = ResourceForm::default();
                        self.add_document = None;
                        self.form_revision = self.form_revision.wrapping_add(1);
                        notify(&mut self.notice, NoticeKind::Success, ADD_SUCCESS, &mut effects);
                        effects.push(AdminEffect::FetchResources);
                    }
                    Err(error) => fail(&mut self.notice, "create", ADD_ERROR, error, &mut effects),
                }
            }

            AdminEvent::OpenEdit(id) => {
                if let Some(resource) = self.listing.find(&id) {
                    self.edit = Some(EditSession::open(resource, self.secret_code.clone()));
                }
            }
            AdminEvent::EditFieldChanged(field, value) => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.form.set(field, value);
                }
            }
            AdminEvent::EditDocumentChosen(document) => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.document = document;
                }
            }
            AdminEvent::EditSecretCodeChanged(code) => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.secret_code = SecretCode::new(code);
                }
            }
            AdminEvent::SubmitEdit => {
                if let Some(edit) = self.edit.as_mut() {
                    match missing_input(&edit.form, &edit.secret_code) {
                        Some(message) => {
                            notify(&mut self.notice, NoticeKind::Error, message, &mut effects)
                        }
                        None => {
                            edit.phase = Phase::Submitting;
                            effects.push(AdminEffect::UpdateResource {
                                id: edit.resource_id.clone(),
                                form: edit.form.clone(),
                                document: edit.document.clone(),
                                secret_code: edit.secret_code.clone(),
                            });
                        }
                    }
                }
            }
            AdminEvent::CancelEdit => self.edit = None,
            AdminEvent::UpdateFinished { id, result } => {
                let same_session = self.edit.as_ref().is_some_and(|e| e.resource_id == id);
                match result {
                    Ok(()) => {
                        if same_session {
                            self.edit = None;
                        }
                        notify(&mut self.notice, NoticeKind::Success, UPDATE_SUCCESS, &mut effects);
                        effects.push(AdminEffect::FetchResources);
                    }
                    Err(error) => {
                        if let Some(edit) = self.edit.as_mut().filter(|_| same_session) {
                            edit.phase = Phase::Idle;
                        }
                        fail(&mut self.notice, "update", UPDATE_ERROR, error, &mut effects);
                    }
                }
            }

            AdminEvent::DeleteRequested(id) => {
                effects.push(AdminEffect::ConfirmDelete {
                    id,
                    prompt: DELETE_CONFIRMATION,
                });
            }
            AdminEvent::DeleteConfirmed(id) => {
                self.delete_phase = Phase::Submitting;
                effects.push(AdminEffect::DeleteResource {
                    id,
                    secret_code: self.secret_code.clone(),
                });
            }
            AdminEvent::DeleteFinished(result) => {
                self.delete_phase = Phase::Idle;
                match result {
                    Ok(()) => {
                        notify(&mut self.notice, NoticeKind::Success, DELETE_SUCCESS, &mut effects);
                        effects.push(AdminEffect::FetchResources);
                    }
                    Err(error) => fail(&mut self.notice, "delete", DELETE_ERROR, error, &mut effects),
                }
            }

            AdminEvent::NoticeExpired(id) => {
                self.notice.expire(id);
            }
        }

        (self, effects)
    }
}

impl<F> AdminState<F> {
    pub fn is_editing(&self, id: &str) -> bool {
        self.edit.as_ref().is_some_and(|e| e.resource_id == id)
    }
}

/// Client-side required-field check; returns the message to show when it fails.
fn missing_input(form: &ResourceForm, secret_code: &SecretCode) -> Option<String> {
    if let Some(field) = form.missing_required() {
        return Some(format!("{} is required", field.label()));
    }
    if secret_code.is_empty() {
        return Some(format!("{} is required", SECRET_CODE_LABEL));
    }
    None
}

fn notify<F>(
    board: &mut NoticeBoard,
    kind: NoticeKind,
    text: impl Into<String>,
    effects: &mut Vec<AdminEffect<F>>,
) {
    let notice_id = board.show(kind, text);
    effects.push(AdminEffect::ScheduleNoticeExpiry {
        notice_id,
        after_ms: NOTICE_DISPLAY_MS,
    });
}

fn fail<F>(
    board: &mut NoticeBoard,
    action: &str,
    fallback: &str,
    error: MutationError,
    effects: &mut Vec<AdminEffect<F>>,
) {
    effects.push(AdminEffect::Trace {
        message: format!("{} failed: {}", action, error),
    });
    notify(board, NoticeKind::Error, error.user_message(fallback), effects);
}
