//! View rendering for the admin panel.
//!
//! Layout: the add form with its notice banner, the list of existing resources (each
//! with edit and delete buttons) and the edit top sheet. Form inputs are bound to the
//! view-model on every keystroke; required fields carry the native `required`
//! attribute so the browser blocks empty submissions before the view-model does.

use common::workflow::{AdminEvent, AdminState, FormField, Listing, Phase, ResourceForm};
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::super::resource_card::resource_card;
use super::edit_sheet::edit_sheet;
use super::CatalogAdmin;
use crate::components::notice::notice_banner;

pub fn view(component: &CatalogAdmin, ctx: &Context<CatalogAdmin>) -> Html {
    let state = &component.state;
    let link = ctx.link();

    html! {
        <div class="admin-panel">
            <div class="form-container">
                <h1>{"Resources Manager Admin Panel"}</h1>
                { build_add_form(state, link) }
                { notice_banner(state.notice.current()) }
            </div>
            { build_resource_list(state, link) }
            { edit_sheet(state, link) }
        </div>
    }
}

fn build_add_form(state: &AdminState<File>, link: &Scope<CatalogAdmin>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        AdminEvent::SubmitCreate
    });
    let submitting = state.create_phase == Phase::Submitting;

    html! {
        <form {onsubmit}>
            {
                field_inputs(
                    "add",
                    &state.add_form,
                    link.callback(|(field, value): (FormField, String)| {
                        AdminEvent::AddFieldChanged(field, value)
                    }),
                )
            }
            {
                document_input(
                    "add-pdf",
                    format!("add-pdf-{}", state.form_revision),
                    link.callback(AdminEvent::AddDocumentChosen),
                )
            }
            {
                secret_input(
                    "add-secret",
                    state.secret_code.as_str(),
                    link.callback(AdminEvent::SecretCodeChanged),
                )
            }
            <button type="submit">
                { if submitting { "Adding..." } else { "Add Resource" } }
            </button>
        </form>
    }
}

fn build_resource_list(state: &AdminState<File>, link: &Scope<CatalogAdmin>) -> Html {
    let body = match &state.listing {
        Listing::Loading => html! { <div class="loading">{"Loading resources..."}</div> },
        Listing::Failed(message) => html! { <div class="error">{ message.clone() }</div> },
        Listing::Ready(resources) => html! {
            <div class="resources-grid">
                {
                    for resources.iter().map(|resource| {
                        let edit_id = resource.id.clone();
                        let delete_id = resource.id.clone();
                        let edit_class = classes!("edit-btn", state.is_editing(&resource.id).then_some("active"));
                        let actions = html! {
                            <div class="card-actions">
                                <button
                                    class={edit_class}
                                    onclick={link.callback(move |_: MouseEvent| AdminEvent::OpenEdit(edit_id.clone()))}
                                >
                                    {"Edit Resource"}
                                </button>
                                <button
                                    class="delete-btn"
                                    onclick={link.callback(move |_: MouseEvent| AdminEvent::DeleteRequested(delete_id.clone()))}
                                >
                                    {"Delete Resource"}
                                </button>
                            </div>
                        };
                        resource_card(resource, actions)
                    })
                }
            </div>
        },
    };

    html! {
        <div class="resources-list">
            <h2>{"Existing Resources"}</h2>
            { body }
        </div>
    }
}

/// Inputs for the four editable fields. `prefix` keeps element ids unique between the
/// add form and the edit sheet.
pub(super) fn field_inputs(
    prefix: &str,
    form: &ResourceForm,
    on_change: Callback<(FormField, String)>,
) -> Html {
    FormField::ALL
        .into_iter()
        .map(|field| {
            let id = format!("{}-{}", prefix, field.wire_name());
            let label = format!("{}:", field.label());
            let value = form.get(field).to_string();
            let on_change = on_change.clone();

            if field == FormField::ExtraInfo {
                let oninput = Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    on_change.emit((field, input.value()));
                });
                html! {
                    <div class="form-group">
                        <label for={id.clone()}>{ label }</label>
                        <textarea id={id} name={field.wire_name()} value={value} {oninput} />
                    </div>
                }
            } else {
                let oninput = Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit((field, input.value()));
                });
                html! {
                    <div class="form-group">
                        <label for={id.clone()}>{ label }</label>
                        <input
                            type="text"
                            id={id}
                            name={field.wire_name()}
                            value={value}
                            required={field.is_required()}
                            {oninput}
                        />
                    </div>
                }
            }
        })
        .collect::<Html>()
}

/// PDF picker. Changing `key` recreates the element, which is the only way to clear a
/// file input.
pub(super) fn document_input(id: &str, key: String, on_choose: Callback<Option<File>>) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_choose.emit(input.files().and_then(|files| files.get(0)));
    });

    html! {
        <div class="form-group">
            <label for={id.to_string()}>{"Upload PDF:"}</label>
            <input key={key} type="file" id={id.to_string()} name="pdf" accept=".pdf" {onchange} />
        </div>
    }
}

pub(super) fn secret_input(id: &str, value: &str, on_input: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_input.emit(input.value());
    });

    html! {
        <div class="form-group">
            <label for={id.to_string()}>{"Admin Secret Code:"}</label>
            <input
                type="password"
                id={id.to_string()}
                name="secretCode"
                value={value.to_string()}
                required=true
                {oninput}
            />
        </div>
    }
}
