use common::workflow::{AdminEvent, AdminState, FormField, Phase};
use web_sys::File;
use yew::html::Scope;
use yew::prelude::*;

use super::view::{document_input, field_inputs, secret_input};
use super::CatalogAdmin;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

/// Edit surface for the resource bound to the current `EditSession`.
///
/// The sheet is always mounted and only toggled open, so its inputs keep their DOM
/// identity while the user types. Leaving the document picker empty keeps the stored
/// PDF.
pub fn edit_sheet(state: &AdminState<File>, link: &Scope<CatalogAdmin>) -> Html {
    let on_close = link.callback(|_: ()| AdminEvent::CancelEdit);

    let body = match &state.edit {
        Some(edit) => {
            let onsubmit = link.callback(|e: SubmitEvent| {
                e.prevent_default();
                AdminEvent::SubmitEdit
            });
            let submitting = edit.phase == Phase::Submitting;

            html! {
                <form {onsubmit}>
                    {
                        field_inputs(
                            "edit",
                            &edit.form,
                            link.callback(|(field, value): (FormField, String)| {
                                AdminEvent::EditFieldChanged(field, value)
                            }),
                        )
                    }
                    {
                        document_input(
                            "edit-pdf",
                            format!("edit-pdf-{}", edit.resource_id),
                            link.callback(AdminEvent::EditDocumentChosen),
                        )
                    }
                    {
                        secret_input(
                            "edit-secret",
                            edit.secret_code.as_str(),
                            link.callback(AdminEvent::EditSecretCodeChanged),
                        )
                    }
                    <div class="sheet-actions">
                        <button type="submit">
                            { if submitting { "Saving..." } else { "Save Changes" } }
                        </button>
                        <button type="button" onclick={link.callback(|_: MouseEvent| AdminEvent::CancelEdit)}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            }
        }
        None => html! {},
    };

    html! {
        <YwMaterialTopSheet open={state.edit.is_some()} title="Edit Resource" {on_close}>
            { body }
        </YwMaterialTopSheet>
    }
}
