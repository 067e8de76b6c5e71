use common::model::resource::Resource;
use yew::prelude::*;

/// Card body shared by both panels: subject heading, unit, topic and, when present,
/// the additional information line. `actions` is rendered below the details.
pub fn resource_card(resource: &Resource, actions: Html) -> Html {
    html! {
        <div key={resource.id.clone()} class="resource-card">
            <h3>{ resource.subject_name.clone() }</h3>
            <div class="resource-details">
                <p><strong>{"Unit:"}</strong>{" "}{ resource.unit_name.clone() }</p>
                <p><strong>{"Topic:"}</strong>{" "}{ resource.topic.clone() }</p>
                {
                    if let Some(info) = resource.extra_info() {
                        html! { <p><strong>{"Additional Info:"}</strong>{" "}{ info }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            { actions }
        </div>
    }
}
