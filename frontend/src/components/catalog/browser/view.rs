use common::model::resource::Resource;
use common::workflow::{BrowserEvent, Listing};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::super::resource_card::resource_card;
use super::CatalogBrowser;

pub fn view(component: &CatalogBrowser, ctx: &Context<CatalogBrowser>) -> Html {
    let state = &component.state;
    let link = ctx.link();

    match &state.listing {
        Listing::Loading => html! { <div class="loading">{"Loading..."}</div> },
        Listing::Failed(message) => html! { <div class="error">{ message.clone() }</div> },
        Listing::Ready(_) => html! {
            <div class="student-panel">
                <h1>{"Student Resources Panel"}</h1>
                { build_search(&state.query, link) }
                <div class="resources-grid">
                    { for state.visible().into_iter().map(|r| build_card(r, link)) }
                </div>
                {
                    if state.shows_no_results() {
                        html! {
                            <div class="no-results">
                                {"No resources found matching your search."}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        },
    }
}

fn build_search(query: &str, link: &Scope<CatalogBrowser>) -> Html {
    html! {
        <div class="search-container">
            <input
                type="text"
                class="search-input"
                placeholder="Search by subject, unit, or topic..."
                value={query.to_string()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    BrowserEvent::QueryChanged(input.value())
                })}
            />
        </div>
    }
}

fn build_card(resource: &Resource, link: &Scope<CatalogBrowser>) -> Html {
    let path = resource.document_path().map(str::to_string);
    let has_document = path.is_some();
    let onclick = link.callback(move |_: MouseEvent| BrowserEvent::ViewDocument(path.clone()));

    let actions = html! {
        <button class="download-btn" disabled={!has_document} {onclick}>
            { if has_document { "View PDF" } else { "No PDF Available" } }
        </button>
    };
    resource_card(resource, actions)
}
