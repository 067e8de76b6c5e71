use common::workflow::{BrowserEffect, BrowserEvent};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::super::helpers::{alert, open_in_new_context};
use super::CatalogBrowser;
use crate::services::resources;

/// Executes the effects returned by a browser transition.
pub fn run(ctx: &Context<CatalogBrowser>, api_base: &str, effects: Vec<BrowserEffect>) {
    for effect in effects {
        match effect {
            BrowserEffect::FetchResources => {
                let link = ctx.link().clone();
                let api_base = api_base.to_string();
                spawn_local(async move {
                    let result = resources::fetch_all(&api_base).await;
                    link.send_message(BrowserEvent::ResourcesLoaded(result));
                });
            }
            BrowserEffect::OpenDocument { url } => open_in_new_context(&url),
            BrowserEffect::Alert { message } => alert(&message),
        }
    }
}
