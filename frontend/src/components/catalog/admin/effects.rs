//! Effect runner for the admin panel.
//!
//! Requests run as local futures and report their outcome as the matching
//! `*Finished` event. Notice expiry uses a `TimeoutFuture`; timers are never
//! cancelled, a stale one is ignored by the notice board.

use common::workflow::{AdminEffect, AdminEvent};
use gloo_timers::future::TimeoutFuture;
use web_sys::File;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::super::helpers::confirm;
use super::CatalogAdmin;
use crate::services::resources;

pub fn run(ctx: &Context<CatalogAdmin>, api_base: &str, effects: Vec<AdminEffect<File>>) {
    for effect in effects {
        let link = ctx.link().clone();
        let api_base = api_base.to_string();

        match effect {
            AdminEffect::FetchResources => spawn_local(async move {
                let result = resources::fetch_all(&api_base).await;
                link.send_message(AdminEvent::ResourcesLoaded(result));
            }),
            AdminEffect::ScheduleNoticeExpiry { notice_id, after_ms } => spawn_local(async move {
                TimeoutFuture::new(after_ms).await;
                link.send_message(AdminEvent::NoticeExpired(notice_id));
            }),
            AdminEffect::CreateResource {
                form,
                document,
                secret_code,
            } => spawn_local(async move {
                let result =
                    resources::create(&api_base, &form, document.as_ref(), &secret_code).await;
                link.send_message(AdminEvent::CreateFinished(result));
            }),
            AdminEffect::UpdateResource {
                id,
                form,
                document,
                secret_code,
            } => spawn_local(async move {
                let result =
                    resources::update(&api_base, &id, &form, document.as_ref(), &secret_code)
                        .await;
                link.send_message(AdminEvent::UpdateFinished { id, result });
            }),
            AdminEffect::ConfirmDelete { id, prompt } => {
                if confirm(prompt) {
                    link.send_message(AdminEvent::DeleteConfirmed(id));
                }
            }
            AdminEffect::DeleteResource { id, secret_code } => spawn_local(async move {
                let result = resources::delete(&api_base, &id, &secret_code).await;
                link.send_message(AdminEvent::DeleteFinished(result));
            }),
            AdminEffect::Trace { message } => gloo_console::error!(message),
        }
    }
}
