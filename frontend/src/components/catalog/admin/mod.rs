//! Admin panel: create, edit and delete resources.
//!
//! Responsibilities
//! - Hold the `AdminState` view-model, parameterised over `web_sys::File` for the
//!   chosen documents.
//! - Re-fetch the collection every time the panel is mounted and after every
//!   successful mutation (both decided by the view-model, executed by `effects`).
//! - Render the add form, the list with edit/delete actions, the edit top sheet and
//!   the transient notice banner.

use common::workflow::{AdminEvent, AdminState};
use web_sys::File;
use yew::prelude::*;

use super::props::CatalogProps;

mod edit_sheet;
mod effects;
mod view;

pub type Msg = AdminEvent<File>;

pub struct CatalogAdmin {
    pub state: AdminState<File>,
    pub api_base: String,
    activated: bool,
}

impl Component for CatalogAdmin {
    type Message = Msg;
    type Properties = CatalogProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: AdminState::default(),
            api_base: ctx.props().api_base.clone(),
            activated: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let (state, pending) = std::mem::take(&mut self.state).transition(msg);
        self.state = state;
        effects::run(ctx, &self.api_base, pending);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.activated {
            self.activated = true;
            ctx.link().send_message(AdminEvent::Activated);
        }
    }
}
