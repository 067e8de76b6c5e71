//! Student panel: searchable, read-only view of every resource.
//!
//! On first render the panel emits `BrowserEvent::Activated`, which fetches the whole
//! collection once. The search box filters the held list on every keystroke; the
//! store is not queried again until the panel is mounted anew.

use common::workflow::{BrowserEvent, BrowserState};
use yew::prelude::*;

use super::props::CatalogProps;

mod effects;
mod view;

pub struct CatalogBrowser {
    pub state: BrowserState,
    /// Guards the one-time activation fetch.
    activated: bool,
}

impl Component for CatalogBrowser {
    type Message = BrowserEvent;
    type Properties = CatalogProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: BrowserState::new(ctx.props().api_base.clone()),
            activated: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let (state, pending) = std::mem::take(&mut self.state).transition(msg);
        self.state = state;
        effects::run(ctx, &self.state.api_base, pending);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.activated {
            self.activated = true;
            ctx.link().send_message(BrowserEvent::Activated);
        }
    }
}
