use crate::components::catalog::admin::CatalogAdmin;
use crate::components::catalog::browser::CatalogBrowser;
use crate::config;
use yew::{classes, html, Component, Context, Html};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Student,
    Admin,
}

pub enum Msg {
    ShowPanel(Panel),
}

/// Root component: a two-button navigation bar and the active panel.
///
/// Switching panels unmounts the previous one, so each activation starts from a
/// fresh fetch of the collection.
pub struct App {
    active: Panel,
    api_base: String,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active: Panel::Student,
            api_base: config::api_base(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowPanel(panel) if panel != self.active => {
                self.active = panel;
                true
            }
            Msg::ShowPanel(_) => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let nav_class = |panel: Panel| classes!("nav-btn", (self.active == panel).then_some("active"));

        html! {
            <div class="app-container">
                <nav class="navigation">
                    <button
                        class={nav_class(Panel::Student)}
                        onclick={link.callback(|_| Msg::ShowPanel(Panel::Student))}
                    >
                        {"Student Panel"}
                    </button>
                    <button
                        class={nav_class(Panel::Admin)}
                        onclick={link.callback(|_| Msg::ShowPanel(Panel::Admin))}
                    >
                        {"Admin Panel"}
                    </button>
                </nav>
                {
                    match self.active {
                        Panel::Student => html! { <CatalogBrowser api_base={self.api_base.clone()} /> },
                        Panel::Admin => html! { <CatalogAdmin api_base={self.api_base.clone()} /> },
                    }
                }
            </div>
        }
    }
}
