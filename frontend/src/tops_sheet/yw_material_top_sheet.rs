use uuid::Uuid;
use yew::prelude::*;

/// Material-style sheet that slides in from the top of the viewport.
///
/// Visibility is driven by the `open` property: the parent keeps the sheet mounted
/// and flips `open`, and the `show` class does the rest in CSS.
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    #[prop_or_default]
    pub title: AttrValue,
    /// Fired by the close button.
    #[prop_or_default]
    pub on_close: Callback<()>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <div
                class={classes!("top-sheet", props.open.then_some("show"))}
                id={self.id.clone()}
                aria-hidden={(!props.open).to_string()}
            >
                <div class="top-sheet-header">
                    <h2>{ props.title.clone() }</h2>
                    <button type="button" class="top-sheet-close" onclick={on_close}>{ "✕" }</button>
                </div>
                { props.children.clone() }
            </div>
        }
    }
}
