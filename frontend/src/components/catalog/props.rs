use yew::prelude::*;

/// Properties shared by both catalog panels.
#[derive(Properties, PartialEq, Clone)]
pub struct CatalogProps {
    /// Address of the resource store. Empty means the origin that served the page.
    #[prop_or_default]
    pub api_base: String,
}
