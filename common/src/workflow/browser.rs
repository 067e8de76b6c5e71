//! Read-only student panel: one fetch per activation, live filtering, document links.

use crate::api::resolve_document_url;
use crate::catalog::search;
use crate::model::resource::Resource;

use super::listing::Listing;

/// Shown when a resource has no document attached.
pub const NO_DOCUMENT: &str = "No PDF available for this resource";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    Activated,
    ResourcesLoaded(Result<Vec<Resource>, String>),
    QueryChanged(String),
    /// The view-document button of a resource, with its `pdfPath`.
    ViewDocument(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEffect {
    FetchResources,
    /// Open `url` in a new browsing context without waiting for it.
    OpenDocument { url: String },
    Alert { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    pub listing: Listing,
    pub query: String,
    /// Base address documents are resolved against; empty for same origin.
    pub api_base: String,
}

impl BrowserState {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    pub fn transition(mut self, event: BrowserEvent) -> (Self, Vec<BrowserEffect>) {
        let effects = match event {
            BrowserEvent::Activated => {
                self.listing = Listing::Loading;
                vec![BrowserEffect::FetchResources]
            }
            BrowserEvent::ResourcesLoaded(result) => {
                self.listing = Listing::from_fetch(result);
                vec![]
            }
            BrowserEvent::QueryChanged(query) => {
                self.query = query;
                vec![]
            }
            BrowserEvent::ViewDocument(path) => match path.filter(|p| !p.is_empty()) {
                Some(path) => vec![BrowserEffect::OpenDocument {
                    url: resolve_document_url(&self.api_base, &path),
                }],
                None => vec![BrowserEffect::Alert {
                    message: NO_DOCUMENT.to_string(),
                }],
            },
        };
        (self, effects)
    }

    /// Resources matching the current query, recomputed on every call.
    pub fn visible(&self) -> Vec<&Resource> {
        search::filter(self.listing.resources(), &self.query)
    }

    /// Whether the "no results" notice replaces the grid.
    pub fn shows_no_results(&self) -> bool {
        matches!(self.listing, Listing::Ready(_)) && self.visible().is_empty()
    }
}
