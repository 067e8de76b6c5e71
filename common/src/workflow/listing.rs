use crate::model::resource::Resource;

/// Message shown when the collection could not be retrieved.
pub const FETCH_ERROR: &str = "Error fetching resources";

/// The panel's copy of the resource collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Listing {
    #[default]
    Loading,
    Ready(Vec<Resource>),
    /// Blocking error; replaces the list in the view.
    Failed(String),
}

impl Listing {
    /// Builds the listing from a fetch outcome, discarding whatever was held before.
    pub fn from_fetch<E>(result: Result<Vec<Resource>, E>) -> Self {
        match result {
            Ok(resources) => Listing::Ready(resources),
            Err(_) => Listing::Failed(FETCH_ERROR.to_string()),
        }
    }

    /// Resources currently held; empty while loading or after a failure.
    pub fn resources(&self) -> &[Resource] {
        match self {
            Listing::Ready(resources) => resources,
            _ => &[],
        }
    }

    pub fn find(&self, id: &str) -> Option<&Resource> {
        self.resources().iter().find(|r| r.id == id)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Listing::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Listing::Failed(message) => Some(message),
            _ => None,
        }
    }
}
