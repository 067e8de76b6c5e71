//! Shared application state handed to every handler as `web::Data<AppState>`.

use log::warn;

use crate::config::Config;
use crate::error::ServiceError;
use crate::store::{DocumentStore, ResourceStore};

pub struct AppState {
    pub store: ResourceStore,
    pub documents: DocumentStore,
    /// Shared admin credential. `None` disables every mutation.
    secret_code: Option<String>,
}

impl AppState {
    pub fn new(store: ResourceStore, documents: DocumentStore, secret_code: Option<String>) -> Self {
        Self {
            store,
            documents,
            secret_code,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
        if config.secret_code.is_none() {
            warn!("CATALOG_SECRET_CODE is not set; create, update and delete are disabled");
        }
        Ok(Self::new(
            ResourceStore::open(&config.database_path)?,
            DocumentStore::new(&config.uploads_dir)?,
            config.secret_code.clone(),
        ))
    }

    /// Startup variant of [`AppState::from_config`] for `main`, reporting failures as
    /// `io::Error` like the rest of the server setup.
    pub fn open(config: &Config) -> std::io::Result<Self> {
        Self::from_config(config).map_err(|e| std::io::Error::other(e.to_string()))
    }

    /// Checks the code submitted with a mutating request.
    pub fn authorize(&self, provided: &str) -> Result<(), ServiceError> {
        match &self.secret_code {
            None => Err(ServiceError::SecretNotConfigured),
            Some(expected) if expected == provided => Ok(()),
            Some(_) => Err(ServiceError::Unauthorized),
        }
    }
}
