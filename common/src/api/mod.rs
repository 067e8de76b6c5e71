//! HTTP contract between the catalog panels and the resource store.
//!
//! The store exposes four endpoints under [`RESOURCES_PATH`]:
//!
//! - `GET /api/resources`: the whole collection as a JSON array.
//! - `POST /api/resources`: multipart create, answered with `201 Created`.
//! - `PUT /api/resources/{id}`: multipart full-entity update.
//! - `DELETE /api/resources/{id}`: JSON body carrying the secret code.
//!
//! Failed requests answer with a non-2xx status and, when the store has something to
//! say, an [`ApiMessage`] body.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Collection endpoint, relative to the API base address.
pub const RESOURCES_PATH: &str = "/api/resources";

/// Root under which the store publishes uploaded documents.
pub const UPLOADS_PATH: &str = "/uploads";

/// Path of a single resource, e.g. `/api/resources/42`.
pub fn resource_path(id: &str) -> String {
    format!("{}/{}", RESOURCES_PATH, id)
}

/// Joins an endpoint path onto the configured API base address.
///
/// An empty base means "same origin" and leaves the path untouched.
pub fn endpoint_url(api_base: &str, path: &str) -> String {
    let base = api_base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Resolves a resource's `pdfPath` into the location the browser should open.
///
/// Absolute `http(s)` URLs are used as is; anything else is treated as a
/// root-relative path on the API base address.
pub fn resolve_document_url(api_base: &str, document_path: &str) -> String {
    if document_path.starts_with("http://") || document_path.starts_with("https://") {
        document_path.to_string()
    } else {
        endpoint_url(api_base, document_path)
    }
}

/// Error body returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A create, update or delete the store did not accept.
///
/// `status` is absent when the request never produced a response (network error).
/// `message` is the store's own explanation when it sent one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mutation failed (status: {status:?}): {}", .message.as_deref().unwrap_or("no message"))]
pub struct MutationError {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl MutationError {
    /// The store rejected the request with `status`.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self {
            status: Some(status),
            message: message.filter(|m| !m.is_empty()),
        }
    }

    /// The request never got an answer.
    pub fn network(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            message: Some(detail.into()),
        }
    }

    /// Text for the user: the store's message when there is one, else `fallback`.
    ///
    /// Network errors carry transport details that mean nothing to a user, so they
    /// always fall back.
    pub fn user_message(&self, fallback: &str) -> String {
        match (&self.status, &self.message) {
            (Some(_), Some(message)) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
