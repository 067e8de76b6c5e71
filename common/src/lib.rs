//! Types and client-side logic shared by the catalog frontend and backend.
//!
//! - `model`: the `Resource` entity as it travels over the wire.
//! - `requests`: multipart field names and JSON request payloads.
//! - `api`: endpoint paths, the error body and document URL resolution.
//! - `catalog`: free-text search over the resource list.
//! - `workflow`: the Browser and Administrator view-models. Transitions are plain
//!   functions returning effects, so they run (and are tested) without a browser.

pub mod api;
pub mod catalog;
pub mod model;
pub mod requests;
pub mod workflow;
