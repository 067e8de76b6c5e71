//! Build-time configuration.
//!
//! The only setting is the API base address, taken from `CATALOG_API_BASE` when the
//! frontend is compiled (e.g. `CATALOG_API_BASE=http://localhost:8080 trunk build`).
//! Left unset, requests go to the origin that served the page.

pub fn api_base() -> String {
    option_env!("CATALOG_API_BASE").unwrap_or_default().to_string()
}
