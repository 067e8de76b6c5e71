//! Thin wrappers over the browser's own dialogs and windows.
//!
//! They all degrade to a no-op (or "not confirmed") when no `window` is available.

/// Opens `url` in a new browsing context. The outcome is not tracked.
pub fn open_in_new_context(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            alert("Error opening PDF");
        }
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Blocking yes/no question. Anything but an explicit "yes" counts as no.
pub fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}
