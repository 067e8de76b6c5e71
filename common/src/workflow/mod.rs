//! View-models for the two catalog panels.
//!
//! Each panel is a state value plus an event enum. `transition` consumes the state and
//! an event and returns the next state together with the effects to run (requests,
//! timers, dialogs, console traces). The frontend owns the effect runner; nothing in
//! here touches the network, the DOM or a clock.

pub mod admin;
pub mod browser;
pub mod form;
pub mod listing;
pub mod notice;
pub mod secret;

pub use admin::{AdminEffect, AdminEvent, AdminState, EditSession};
pub use browser::{BrowserEffect, BrowserEvent, BrowserState};
pub use form::{FormField, ResourceForm};
pub use listing::Listing;
pub use notice::{Notice, NoticeBoard, NoticeKind, NOTICE_DISPLAY_MS};
pub use secret::SecretCode;

/// Progress of one mutating workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}
