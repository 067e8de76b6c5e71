//! The two catalog panels and the pieces they share.
//!
//! Both panels are Yew struct components holding a view-model from
//! `common::workflow`. `update` feeds the incoming event through `transition` and
//! hands the returned effects to the panel's `effects::run`, which spawns the HTTP
//! calls and timers and reports back with further events.

pub mod admin;
pub mod browser;
mod helpers;
mod props;
mod resource_card;

