//! View controller for the favorites page.
//!
//! The controller owns the in-memory product list - the single source of
//! truth - and treats the DOM as a derived projection: every state change
//! comes back as a list of [`Effect`] values for the host (browser glue,
//! test harness, CLI) to apply. This keeps the page logic free of ambient
//! globals and independently testable.
//!
//! This crate provides:
//! - `FavoritesController` - the Loading/Loaded/Empty/Failed state machine
//! - `Effect` - the DOM effect vocabulary, including timed reversions
//! - `ViewBindings` - typed page anchors, resolved once and fail-fast
//! - `EventRouter` - delegated event dispatch keyed by (kind, matcher)
//! - `FavoritesClient` - the feed fetch/parse client

mod bindings;
mod controller;
mod effect;
mod events;
mod service;
mod subscribe;

pub use bindings::*;
pub use controller::*;
pub use effect::*;
pub use events::*;
pub use service::*;
pub use subscribe::*;
