//! Domain types and validation for the favorites page.
//!
//! This crate provides:
//! - `Product` / `FavoritesData` - the feed data model
//! - `validate_size_selection` - size checks before cart/subscribe actions
//! - `parse_favorites` - shape-guarded feed parsing

mod error;
mod feed;
mod model;
mod sizes;

pub use error::*;
pub use feed::*;
pub use model::*;
pub use sizes::*;
