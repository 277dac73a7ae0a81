//! Markup renderers for the favorites page.
//!
//! Every renderer is a pure function from data to an HTML string: the same
//! input produces byte-identical markup. Display strings are escaped; data
//! attributes keep a fixed order.

mod alerts;
mod buttons;
mod card;
mod empty_state;
mod escape;
mod format;
mod icons;
mod modal;
mod page;
mod rating;
mod size_select;

pub use alerts::*;
pub use buttons::*;
pub use card::*;
pub use empty_state::*;
pub use escape::*;
pub use format::*;
pub use icons::*;
pub use modal::*;
pub use page::*;
pub use rating::*;
pub use size_select::*;
