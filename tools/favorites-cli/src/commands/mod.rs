//! CLI command implementations.

pub mod render;
pub mod validate;

pub use render::RenderArgs;
pub use validate::ValidateArgs;
