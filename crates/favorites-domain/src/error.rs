//! Domain error types.

use thiserror::Error;

/// Errors that can occur while handling favorites data.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Feed payload failed the minimal shape check.
    #[error("Feed payload has an invalid shape: expected an object with an `items` array")]
    InvalidShape,

    /// Feed payload could not be deserialized into typed records.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Product not found in the in-memory list.
    #[error("Product not found: {0}")]
    ProductNotFound(u64),
}
