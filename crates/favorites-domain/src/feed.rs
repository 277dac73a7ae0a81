//! Feed shape validation and parsing.

use crate::error::DomainError;
use crate::model::FavoritesData;

/// Minimal structural check: an object with an `items` array.
///
/// Run before the payload is trusted, so malformed feeds are rejected
/// before any typed deserialization or rendering.
pub fn validate_feed_shape(value: &serde_json::Value) -> bool {
    value
        .as_object()
        .and_then(|obj| obj.get("items"))
        .map(serde_json::Value::is_array)
        .unwrap_or(false)
}

/// Parse favorites feed bytes into typed records.
///
/// The shape check runs first; a payload that fails it is rejected as a
/// whole rather than producing a field-level deserialization error.
pub fn parse_favorites(bytes: &[u8]) -> Result<FavoritesData, DomainError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| DomainError::Deserialization(e.to_string()))?;

    if !validate_feed_shape(&value) {
        return Err(DomainError::InvalidShape);
    }

    serde_json::from_value(value).map_err(|e| DomainError::Deserialization(e.to_string()))
}
