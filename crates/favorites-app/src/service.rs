//! Favorites feed client.
//!
//! Fetches and shape-checks the feed payload. Transport and parse failures
//! are logged with their root cause; callers only see the coarse
//! [`FeedError`] taxonomy and surface a single generic message to the user.

use std::path::Path;

use favorites_domain::{parse_favorites, DomainError, FavoritesData};

/// Fallback feed location when the page carries no source attribute.
pub const DEFAULT_DATA_URL: &str = "mock/favorites.json";

/// Feed source configuration, taken from a page-level attribute.
#[derive(Debug, Clone, Default)]
pub struct FeedConfig {
    /// Value of the page's `data-favorites-src` attribute, if present.
    pub source_attr: Option<String>,
}

impl FeedConfig {
    /// Resolve the feed URL: attribute value, or the hard-coded fallback.
    pub fn data_url(&self) -> &str {
        self.source_attr
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_DATA_URL)
    }
}

/// Error type for feed loading.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Feed payload has an invalid shape")]
    InvalidShape,
}

impl From<DomainError> for FeedError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidShape => FeedError::InvalidShape,
            DomainError::Deserialization(msg) => FeedError::Deserialization(msg),
            DomainError::ProductNotFound(id) => {
                FeedError::Deserialization(format!("unknown product {id}"))
            }
        }
    }
}

/// HTTP client for the favorites feed.
pub struct FavoritesClient {
    http: reqwest::Client,
}

impl Default for FavoritesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Fetch and parse the feed from a URL.
    pub async fn fetch(&self, url: &str) -> Result<FavoritesData, FeedError> {
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!(url, error = %e, "favorites feed request failed");
            FeedError::Connection(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url, status = status.as_u16(), "favorites feed returned an error status");
            return Err(FeedError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(url, error = %e, "favorites feed body read failed");
            FeedError::Connection(e.to_string())
        })?;

        parse_feed_bytes(&bytes)
    }

    /// Load and parse the feed from a local file (dev feeds, CLI).
    pub fn load_from_path(&self, path: &Path) -> Result<FavoritesData, FeedError> {
        let bytes = std::fs::read(path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "favorites feed read failed");
            FeedError::Connection(e.to_string())
        })?;
        parse_feed_bytes(&bytes)
    }
}

fn parse_feed_bytes(bytes: &[u8]) -> Result<FavoritesData, FeedError> {
    parse_favorites(bytes).map_err(|e| {
        tracing::error!(error = %e, "favorites feed payload rejected");
        FeedError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_data_url_falls_back_to_default() {
        assert_eq!(FeedConfig::default().data_url(), DEFAULT_DATA_URL);

        let empty_attr = FeedConfig {
            source_attr: Some(String::new()),
        };
        assert_eq!(empty_attr.data_url(), DEFAULT_DATA_URL);
    }

    #[test]
    fn test_data_url_prefers_attribute() {
        let config = FeedConfig {
            source_attr: Some("https://shop.example/favorites.json".to_string()),
        };
        assert_eq!(config.data_url(), "https://shop.example/favorites.json");
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"items":[{{"id":1,"title":"Shoe","brand":"Acme","price":1000,
                "image":"x.jpg","inStock":true}}]}}"#
        )
        .unwrap();

        let client = FavoritesClient::new();
        let data = client.load_from_path(file.path()).unwrap();
        assert_eq!(data.items.len(), 1);
    }

    #[test]
    fn test_load_from_path_rejects_bad_shape() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"products": []}}"#).unwrap();

        let client = FavoritesClient::new();
        let err = client.load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, FeedError::InvalidShape));
    }

    #[test]
    fn test_missing_file_is_a_connection_error() {
        let client = FavoritesClient::new();
        let err = client
            .load_from_path(Path::new("/nonexistent/favorites.json"))
            .unwrap_err();
        assert!(matches!(err, FeedError::Connection(_)));
    }
}
