//! Favorites feed data model.

use serde::{Deserialize, Serialize};

/// A single size entry on a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSize {
    /// Display value, e.g. "42" or "M". Uniqueness is assumed, not enforced.
    pub value: String,
    /// Whether this size can currently be added to the cart.
    pub available: bool,
}

/// A product in the favorites feed.
///
/// Immutable once fetched; the in-memory list is only ever mutated by
/// filtering out a removed id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique positive identifier, used as the DOM correlation key.
    pub id: u64,
    /// Product title.
    pub title: String,
    /// Brand name.
    pub brand: String,
    /// Current price in rubles.
    pub price: f64,
    /// Pre-discount price, when the product is on sale.
    #[serde(default)]
    pub old_price: Option<f64>,
    /// Discount percentage badge. No consistency with `old_price` is enforced.
    #[serde(default)]
    pub discount: Option<u8>,
    /// Customer rating in (0, 5]. Out-of-range values hide the rating block.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub reviews_count: Option<u64>,
    /// Product image URL.
    pub image: String,
    /// Gates the primary action: add-to-cart when true, subscribe when false.
    pub in_stock: bool,
    /// Ordered size list. Empty means the size selector is not rendered.
    #[serde(default)]
    pub sizes: Vec<ProductSize>,
    /// Optional CSS color for the color indicator dot.
    #[serde(default)]
    pub color_hex: Option<String>,
}

/// The entire feed payload. No pagination, no partial loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoritesData {
    pub items: Vec<Product>,
}

/// Outcome of a size-selection check.
///
/// Transient: produced and consumed synchronously per validation call.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    /// A passing result with no message.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    /// A failing result carrying a user-facing message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_camel_case_fields() {
        let json = r##"{
            "id": 1,
            "title": "Shoe",
            "brand": "Acme",
            "price": 1000,
            "oldPrice": 1200,
            "discount": 17,
            "rating": 4.7,
            "reviewsCount": 12,
            "image": "x.jpg",
            "inStock": true,
            "sizes": [{"value": "42", "available": true}],
            "colorHex": "#112233"
        }"##;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.old_price, Some(1200.0));
        assert_eq!(product.discount, Some(17));
        assert_eq!(product.reviews_count, Some(12));
        assert!(product.in_stock);
        assert_eq!(product.color_hex.as_deref(), Some("#112233"));
        assert_eq!(product.sizes[0].value, "42");
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let json = r#"{
            "id": 2,
            "title": "Coat",
            "brand": "Acme",
            "price": 5990,
            "image": "y.jpg",
            "inStock": false
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.old_price, None);
        assert_eq!(product.discount, None);
        assert_eq!(product.rating, None);
        assert_eq!(product.reviews_count, None);
        assert_eq!(product.color_hex, None);
        assert!(product.sizes.is_empty());
    }

    #[test]
    fn test_validation_result_constructors() {
        assert!(ValidationResult::valid().is_valid);
        assert!(ValidationResult::valid().message.is_none());

        let invalid = ValidationResult::invalid("bad");
        assert!(!invalid.is_valid);
        assert_eq!(invalid.message.as_deref(), Some("bad"));
    }
}
