//! Size-selection validation.
//!
//! These checks run before a cart or subscribe action. They are total:
//! every input produces a `ValidationResult`, never a panic.

use crate::model::{Product, ProductSize, ValidationResult};

/// Suffix appended to unavailable sizes in option labels.
const UNAVAILABLE_SUFFIX: &str = " — нет в наличии";

impl Product {
    /// Find a size entry by its display value.
    pub fn find_size(&self, value: &str) -> Option<&ProductSize> {
        self.sizes.iter().find(|size| size.value == value)
    }

    /// Sizes that can currently be added to the cart.
    pub fn available_sizes(&self) -> Vec<&ProductSize> {
        self.sizes.iter().filter(|size| size.available).collect()
    }

    /// Whether at least one size is available.
    pub fn has_available_sizes(&self) -> bool {
        self.sizes.iter().any(|size| size.available)
    }
}

/// Validate a requested size against a product's size list.
///
/// Rejects a missing selection, an unknown value, and an unavailable size,
/// each with its own user-facing message.
pub fn validate_size_selection(product: &Product, selected: Option<&str>) -> ValidationResult {
    let value = match selected {
        Some(v) if !v.is_empty() => v,
        _ => return ValidationResult::invalid("Пожалуйста, выберите размер"),
    };

    let size = match product.find_size(value) {
        Some(size) => size,
        None => return ValidationResult::invalid(format!("Размер {value} не найден")),
    };

    if !size.available {
        return ValidationResult::invalid(format!("Размер {value} недоступен"));
    }

    ValidationResult::valid()
}

/// Format a size for an option label, marking unavailable sizes.
pub fn format_size_option(size: &ProductSize) -> String {
    if size.available {
        size.value.clone()
    } else {
        format!("{}{}", size.value, UNAVAILABLE_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_sizes(sizes: Vec<(&str, bool)>) -> Product {
        Product {
            id: 1,
            title: "Test".to_string(),
            brand: "Brand".to_string(),
            price: 1000.0,
            old_price: None,
            discount: None,
            rating: None,
            reviews_count: None,
            image: "x.jpg".to_string(),
            in_stock: true,
            sizes: sizes
                .into_iter()
                .map(|(value, available)| ProductSize {
                    value: value.to_string(),
                    available,
                })
                .collect(),
            color_hex: None,
        }
    }

    #[test]
    fn test_missing_selection_is_invalid() {
        let product = product_with_sizes(vec![("M", true)]);
        let result = validate_size_selection(&product, None);
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some("Пожалуйста, выберите размер"));
    }

    #[test]
    fn test_empty_selection_is_invalid() {
        let product = product_with_sizes(vec![("M", true)]);
        let result = validate_size_selection(&product, Some(""));
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some("Пожалуйста, выберите размер"));
    }

    #[test]
    fn test_unknown_size_is_invalid() {
        let product = product_with_sizes(vec![("M", true)]);
        let result = validate_size_selection(&product, Some("XL"));
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some("Размер XL не найден"));
    }

    #[test]
    fn test_unavailable_size_is_invalid() {
        let product = product_with_sizes(vec![("M", false)]);
        let result = validate_size_selection(&product, Some("M"));
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some("Размер M недоступен"));
    }

    #[test]
    fn test_available_size_is_valid() {
        let product = product_with_sizes(vec![("M", true)]);
        let result = validate_size_selection(&product, Some("M"));
        assert!(result.is_valid);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_no_sizes_rejects_any_value() {
        let product = product_with_sizes(vec![]);
        let result = validate_size_selection(&product, Some("M"));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_size_queries() {
        let product = product_with_sizes(vec![("S", false), ("M", true), ("L", true)]);
        assert!(product.find_size("S").is_some());
        assert!(product.find_size("XL").is_none());
        assert_eq!(product.available_sizes().len(), 2);
        assert!(product.has_available_sizes());

        let sold_out = product_with_sizes(vec![("S", false)]);
        assert!(!sold_out.has_available_sizes());
    }

    #[test]
    fn test_format_size_option() {
        let available = ProductSize {
            value: "42".to_string(),
            available: true,
        };
        let unavailable = ProductSize {
            value: "44".to_string(),
            available: false,
        };
        assert_eq!(format_size_option(&available), "42");
        assert_eq!(format_size_option(&unavailable), "44 — нет в наличии");
    }
}
