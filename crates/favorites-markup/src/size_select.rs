//! Size selector renderer.
//!
//! A hidden native `<select>` for form semantics plus a styled dropdown
//! list. Unavailable sizes are disabled and non-focusable; the whole
//! control is disabled when the product itself is out of stock.

use favorites_domain::{format_size_option, ProductSize};

use crate::escape::escape_html;

/// Render the size selector. Returns an empty string when there are no sizes.
pub fn render_size_select(product_id: u64, sizes: &[ProductSize], in_stock: bool) -> String {
    if sizes.is_empty() {
        return String::new();
    }

    let select_id = format!("product-{product_id}-size");

    let options: String = sizes
        .iter()
        .map(|size| {
            format!(
                r#"<option value="{value}" data-available="{available}"{disabled}>{label}</option>"#,
                value = escape_html(&size.value),
                available = size.available,
                disabled = if size.available { "" } else { " disabled" },
                label = escape_html(&format_size_option(size)),
            )
        })
        .collect();

    let dropdown_items: String = sizes
        .iter()
        .map(|size| {
            let mut classes = vec!["dropdown-item"];
            if !size.available {
                classes.push("dropdown-item--unavailable");
                classes.push("disabled");
            }
            let state_attrs = if size.available {
                r#" aria-disabled="false""#
            } else {
                r#" tabindex="-1" aria-disabled="true" disabled"#
            };

            format!(
                r#"<li><button type="button" class="{classes}" data-value="{value}" data-available="{available}"{state_attrs}>{label}</button></li>"#,
                classes = classes.join(" "),
                value = escape_html(&size.value),
                available = size.available,
                label = escape_html(&format_size_option(size)),
            )
        })
        .collect();

    let control_disabled = if in_stock { "" } else { " disabled" };

    format!(
        r#"<div class="product-card__size-select size-select"><label class="product-card__size-label" for="{select_id}">Размер</label><div class="dropdown form-select-dropdown"><button class="btn btn-dropdown form-select dropdown-toggle" type="button" id="{select_id}-dropdown" aria-expanded="false" data-product-available="{in_stock}" data-placeholder="Размер" data-bs-toggle="dropdown"{control_disabled}><span class="form-select__placeholder">Размер</span></button><ul class="dropdown-menu" aria-labelledby="{select_id}-dropdown">{dropdown_items}</ul><select id="{select_id}" class="visually-hidden" aria-label="Выберите размер"{control_disabled}><option value="" selected disabled>Размер</option>{options}</select></div></div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> Vec<ProductSize> {
        vec![
            ProductSize {
                value: "40".to_string(),
                available: true,
            },
            ProductSize {
                value: "41".to_string(),
                available: false,
            },
        ]
    }

    #[test]
    fn test_empty_sizes_render_nothing() {
        assert_eq!(render_size_select(1, &[], true), "");
    }

    #[test]
    fn test_unavailable_size_is_disabled_and_labeled() {
        let html = render_size_select(1, &sizes(), true);
        assert!(html.contains(r#"<option value="41" data-available="false" disabled>41 — нет в наличии</option>"#));
        assert!(html.contains("dropdown-item--unavailable"));
        assert!(html.contains(r#"tabindex="-1""#));
    }

    #[test]
    fn test_available_size_is_focusable() {
        let html = render_size_select(1, &sizes(), true);
        assert!(html.contains(r#"<option value="40" data-available="true">40</option>"#));
        assert!(html.contains(r#"data-value="40" data-available="true" aria-disabled="false""#));
    }

    #[test]
    fn test_out_of_stock_disables_whole_control() {
        let html = render_size_select(1, &sizes(), false);
        assert!(html.contains(r#"data-bs-toggle="dropdown" disabled"#));
        assert!(html.contains(r#"aria-label="Выберите размер" disabled"#));
    }

    #[test]
    fn test_ids_are_scoped_to_product() {
        let html = render_size_select(9, &sizes(), true);
        assert!(html.contains(r#"id="product-9-size""#));
        assert!(html.contains(r#"id="product-9-size-dropdown""#));
    }
}
