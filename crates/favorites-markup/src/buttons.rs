//! Button renderers.

use favorites_domain::Product;

use crate::escape::escape_html;
use crate::icons::HEART_ICON_INLINE;

/// Visual button variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    OutlinePrimary,
}

impl ButtonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonKind::Primary => "primary",
            ButtonKind::OutlinePrimary => "outline-primary",
        }
    }
}

/// Declarative description of a button.
///
/// Data attributes are ordered pairs so rendering stays deterministic.
#[derive(Debug, Clone)]
pub struct ButtonSpec {
    pub text: String,
    pub kind: ButtonKind,
    pub disabled: bool,
    pub data_attributes: Vec<(String, String)>,
    pub aria_label: Option<String>,
}

/// Render a button from its spec.
pub fn render_button(spec: &ButtonSpec) -> String {
    let data_attrs = format_data_attributes(&spec.data_attributes);
    let disabled_attr = if spec.disabled { " disabled" } else { "" };
    let aria_attr = match &spec.aria_label {
        Some(label) => format!(r#" aria-label="{}""#, escape_html(label)),
        None => String::new(),
    };

    format!(
        r#"<button type="button" class="btn btn-{kind}"{data_attrs}{disabled_attr}{aria_attr}>{text}</button>"#,
        kind = spec.kind.as_str(),
        text = escape_html(&spec.text),
    )
}

/// The primary action button for a card, polymorphic over stock state.
///
/// In stock: enabled add-to-cart tagged for cart analytics. Out of stock:
/// disabled alternate variant tagged for the subscribe flow.
pub fn action_button(product: &Product) -> String {
    let spec = if product.in_stock {
        ButtonSpec {
            text: "В корзину".to_string(),
            kind: ButtonKind::Primary,
            disabled: false,
            data_attributes: vec![
                ("gtm".to_string(), "add-to-cart".to_string()),
                ("product-id".to_string(), product.id.to_string()),
            ],
            aria_label: None,
        }
    } else {
        ButtonSpec {
            text: "Нет в наличии".to_string(),
            kind: ButtonKind::OutlinePrimary,
            disabled: true,
            data_attributes: vec![
                ("gtm".to_string(), "subscribe".to_string()),
                ("product-id".to_string(), product.id.to_string()),
            ],
            aria_label: None,
        }
    };
    render_button(&spec)
}

/// Trash-icon remove control in the card's price row.
pub fn remove_button(product_id: u64) -> String {
    let data_attrs = format_data_attributes(&[
        ("gtm".to_string(), "remove-favorite".to_string()),
        ("product-id".to_string(), product_id.to_string()),
    ]);

    format!(
        r#"<button type="button" class="product-card__remove-button" aria-label="Удалить из избранного"{data_attrs}><img src="../../assets/images/trash.svg" alt="Удалить из избранного" /></button>"#
    )
}

/// Heart toggle in the card body.
pub fn favorite_button(product_id: u64) -> String {
    let data_attrs = format_data_attributes(&[
        ("gtm".to_string(), "remove-favorite".to_string()),
        ("product-id".to_string(), product_id.to_string()),
    ]);

    format!(
        r#"<button type="button" class="btn-favorite" aria-label="Убрать из избранного"{data_attrs}>{HEART_ICON_INLINE}</button>"#
    )
}

fn format_data_attributes(attributes: &[(String, String)]) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(r#" data-{key}="{}""#, escape_html(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use favorites_domain::ProductSize;

    fn product(in_stock: bool) -> Product {
        Product {
            id: 42,
            title: "Кеды".to_string(),
            brand: "Acme".to_string(),
            price: 3500.0,
            old_price: None,
            discount: None,
            rating: None,
            reviews_count: None,
            image: "x.jpg".to_string(),
            in_stock,
            sizes: vec![ProductSize {
                value: "40".to_string(),
                available: true,
            }],
            color_hex: None,
        }
    }

    #[test]
    fn test_in_stock_action_button() {
        let html = action_button(&product(true));
        assert!(html.contains("btn-primary"));
        assert!(html.contains(r#"data-gtm="add-to-cart""#));
        assert!(html.contains(r#"data-product-id="42""#));
        assert!(html.contains("В корзину"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_out_of_stock_action_button() {
        let html = action_button(&product(false));
        assert!(html.contains("btn-outline-primary"));
        assert!(html.contains(r#"data-gtm="subscribe""#));
        assert!(html.contains("disabled"));
        assert!(html.contains("Нет в наличии"));
    }

    #[test]
    fn test_remove_button_tags() {
        let html = remove_button(7);
        assert!(html.contains(r#"data-gtm="remove-favorite""#));
        assert!(html.contains(r#"data-product-id="7""#));
        assert!(html.contains("trash.svg"));
    }

    #[test]
    fn test_favorite_button_carries_heart() {
        let html = favorite_button(7);
        assert!(html.contains("btn-favorite"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_button_text_is_escaped() {
        let spec = ButtonSpec {
            text: "<script>".to_string(),
            kind: ButtonKind::Primary,
            disabled: false,
            data_attributes: vec![],
            aria_label: None,
        };
        assert!(render_button(&spec).contains("&lt;script&gt;"));
    }
}
