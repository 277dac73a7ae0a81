//! Full-page shell for static rendering.
//!
//! Produces the anchors the view controller binds to: the favorites and
//! cart counters, the content container, the back-navigation control, and
//! both modal containers.

use favorites_domain::Product;

use crate::card::render_grid;
use crate::empty_state::render_empty_state;
use crate::modal::{render_subscribe_modal_shell, render_success_modal};

/// Render the complete favorites page document.
pub fn render_page(products: &[Product]) -> String {
    let content = if products.is_empty() {
        render_empty_state()
    } else {
        render_grid(products)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Избранное</title>
<style>{FAVORITES_STYLES}</style>
</head>
<body>
<header class="favorites__header">
<button type="button" class="favorites__back-button" aria-label="Назад">&larr;</button>
<h1 class="favorites__title">Избранное <span class="favorites__count" id="favoritesCount">{count}</span></h1>
<div class="header-cart">Корзина <span class="cart__count" id="cartCount">0</span></div>
</header>
<main id="favoritesContent" class="favorites__content">
{content}
</main>
{subscribe_modal}
{success_modal}
</body>
</html>"#,
        count = products.len(),
        subscribe_modal = render_subscribe_modal_shell(),
        success_modal = render_success_modal(),
    )
}

/// Page styles for the standalone render.
const FAVORITES_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #fff; color: #1a1a1a; }
.favorites__header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border-bottom: 1px solid #e0e4ef; }
.favorites__back-button { border: none; background: none; font-size: 1.5rem; cursor: pointer; }
.favorites__count, .cart__count { color: #8a90a5; font-weight: normal; }
.header-cart { margin-left: auto; }
.favorites__content { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.favorites__grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.5rem; }
.product-card { border: 1px solid #e0e4ef; border-radius: 8px; overflow: hidden; position: relative; }
.product-card.out-of-stock { opacity: 0.75; }
.product-card__image { width: 100%; aspect-ratio: 3 / 4; object-fit: cover; }
.product-card__body { padding: 1rem; }
.product-card__price-row { display: flex; justify-content: space-between; align-items: center; }
.product-card__price-current { font-weight: bold; }
.product-card__price-old { text-decoration: line-through; color: #8a90a5; margin-left: 0.5rem; }
.product-card__price-discount { color: #fff; background: #cc0c39; border-radius: 4px; padding: 0.1rem 0.35rem; margin-left: 0.5rem; }
.product-card__title { font-size: 1rem; margin: 0.5rem 0; }
.product-card__color-dot { width: 14px; height: 14px; border-radius: 50%; border: 1px solid #e0e4ef; }
.product-card__rating--empty { min-height: 1.25rem; }
.stars { display: inline-flex; gap: 2px; }
.star svg { width: 14px; height: 13px; }
.reviews-count { color: #8a90a5; font-size: 0.85rem; margin-left: 0.5rem; }
.btn { border-radius: 8px; padding: 0.6rem 1.2rem; cursor: pointer; border: 1px solid transparent; }
.btn-primary { background: #1a1a1a; color: #fff; }
.btn-outline-primary { background: none; border-color: #1a1a1a; color: #1a1a1a; }
.btn-favorite { position: absolute; top: 0.5rem; right: 0.5rem; border: none; background: none; color: #cc0c39; cursor: pointer; }
.btn-favorite svg { width: 20px; height: 20px; }
.is-invalid { border-color: #cc0c39 !important; }
.favorites__empty { text-align: center; padding: 4rem 1rem; }
.favorites__empty-icon svg { width: 48px; height: 48px; color: #e0e4ef; }
.alert-danger { background: #fdecee; color: #a1222f; border-radius: 8px; padding: 1rem; }
.visually-hidden { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use favorites_domain::ProductSize;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Товар {id}"),
            brand: "Acme".to_string(),
            price: 1000.0,
            old_price: None,
            discount: None,
            rating: None,
            reviews_count: None,
            image: "x.jpg".to_string(),
            in_stock: true,
            sizes: vec![ProductSize {
                value: "M".to_string(),
                available: true,
            }],
            color_hex: None,
        }
    }

    #[test]
    fn test_page_carries_controller_anchors() {
        let html = render_page(&[product(1)]);
        assert!(html.contains(r#"id="favoritesCount""#));
        assert!(html.contains(r#"id="cartCount""#));
        assert!(html.contains(r#"id="favoritesContent""#));
        assert!(html.contains("favorites__back-button"));
        assert!(html.contains(r#"id="subscribeModal""#));
        assert!(html.contains(r#"id="successModal""#));
    }

    #[test]
    fn test_page_count_matches_items() {
        let html = render_page(&[product(1), product(2)]);
        assert!(html.contains(r#"id="favoritesCount">2<"#));
    }

    #[test]
    fn test_empty_page_shows_empty_state() {
        let html = render_page(&[]);
        assert!(html.contains("favorites__empty"));
        assert!(!html.contains("product-card card"));
    }
}
