//! Product card and grid renderers.

use favorites_domain::Product;

use crate::buttons::{action_button, favorite_button, remove_button};
use crate::escape::escape_html;
use crate::format::format_price;
use crate::rating::render_rating;
use crate::size_select::render_size_select;

/// Current price plus optional old-price strikethrough and discount badge.
pub fn render_price_block(product: &Product) -> String {
    let old_price = match product.old_price {
        Some(old) => format!(
            r#"<span class="product-card__price-old">{}</span>"#,
            format_price(old)
        ),
        None => String::new(),
    };
    let discount = match product.discount {
        Some(d) => format!(r#"<span class="product-card__price-discount">-{d}%</span>"#),
        None => String::new(),
    };

    format!(
        r#"<div class="product-card__price"><span class="product-card__price-current">{}</span>{old_price}{discount}</div>"#,
        format_price(product.price)
    )
}

fn render_color_dot(product: &Product) -> String {
    match &product.color_hex {
        Some(color) => format!(
            r#"<div class="product-card__color-dot" style="background-color: {};" aria-label="Цвет товара"></div>"#,
            escape_html(color)
        ),
        None => String::new(),
    }
}

fn render_card_body(product: &Product) -> String {
    let rating_html = render_rating(product.id, product.rating, product.reviews_count);
    // An absent rating keeps an empty placeholder so card layouts line up.
    let rating_block = if rating_html.is_empty() {
        r#"<div class="product-card__rating product-card__rating--empty" aria-hidden="true"></div>"#
            .to_string()
    } else {
        format!(r#"<div class="product-card__rating">{rating_html}</div>"#)
    };

    format!(
        r#"<div class="product-card__body"><div class="product-card__content"><div class="product-card__price-row">{price_block}{remove}</div><h3 class="product-card__title">{title}</h3>{color_dot}{rating_block}</div>{size_select}<div class="product-card__buttons">{action}</div>{favorite}</div>"#,
        price_block = render_price_block(product),
        remove = remove_button(product.id),
        title = escape_html(&product.title),
        color_dot = render_color_dot(product),
        size_select = render_size_select(product.id, &product.sizes, product.in_stock),
        action = action_button(product),
        favorite = favorite_button(product.id),
    )
}

/// Render one product card, tagged with the product id for DOM lookup.
pub fn render_product_card(product: &Product) -> String {
    let card_classes = if product.in_stock {
        "product-card card"
    } else {
        "product-card card out-of-stock"
    };

    format!(
        r#"<div class="{card_classes}" data-product-id="{id}"><div class="product-card__image-container"><img src="{image}" class="product-card__image" alt="{title}" loading="lazy"></div>{body}</div>"#,
        id = product.id,
        image = escape_html(&product.image),
        title = escape_html(&product.title),
        body = render_card_body(product),
    )
}

/// Concatenate cards in list order. An empty list yields an empty container;
/// the caller substitutes the empty-state view.
pub fn render_grid(products: &[Product]) -> String {
    if products.is_empty() {
        return r#"<div class="favorites__grid"></div>"#.to_string();
    }

    let cards: String = products.iter().map(render_product_card).collect();
    format!(r#"<div class="favorites__grid">{cards}</div>"#)
}
