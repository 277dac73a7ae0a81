//! Subscribe-to-restock and confirmation modal bodies.
//!
//! Overlay and focus-trap behavior belongs to the page's widget library;
//! these renderers only produce the modal markup.

use favorites_domain::{format_size_option, Product};

use crate::escape::escape_html;
use crate::format::format_price;

/// Render the subscribe modal populated with a product's details.
///
/// Unavailable sizes are labeled but stay selectable: subscribing to a
/// restock does not require current availability.
pub fn render_subscribe_modal(product: &Product) -> String {
    let size_options: String = product
        .sizes
        .iter()
        .map(|size| {
            format!(
                r#"<option value="{value}">{label}</option>"#,
                value = escape_html(&size.value),
                label = escape_html(&format_size_option(size)),
            )
        })
        .collect();

    subscribe_modal_markup(
        &product.id.to_string(),
        &escape_html(&product.image),
        &escape_html(&product.title),
        &escape_html(&product.brand),
        &format_price(product.price),
        &size_options,
    )
}

/// Render the empty subscribe modal shipped with the page layout.
///
/// The product fields and size options stay blank until the modal is
/// opened for a specific product.
pub fn render_subscribe_modal_shell() -> String {
    subscribe_modal_markup("", "", "", "", "", "")
}

fn subscribe_modal_markup(
    id: &str,
    image: &str,
    title: &str,
    brand: &str,
    price: &str,
    size_options: &str,
) -> String {
    format!(
        r#"<div class="modal fade subscribe-modal" id="subscribeModal" tabindex="-1" aria-labelledby="subscribeModalLabel" aria-hidden="true"><div class="modal-dialog"><div class="modal-content"><div class="modal-header"><h5 class="modal-title" id="subscribeModalLabel">Подписаться на товар</h5><button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Закрыть"></button></div><div class="modal-body"><div class="product-info"><img src="{image}" alt="{title}" class="product-image" id="modal-product-image"><div class="product-details"><div class="product-brand" id="modal-product-brand">{brand}</div><h6 class="product-title" id="modal-product-title">{title}</h6><div class="product-price" id="modal-product-price">{price}</div></div></div><form id="subscribeForm" novalidate><input type="hidden" id="modal-product-id" value="{id}"><div class="form-group"><label for="subscribeSize">Размер</label><select class="form-select" id="subscribeSize" required><option value="" selected disabled>Выберите размер</option>{size_options}</select><div class="invalid-feedback">Пожалуйста, выберите размер</div></div><div class="form-group"><label for="subscribePhone">Телефон</label><input type="tel" class="form-control" id="subscribePhone" placeholder="+7 (999) 123-45-67" required><div class="form-text">Мы отправим вам SMS о поступлении товара</div><div class="invalid-feedback">Пожалуйста, введите корректный номер телефона</div></div><div class="form-check"><input class="form-check-input" type="checkbox" id="agreeTerms" required><label class="form-check-label" for="agreeTerms">Я согласен с <a href="/terms" target="_blank">условиями обработки персональных данных</a></label><div class="invalid-feedback">Необходимо согласие с условиями</div></div></form></div><div class="modal-footer"><button type="button" class="btn btn-outline-secondary" data-bs-dismiss="modal" data-gtm="cancel-subscribe">Отмена</button><button type="button" class="btn btn-primary" id="submitSubscribe" data-gtm="submit-subscribe">Подписаться</button></div></div></div></div>"#
    )
}

/// Render the confirmation modal shown after a successful subscription.
pub fn render_success_modal() -> String {
    r#"<div class="modal fade success-modal" id="successModal" tabindex="-1" aria-labelledby="successModalLabel" aria-hidden="true"><div class="modal-dialog"><div class="modal-content"><div class="modal-header"><button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Закрыть"></button></div><div class="modal-body text-center"><div class="success-icon mb-4"><svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"></circle><path d="M8 12l2 2 6-6"></path></svg></div><h5 class="mb-4">Вы подписались!</h5><p class="mb-4">Мы сообщим о поступлении товара в наш магазин.</p><button type="button" class="btn btn-primary" data-bs-dismiss="modal">Вернуться в избранное</button></div></div></div></div>"#
        .to_string()
}
