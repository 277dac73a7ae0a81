//! Empty-state view shown when the favorites list hits zero items.

use crate::icons::HEART_ICON_INLINE;

/// Render the empty-state container that replaces the grid.
pub fn render_empty_state() -> String {
    format!(
        r#"<div class="favorites__empty"><div class="favorites__empty-icon" aria-hidden="true">{HEART_ICON_INLINE}</div><h3 class="favorites__empty-title">В избранном пока ничего нет</h3><p class="favorites__empty-text">Добавляйте понравившиеся товары, нажимая на сердечко.</p><a href="/" class="btn btn-primary">Перейти в каталог</a></div>"#
    )
}
