//! Inline alert renderers.

use crate::escape::escape_html;

/// User-facing message shown when the feed cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str =
    "Произошла ошибка при загрузке избранных товаров. Пожалуйста, попробуйте обновить страницу.";

/// Render an inline error block that replaces the grid.
pub fn render_error_alert(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger" role="alert">{}</div>"#,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_wraps_message() {
        let html = render_error_alert(LOAD_ERROR_MESSAGE);
        assert!(html.contains("alert-danger"));
        assert!(html.contains("Произошла ошибка"));
    }

    #[test]
    fn test_alert_escapes_message() {
        assert!(render_error_alert("<b>oops</b>").contains("&lt;b&gt;oops&lt;/b&gt;"));
    }
}
