//! Number and price formatting (ru-RU conventions).

/// Group digits in threes with non-breaking spaces, ru-RU style.
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out
}

/// Format a ruble price: grouped digits, comma decimal separator, " ₽" suffix.
///
/// Whole amounts render without a fractional part, matching how the feed
/// prices display on the page.
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    if fraction == 0 {
        format!("{}\u{a0}₽", format_grouped(whole))
    } else {
        format!("{},{:02}\u{a0}₽", format_grouped(whole), fraction)
    }
}
