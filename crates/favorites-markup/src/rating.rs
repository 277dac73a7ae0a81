//! Star rating renderer.

use crate::format::format_grouped;
use crate::icons::{half_star_svg, star_svg, EMPTY_STAR_COLOR, FULL_STAR_COLOR};

/// Maximum rating on the five-star scale.
pub const MAX_RATING: f64 = 5.0;

/// Fractional part at or above which a half star is shown.
const HALF_STAR_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Star {
    Full,
    Half,
    Empty,
}

/// Break a rating into an ordered star sequence: full, at most one half, empty.
fn star_sequence(rating: f64) -> Vec<Star> {
    let full = rating.floor() as usize;
    let half = rating.fract() >= HALF_STAR_THRESHOLD;
    let empty = MAX_RATING as usize - full - usize::from(half);

    let mut stars = Vec::with_capacity(MAX_RATING as usize);
    stars.extend(std::iter::repeat(Star::Full).take(full));
    if half {
        stars.push(Star::Half);
    }
    stars.extend(std::iter::repeat(Star::Empty).take(empty));
    stars
}

/// Render the rating block for a product card.
///
/// Returns an empty string when the rating is absent, NaN, non-positive, or
/// above the maximum; the caller substitutes a layout placeholder.
pub fn render_rating(product_id: u64, rating: Option<f64>, reviews_count: Option<u64>) -> String {
    let rating = match rating {
        Some(r) if !r.is_nan() && r > 0.0 && r <= MAX_RATING => r,
        _ => return String::new(),
    };

    let stars_html: String = star_sequence(rating)
        .iter()
        .enumerate()
        .map(|(index, star)| match star {
            Star::Full => format!(
                r#"<span class="star star--full" aria-hidden="true">{}</span>"#,
                star_svg(FULL_STAR_COLOR)
            ),
            Star::Half => {
                let gradient_id = format!("star-grad-{product_id}-{index}");
                format!(
                    r#"<span class="star star--half" aria-hidden="true">{}</span>"#,
                    half_star_svg(&gradient_id)
                )
            }
            Star::Empty => format!(
                r#"<span class="star star--empty" aria-hidden="true">{}</span>"#,
                star_svg(EMPTY_STAR_COLOR)
            ),
        })
        .collect();

    let reviews_html = match reviews_count {
        Some(count) => format!(
            r#"<span class="reviews-count" aria-label="Количество отзывов">{}</span>"#,
            format_grouped(count)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="rating" role="img" aria-label="Рейтинг {rating:.1} из 5"><div class="stars">{stars_html}</div>{reviews_html}</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_stars(html: &str, class: &str) -> usize {
        html.matches(&format!("star--{class}")).count()
    }

    #[test]
    fn test_star_split_four_point_seven() {
        let html = render_rating(1, Some(4.7), None);
        assert_eq!(count_stars(&html, "full"), 4);
        assert_eq!(count_stars(&html, "half"), 1);
        assert_eq!(count_stars(&html, "empty"), 0);
    }

    #[test]
    fn test_star_split_below_half_threshold() {
        let html = render_rating(1, Some(3.4), None);
        assert_eq!(count_stars(&html, "full"), 3);
        assert_eq!(count_stars(&html, "half"), 0);
        assert_eq!(count_stars(&html, "empty"), 2);
    }

    #[test]
    fn test_total_is_always_five() {
        for tenths in 1..=50u32 {
            let rating = f64::from(tenths) / 10.0;
            let html = render_rating(1, Some(rating), None);
            let total = count_stars(&html, "full")
                + count_stars(&html, "half")
                + count_stars(&html, "empty");
            assert_eq!(total, 5, "rating {rating}");
        }
    }

    #[test]
    fn test_out_of_range_ratings_render_nothing() {
        assert_eq!(render_rating(1, None, Some(10)), "");
        assert_eq!(render_rating(1, Some(f64::NAN), None), "");
        assert_eq!(render_rating(1, Some(0.0), None), "");
        assert_eq!(render_rating(1, Some(-1.0), None), "");
        assert_eq!(render_rating(1, Some(5.1), None), "");
    }

    #[test]
    fn test_max_rating_is_all_full() {
        let html = render_rating(1, Some(5.0), None);
        assert_eq!(count_stars(&html, "full"), 5);
        assert_eq!(count_stars(&html, "half"), 0);
        assert_eq!(count_stars(&html, "empty"), 0);
    }

    #[test]
    fn test_reviews_count_is_grouped() {
        let html = render_rating(1, Some(4.0), Some(1250));
        assert!(html.contains("1\u{a0}250"));
        assert!(html.contains("reviews-count"));
    }

    #[test]
    fn test_gradient_id_is_scoped_to_product_and_slot() {
        let html = render_rating(7, Some(2.5), None);
        assert!(html.contains("star-grad-7-2"));
    }

    #[test]
    fn test_omitted_reviews_count() {
        let html = render_rating(1, Some(4.0), None);
        assert!(!html.contains("reviews-count"));
    }
}
