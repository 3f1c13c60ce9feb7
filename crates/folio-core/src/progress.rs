//! Scroll progress indicator.

/// Percentage of the scrollable distance already scrolled, in `[0, 100]`.
///
/// Pages no taller than the viewport have nothing to scroll and report 0.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// CSS width value for the bar.
pub fn bar_width(percent: f64) -> String {
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_and_bottom() {
        assert_eq!(scroll_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_percent(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_percent(500.0, 3000.0, 1000.0), 25.0);
    }

    #[test]
    fn test_short_page_is_zero() {
        assert_eq!(scroll_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_percent(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_overscroll_clamped() {
        // Elastic scrolling can report offsets outside the document
        assert_eq!(scroll_percent(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_percent(2100.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_bar_width_format() {
        assert_eq!(bar_width(0.0), "0%");
        assert_eq!(bar_width(42.5), "42.5%");
    }
}
