//! Smooth scrolling for in-page anchors and the scroll-to-top button.

/// Selector for links handled by smooth scrolling.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// The selector to look up for an in-page `href`.
///
/// Returns `None` for hrefs that are not in-page links and for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href != "#" {
        Some(href)
    } else {
        None
    }
}

/// Resolves anchor clicks to scroll positions below the fixed header.
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    header_offset: f64,
}

impl SmoothScroll {
    pub fn new(header_offset: f64) -> Self {
        Self { header_offset }
    }

    /// Scroll position for a target whose top is at `target_top`.
    pub fn offset_for(&self, target_top: f64) -> f64 {
        target_top - self.header_offset
    }

    /// Scroll position for a clicked `href`.
    ///
    /// `lookup` maps a selector to the top of the matching element.
    pub fn resolve<F>(&self, href: &str, lookup: F) -> Option<f64>
    where
        F: FnOnce(&str) -> Option<f64>,
    {
        let selector = anchor_target(href)?;
        lookup(selector).map(|top| self.offset_for(top))
    }
}

/// Visibility rule for the floating scroll-to-top button.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTopButton {
    threshold: f64,
}

impl ScrollTopButton {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn is_visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }

    /// `(opacity, visibility)` style values for a scroll offset.
    pub fn style_for(&self, scroll_y: f64) -> (&'static str, &'static str) {
        if self.is_visible(scroll_y) {
            ("1", "visible")
        } else {
            ("0", "hidden")
        }
    }
}
