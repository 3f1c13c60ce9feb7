//! Thin helpers over `web-sys` shared by every component.

use folio_core::{FolioError, FolioResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window,
};

pub fn window() -> FolioResult<Window> {
    web_sys::window().ok_or_else(|| FolioError::Dom("no global window".to_string()))
}

pub fn document() -> FolioResult<Document> {
    window()?
        .document()
        .ok_or_else(|| FolioError::Dom("window has no document".to_string()))
}

pub fn body(document: &Document) -> FolioResult<HtmlElement> {
    document
        .body()
        .ok_or_else(|| FolioError::ElementMissing("body".to_string()))
}

/// Render a rejected JS call as an error.
pub fn js_error(value: JsValue) -> FolioError {
    FolioError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Element by id, cast to the requested type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// All elements matching `selector` that cast to `T`, in document order.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> FolioResult<Vec<T>> {
    let nodes = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Like [`query_all`] but scoped to the descendants of `root`.
pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> FolioResult<Vec<T>> {
    let nodes = root.query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        tracing::debug!(class, error = ?err, "class update rejected");
    }
}

/// Set an inline style property; an empty value removes it.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let style = element.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    if let Err(err) = result {
        tracing::debug!(property, error = ?err, "style update rejected");
    }
}

/// Current vertical scroll offset of the page.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Full scrollable height of the document.
pub fn document_height(document: &Document) -> f64 {
    document
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

/// Animate the page to a vertical offset.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Convert a delay to the millisecond argument taken by timers.
pub fn millis(delay: std::time::Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(300)), 300);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
