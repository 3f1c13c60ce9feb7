//! In-page anchor links scroll smoothly below the fixed header.

use folio_core::anchor::ANCHOR_SELECTOR;
use folio_core::{FolioConfig, FolioResult, SmoothScroll};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

pub fn mount(document: &Document, config: &FolioConfig) -> FolioResult<()> {
    let window = dom::window()?;
    let anchors: Vec<Element> = dom::query_all(document, ANCHOR_SELECTOR)?;
    let scroll = SmoothScroll::new(config.scroll.header_offset);

    for anchor in &anchors {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        EventListener::new_with_options(
            anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();

                let href = link.get_attribute("href").unwrap_or_default();
                let target = scroll.resolve(&href, |selector| element_top(&document, selector));
                match target {
                    Some(top) => dom::smooth_scroll_to(&window, top),
                    None => tracing::debug!(%href, "anchor target not found"),
                }
            },
        )
        .forget();
    }

    tracing::debug!(anchors = anchors.len(), "smooth scroll mounted");
    Ok(())
}

/// Layout top of the first element matching `selector`.
///
/// Hrefs are not guaranteed to be valid selectors (`#1-intro`); those
/// resolve to nothing.
fn element_top(document: &Document, selector: &str) -> Option<f64> {
    let element = document.query_selector(selector).ok()??;
    let element = element.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(element.offset_top()))
}
