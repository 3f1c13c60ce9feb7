//! Reading progress bar pinned to the top of the viewport.

use folio_core::progress::{bar_width, scroll_percent};
use folio_core::FolioResult;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;

const BAR_CLASS: &str = "scroll-progress-bar";

const BAR_STYLE: &str = "position: fixed; top: 0; left: 0; height: 3px; \
    background: linear-gradient(90deg, #6366f1, #8b5cf6, #a78bfa); \
    z-index: 9999; width: 0%; will-change: width;";

pub fn mount(document: &Document) -> FolioResult<()> {
    let window = dom::window()?;
    let bar: HtmlElement = document
        .create_element("div")
        .map_err(dom::js_error)?
        .unchecked_into();
    bar.set_class_name(BAR_CLASS);
    bar.style().set_css_text(BAR_STYLE);
    dom::body(document)?
        .append_child(&bar)
        .map_err(dom::js_error)?;

    let document = document.clone();
    let frame_window = window.clone();
    crate::frame::on_scroll_frame(&window, move |scroll_top| {
        let percent = scroll_percent(
            scroll_top,
            dom::document_height(&document),
            dom::viewport_height(&frame_window),
        );
        dom::set_style(&bar, "width", &bar_width(percent));
    });

    Ok(())
}
