//! Floating scroll-to-top button.

use folio_core::{FolioConfig, FolioResult, ScrollTopButton};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;

const BUTTON_CLASS: &str = "scroll-to-top btn btn-primary btn-icon";
const BUTTON_ICON: &str = r#"<i class="fas fa-arrow-up"></i>"#;
const BUTTON_STYLE: &str = "position: fixed; bottom: 2rem; right: 2rem; \
    opacity: 0; visibility: hidden; \
    transition: opacity 0.3s ease, visibility 0.3s ease; z-index: 1000;";

pub fn mount(document: &Document, config: &FolioConfig) -> FolioResult<()> {
    let window = dom::window()?;
    let button: HtmlElement = document
        .create_element("button")
        .map_err(dom::js_error)?
        .unchecked_into();
    button.set_inner_html(BUTTON_ICON);
    button.set_class_name(BUTTON_CLASS);
    button.style().set_css_text(BUTTON_STYLE);
    if let Err(err) = button.set_attribute("aria-label", "Scroll to top") {
        tracing::debug!(error = ?err, "could not label scroll-to-top button");
    }
    dom::body(document)?
        .append_child(&button)
        .map_err(dom::js_error)?;

    let rule = ScrollTopButton::new(config.scroll.scroll_top_threshold);
    {
        let button = button.clone();
        crate::frame::on_scroll_frame(&window, move |scroll_y| {
            let (opacity, visibility) = rule.style_for(scroll_y);
            dom::set_style(&button, "opacity", opacity);
            dom::set_style(&button, "visibility", visibility);
        });
    }

    EventListener::new(&button, "click", move |_event| {
        dom::smooth_scroll_to(&window, 0.0);
    })
    .forget();

    Ok(())
}
