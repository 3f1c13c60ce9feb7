//! Browser tests for the DOM bindings.
//!
//! Run with `wasm-pack test --headless --firefox crates/folio-web`.

#![cfg(target_arch = "wasm32")]

use folio_core::{FolioConfig, Submission, TypingEffect};
use folio_web::components::{filters, lifecycle, smooth_scroll};
use folio_web::{dom, FetchTransport, TypingTask};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(document: &Document, html: &str) -> Element {
    let root = document.create_element("div").unwrap();
    root.set_inner_html(html);
    dom::body(document).unwrap().append_child(&root).unwrap();
    root
}

fn click(element: &Element) {
    element.unchecked_ref::<HtmlElement>().click();
}

#[wasm_bindgen_test]
fn filter_click_activates_button_and_hides_other_cards() {
    let document = dom::document().unwrap();
    let root = fixture(
        &document,
        r#"<button class="filter-btn" data-filter="all">All</button>
           <button class="filter-btn" data-filter="web">Web</button>
           <div class="project-card" data-category="web"></div>
           <div class="project-card" data-category="ml"></div>"#,
    );
    filters::mount(&document, &FolioConfig::default()).unwrap();

    let buttons: Vec<Element> = dom::query_all(&document, ".filter-btn").unwrap();
    let cards: Vec<HtmlElement> = dom::query_all(&document, ".project-card").unwrap();
    click(&buttons[1]);

    assert!(buttons[1].class_list().contains("active"));
    assert!(!buttons[0].class_list().contains("active"));
    assert_eq!(cards[0].style().get_property_value("display").unwrap(), "block");
    assert_eq!(cards[1].style().get_property_value("opacity").unwrap(), "0");

    root.remove();
}

#[wasm_bindgen_test]
fn typing_task_writes_first_character_and_stops() {
    let document = dom::document().unwrap();
    let root = fixture(&document, r#"<span id="typing-test"></span>"#);
    let element = document.get_element_by_id("typing-test").unwrap();

    let config = FolioConfig::default();
    let effect = TypingEffect::new(&["Rust"], config.timings.clone()).unwrap();
    let task = TypingTask::new(element.clone(), effect);

    task.start();
    assert!(task.is_running());
    assert_eq!(element.text_content().unwrap(), "R");

    task.stop();
    assert!(!task.is_running());

    root.remove();
}

#[wasm_bindgen_test]
fn bare_hash_link_is_prevented_without_scrolling() {
    let document = dom::document().unwrap();
    let root = fixture(&document, r##"<a id="bare" href="#">top</a>"##);
    smooth_scroll::mount(&document, &FolioConfig::default()).unwrap();

    let before = dom::scroll_y(&dom::window().unwrap());
    click(&document.get_element_by_id("bare").unwrap());
    assert_eq!(dom::scroll_y(&dom::window().unwrap()), before);

    root.remove();
}

#[wasm_bindgen_test]
fn load_sets_copyright_year() {
    let document = dom::document().unwrap();
    let root = fixture(&document, r#"<span id="copyright-year"></span>"#);
    lifecycle::mount(&document).unwrap();

    // The test page has finished loading, so the year is written immediately
    let year = document.get_element_by_id("copyright-year").unwrap();
    assert_eq!(year.text_content().unwrap().len(), 4);
    assert!(dom::body(&document).unwrap().class_list().contains("loaded"));

    root.remove();
}

#[wasm_bindgen_test]
fn form_bound_transport_keeps_file_inputs() {
    let document = dom::document().unwrap();
    let root = fixture(
        &document,
        r#"<form id="upload-test" action="/contact">
             <input name="name" value="Ada">
             <input type="file" name="attachment">
           </form>"#,
    );
    let form: HtmlFormElement = dom::by_id(&document, "upload-test").unwrap();
    let submission = Submission {
        action: form.action(),
        fields: vec![("name".to_string(), "Ada".to_string())],
    };

    let bound = FetchTransport::for_form(form).body(&submission).unwrap();
    assert!(bound.has("name"));
    assert!(bound.has("attachment"));

    let unbound = FetchTransport::default().body(&submission).unwrap();
    assert!(unbound.has("name"));
    assert!(!unbound.has("attachment"));

    root.remove();
}
