//! Window `load` handling: body class and copyright year.

use folio_core::lifecycle::{current_copyright_year, LOADED_CLASS};
use folio_core::FolioResult;
use gloo::events::EventListener;
use web_sys::{Document, Element};

use crate::dom;
use crate::selectors::COPYRIGHT_YEAR;

pub fn mount(document: &Document) -> FolioResult<()> {
    if document.ready_state() == "complete" {
        on_load(document);
        return Ok(());
    }

    let window = dom::window()?;
    let document = document.clone();
    EventListener::once(&window, "load", move |_event| on_load(&document)).forget();
    Ok(())
}

fn on_load(document: &Document) {
    if let Some(body) = document.body() {
        dom::set_class(&body, LOADED_CLASS, true);
    }
    if let Some(year) = dom::by_id::<Element>(document, COPYRIGHT_YEAR) {
        year.set_text_content(Some(&current_copyright_year()));
    }
}
