//! Page entry: configuration, logging, then behaviors once the DOM is ready.

use std::cell::RefCell;

use anyhow::Context;
use folio_core::FolioConfig;
use folio_web::{dom, MountedPage};
use gloo::events::EventListener;
use web_sys::Document;

thread_local! {
    /// Keeps the mounted behaviors alive for the page's lifetime
    static PAGE: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

pub fn run() -> anyhow::Result<()> {
    let document = dom::document().context("page has no document")?;

    // Logging is configured by the same document, so a bad config is only
    // reported once the logger is up
    let (config, config_error) = match folio_web::load_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (FolioConfig::default(), Some(err)),
    };

    folio_web::init_logging(&config).context("failed to install logger")?;
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "ignoring embedded configuration");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting folio");

    if document.ready_state() == "loading" {
        let ready_document = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_event| {
            start(&ready_document, &config);
        })
        .forget();
    } else {
        start(&document, &config);
    }

    Ok(())
}

fn start(document: &Document, config: &FolioConfig) {
    let page = folio_web::mount(document, config);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}
