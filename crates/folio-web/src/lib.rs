//! Folio browser bindings
//!
//! Connects the behaviors in `folio-core` to the live page through
//! `web-sys` and `gloo`. Call [`mount`] once the document is parsed.
//!
//! ## Page contract
//!
//! The markup is expected to provide the ids and classes listed in
//! [`selectors`]. Any of them may be missing; the matching behavior is then
//! skipped.

pub mod components;
pub mod console;
pub mod dom;
pub mod frame;
pub mod selectors;

use folio_core::logging::LoggingBuilder;
use folio_core::{FolioConfig, FolioResult};
use web_sys::{Document, Element};

pub use components::{FetchTransport, TypingTask};
pub use console::BrowserConsole;

/// Handles that must outlive [`mount`].
#[derive(Clone, Default)]
pub struct MountedPage {
    pub typing: Option<TypingTask>,
}

/// Read the optional embedded configuration, defaults when absent.
pub fn load_config(document: &Document) -> FolioResult<FolioConfig> {
    match dom::by_id::<Element>(document, selectors::CONFIG_SCRIPT).and_then(|s| s.text_content()) {
        Some(json) => FolioConfig::from_json(&json),
        None => Ok(FolioConfig::default()),
    }
}

/// Install the console logger with the configured filter.
pub fn init_logging(config: &FolioConfig) -> FolioResult<()> {
    LoggingBuilder::new(BrowserConsole)
        .with_filter(config.log_filter.clone())
        .init()
}

/// Wire every behavior to the page.
///
/// Behaviors are independent: one failing to mount is logged and the rest
/// still run.
pub fn mount(document: &Document, config: &FolioConfig) -> MountedPage {
    let _span = tracing::info_span!("mount").entered();

    let results = [
        ("navigation", components::navigation::mount(document, config)),
        ("scroll_reveal", components::reveal::mount(document, config)),
        ("project_filters", components::filters::mount(document, config)),
        ("contact_form", components::contact::mount(document, config)),
        ("smooth_scroll", components::smooth_scroll::mount(document, config)),
        ("scroll_progress", components::progress::mount(document)),
        ("scroll_to_top", components::scroll_top::mount(document, config)),
        ("lifecycle", components::lifecycle::mount(document)),
    ];
    for (behavior, result) in results {
        if let Err(err) = result {
            tracing::error!(behavior, error = %err, "behavior failed to mount");
        }
    }

    let typing = components::typing::mount(document, config).unwrap_or_else(|err| {
        tracing::error!(behavior = "typing", error = %err, "behavior failed to mount");
        None
    });

    tracing::info!("page behaviors mounted");
    MountedPage { typing }
}
