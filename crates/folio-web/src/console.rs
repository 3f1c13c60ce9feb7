//! Log sink writing to the browser's developer console.

use folio_core::logging::{Level, LogEntry, LogSink};

/// Routes each entry to the console method of matching severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl LogSink for BrowserConsole {
    fn write(&self, entry: &LogEntry) {
        let line = entry.to_console_line();
        match entry.level {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }
}
