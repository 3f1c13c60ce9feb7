//! Structured console logging.
//!
//! Browsers have no stdout, so `tracing_subscriber::fmt` is no use here.
//! [`ConsoleLayer`] turns every `tracing` event into a [`LogEntry`] and hands
//! it to a [`LogSink`]; the web crate's sink writes to the developer console.
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new(BrowserConsole)
//!     .with_filter("folio_web=debug")
//!     .init()?;
//!
//! tracing::info!(behaviors = 9, "page behaviors mounted");
//! ```

pub mod entry;
pub mod layer;

pub use entry::{Level, LogEntry};
pub use layer::{ConsoleLayer, LogSink, LoggingBuilder};
