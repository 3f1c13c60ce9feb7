//! Custom tracing Layer that forwards events to a [`LogSink`].

use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::{Level, LogEntry};
use crate::config::DEFAULT_LOG_FILTER;
use crate::error::{FolioError, FolioResult};

/// Destination for formatted log entries.
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, entry: &LogEntry);
}

/// A tracing Layer that builds a [`LogEntry`] per event.
pub struct ConsoleLayer<K> {
    sink: K,
}

impl<K: LogSink> ConsoleLayer<K> {
    pub fn new(sink: K) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

impl<S, K> Layer<S> for ConsoleLayer<K>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    K: LogSink,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = JsonVisitor::new();
        event.record(&mut visitor);

        let mut entry = LogEntry::new(
            Level::from(metadata.level()),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        self.sink.write(&entry);
    }
}

/// Visitor that extracts the message and fields from tracing events.
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn new() -> Self {
        Self {
            message: None,
            fields: serde_json::Map::new(),
        }
    }

    fn insert_str(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(value));
        }
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        self.insert_str(field, buf);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert_str(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::Value::String(value.to_string()),
        );
    }
}

/// Builder for the global subscriber: an `EnvFilter` plus a [`ConsoleLayer`].
pub struct LoggingBuilder<K> {
    sink: K,
    env_filter: String,
}

impl<K: LogSink> LoggingBuilder<K> {
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            env_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Set the filter directives (e.g., "folio_web=debug,folio_core=info").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = filter.into();
        self
    }

    /// Build the filter and layer without installing them.
    pub fn build(self) -> FolioResult<(EnvFilter, ConsoleLayer<K>)> {
        let filter = EnvFilter::try_new(&self.env_filter).map_err(|e| {
            FolioError::InvalidConfig(format!("log filter {:?}: {e}", self.env_filter))
        })?;
        Ok((filter, ConsoleLayer::new(self.sink)))
    }

    /// Install as the global default subscriber.
    pub fn init(self) -> FolioResult<()> {
        let (filter, layer) = self.build()?;
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
            .map_err(|e| FolioError::Logging(e.to_string()))
    }
}
