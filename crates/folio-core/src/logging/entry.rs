//! Log entry type handed to sinks.

use serde_json::Value;

/// Severity, mirroring `tracing::Level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<&tracing::Level> for Level {
    fn from(level: &tracing::Level) -> Self {
        if *level == tracing::Level::ERROR {
            Self::Error
        } else if *level == tracing::Level::WARN {
            Self::Warn
        } else if *level == tracing::Level::INFO {
            Self::Info
        } else if *level == tracing::Level::DEBUG {
            Self::Debug
        } else {
            Self::Trace
        }
    }
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// A single log event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// ISO 8601 timestamp (e.g., "2026-01-21T14:30:45.123Z")
    pub ts: String,

    pub level: Level,

    /// Module path / target (e.g., "folio_web::components::contact")
    pub target: String,

    pub msg: String,

    /// Structured fields recorded with the event
    pub fields: Option<Value>,

    /// Enclosing spans, outermost first, joined with " > "
    pub span: Option<String>,
}

impl LogEntry {
    /// Create a new log entry with the current timestamp.
    pub fn new(level: Level, target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level,
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// One-line human form: `INFO folio_web::app: mounted {"behaviors":9}`.
    pub fn to_console_line(&self) -> String {
        let mut line = format!(
            "{} {}: {}",
            self.level.as_str().to_uppercase(),
            self.target,
            self.msg
        );
        if let Some(span) = &self.span {
            line.push_str(&format!(" [{span}]"));
        }
        if let Some(fields) = &self.fields {
            line.push(' ');
            line.push_str(&fields.to_string());
        }
        line
    }
}
