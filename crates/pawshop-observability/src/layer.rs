//! `tracing` layer that renders events as [`LogEntry`] lines.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::logging::{LogEntry, LogFormat, LogLevel};

/// Destination for rendered log lines.
pub trait LogWriter: Send + Sync + 'static {
    fn write_line(&self, level: LogLevel, line: &str);
}

/// Browser console on wasm32, stderr elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl LogWriter for ConsoleWriter {
    #[cfg(target_arch = "wasm32")]
    fn write_line(&self, level: LogLevel, line: &str) {
        let line = line.into();
        match level {
            LogLevel::Error => web_sys::console::error_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Info => web_sys::console::info_1(&line),
            LogLevel::Debug | LogLevel::Trace => web_sys::console::debug_1(&line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write_line(&self, _level: LogLevel, line: &str) {
        eprintln!("{}", line);
    }
}

/// Collects lines in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogWriter for BufferWriter {
    fn write_line(&self, _level: LogLevel, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

/// Renders each event as a structured entry and hands it to a [`LogWriter`].
pub struct ConsoleLayer<W = ConsoleWriter> {
    format: LogFormat,
    writer: W,
}

impl ConsoleLayer<ConsoleWriter> {
    /// Layer writing to the console.
    pub fn new(format: LogFormat) -> Self {
        Self::with_writer(format, ConsoleWriter)
    }
}

impl<W: LogWriter> ConsoleLayer<W> {
    /// Layer writing to a custom destination.
    pub fn with_writer(format: LogFormat, writer: W) -> Self {
        Self { format, writer }
    }
}

impl<S, W> Layer<S> for ConsoleLayer<W>
where
    S: Subscriber,
    W: LogWriter,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            level: LogLevel::from(*metadata.level()),
            message: visitor.message.unwrap_or_default(),
            target: metadata.target().to_string(),
            fields: visitor.fields,
        };
        self.writer.write_line(entry.level, &entry.render(self.format));
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: BTreeMap<String, serde_json::Value>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let text = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(text);
        } else {
            self.insert(field, serde_json::Value::String(text));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, serde_json::json!(value));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, serde_json::json!(value));
    }
}
