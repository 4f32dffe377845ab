//! JSON surfaces
//!
//! Renders every surface call as one NDJSON line for editors and scripts
//! driving tsauto as a child process.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;

use crate::application::status::Surfaces;
use crate::domain::ports::{IndicatorSurface, LogSurface, MessageSurface, NotificationSurface};
use crate::domain::value_objects::{CompileLogEntry, Indicator};

/// NDJSON writer shared by the four surfaces
#[derive(Clone)]
pub struct JsonSurface {
    /// Mutex to ensure whole-line writes
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl JsonSurface {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Write to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// All four surfaces writing to this stream
    pub fn bundle(&self) -> Surfaces {
        Surfaces::new(
            Box::new(self.clone()),
            Box::new(self.clone()),
            Box::new(self.clone()),
            Box::new(self.clone()),
        )
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl IndicatorSurface for JsonSurface {
    fn show(&mut self, indicator: &Indicator) {
        self.write_event(json!({
            "event": "status",
            "text": indicator.text,
            "detail": indicator.detail,
            "tone": indicator.tone,
        }));
    }
}

impl LogSurface for JsonSurface {
    fn append(&mut self, entry: &CompileLogEntry) {
        self.write_event(json!({
            "event": "log",
            "time": entry.timestamp.to_rfc3339(),
            "text": entry.text,
        }));
    }

    fn reveal(&mut self) {
        self.write_event(json!({ "event": "reveal_log" }));
    }

    fn release(&mut self) {
        self.write_event(json!({ "event": "stopped" }));
    }
}

impl MessageSurface for JsonSurface {
    fn transient(&mut self, text: &str, duration: Duration) {
        self.write_event(json!({
            "event": "message",
            "text": text,
            "duration_ms": duration.as_millis() as u64,
        }));
    }
}

impl NotificationSurface for JsonSurface {
    fn notify(&mut self, text: &str) {
        self.write_event(json!({
            "event": "notification",
            "text": text,
        }));
    }
}
