//! Compile log entry - one immutable line of the durable log

use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileLogEntry {
    pub timestamp: DateTime<Local>,
    pub text: String,
}

impl CompileLogEntry {
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            text: text.into(),
        }
    }

    /// `HH:MM:SS`, the form shown next to each line in the terminal
    pub fn clock(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
