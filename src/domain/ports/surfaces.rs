//! Status surfaces - where the orchestrator's state becomes visible
//!
//! Four independent surfaces, each with a narrow contract. Only the
//! `StatusReporter` talks to them.

use std::time::Duration;

use crate::domain::value_objects::{CompileLogEntry, Indicator};

/// Single always-visible indicator. Latest call wins.
pub trait IndicatorSurface: Send {
    fn show(&mut self, indicator: &Indicator);

    fn release(&mut self) {}
}

/// Durable, append-only log that can be revealed on demand.
pub trait LogSurface: Send {
    fn append(&mut self, entry: &CompileLogEntry);

    /// Bring the log to the user's attention.
    fn reveal(&mut self) {}

    fn release(&mut self) {}
}

/// Fire-and-forget status-line message that expires on its own.
pub trait MessageSurface: Send {
    fn transient(&mut self, text: &str, duration: Duration);

    fn release(&mut self) {}
}

/// User-facing dismissible notification.
pub trait NotificationSurface: Send {
    fn notify(&mut self, text: &str);

    fn release(&mut self) {}
}
