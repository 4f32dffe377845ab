//! Status Reporter
//!
//! The only path from orchestrator state to the user. Owns the four surfaces
//! and the in-memory copy of the durable log.

use std::time::Duration;

use crate::domain::ports::{IndicatorSurface, LogSurface, MessageSurface, NotificationSurface};
use crate::domain::value_objects::{CompileLogEntry, CompilePhase, Indicator};

/// The surfaces a reporter renders to. The log fans out to every entry in
/// `logs` (e.g. terminal and an append-only file).
pub struct Surfaces {
    pub indicator: Box<dyn IndicatorSurface>,
    pub logs: Vec<Box<dyn LogSurface>>,
    pub messages: Box<dyn MessageSurface>,
    pub notifications: Box<dyn NotificationSurface>,
}

impl Surfaces {
    pub fn new(
        indicator: Box<dyn IndicatorSurface>,
        log: Box<dyn LogSurface>,
        messages: Box<dyn MessageSurface>,
        notifications: Box<dyn NotificationSurface>,
    ) -> Self {
        Self {
            indicator,
            logs: vec![log],
            messages,
            notifications,
        }
    }

    /// Add another log sink.
    pub fn with_log(mut self, log: Box<dyn LogSurface>) -> Self {
        self.logs.push(log);
        self
    }
}

pub struct StatusReporter {
    surfaces: Surfaces,
    entries: Vec<CompileLogEntry>,
    current: Option<Indicator>,
    disposed: bool,
}

impl StatusReporter {
    pub fn new(surfaces: Surfaces) -> Self {
        Self {
            surfaces,
            entries: Vec::new(),
            current: None,
            disposed: false,
        }
    }

    /// Overwrite the indicator. No queue: the latest call wins.
    pub fn set_status(&mut self, indicator: Indicator) {
        if self.disposed {
            return;
        }
        self.surfaces.indicator.show(&indicator);
        self.current = Some(indicator);
    }

    pub fn set_phase(&mut self, phase: CompilePhase) {
        self.set_status(phase.indicator());
    }

    /// Append one line to the durable log.
    pub fn log(&mut self, line: impl Into<String>) {
        if self.disposed {
            return;
        }
        let entry = CompileLogEntry::now(line);
        for log in &mut self.surfaces.logs {
            log.append(&entry);
        }
        self.entries.push(entry);
    }

    pub fn reveal_log(&mut self) {
        if self.disposed {
            return;
        }
        for log in &mut self.surfaces.logs {
            log.reveal();
        }
    }

    pub fn transient_message(&mut self, text: &str, duration: Duration) {
        if self.disposed {
            return;
        }
        self.surfaces.messages.transient(text, duration);
    }

    pub fn notify(&mut self, text: impl AsRef<str>) {
        if self.disposed {
            return;
        }
        self.surfaces.notifications.notify(text.as_ref());
    }

    pub fn current_indicator(&self) -> Option<&Indicator> {
        self.current.as_ref()
    }

    /// Every line logged so far, oldest first.
    pub fn entries(&self) -> &[CompileLogEntry] {
        &self.entries
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release every surface. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.surfaces.indicator.release();
        for log in &mut self.surfaces.logs {
            log.release();
        }
        self.surfaces.messages.release();
        self.surfaces.notifications.release();
    }
}

impl Drop for StatusReporter {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Tone;
    use crate::infrastructure::memory::{RecordingSurfaces, SurfaceCall};

    #[test]
    fn latest_status_wins() {
        let surfaces = RecordingSurfaces::new();
        let mut status = StatusReporter::new(surfaces.bundle());

        status.set_phase(CompilePhase::Compiling);
        status.set_phase(CompilePhase::Watching);

        assert_eq!(
            status.current_indicator().map(|i| i.tone),
            Some(Tone::Normal)
        );
        assert_eq!(surfaces.indicator().map(|i| i.tone), Some(Tone::Normal));
    }

    #[test]
    fn log_appends_and_never_clears() {
        let surfaces = RecordingSurfaces::new();
        let mut status = StatusReporter::new(surfaces.bundle());

        status.log("first");
        status.log("second");

        let texts: Vec<_> = status.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(surfaces.log_lines(), vec!["first", "second"]);
        assert!(status.entries()[0].timestamp <= status.entries()[1].timestamp);
    }

    #[test]
    fn log_fans_out_to_extra_sinks() {
        let primary = RecordingSurfaces::new();
        let extra = RecordingSurfaces::new();
        let mut status = StatusReporter::new(primary.bundle().with_log(extra.log_surface()));

        status.log("Auto compiling file 'a.ts'");

        assert_eq!(primary.log_lines().len(), 1);
        assert_eq!(extra.log_lines().len(), 1);
    }

    #[test]
    fn dispose_twice_releases_once() {
        let surfaces = RecordingSurfaces::new();
        let mut status = StatusReporter::new(surfaces.bundle());

        status.dispose();
        status.dispose();
        status.log("ignored after dispose");

        let releases = surfaces
            .calls()
            .into_iter()
            .filter(|c| matches!(c, SurfaceCall::Released(_)))
            .count();
        assert_eq!(releases, 4);
        assert!(status.entries().is_empty());
    }
}
