//! Terminal status surfaces
//!
//! Line-oriented rendering of the four surfaces on stdout. The compile log is
//! buffered until it is revealed (first failure, or immediately in verbose
//! mode); after that every entry is printed as it arrives. Repeated
//! identical indicators are printed once.
//!
//! `one_shot` consoles (the `compile` command) print only the log and
//! notifications: there is no watch state to show.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Local;
use tsauto::application::Surfaces;
use tsauto::domain::ports::{IndicatorSurface, LogSurface, MessageSurface, NotificationSurface};
use tsauto::domain::value_objects::{CompileLogEntry, Indicator};

use crate::ui::context::UiContext;
use crate::ui::views::watch as view;

struct ConsoleState {
    out: Box<dyn Write + Send>,
    color: bool,
    unicode: bool,
    revealed: bool,
    buffered: Vec<CompileLogEntry>,
    last_indicator: Option<Indicator>,
    stopped: bool,
    one_shot: bool,
}

impl ConsoleState {
    fn write(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }

    fn write_entry(&mut self, entry: &CompileLogEntry) {
        let line = view::render_log_line(&entry.clock(), &entry.text, self.color, self.unicode);
        self.write(&line);
    }
}

/// Shared console; `bundle` hands out the four surfaces.
#[derive(Clone)]
pub struct Console {
    state: Arc<Mutex<ConsoleState>>,
}

impl Console {
    pub fn stdout(ui: &UiContext) -> Self {
        Self::with_writer(io::stdout(), ui.color, ui.unicode, ui.reveal_log_upfront())
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        color: bool,
        unicode: bool,
        reveal_log: bool,
    ) -> Self {
        let console = Self {
            state: Arc::new(Mutex::new(ConsoleState {
                out: Box::new(writer),
                color,
                unicode,
                revealed: false,
                buffered: Vec::new(),
                last_indicator: None,
                stopped: false,
                one_shot: false,
            })),
        };
        if reveal_log {
            console.reveal_log();
        }
        console
    }

    /// Log and notifications only, log shown from the start.
    pub fn one_shot(self) -> Self {
        self.lock().one_shot = true;
        self.reveal_log();
        self
    }

    pub fn bundle(&self) -> Surfaces {
        Surfaces::new(
            Box::new(self.clone()),
            Box::new(self.clone()),
            Box::new(self.clone()),
            Box::new(self.clone()),
        )
    }

    fn lock(&self) -> MutexGuard<'_, ConsoleState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn reveal_log(&self) {
        let mut state = self.lock();
        if state.revealed {
            return;
        }
        state.revealed = true;
        let divider = view::render_log_divider(state.color, state.unicode);
        state.write(&divider);
        let buffered = std::mem::take(&mut state.buffered);
        for entry in &buffered {
            state.write_entry(entry);
        }
    }
}

impl IndicatorSurface for Console {
    fn show(&mut self, indicator: &Indicator) {
        let mut state = self.lock();
        if state.one_shot || state.last_indicator.as_ref() == Some(indicator) {
            return;
        }
        let clock = Local::now().format("%H:%M:%S").to_string();
        let line = view::render_indicator(&clock, indicator, state.color, state.unicode);
        state.write(&line);
        state.last_indicator = Some(indicator.clone());
    }

    fn release(&mut self) {
        let mut state = self.lock();
        if state.stopped || state.one_shot {
            return;
        }
        state.stopped = true;
        let clock = Local::now().format("%H:%M:%S").to_string();
        let line = view::render_stopped(&clock, state.color, state.unicode);
        state.write(&line);
    }
}

impl LogSurface for Console {
    fn append(&mut self, entry: &CompileLogEntry) {
        let mut state = self.lock();
        if state.revealed {
            state.write_entry(entry);
        } else {
            state.buffered.push(entry.clone());
        }
    }

    fn reveal(&mut self) {
        self.reveal_log();
    }
}

impl MessageSurface for Console {
    // Scrollback cannot retract a line, so the duration is not used.
    fn transient(&mut self, text: &str, _duration: Duration) {
        let mut state = self.lock();
        if state.one_shot {
            return;
        }
        let line = view::render_message(text, state.color, state.unicode);
        state.write(&line);
    }
}

impl NotificationSurface for Console {
    fn notify(&mut self, text: &str) {
        let mut state = self.lock();
        let line = view::render_notification(text, state.color, state.unicode);
        state.write(&line);
    }
}
