//! In-memory adapters
//!
//! Deterministic stand-ins for the host ports, used by unit tests, the
//! scenario tests and the fuzz targets:
//! - `MemoryWatchService` - events are pushed by hand with `emit`
//! - `ScriptedProcessRunner` - canned compiler results, optional gate
//! - `RecordingSurfaces` - records every surface call in order
//! - `StaticWorkspace` - a fixed file list for config discovery

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::application::status::Surfaces;
use crate::domain::ports::{
    EventHandler, IndicatorSurface, LogSurface, MessageSurface, NotificationSurface, ProcessError,
    ProcessOutput, ProcessRunner, WatchError, WatchHandle, WatchService, Workspace,
};
use crate::domain::value_objects::{ChangeEvent, CompileLogEntry, Indicator, WatchTarget};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ----------------------------------------------------------------------------
// Watch service
// ----------------------------------------------------------------------------

type SharedHandler = Arc<dyn Fn(ChangeEvent) + Send + Sync + 'static>;

#[derive(Default)]
struct WatchRegistry {
    next_id: u64,
    live: Vec<(u64, WatchTarget, SharedHandler)>,
    releases: HashMap<String, usize>,
}

/// Watch service whose events come from `emit` calls.
#[derive(Clone, Default)]
pub struct MemoryWatchService {
    registry: Arc<Mutex<WatchRegistry>>,
}

impl MemoryWatchService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every live subscription whose key is `key`.
    pub fn emit(&self, key: &str, event: ChangeEvent) {
        let handlers: Vec<SharedHandler> = lock(&self.registry)
            .live
            .iter()
            .filter(|(_, target, _)| target.key() == key)
            .map(|(_, _, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(event.clone());
        }
    }

    /// Deliver `event` to every live subscription whose target matches its
    /// path relative to `root`, the way a real host would.
    pub fn emit_under(&self, root: &Path, event: ChangeEvent) {
        let handlers: Vec<SharedHandler> = lock(&self.registry)
            .live
            .iter()
            .filter(|(_, target, _)| target.matches(root, &event.path))
            .map(|(_, _, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(event.clone());
        }
    }

    /// Number of subscriptions not yet released
    pub fn active_count(&self) -> usize {
        lock(&self.registry).live.len()
    }

    /// How many times a subscription with this key was released
    pub fn release_count(&self, key: &str) -> usize {
        lock(&self.registry)
            .releases
            .get(key)
            .copied()
            .unwrap_or(0)
    }
}

impl WatchService for MemoryWatchService {
    fn watch(
        &self,
        target: &WatchTarget,
        handler: EventHandler,
    ) -> Result<Box<dyn WatchHandle>, WatchError> {
        let mut registry = lock(&self.registry);
        registry.next_id += 1;
        let id = registry.next_id;
        registry
            .live
            .push((id, target.clone(), SharedHandler::from(handler)));
        Ok(Box::new(MemoryWatchHandle {
            id,
            key: target.key(),
            registry: self.registry.clone(),
        }))
    }
}

struct MemoryWatchHandle {
    id: u64,
    key: String,
    registry: Arc<Mutex<WatchRegistry>>,
}

impl WatchHandle for MemoryWatchHandle {
    fn release(&mut self) {
        let mut registry = lock(&self.registry);
        let before = registry.live.len();
        registry.live.retain(|(id, _, _)| *id != self.id);
        if registry.live.len() != before {
            *registry.releases.entry(self.key.clone()).or_insert(0) += 1;
        }
    }
}

// ----------------------------------------------------------------------------
// Process runner
// ----------------------------------------------------------------------------

/// One canned compiler result
#[derive(Debug, Clone)]
pub enum ScriptedRun {
    Exit(ProcessOutput),
    /// The process could not be started
    SpawnFailure(String),
}

#[derive(Default)]
struct RunnerState {
    script: VecDeque<ScriptedRun>,
    commands: Vec<(String, PathBuf)>,
    finished: usize,
}

#[derive(Default)]
struct Gate {
    permits: Mutex<Option<usize>>,
    opened: Condvar,
}

/// Process runner that replays a script. Runs past the end of the script
/// succeed with empty output.
///
/// When held, every run blocks until `release_one` hands it a permit, which
/// lets tests keep a compile in flight.
#[derive(Default)]
pub struct ScriptedProcessRunner {
    state: Mutex<RunnerState>,
    gate: Gate,
}

const GATE_TIMEOUT: Duration = Duration::from_secs(10);

impl ScriptedProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a run that exits with `output`.
    pub fn push(&self, output: ProcessOutput) -> &Self {
        lock(&self.state).script.push_back(ScriptedRun::Exit(output));
        self
    }

    /// Queue a run that fails to start.
    pub fn push_spawn_failure(&self, message: impl Into<String>) -> &Self {
        lock(&self.state)
            .script
            .push_back(ScriptedRun::SpawnFailure(message.into()));
        self
    }

    /// Block every run until a permit is released.
    pub fn hold(&self) {
        *lock(&self.gate.permits) = Some(0);
    }

    pub fn release_one(&self) {
        let mut permits = lock(&self.gate.permits);
        if let Some(count) = permits.as_mut() {
            *count += 1;
        }
        self.gate.opened.notify_all();
    }

    /// Command lines in launch order
    pub fn commands(&self) -> Vec<String> {
        lock(&self.state)
            .commands
            .iter()
            .map(|(command, _)| command.clone())
            .collect()
    }

    /// Working directories in launch order
    pub fn working_dirs(&self) -> Vec<PathBuf> {
        lock(&self.state)
            .commands
            .iter()
            .map(|(_, cwd)| cwd.clone())
            .collect()
    }

    pub fn finished(&self) -> usize {
        lock(&self.state).finished
    }

    fn wait_for_permit(&self) {
        let deadline = Instant::now() + GATE_TIMEOUT;
        let mut permits = lock(&self.gate.permits);
        loop {
            match permits.as_mut() {
                None => return,
                Some(count) if *count > 0 => {
                    *count -= 1;
                    return;
                }
                Some(_) => {}
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return;
            }
            permits = match self.gate.opened.wait_timeout(permits, remaining) {
                Ok((guard, _)) => guard,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }
    }
}

impl ProcessRunner for ScriptedProcessRunner {
    fn run(&self, command_line: &str, cwd: &Path) -> Result<ProcessOutput, ProcessError> {
        let next = {
            let mut state = lock(&self.state);
            state
                .commands
                .push((command_line.to_string(), cwd.to_path_buf()));
            state.script.pop_front()
        };

        self.wait_for_permit();
        lock(&self.state).finished += 1;

        match next {
            None => Ok(ProcessOutput::success("")),
            Some(ScriptedRun::Exit(output)) => Ok(output),
            Some(ScriptedRun::SpawnFailure(message)) => Err(ProcessError::Spawn {
                command: command_line.to_string(),
                cwd: cwd.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, message),
            }),
        }
    }
}

// ----------------------------------------------------------------------------
// Surfaces
// ----------------------------------------------------------------------------

/// One recorded surface interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Indicator(Indicator),
    Log(String),
    Reveal,
    Transient(String, Duration),
    Notification(String),
    /// Which surface was released: "indicator", "log", "messages" or "notifications"
    Released(&'static str),
}

/// Shared recorder; `bundle` hands out surfaces that write into it.
#[derive(Clone, Default)]
pub struct RecordingSurfaces {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
}

impl RecordingSurfaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bundle(&self) -> Surfaces {
        Surfaces::new(
            Box::new(self.recorder()),
            self.log_surface(),
            Box::new(self.recorder()),
            Box::new(self.recorder()),
        )
    }

    pub fn log_surface(&self) -> Box<dyn LogSurface> {
        Box::new(self.recorder())
    }

    fn recorder(&self) -> Recorder {
        Recorder {
            calls: self.calls.clone(),
        }
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        lock(&self.calls).clone()
    }

    /// Latest indicator shown
    pub fn indicator(&self) -> Option<Indicator> {
        lock(&self.calls).iter().rev().find_map(|call| match call {
            SurfaceCall::Indicator(indicator) => Some(indicator.clone()),
            _ => None,
        })
    }

    /// Every indicator text shown, in order
    pub fn indicator_history(&self) -> Vec<String> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Indicator(indicator) => Some(indicator.text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn log_lines(&self) -> Vec<String> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Log(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn transients(&self) -> Vec<String> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Transient(text, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn notifications(&self) -> Vec<String> {
        lock(&self.calls)
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Notification(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn reveal_count(&self) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Reveal))
            .count()
    }
}

struct Recorder {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
}

impl Recorder {
    fn record(&self, call: SurfaceCall) {
        lock(&self.calls).push(call);
    }
}

impl IndicatorSurface for Recorder {
    fn show(&mut self, indicator: &Indicator) {
        self.record(SurfaceCall::Indicator(indicator.clone()));
    }

    fn release(&mut self) {
        self.record(SurfaceCall::Released("indicator"));
    }
}

impl LogSurface for Recorder {
    fn append(&mut self, entry: &CompileLogEntry) {
        self.record(SurfaceCall::Log(entry.text.clone()));
    }

    fn reveal(&mut self) {
        self.record(SurfaceCall::Reveal);
    }

    fn release(&mut self) {
        self.record(SurfaceCall::Released("log"));
    }
}

impl MessageSurface for Recorder {
    fn transient(&mut self, text: &str, duration: Duration) {
        self.record(SurfaceCall::Transient(text.to_string(), duration));
    }

    fn release(&mut self) {
        self.record(SurfaceCall::Released("messages"));
    }
}

impl NotificationSurface for Recorder {
    fn notify(&mut self, text: &str) {
        self.record(SurfaceCall::Notification(text.to_string()));
    }

    fn release(&mut self) {
        self.record(SurfaceCall::Released("notifications"));
    }
}

// ----------------------------------------------------------------------------
// Workspace
// ----------------------------------------------------------------------------

/// Workspace with a fixed file list
#[derive(Debug, Clone)]
pub struct StaticWorkspace {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl StaticWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    /// Add a file; relative paths are taken relative to the root.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        self.files.push(path);
        self
    }
}

impl Workspace for StaticWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn find_files(&self, target: &WatchTarget) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter(|path| target.matches(&self.root, path))
            .cloned()
            .collect()
    }
}
