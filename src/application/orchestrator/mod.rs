//! Compilation Orchestrator
//!
//! The state machine at the center of tsauto:
//! - subscribes to the source pattern and the config pattern
//! - decides which changes are compile-worthy
//! - picks project mode or single-file mode from the current config state
//! - runs the compiler on a worker thread and reports the outcome
//!
//! ## Concurrency
//!
//! Everything that happens off the loop thread (watcher callbacks, config
//! discovery, compiler processes) is posted as an `OrchestratorMessage` onto
//! one channel. `handle` processes messages one at a time, so the config slot
//! and the phase are plain fields with no locking.
//!
//! With `OverlapPolicy::Coalesce` at most one compiler runs at a time; any
//! triggers that arrive meanwhile collapse into one pending compile (latest
//! file wins) launched when the running one finishes. `OverlapPolicy::Overlap`
//! launches a process per trigger.

mod message;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub use message::{CompileReport, OrchestratorMessage, Origin};

use crate::application::config_resolver::{ConfigAction, ConfigResolver, ConfigState};
use crate::application::status::StatusReporter;
use crate::application::watcher::Subscription;
use crate::domain::ports::{
    ProcessError, ProcessOutput, ProcessRunner, WatchError, WatchService, Workspace,
};
use crate::domain::value_objects::{
    CompileInvocation, CompileOutcome, CompilePhase, OverlapPolicy, WatchTarget,
};

/// Config file name, matched exactly against the event's file name
pub const PROJECT_FILE: &str = "tsconfig.json";

/// Source extension, matched case-insensitively
pub const SOURCE_EXTENSION: &str = "ts";

/// Default glob for source files
pub const DEFAULT_SOURCES: &str = "**/*.ts";

const SUCCESS_MESSAGE: &str = "TypeScript auto compilation succeeded.";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Orchestrator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorOptions {
    /// Compiler program, e.g. `tsc` or `npx tsc`
    pub compiler: String,
    /// Glob that drives compilation
    pub sources: String,
    pub overlap: OverlapPolicy,
    /// Duration hint for transient messages
    pub transient: Duration,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            compiler: "tsc".to_string(),
            sources: DEFAULT_SOURCES.to_string(),
            overlap: OverlapPolicy::Coalesce,
            transient: Duration::from_millis(5000),
        }
    }
}

impl OrchestratorOptions {
    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }

    pub fn with_sources(mut self, sources: impl Into<String>) -> Self {
        self.sources = sources.into();
        self
    }

    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_transient(mut self, transient: Duration) -> Self {
        self.transient = transient;
        self
    }

    /// Glob for the config file, anywhere under the root
    pub fn project_pattern(&self) -> String {
        format!("**/{}", PROJECT_FILE)
    }
}

pub struct CompilationOrchestrator {
    options: OrchestratorOptions,
    workspace: Arc<dyn Workspace>,
    runner: Arc<dyn ProcessRunner>,
    status: StatusReporter,
    resolver: ConfigResolver,
    phase: CompilePhase,
    subscriptions: Vec<Subscription>,
    inbox: Receiver<OrchestratorMessage>,
    outbox: Sender<OrchestratorMessage>,
    in_flight: usize,
    pending: Option<PathBuf>,
    next_id: u64,
    disposed: bool,
}

impl CompilationOrchestrator {
    pub fn new(
        options: OrchestratorOptions,
        workspace: Arc<dyn Workspace>,
        runner: Arc<dyn ProcessRunner>,
        status: StatusReporter,
    ) -> Self {
        let (outbox, inbox) = channel();
        Self {
            options,
            workspace,
            runner,
            status,
            resolver: ConfigResolver::new(),
            phase: CompilePhase::Warming,
            subscriptions: Vec::new(),
            inbox,
            outbox,
            in_flight: 0,
            pending: None,
            next_id: 1,
            disposed: false,
        }
    }

    /// Render `Warming`, start config discovery and subscribe to both patterns.
    ///
    /// Returns an error only when a subscription cannot be created.
    pub fn start(&mut self, watch: &dyn WatchService) -> Result<(), WatchError> {
        self.phase = CompilePhase::Warming;
        self.status.set_phase(CompilePhase::Warming);

        let project_pattern = self.options.project_pattern();
        self.spawn_discovery(WatchTarget::pattern(&project_pattern)?);

        let tx = self.outbox.clone();
        let sources = Subscription::pattern(&self.options.sources, watch, move |event| {
            let _ = tx.send(OrchestratorMessage::Change {
                origin: Origin::Sources,
                event,
            });
        })?;
        self.subscriptions.push(sources);

        let tx = self.outbox.clone();
        let project = Subscription::pattern(&project_pattern, watch, move |event| {
            let _ = tx.send(OrchestratorMessage::Change {
                origin: Origin::ProjectFile,
                event,
            });
        })?;
        self.subscriptions.push(project);

        tracing::info!(
            root = %self.workspace.root().display(),
            sources = %self.options.sources,
            overlap = %self.options.overlap,
            "orchestrator started"
        );
        Ok(())
    }

    fn spawn_discovery(&mut self, target: WatchTarget) {
        let workspace = self.workspace.clone();
        let tx = self.outbox.clone();
        let spawned = thread::Builder::new()
            .name("tsauto-discovery".to_string())
            .spawn(move || {
                let found = ConfigResolver::discover(workspace.as_ref(), &target);
                let _ = tx.send(OrchestratorMessage::DiscoveryFinished(found));
            });

        if let Err(e) = spawned {
            tracing::warn!(error = %e, "could not start config discovery; using per-file mode");
            let _ = self
                .outbox
                .send(OrchestratorMessage::DiscoveryFinished(Vec::new()));
        }
    }

    /// Run config discovery on the calling thread and apply the result.
    ///
    /// One-shot counterpart of the background discovery done by `start`.
    pub fn discover_now(&mut self) -> Result<(), WatchError> {
        let target = WatchTarget::pattern(&self.options.project_pattern())?;
        let found = ConfigResolver::discover(self.workspace.as_ref(), &target);
        self.handle(OrchestratorMessage::DiscoveryFinished(found));
        Ok(())
    }

    /// Request a compile for `trigger` without a watch event.
    pub fn compile(&mut self, trigger: impl Into<PathBuf>) {
        if self.disposed {
            return;
        }
        self.request_compile(trigger.into());
    }

    /// Process one message to completion.
    pub fn handle(&mut self, message: OrchestratorMessage) {
        if self.disposed {
            return;
        }
        match message {
            OrchestratorMessage::Change { origin, event } => {
                tracing::debug!(
                    path = %event.path.display(),
                    kind = %event.kind,
                    ?origin,
                    "change"
                );
                match origin {
                    Origin::Sources => {
                        if event.has_extension(SOURCE_EXTENSION) {
                            self.request_compile(event.path);
                        }
                    }
                    Origin::ProjectFile => {
                        if event.file_name() != Some(PROJECT_FILE) {
                            return;
                        }
                        let action = self.resolver.on_event(&event, &mut self.status);
                        if action == ConfigAction::Recompile {
                            self.request_compile(event.path);
                        }
                    }
                }
            }
            OrchestratorMessage::DiscoveryFinished(found) => {
                self.resolver.apply_discovery(found, &mut self.status);
                if self.phase == CompilePhase::Warming {
                    self.enter(CompilePhase::Watching);
                }
                tracing::info!(config = ?self.resolver.path(), "config discovery finished");
            }
            OrchestratorMessage::CompileFinished(report) => self.finish(report),
        }
    }

    /// Handle messages until none arrives within `idle`. Returns how many
    /// were handled.
    pub fn process_pending(&mut self, idle: Duration) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.inbox.recv_timeout(idle) {
            self.handle(message);
            handled += 1;
        }
        handled
    }

    /// Block until no compile is running or queued.
    pub fn wait_idle(&mut self) {
        while self.in_flight > 0 || self.pending.is_some() {
            match self.inbox.recv() {
                Ok(message) => self.handle(message),
                Err(_) => break,
            }
        }
    }

    /// Blocking event loop. Returns (after disposing) once `running` is false.
    pub fn run(&mut self, running: &AtomicBool) {
        while running.load(Ordering::SeqCst) {
            match self.inbox.recv_timeout(POLL_INTERVAL) {
                Ok(message) => self.handle(message),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        self.dispose();
    }

    fn request_compile(&mut self, trigger: PathBuf) {
        if self.options.overlap == OverlapPolicy::Coalesce && self.in_flight > 0 {
            tracing::debug!(
                trigger = %trigger.display(),
                "compile already running; queued as the next compile"
            );
            self.pending = Some(trigger);
            return;
        }
        self.launch(trigger);
    }

    fn launch(&mut self, trigger: PathBuf) {
        let file_name = trigger
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| trigger.display().to_string());

        self.enter(CompilePhase::Compiling);
        let notice = format!("Auto compiling file '{}'", file_name);
        self.status.transient_message(&notice, self.options.transient);
        self.status.log(notice);

        // Scope is decided here, at launch, from the current config slot. An
        // edited config still builds as a project when the slot is empty.
        let invocation = match self.resolver.path() {
            None if trigger.file_name().and_then(|n| n.to_str()) == Some(PROJECT_FILE) => {
                CompileInvocation::Project(trigger.clone())
            }
            config => CompileInvocation::select(config, &trigger),
        };
        if let CompileInvocation::Project(config) = &invocation {
            self.status
                .log(format!("Using tsconfig.json at '{}'", config.display()));
        }
        let command = invocation.command_line(&self.options.compiler);

        let id = self.next_id;
        self.next_id += 1;
        self.in_flight += 1;
        tracing::info!(id, command = %command, "launching compiler");

        let runner = self.runner.clone();
        let tx = self.outbox.clone();
        let cwd = self.workspace.root().to_path_buf();
        let spawned = thread::Builder::new()
            .name(format!("tsauto-compile-{}", id))
            .spawn({
                let trigger = trigger.clone();
                let invocation = invocation.clone();
                let command = command.clone();
                move || {
                    let result = runner.run(&command, &cwd);
                    let _ = tx.send(OrchestratorMessage::CompileFinished(CompileReport {
                        id,
                        trigger,
                        invocation,
                        command,
                        result,
                    }));
                }
            });

        if let Err(e) = spawned {
            self.finish(CompileReport {
                id,
                trigger,
                invocation,
                command,
                result: Err(ProcessError::Other(format!(
                    "could not start compiler thread: {}",
                    e
                ))),
            });
        }
    }

    fn finish(&mut self, report: CompileReport) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let outcome = outcome_of(&report.command, report.result);
        let settled = self.in_flight == 0;
        tracing::info!(
            id = report.id,
            success = outcome.is_success(),
            still_running = self.in_flight,
            "compiler finished"
        );

        match &outcome {
            CompileOutcome::Failed { message, .. } => {
                if settled {
                    self.enter(CompilePhase::Failed);
                }
                self.status.reveal_log();
                self.status.log(message.as_str());
                for chunk in outcome.captured_output() {
                    for line in chunk.lines() {
                        self.status.log(line);
                    }
                }
                self.status.log("");
                self.status.transient_message(message, self.options.transient);
            }
            CompileOutcome::Succeeded { .. } => {
                if settled {
                    self.enter(CompilePhase::Watching);
                }
                self.status.log(SUCCESS_MESSAGE);
                self.status.log("");
                self.status
                    .transient_message(SUCCESS_MESSAGE, self.options.transient);
            }
        }

        if settled {
            if let Some(next) = self.pending.take() {
                self.launch(next);
            }
        }
    }

    fn enter(&mut self, phase: CompilePhase) {
        self.phase = phase;
        self.status.set_phase(phase);
    }

    pub fn phase(&self) -> CompilePhase {
        self.phase
    }

    pub fn config_state(&self) -> &ConfigState {
        self.resolver.state()
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.resolver.path()
    }

    /// Compiler processes launched and not yet reported back
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn status(&self) -> &StatusReporter {
        &self.status
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn options(&self) -> &OrchestratorOptions {
        &self.options
    }

    /// Handle for posting messages from outside (tests, embedding hosts).
    pub fn sender(&self) -> Sender<OrchestratorMessage> {
        self.outbox.clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release subscriptions and surfaces. Running compilers are not waited
    /// for or cancelled. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        for subscription in &mut self.subscriptions {
            subscription.dispose();
        }
        self.status.dispose();
        if self.in_flight > 0 {
            tracing::debug!(
                in_flight = self.in_flight,
                "disposed with compiler still running"
            );
        }
    }
}

impl Drop for CompilationOrchestrator {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn outcome_of(command: &str, result: Result<ProcessOutput, ProcessError>) -> CompileOutcome {
    match result {
        Ok(output) if output.is_success() => CompileOutcome::Succeeded {
            stdout: output.stdout,
            stderr: output.stderr,
        },
        Ok(output) => {
            let message = match output.exit_code {
                Some(code) => format!("Command failed: {} (exit code {})", command, code),
                None => format!("Command failed: {} (terminated by signal)", command),
            };
            CompileOutcome::Failed {
                message,
                stdout: output.stdout,
                stderr: output.stderr,
                exit_code: output.exit_code,
            }
        }
        Err(e) => CompileOutcome::Failed {
            message: e.to_string(),
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
        },
    }
}
