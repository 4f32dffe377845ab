//! Orchestrator wired to in-memory ports, for scenario and property tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tsauto::domain::ports::Workspace;
use tsauto::infrastructure::memory::{
    MemoryWatchService, RecordingSurfaces, ScriptedProcessRunner,
};
use tsauto::{ChangeEvent, CompilationOrchestrator, OrchestratorOptions, StatusReporter};

const SETTLE: Duration = Duration::from_millis(200);
const PUMP_STEP: Duration = Duration::from_millis(5);
const PUMP_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Pipeline {
    pub orchestrator: CompilationOrchestrator,
    pub watch: MemoryWatchService,
    pub runner: Arc<ScriptedProcessRunner>,
    pub surfaces: RecordingSurfaces,
    pub root: PathBuf,
}

impl Pipeline {
    /// Build and start; returns once config discovery has been applied.
    pub fn start<W: Workspace + 'static>(workspace: W, options: OrchestratorOptions) -> Self {
        let root = workspace.root().to_path_buf();
        let runner = Arc::new(ScriptedProcessRunner::new());
        let surfaces = RecordingSurfaces::new();
        let watch = MemoryWatchService::new();
        let mut orchestrator = CompilationOrchestrator::new(
            options,
            Arc::new(workspace),
            runner.clone(),
            StatusReporter::new(surfaces.bundle()),
        );
        orchestrator.start(&watch).expect("start orchestrator");
        let mut pipeline = Self {
            orchestrator,
            watch,
            runner,
            surfaces,
            root,
        };
        pipeline.settle();
        pipeline
    }

    /// Deliver a change to whichever subscriptions match it.
    pub fn touch(&self, event: ChangeEvent) {
        self.watch.emit_under(&self.root, event);
    }

    /// Handle everything queued, then wait for running compiles.
    pub fn settle(&mut self) {
        self.orchestrator.process_pending(SETTLE);
        self.orchestrator.wait_idle();
    }

    /// Handle messages until `done` holds. Returns false on timeout.
    pub fn pump_until(&mut self, done: impl Fn(&Self) -> bool) -> bool {
        let deadline = Instant::now() + PUMP_TIMEOUT;
        loop {
            if done(self) {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            self.orchestrator.process_pending(PUMP_STEP);
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
