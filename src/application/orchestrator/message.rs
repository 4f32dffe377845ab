//! Messages delivered to the orchestrator loop
//!
//! Watcher callbacks, the discovery worker and compiler workers all run off
//! the loop thread. They only ever post one of these; the loop handles them
//! one at a time, to completion.

use std::path::PathBuf;

use crate::domain::ports::{ProcessError, ProcessOutput};
use crate::domain::value_objects::{ChangeEvent, CompileInvocation};

/// Which subscription produced a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The source-file pattern (`**/*.ts`)
    Sources,
    /// The config-file pattern (`**/tsconfig.json`)
    ProjectFile,
}

/// A finished compiler run
#[derive(Debug)]
pub struct CompileReport {
    pub id: u64,
    pub trigger: PathBuf,
    pub invocation: CompileInvocation,
    pub command: String,
    pub result: Result<ProcessOutput, ProcessError>,
}

#[derive(Debug)]
pub enum OrchestratorMessage {
    Change { origin: Origin, event: ChangeEvent },
    DiscoveryFinished(Vec<PathBuf>),
    CompileFinished(CompileReport),
}
