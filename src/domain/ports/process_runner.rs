//! ProcessRunner port - run a shell command and capture its output

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Exit status and captured streams of a finished process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Process execution errors (the process never produced an exit status)
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start '{command}' in {cwd}: {source}")]
    Spawn {
        command: String,
        cwd: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

/// Abstract process execution
///
/// Implementations:
/// - `ShellProcessRunner` - platform shell (`sh -c` / `cmd /C`)
/// - `ScriptedProcessRunner` - canned outputs for tests
pub trait ProcessRunner: Send + Sync {
    /// Run `command_line` with working directory `cwd`, blocking until exit.
    fn run(&self, command_line: &str, cwd: &Path) -> Result<ProcessOutput, ProcessError>;
}
