//! Shell process runner
//!
//! Runs the compiler command line through the platform shell so that `tsc`
//! resolves the same way it would in a terminal (PATH, `.cmd` shims, `npx`).

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{ProcessError, ProcessOutput, ProcessRunner};

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellProcessRunner;

impl ShellProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
fn shell(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(command_line);
    command
}

#[cfg(not(windows))]
fn shell(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}

impl ProcessRunner for ShellProcessRunner {
    fn run(&self, command_line: &str, cwd: &Path) -> Result<ProcessOutput, ProcessError> {
        tracing::debug!(command = %command_line, cwd = %cwd.display(), "spawning");
        let output = shell(command_line)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ProcessError::Spawn {
                command: command_line.to_string(),
                cwd: cwd.to_path_buf(),
                source,
            })?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
