//! Test environment builder for isolated tsauto testing.
//!
//! Provides `TestEnv` - a temp project directory and a temp home so the
//! user config file never leaks in from the machine running the tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a tsauto CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Env vars that would change resolved settings
const TSAUTO_VARS: &[&str] = &[
    "TSAUTO_COMPILER",
    "TSAUTO_OVERLAP",
    "TSAUTO_TRANSIENT_MS",
    "TSAUTO_COLOR",
    "RUST_LOG",
];

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file below the project root, creating parent directories.
    pub fn write_project_file(&self, relative_path: &str, content: &str) -> &Self {
        write_file(&self.project_path(relative_path), content);
        self
    }

    /// Write the user-level tsauto config.
    pub fn write_user_config(&self, content: &str) -> &Self {
        write_file(&self.user_config_dir().join("tsauto/config.toml"), content);
        self
    }

    fn user_config_dir(&self) -> PathBuf {
        if cfg!(target_os = "macos") {
            self.home_dir.path().join("Library/Application Support")
        } else {
            self.home_dir.path().join(".config")
        }
    }

    /// A `Command` for the tsauto binary, isolated from the caller's env.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tsauto"));
        cmd.current_dir(self.root())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.user_config_dir())
            .env("NO_COLOR", "1");
        for var in TSAUTO_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Run tsauto with `args`, rooted at the project directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute tsauto");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
