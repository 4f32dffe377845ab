//! Compiler invocation and outcome
//!
//! Every trigger is a full rebuild of the selected scope: the whole project
//! when a `tsconfig.json` is active, otherwise the single triggering file.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What the compiler is asked to build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "path", rename_all = "snake_case")]
pub enum CompileInvocation {
    /// `tsc <file>`
    SingleFile(PathBuf),
    /// `tsc -p "<config>"`
    Project(PathBuf),
}

impl CompileInvocation {
    /// Pick project mode when a config is active, single-file mode otherwise.
    pub fn select(config: Option<&Path>, trigger: &Path) -> Self {
        match config {
            Some(config) => CompileInvocation::Project(config.to_path_buf()),
            None => CompileInvocation::SingleFile(trigger.to_path_buf()),
        }
    }

    pub fn is_project(&self) -> bool {
        matches!(self, CompileInvocation::Project(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            CompileInvocation::SingleFile(path) | CompileInvocation::Project(path) => path,
        }
    }

    /// Shell command line for `program`.
    ///
    /// Plain paths are passed bare; anything else is quoted for the platform
    /// shell. The config path is always double-quoted.
    pub fn command_line(&self, program: &str) -> String {
        match self {
            CompileInvocation::SingleFile(file) => {
                format!("{} {}", program, quote_arg(&file.to_string_lossy()))
            }
            CompileInvocation::Project(config) => {
                format!("{} -p {}", program, double_quote(&config.to_string_lossy()))
            }
        }
    }
}

/// Characters no shell treats specially; `\\` only separates paths on Windows.
fn is_plain(arg: &str) -> bool {
    !arg.is_empty()
        && arg.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '/' | '.' | '_' | '-' | '+' | ':' | ',' | '@')
                || (cfg!(windows) && c == '\\')
        })
}

#[cfg(not(windows))]
fn quote_arg(arg: &str) -> String {
    if is_plain(arg) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', "'\\''"))
}

#[cfg(windows)]
fn quote_arg(arg: &str) -> String {
    if is_plain(arg) {
        return arg.to_string();
    }
    double_quote(arg)
}

/// `sh` keeps `$`, `` ` ``, `"` and `\` special inside double quotes.
#[cfg(not(windows))]
fn double_quote(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    for c in arg.chars() {
        if matches!(c, '$' | '`' | '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// `cmd` escapes a quote by doubling it.
#[cfg(windows)]
fn double_quote(arg: &str) -> String {
    format!("\"{}\"", arg.replace('"', "\"\""))
}

/// Result of one compiler run, as reported to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    Succeeded {
        stdout: String,
        stderr: String,
    },
    /// Nonzero exit, or the process could not be started (`exit_code = None`)
    Failed {
        message: String,
        stdout: String,
        stderr: String,
        exit_code: Option<i32>,
    },
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileOutcome::Succeeded { .. })
    }

    /// Captured output, stderr first, trimmed, empty streams dropped.
    pub fn captured_output(&self) -> Vec<&str> {
        let (stdout, stderr) = match self {
            CompileOutcome::Succeeded { stdout, stderr } => (stdout, stderr),
            CompileOutcome::Failed { stdout, stderr, .. } => (stdout, stderr),
        };
        [stderr.trim(), stdout.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect()
    }
}
