//! Watch target value object
//!
//! A subscription watches either one exact file or a glob pattern relative to
//! the workspace root. The enum makes "neither" and "both" unrepresentable;
//! the constructors reject empty or malformed input so a bad target fails at
//! construction instead of silently watching nothing.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use thiserror::Error;

/// Reasons a watch target cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidWatchTarget {
    #[error("exact path is empty")]
    EmptyPath,

    #[error("glob pattern is empty")]
    EmptyPattern,

    #[error("glob pattern '{pattern}' is malformed: {message}")]
    MalformedPattern { pattern: String, message: String },
}

/// What a subscription listens to
#[derive(Debug, Clone)]
pub enum WatchTarget {
    /// One fixed file
    Exact(PathBuf),
    /// Every file whose workspace-relative path matches the glob
    Pattern(GlobPattern),
}

/// A compiled glob plus the literal it was created from
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    pattern: Pattern,
}

impl GlobPattern {
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match a workspace-relative path. `**` crosses directories, `*` does not.
    pub fn matches(&self, relative: &Path) -> bool {
        self.pattern.matches_path_with(relative, match_options())
    }
}

pub(crate) fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

impl WatchTarget {
    /// Watch one exact file.
    pub fn exact(path: impl Into<PathBuf>) -> Result<Self, InvalidWatchTarget> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(InvalidWatchTarget::EmptyPath);
        }
        Ok(WatchTarget::Exact(normalize(&path)))
    }

    /// Watch every file matching a glob relative to the workspace root.
    pub fn pattern(glob: &str) -> Result<Self, InvalidWatchTarget> {
        let trimmed = glob.trim();
        if trimmed.is_empty() {
            return Err(InvalidWatchTarget::EmptyPattern);
        }
        let pattern = Pattern::new(trimmed).map_err(|e| InvalidWatchTarget::MalformedPattern {
            pattern: trimmed.to_string(),
            message: e.msg.to_string(),
        })?;
        Ok(WatchTarget::Pattern(GlobPattern {
            source: trimmed.to_string(),
            pattern,
        }))
    }

    /// Identity of the subscription: the literal path or pattern.
    pub fn key(&self) -> String {
        match self {
            WatchTarget::Exact(path) => path.display().to_string(),
            WatchTarget::Pattern(glob) => glob.as_str().to_string(),
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, WatchTarget::Pattern(_))
    }

    /// Does `path` (absolute or root-relative) belong to this target?
    pub fn matches(&self, root: &Path, path: &Path) -> bool {
        match self {
            WatchTarget::Exact(exact) => {
                let exact = if exact.is_absolute() {
                    exact.clone()
                } else {
                    root.join(exact)
                };
                let candidate = if path.is_absolute() {
                    normalize(path)
                } else {
                    normalize(&root.join(path))
                };
                normalize(&exact) == candidate
            }
            WatchTarget::Pattern(glob) => {
                let relative = path.strip_prefix(root).unwrap_or(path);
                glob.matches(relative)
            }
        }
    }
}

impl fmt::Display for WatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Lexically remove `.` and resolve `..` without touching the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
