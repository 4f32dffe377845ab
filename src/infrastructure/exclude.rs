//! Exclude globs shared by the watcher and the workspace search

use std::path::Path;

use crate::domain::value_objects::{InvalidWatchTarget, WatchTarget};

/// Default excludes: dependency trees and VCS metadata
pub const DEFAULT_EXCLUDES: &[&str] = &["**/node_modules/**", "**/.git/**"];

#[derive(Debug, Clone)]
pub struct ExcludeSet {
    patterns: Vec<WatchTarget>,
}

impl Default for ExcludeSet {
    fn default() -> Self {
        Self::from_defaults()
    }
}

impl ExcludeSet {
    pub fn new<S: AsRef<str>>(globs: &[S]) -> Result<Self, InvalidWatchTarget> {
        let patterns = globs
            .iter()
            .map(|glob| WatchTarget::pattern(glob.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn from_defaults() -> Self {
        let patterns = DEFAULT_EXCLUDES
            .iter()
            .filter_map(|glob| WatchTarget::pattern(glob).ok())
            .collect();
        Self { patterns }
    }

    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn globs(&self) -> Vec<String> {
        self.patterns.iter().map(WatchTarget::key).collect()
    }

    pub fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        self.patterns.iter().any(|p| p.matches(root, path))
    }

    /// A directory is excluded when anything inside it would be.
    pub fn is_excluded_dir(&self, root: &Path, dir: &Path) -> bool {
        self.is_excluded(root, &dir.join("_"))
    }
}
