//! Workspace port - the open project's root and a best-effort file search

use std::path::{Path, PathBuf};

use crate::domain::value_objects::WatchTarget;

/// Abstract workspace
///
/// Implementations:
/// - `FsWorkspace` - walks the real directory tree
/// - `StaticWorkspace` - fixed file list for tests
pub trait Workspace: Send + Sync {
    fn root(&self) -> &Path;

    /// All files matching `target`, in host order. Errors are swallowed:
    /// an unreadable directory just contributes nothing.
    fn find_files(&self, target: &WatchTarget) -> Vec<PathBuf>;
}
