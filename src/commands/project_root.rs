use std::path::{Path, PathBuf};

use tsauto::config::PROJECT_CONFIG_FILE;

/// Discover the workspace root from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `.tsauto.toml` (explicit tool config)
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_workspace_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(PROJECT_CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// `--root` when given (must be a directory), otherwise discovered from the
/// current directory.
pub(crate) fn resolve_root(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(root) => {
            if !root.is_dir() {
                return Err(tsauto::TsautoError::RootNotFound {
                    path: root.to_path_buf(),
                }
                .into());
            }
            Ok(root.canonicalize().unwrap_or_else(|_| root.to_path_buf()))
        }
        None => {
            let cwd = std::env::current_dir()?;
            Ok(discover_workspace_root(&cwd))
        }
    }
}
