//! File system workspace
//!
//! Config discovery walks the tree under the root with the `ignore` walker.
//! Standard filters (.gitignore, hidden files) are off: a `tsconfig.json`
//! that git ignores is still a config. Excluded directories are pruned
//! instead of walked.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::Workspace;
use crate::domain::value_objects::WatchTarget;
use crate::infrastructure::exclude::ExcludeSet;

#[derive(Debug, Clone)]
pub struct FsWorkspace {
    root: PathBuf,
    excludes: ExcludeSet,
}

impl FsWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = root.canonicalize().unwrap_or(root);
        Self {
            root,
            excludes: ExcludeSet::default(),
        }
    }

    pub fn with_excludes(mut self, excludes: ExcludeSet) -> Self {
        self.excludes = excludes;
        self
    }
}

impl Workspace for FsWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn find_files(&self, target: &WatchTarget) -> Vec<PathBuf> {
        let root = self.root.clone();
        let excludes = self.excludes.clone();

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir && entry.depth() > 0 && excludes.is_excluded_dir(&root, entry.path()))
            })
            .build();

        let mut found = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if self.excludes.is_excluded(&self.root, path) {
                continue;
            }
            if target.matches(&self.root, path) {
                found.push(path.to_path_buf());
            }
        }
        found
    }
}
