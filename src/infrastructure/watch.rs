//! File system watch service backed by `notify`
//!
//! Exact targets watch their parent directory non-recursively; patterns watch
//! the workspace root recursively. Raw notify events are mapped to
//! Created/Changed/Deleted, filtered by the target and the exclude set, and
//! handed to the subscription's handler on notify's thread.

use std::path::{Path, PathBuf};

use notify::event::{EventKind, ModifyKind, RenameMode};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::ports::{EventHandler, WatchError, WatchHandle, WatchService};
use crate::domain::value_objects::{ChangeEvent, ChangeKind, WatchTarget};
use crate::infrastructure::exclude::ExcludeSet;

pub struct NotifyWatchService {
    root: PathBuf,
    excludes: ExcludeSet,
}

impl NotifyWatchService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        // notify reports canonical paths; match against the same form.
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

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn watch_root(&self, target: &WatchTarget) -> (PathBuf, RecursiveMode) {
        match target {
            WatchTarget::Exact(path) => {
                let path = if path.is_absolute() {
                    path.clone()
                } else {
                    self.root.join(path)
                };
                let dir = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                (dir, RecursiveMode::NonRecursive)
            }
            WatchTarget::Pattern(_) => (self.root.clone(), RecursiveMode::Recursive),
        }
    }
}

impl WatchService for NotifyWatchService {
    fn watch(
        &self,
        target: &WatchTarget,
        handler: EventHandler,
    ) -> Result<Box<dyn WatchHandle>, WatchError> {
        let backend = |e: notify::Error| WatchError::Backend {
            target: target.key(),
            message: e.to_string(),
        };

        let root = self.root.clone();
        let excludes = self.excludes.clone();
        let filter = target.clone();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    for change in classify(&event) {
                        if excludes.is_excluded(&root, &change.path)
                            || !filter.matches(&root, &change.path)
                        {
                            continue;
                        }
                        handler(change);
                    }
                }
                Err(e) => tracing::warn!(error = %e, "watch backend error"),
            },
            Config::default(),
        )
        .map_err(backend)?;

        let (dir, mode) = self.watch_root(target);
        watcher.watch(&dir, mode).map_err(backend)?;
        tracing::debug!(target = %target, dir = %dir.display(), "notify watch registered");

        Ok(Box::new(NotifyWatchHandle {
            watcher: Some(watcher),
        }))
    }
}

struct NotifyWatchHandle {
    watcher: Option<RecommendedWatcher>,
}

impl WatchHandle for NotifyWatchHandle {
    fn release(&mut self) {
        // Dropping the watcher unregisters every path.
        self.watcher.take();
    }
}

/// Map a raw notify event to zero or more normalized changes.
pub(crate) fn classify(event: &Event) -> Vec<ChangeEvent> {
    let kind = match event.kind {
        EventKind::Create(_) => ChangeKind::Created,
        EventKind::Remove(_) => ChangeKind::Deleted,
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => ChangeKind::Deleted,
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => ChangeKind::Created,
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
            // paths = [from, to]
            return event
                .paths
                .iter()
                .enumerate()
                .map(|(i, path)| {
                    let kind = if i == 0 {
                        ChangeKind::Deleted
                    } else {
                        ChangeKind::Created
                    };
                    ChangeEvent::new(path.clone(), kind)
                })
                .collect();
        }
        EventKind::Modify(ModifyKind::Name(_)) => {
            // Backend could not tell which side of the rename this is.
            return event
                .paths
                .iter()
                .map(|path| {
                    let kind = if path.exists() {
                        ChangeKind::Created
                    } else {
                        ChangeKind::Deleted
                    };
                    ChangeEvent::new(path.clone(), kind)
                })
                .collect();
        }
        EventKind::Modify(ModifyKind::Metadata(_)) => return Vec::new(),
        EventKind::Modify(_) => ChangeKind::Changed,
        EventKind::Access(_) | EventKind::Any | EventKind::Other => return Vec::new(),
    };

    event
        .paths
        .iter()
        .map(|path| ChangeEvent::new(path.clone(), kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, MetadataKind, RemoveKind};

    fn event(kind: EventKind, paths: &[&str]) -> Event {
        paths
            .iter()
            .fold(Event::new(kind), |e, p| e.add_path(PathBuf::from(p)))
    }

    fn kinds(event: &Event) -> Vec<ChangeKind> {
        classify(event).into_iter().map(|c| c.kind).collect()
    }

    #[test]
    fn create_modify_remove_map_directly() {
        assert_eq!(
            kinds(&event(EventKind::Create(CreateKind::File), &["/p/a.ts"])),
            vec![ChangeKind::Created]
        );
        assert_eq!(
            kinds(&event(
                EventKind::Modify(ModifyKind::Data(DataChange::Content)),
                &["/p/a.ts"]
            )),
            vec![ChangeKind::Changed]
        );
        assert_eq!(
            kinds(&event(EventKind::Remove(RemoveKind::File), &["/p/a.ts"])),
            vec![ChangeKind::Deleted]
        );
    }

    #[test]
    fn rename_both_yields_delete_then_create() {
        let e = event(
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
            &["/p/old.ts", "/p/new.ts"],
        );
        let changes = classify(&e);
        assert_eq!(changes[0], ChangeEvent::deleted("/p/old.ts"));
        assert_eq!(changes[1], ChangeEvent::created("/p/new.ts"));
    }

    #[test]
    fn access_and_metadata_are_dropped() {
        assert!(classify(&event(EventKind::Access(AccessKind::Any), &["/p/a.ts"])).is_empty());
        assert!(classify(&event(
            EventKind::Modify(ModifyKind::Metadata(MetadataKind::Permissions)),
            &["/p/a.ts"]
        ))
        .is_empty());
    }

    #[test]
    fn exact_target_watches_parent_non_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let service = NotifyWatchService::new(dir.path());
        let target = WatchTarget::exact(service.root().join("tsconfig.json")).unwrap();

        let (watched, mode) = service.watch_root(&target);

        assert_eq!(watched, service.root());
        assert_eq!(mode, RecursiveMode::NonRecursive);
    }
}
