//! Config Resolver
//!
//! Tracks the single active `tsconfig.json`. Discovery runs once at startup;
//! afterwards Created/Deleted events on the config pattern keep the slot
//! current. Changed events leave the slot alone and are compile triggers.
//!
//! When several config files exist only one is tracked. Which one is active is
//! whatever the workspace search returned first (or the most recent Created
//! event); there is no priority rule between them.

use std::path::{Path, PathBuf};

use crate::application::status::StatusReporter;
use crate::domain::ports::Workspace;
use crate::domain::value_objects::{ChangeEvent, ChangeKind, WatchTarget};

/// Single-slot configuration state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigState {
    /// No config: compile each triggering file on its own
    #[default]
    Absent,
    /// Project mode with this config file
    Path(PathBuf),
}

impl ConfigState {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigState::Absent => None,
            ConfigState::Path(path) => Some(path),
        }
    }
}

/// What the orchestrator should do after a config-pattern event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// The slot was updated; not a compile trigger
    Updated,
    /// Config content changed; compile with the unchanged path
    Recompile,
}

#[derive(Debug)]
pub struct ConfigResolver {
    state: ConfigState,
    event_applied: bool,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self {
            state: ConfigState::Absent,
            event_applied: false,
        }
    }

    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    pub fn path(&self) -> Option<&Path> {
        self.state.path()
    }

    /// Best-effort search for config files. Blocking; run off the event loop.
    pub fn discover(workspace: &dyn Workspace, target: &WatchTarget) -> Vec<PathBuf> {
        workspace.find_files(target)
    }

    /// Apply the startup search result.
    ///
    /// If a Created/Deleted event was already applied, that event is newer
    /// than the search and the result is dropped.
    pub fn apply_discovery(&mut self, found: Vec<PathBuf>, status: &mut StatusReporter) {
        if self.event_applied {
            tracing::debug!(
                found = found.len(),
                "config discovery finished after a config event; keeping event state"
            );
            return;
        }

        let mut found = found.into_iter();
        let Some(first) = found.next() else {
            tracing::info!("no tsconfig.json found; compiling each changed file");
            return;
        };
        let others: Vec<PathBuf> = found.collect();

        status.notify(found_notice(&first));
        if !others.is_empty() {
            let list = others
                .iter()
                .map(|p| format!("'{}'", p.display()))
                .collect::<Vec<_>>()
                .join(", ");
            status.notify(format!(
                "Found {} tsconfig.json files. Only '{}' is used; ignoring {}. \
                 The first match in directory walk order wins, so a nested config \
                 may be picked over the root one; remove or exclude the others to choose.",
                others.len() + 1,
                first.display(),
                list
            ));
        }
        self.state = ConfigState::Path(first);
    }

    /// React to an event on the config-file pattern.
    pub fn on_event(&mut self, event: &ChangeEvent, status: &mut StatusReporter) -> ConfigAction {
        match event.kind {
            ChangeKind::Created => {
                self.event_applied = true;
                self.state = ConfigState::Path(event.path.clone());
                status.notify(found_notice(&event.path));
                ConfigAction::Updated
            }
            ChangeKind::Deleted => {
                self.event_applied = true;
                let previous = std::mem::take(&mut self.state);
                let previous = previous
                    .path()
                    .unwrap_or(event.path.as_path())
                    .display()
                    .to_string();
                status.notify(format!(
                    "Previous tsconfig.json file at '{}' was removed. Building each '.ts' file.",
                    previous
                ));
                ConfigAction::Updated
            }
            ChangeKind::Changed => ConfigAction::Recompile,
        }
    }
}

fn found_notice(path: &Path) -> String {
    format!(
        "Found tsconfig.json file at '{}'. File will be used for TypeScript auto compile routines.",
        path.display()
    )
}
