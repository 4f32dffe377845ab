//! WatchService port - file-system change notifications
//!
//! The host delivers create/change/delete notifications for an exact path or
//! a glob pattern. Each subscription returns a handle; releasing the handle
//! stops delivery.

use thiserror::Error;

use crate::domain::value_objects::{ChangeEvent, InvalidWatchTarget, WatchTarget};

/// Callback invoked once per normalized change.
pub type EventHandler = Box<dyn Fn(ChangeEvent) + Send + Sync + 'static>;

/// Watch subscription errors
#[derive(Debug, Error)]
pub enum WatchError {
    /// Programming-contract violation: the target is empty or malformed
    #[error("invalid watch target: {0}")]
    InvalidTarget(#[from] InvalidWatchTarget),

    /// The host could not start watching
    #[error("failed to watch '{target}': {message}")]
    Backend { target: String, message: String },
}

/// A live subscription inside the host
pub trait WatchHandle: Send {
    /// Stop delivering events. Called at most once by the owner.
    fn release(&mut self);
}

/// Abstract file-system watch service
///
/// Implementations:
/// - `NotifyWatchService` - OS notifications via the `notify` crate
/// - `MemoryWatchService` - manual event injection for tests
pub trait WatchService: Send + Sync {
    /// Start listening immediately; there is no separate start step.
    fn watch(
        &self,
        target: &WatchTarget,
        handler: EventHandler,
    ) -> Result<Box<dyn WatchHandle>, WatchError>;
}
