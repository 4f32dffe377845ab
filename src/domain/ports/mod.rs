//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer: everything the
//! orchestrator needs from its host. Infrastructure provides the concrete
//! implementations (notify watcher, shell runner, terminal surfaces).

pub mod process_runner;
pub mod surfaces;
pub mod watch_service;
pub mod workspace;

pub use process_runner::{ProcessError, ProcessOutput, ProcessRunner};
pub use surfaces::{IndicatorSurface, LogSurface, MessageSurface, NotificationSurface};
pub use watch_service::{EventHandler, WatchError, WatchHandle, WatchService};
pub use workspace::Workspace;
