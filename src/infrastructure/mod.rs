//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `watch` - notify-backed `WatchService`
//! - `process` - shell `ProcessRunner`
//! - `workspace` - directory walker for config discovery
//! - `surfaces/` - JSON and file-log status surfaces
//! - `memory` - in-memory adapters for tests and fuzzing

pub mod exclude;
pub mod memory;
pub mod process;
pub mod surfaces;
pub mod watch;
pub mod workspace;

// Re-export for convenience
pub use exclude::{ExcludeSet, DEFAULT_EXCLUDES};
pub use process::ShellProcessRunner;
pub use surfaces::{FileLogSurface, JsonSurface};
pub use watch::NotifyWatchService;
pub use workspace::FsWorkspace;
