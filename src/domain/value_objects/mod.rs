//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod change;
mod invocation;
mod log_entry;
mod overlap;
mod phase;
mod watch_target;

pub use change::{ChangeEvent, ChangeKind};
pub use invocation::{CompileInvocation, CompileOutcome};
pub use log_entry::CompileLogEntry;
pub use overlap::OverlapPolicy;
pub use phase::{CompilePhase, Indicator, Tone};
pub use watch_target::{GlobPattern, InvalidWatchTarget, WatchTarget};
