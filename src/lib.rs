//! tsauto - watch-triggered TypeScript compilation
//!
//! tsauto watches a workspace and re-runs the TypeScript compiler whenever a
//! `.ts` source or a `tsconfig.json` changes. When a `tsconfig.json` exists
//! the whole project is built with `tsc -p`; otherwise each changed file is
//! compiled on its own. State is reported through four surfaces: a status
//! indicator, a durable log, transient messages and notifications.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    CompilationOrchestrator, ConfigResolver, ConfigState, OrchestratorOptions, StatusReporter,
    Subscription, Surfaces,
};
pub use config::{ColorMode, Config, ConfigWarning, LoadedConfig};
pub use domain::value_objects::{
    ChangeEvent, ChangeKind, CompileInvocation, CompileOutcome, CompilePhase, OverlapPolicy,
    WatchTarget,
};
pub use error::{TsautoError, TsautoResult};
