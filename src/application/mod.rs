//! Application Layer
//!
//! Use cases that drive the compile loop.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Never touches the file system, processes or the terminal directly
//! - Coordinates between Infrastructure and Domain
//!
//! ## Components
//!
//! - `Subscription` - one live watch on an exact file or a glob
//! - `ConfigResolver` - tracks the active `tsconfig.json`
//! - `StatusReporter` - renders state to the four status surfaces
//! - `CompilationOrchestrator` - the event loop tying it all together

pub mod config_resolver;
pub mod orchestrator;
pub mod status;
pub mod watcher;

pub use config_resolver::{ConfigAction, ConfigResolver, ConfigState};
pub use orchestrator::{
    CompilationOrchestrator, CompileReport, OrchestratorMessage, OrchestratorOptions, Origin,
    DEFAULT_SOURCES, PROJECT_FILE, SOURCE_EXTENSION,
};
pub use status::{StatusReporter, Surfaces};
pub use watcher::Subscription;
