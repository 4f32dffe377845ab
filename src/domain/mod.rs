//! Domain Layer
//!
//! The vocabulary of the auto compiler, free of I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (ChangeEvent, WatchTarget, CompilePhase, CompileInvocation)
//! - `ports/` - Interface definitions for the host collaborators (watching, processes, surfaces)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod value_objects;
