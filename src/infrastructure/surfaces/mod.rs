//! Status surface implementations
//!
//! - JsonSurface: NDJSON output for editors and automation
//! - FileLogSurface: append-only log file
//!
//! The interactive terminal surfaces live in the binary's `ui` module.

mod file_log;
mod json;

pub use file_log::FileLogSurface;
pub use json::JsonSurface;
