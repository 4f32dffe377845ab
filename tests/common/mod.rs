//! Common test utilities for tsauto CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus CLI helpers
//! - `Pipeline`: an orchestrator over in-memory ports
//! - Fixtures: reusable file contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod pipeline;

pub use env::*;
pub use fixtures::*;
pub use pipeline::*;
