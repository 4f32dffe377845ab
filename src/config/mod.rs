//! Configuration module for tsauto
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TSAUTO_*)
//! 3. Project config (<root>/.tsauto.toml)
//! 4. User config (<config_dir>/tsauto/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Files are not merged: the first one found supplies every value.

mod loader;
mod types;

pub use loader::{
    parse_with_warnings, resolve, user_config_path, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, CompilerConfig, Config, OutputConfig, WatchConfig};
