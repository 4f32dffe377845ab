//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::OverlapPolicy;
use crate::error::TsautoResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Compiler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Program invoked as `<command> <file>` or `<command> -p "<config>"`
    #[serde(default = "default_compiler")]
    pub command: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: default_compiler(),
        }
    }
}

fn default_compiler() -> String {
    "tsc".to_string()
}

/// Watch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Glob (relative to the root) whose changes trigger a compile
    #[serde(default = "default_sources")]
    pub sources: String,

    /// Globs never watched or searched
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub overlap: OverlapPolicy,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            exclude: default_exclude(),
            overlap: OverlapPolicy::default(),
        }
    }
}

fn default_sources() -> String {
    crate::application::DEFAULT_SOURCES.to_string()
}

fn default_exclude() -> Vec<String> {
    crate::infrastructure::DEFAULT_EXCLUDES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// How long transient status messages stay up
    #[serde(default = "default_transient_ms")]
    pub transient_ms: u64,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            transient_ms: default_transient_ms(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_transient_ms() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TsautoResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TsautoResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project file, else user file, else defaults; then `TSAUTO_*` overrides.
    pub fn resolve(root: &Path) -> TsautoResult<LoadedConfig> {
        loader::resolve(root, loader::user_config_path().as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Apply environment variable overrides (TSAUTO_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    pub fn transient(&self) -> Duration {
        Duration::from_millis(self.output.transient_ms)
    }
}
