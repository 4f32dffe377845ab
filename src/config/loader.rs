//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::OverlapPolicy;
use crate::error::{TsautoError, TsautoResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the workspace root
pub const PROJECT_CONFIG_FILE: &str = ".tsauto.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Resolved configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the values were read from; `None` when running on defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TsautoResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text. `path` is only used for error and warning messages.
pub fn parse_with_warnings(content: &str, path: &Path) -> TsautoResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TsautoError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// `<config_dir>/tsauto/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tsauto").join("config.toml"))
}

/// Project file, else user file, else defaults; then env overrides via `env`.
pub fn resolve<E>(root: &Path, user_config: Option<&Path>, env: E) -> TsautoResult<LoadedConfig>
where
    E: Fn(&str) -> Option<String>,
{
    let project_config = root.join(PROJECT_CONFIG_FILE);
    let candidates = std::iter::once(project_config.as_path()).chain(user_config);

    let mut loaded = LoadedConfig::default();
    for candidate in candidates {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(candidate)?;
            tracing::debug!(file = %candidate.display(), "loaded config");
            loaded = LoadedConfig {
                config,
                source: Some(candidate.to_path_buf()),
                warnings,
            };
            break;
        }
    }

    loaded.config = with_env_overrides(loaded.config, env);
    Ok(loaded)
}

/// Apply environment variable overrides (TSAUTO_* prefix)
pub fn with_env_overrides<E>(mut config: Config, env: E) -> Config
where
    E: Fn(&str) -> Option<String>,
{
    // TSAUTO_COMPILER
    if let Some(command) = env("TSAUTO_COMPILER").filter(|c| !c.trim().is_empty()) {
        config.compiler.command = command.trim().to_string();
    }

    // TSAUTO_OVERLAP
    if let Some(value) = env("TSAUTO_OVERLAP") {
        match OverlapPolicy::parse(&value) {
            Some(policy) => config.watch.overlap = policy,
            None => tracing::warn!(value = %value, "ignoring invalid TSAUTO_OVERLAP"),
        }
    }

    // TSAUTO_TRANSIENT_MS
    if let Some(value) = env("TSAUTO_TRANSIENT_MS") {
        match value.trim().parse::<u64>() {
            Ok(ms) => config.output.transient_ms = ms,
            Err(_) => tracing::warn!(value = %value, "ignoring invalid TSAUTO_TRANSIENT_MS"),
        }
    }

    // TSAUTO_COLOR
    if let Some(value) = env("TSAUTO_COLOR") {
        match ColorMode::parse(&value) {
            Some(mode) => config.output.color = mode,
            None => tracing::warn!(value = %value, "ignoring invalid TSAUTO_COLOR"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "compiler",
        "command",
        "watch",
        "sources",
        "exclude",
        "overlap",
        "output",
        "transient_ms",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
