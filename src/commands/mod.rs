//! Command handlers for the tsauto binary

pub mod compile;
pub mod config;
pub mod project_root;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tsauto::config::{ColorMode, Config, LoadedConfig};
use tsauto::infrastructure::ExcludeSet;
use tsauto::{OrchestratorOptions, OverlapPolicy};

use crate::ui::context::UiContext;
use crate::ui::views::config::render_config_warnings;

/// Everything a command needs before it builds adapters
pub(crate) struct Session {
    pub root: PathBuf,
    pub loaded: LoadedConfig,
    pub ui: UiContext,
}

impl Session {
    /// Resolve the root, load tsauto's config and report its warnings on stderr.
    pub fn load(
        root: Option<&Path>,
        json: bool,
        verbose: u8,
        color: Option<ColorMode>,
    ) -> Result<Self> {
        let root = project_root::resolve_root(root)?;
        let loaded = Config::resolve(&root)?;
        let ui = UiContext::new(json, verbose, color, &loaded.config);

        if json {
            for warning in &loaded.warnings {
                tracing::warn!("{}", warning);
            }
        } else {
            eprint!(
                "{}",
                render_config_warnings(&loaded.warnings, ui.color, ui.unicode)
            );
        }

        Ok(Self { root, loaded, ui })
    }

    pub fn config(&self) -> &Config {
        &self.loaded.config
    }

    /// Config values with CLI overrides on top
    pub fn options(&self, compiler: Option<String>, overlap: bool) -> OrchestratorOptions {
        let config = self.config();
        let overlap = if overlap {
            OverlapPolicy::Overlap
        } else {
            config.watch.overlap
        };
        OrchestratorOptions::default()
            .with_compiler(compiler.unwrap_or_else(|| config.compiler.command.clone()))
            .with_sources(config.watch.sources.clone())
            .with_overlap(overlap)
            .with_transient(config.transient())
    }

    pub fn excludes(&self) -> Result<ExcludeSet> {
        let source = self
            .loaded
            .source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string());
        ExcludeSet::new(&self.config().watch.exclude)
            .with_context(|| format!("invalid [watch] exclude glob in {}", source))
    }
}
