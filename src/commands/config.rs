use std::path::Path;

use anyhow::Result;
use serde_json::json;
use tsauto::config::{ColorMode, Config};

use super::project_root::resolve_root;
use crate::ui::context::UiContext;
use crate::ui::views::config::render_config_report;

pub fn cmd_config(root: Option<&Path>, json: bool, color: Option<ColorMode>) -> Result<()> {
    let root = resolve_root(root)?;
    let loaded = Config::resolve(&root)?;

    if json {
        let output = json!({
            "event": "config",
            "root": root.display().to_string(),
            "source": loaded.source.as_ref().map(|p| p.display().to_string()),
            "config": loaded.config,
            "warnings": loaded.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    let ui = UiContext::new(false, 0, color, &loaded.config);
    print!(
        "{}",
        render_config_report(&root.display().to_string(), &loaded, ui.color, ui.unicode)
    );
    Ok(())
}
