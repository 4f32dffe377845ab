use tsauto::config::{ConfigWarning, LoadedConfig};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;

pub fn render_config_report(
    root: &str,
    loaded: &LoadedConfig,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let config = &loaded.config;
    let mut header = CommandHeader::new(Icon::Info, "tsauto config");
    header.add("Root", root);
    header.add(
        "Source",
        loaded
            .source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(defaults)".to_string()),
    );
    header.add("Compiler", config.compiler.command.as_str());
    header.add("Sources", config.watch.sources.as_str());
    header.add("Exclude", config.watch.exclude.join(", "));
    header.add("Overlap", config.watch.overlap.to_string());
    header.add("Transient", format!("{}ms", config.output.transient_ms));
    header.add("Color", format!("{:?}", config.output.color).to_lowercase());
    header.add("Unicode", config.output.unicode.to_string());

    let mut out = header.render(supports_color, supports_unicode);
    let warnings = render_config_warnings(&loaded.warnings, supports_color, supports_unicode);
    if !warnings.is_empty() {
        out.push('\n');
        out.push_str(&warnings);
    }
    out
}

/// Empty string when there is nothing to report
pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = WarningBlock::new("Config warnings");
    for warning in warnings {
        block.add_line(warning.to_string());
    }
    if block.is_empty() {
        return String::new();
    }
    block.render(supports_color, supports_unicode)
}
