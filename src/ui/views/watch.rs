use tsauto::domain::value_objects::{Indicator, Tone};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

pub struct WatchHeader<'a> {
    pub root: &'a str,
    pub sources: &'a str,
    pub compiler: &'a str,
    pub overlap: &'a str,
    /// Tool config file in effect, if any
    pub settings: Option<&'a str>,
}

pub fn render_watch_header(
    header: &WatchHeader<'_>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = CommandHeader::new(Icon::Watch, "tsauto watch");
    block.add("Root", header.root);
    block.add("Sources", header.sources);
    block.add("Compiler", header.compiler);
    block.add("Overlap", header.overlap);
    if let Some(settings) = header.settings {
        block.add("Settings", settings);
    }
    block.add("Hint", "Press Ctrl+C to stop");
    block.render(supports_color, supports_unicode)
}

fn tone_icon(tone: Tone) -> Icon {
    match tone {
        Tone::Normal => Icon::Watch,
        Tone::Busy => Icon::Progress,
        Tone::Attention => Icon::Error,
    }
}

pub fn render_indicator(
    clock: &str,
    indicator: &Indicator,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "[{}] {} {}  {}\n",
        clock,
        tone_icon(indicator.tone).colored(supports_color, supports_unicode),
        ColoredText::tone(indicator.text.as_str(), indicator.tone)
            .bold()
            .render(supports_color),
        ColoredText::dim(indicator.detail.as_str()).render(supports_color)
    )
}

pub fn render_log_divider(supports_color: bool, supports_unicode: bool) -> String {
    let rule = if supports_unicode {
        theme::borders::HORIZONTAL
    } else {
        theme::borders_ascii::HORIZONTAL
    }
    .repeat(2);
    format!(
        "{}\n",
        ColoredText::dim(format!("{} compile log {}", rule, rule)).render(supports_color)
    )
}

pub fn render_log_line(
    clock: &str,
    text: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if text.is_empty() {
        return "\n".to_string();
    }
    let bar = if supports_unicode {
        theme::borders::VERTICAL
    } else {
        theme::borders_ascii::VERTICAL
    };
    format!(
        "  {} {} {}\n",
        ColoredText::dim(clock).render(supports_color),
        ColoredText::dim(bar).render(supports_color),
        text
    )
}

pub fn render_message(text: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "  {} {}\n",
        Icon::Message.colored(supports_color, supports_unicode),
        ColoredText::dim(text).render(supports_color)
    )
}

pub fn render_notification(text: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Info.colored(supports_color, supports_unicode),
        text
    )
}

pub fn render_stopped(clock: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "\n[{}] {} Watch stopped.\n",
        clock,
        Icon::Watch.colored(supports_color, supports_unicode)
    )
}
