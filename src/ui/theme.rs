use crossterm::style::Color;

use tsauto::domain::value_objects::Tone;

/// Design tokens for the tsauto terminal UI.
///
/// Design constraints:
/// - Indicator colors come from `Tone` only (`tone_color`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// Indicator: idle / watching
    pub const NORMAL: Color = Color::White;
    /// Indicator: compiling
    pub const BUSY: Color = Color::Cyan;
    /// Indicator: last compile failed
    pub const ATTENTION: Color = Color::Red;
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Normal => colors::NORMAL,
        Tone::Busy => colors::BUSY,
        Tone::Attention => colors::ATTENTION,
    }
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const INFO: &str = "ℹ";
    pub const MESSAGE: &str = "›";
    pub const WATCH: &str = "⟳";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const INFO: &str = "[i]";
    pub const MESSAGE: &str = ">";
    pub const WATCH: &str = "[~]";
}

pub mod borders {
    pub const VERTICAL: &str = "│";
    pub const HORIZONTAL: &str = "─";
}

pub mod borders_ascii {
    pub const VERTICAL: &str = "|";
    pub const HORIZONTAL: &str = "-";
}
