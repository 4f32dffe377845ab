//! Command banner: icon + title, then one `Label: value` line per field.

use std::fmt::Write as _;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Banner printed before a `watch`, `compile` or `config` run
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    fields: Vec<(&'static str, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Fields render in insertion order.
    pub fn add(&mut self, label: &'static str, value: impl Into<String>) {
        self.fields.push((label, value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        );
        for (label, value) in &self.fields {
            let _ = writeln!(out, "{}: {}", label, value);
        }
        out
    }
}
