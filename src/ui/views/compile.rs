use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_compile_header(
    root: &str,
    target: &str,
    compiler: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Progress, "tsauto compile");
    header.add("Root", root);
    header.add("Target", target);
    header.add("Compiler", compiler);
    header.render(supports_color, supports_unicode)
}

pub fn render_compile_result(
    success: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if success {
        format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::plain("Compilation succeeded").bold().render(supports_color)
        )
    } else {
        format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("Compilation failed").bold().render(supports_color)
        )
    }
}
