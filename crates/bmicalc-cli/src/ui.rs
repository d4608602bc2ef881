//! UI helpers for CLI display.

use console::{Color, Style};

use bmicalc_core::color::ColorToken;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Resolve an abstract color token to a terminal style.
///
/// Tokens without a named ANSI color map to the nearest 256-color
/// palette entry.
#[must_use]
pub fn token_style(token: ColorToken) -> Style {
    let style = Style::new().bold();
    match token {
        ColorToken::LightOrange => style.fg(Color::Color256(215)),
        ColorToken::Green => style.green(),
        ColorToken::DarkYellow => style.fg(Color::Color256(178)),
        ColorToken::OrangeRed => style.fg(Color::Color256(202)),
        ColorToken::Red => style.red(),
        ColorToken::DarkRed => style.fg(Color::Color256(88)),
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", console::style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_check_does_not_panic() {
        let _ = is_color_disabled();
    }

    #[test]
    fn token_styles_cover_all_tokens() {
        for token in [
            ColorToken::LightOrange,
            ColorToken::Green,
            ColorToken::DarkYellow,
            ColorToken::OrangeRed,
            ColorToken::Red,
            ColorToken::DarkRed,
        ] {
            // Applying the style must not panic.
            let _ = token_style(token).apply_to("label").to_string();
        }
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("Something went wrong");
    }

    #[test]
    fn print_error_empty_string() {
        print_error("");
    }

    #[test]
    fn print_error_with_unicode() {
        print_error("Valeur inattendue \u{2192} r\u{00e9}essayer");
    }
}
