// Theme system for the TUI
//
// A theme is a small set of resolved colors; selection happens once at
// startup from the config value. Unknown names fall back to the default
// dark theme rather than failing.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Text Colors ─────────────────────────────────────────
    pub foreground: Color,
    pub muted: Color,
    pub title: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub border: Color,
    pub highlight: Color, // focused/selected accent
    pub status_bar: Color,

    // ─── Outcome Colors ──────────────────────────────────────
    pub success: Color,
    pub error: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Resolve a theme by its configured name.
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "deck dark" | "deck_dark" | "dark" => Self::deck_dark(),
            "deck light" | "deck_light" | "light" => Self::deck_light(),
            "terminal" | "terminal ansi" | "terminal_ansi" => Self::terminal_ansi(),
            other => {
                tracing::debug!("Unknown theme {:?}, using default", other);
                Self::deck_dark()
            }
        }
    }

    /// Default dark theme
    pub fn deck_dark() -> Self {
        Self {
            name: "Deck Dark",
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            muted: Color::Rgb(0x6b, 0x72, 0x80),
            title: Color::Rgb(0x88, 0xc0, 0xd0),
            border: Color::Rgb(0x4c, 0x56, 0x6a),
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),
            status_bar: Color::Rgb(0x81, 0xa1, 0xc1),
            success: Color::Rgb(0xa3, 0xbe, 0x8c),
            error: Color::Rgb(0xbf, 0x61, 0x6a),
            border_type: BorderType::Rounded,
        }
    }

    /// Light variant for bright terminals
    pub fn deck_light() -> Self {
        Self {
            name: "Deck Light",
            foreground: Color::Rgb(0x2e, 0x34, 0x40),
            muted: Color::Rgb(0x7a, 0x82, 0x8e),
            title: Color::Rgb(0x1d, 0x5d, 0x86),
            border: Color::Rgb(0xb5, 0xbd, 0xc9),
            highlight: Color::Rgb(0xb3, 0x6d, 0x1d),
            status_bar: Color::Rgb(0x3b, 0x65, 0x8c),
            success: Color::Rgb(0x3f, 0x72, 0x2e),
            error: Color::Rgb(0xa3, 0x2b, 0x36),
            border_type: BorderType::Rounded,
        }
    }

    /// Pure ANSI colors, inherits the terminal's own palette
    pub fn terminal_ansi() -> Self {
        Self {
            name: "Terminal ANSI",
            foreground: Color::Reset,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::DarkGray,
            highlight: Color::Yellow,
            status_bar: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            border_type: BorderType::Plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::deck_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("deck light").name, "Deck Light");
        assert_eq!(Theme::by_name("DECK LIGHT").name, "Deck Light");
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(Theme::by_name("no such theme").name, Theme::default().name);
    }
}
