//! Theme and styling for the shade generator TUI.
//!
//! Chrome colors are fixed; swatch colors come from the palette itself via
//! [`swatch_color`].

use ratatui::style::{Color, Modifier, Style};
use shadegen_engine::HexColor;

/// Accent used for focus indicators and key names in hints.
pub const ACCENT: Color = Color::Rgb(8, 171, 237);

/// Primary foreground color for normal text.
pub const FG: Color = Color::Rgb(224, 224, 230);

/// Muted foreground for hints, subtitles and labels.
pub const FG_MUTED: Color = Color::Rgb(168, 168, 175);

/// Border of unfocused panels.
pub const BORDER: Color = Color::Rgb(72, 72, 80);

/// Border of the focused panel.
pub const BORDER_FOCUS: Color = ACCENT;

/// Background for panels and the toast line.
pub const BG_PANEL: Color = Color::Rgb(18, 18, 24);

/// Toast foreground after a successful copy.
pub const SUCCESS: Color = Color::Rgb(110, 200, 130);

/// Toast foreground for clipboard failures.
pub const WARN: Color = Color::Rgb(220, 96, 110);

/// Terminal color for a palette entry.
pub fn swatch_color(hex: HexColor) -> Color {
    let [r, g, b] = hex.rgb().channels();
    Color::Rgb(r, g, b)
}

/// Style for a swatch: its own color as background, the chosen ink on top.
pub fn swatch_style(background: HexColor, ink: HexColor) -> Style {
    Style::default().bg(swatch_color(background)).fg(swatch_color(ink))
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUS)
    } else {
        Style::default().fg(BORDER)
    }
}

/// Titles and headers.
pub fn title_style() -> Style {
    Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD)
}

pub fn text_style() -> Style {
    Style::default().fg(FG)
}

pub fn text_muted() -> Style {
    Style::default().fg(FG_MUTED)
}

/// Key names inside the hint bar.
pub fn key_style() -> Style {
    title_style().fg(ACCENT)
}

/// Marks the selected tile without hiding its swatch color.
pub fn selected_modifier() -> Modifier {
    Modifier::BOLD | Modifier::UNDERLINED
}
