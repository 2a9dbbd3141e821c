//! Hint bar component for keyboard shortcuts.
//!
//! Renders a single line of key bindings for whichever area has focus.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use shadegen_types::Focus;

use super::component::Component;
use crate::app::App;
use crate::theme;

const FIELD_HINTS: &[(&str, &str)] = &[
    ("0-9 A-F", "type"),
    ("Ctrl-U", "clear"),
    ("Esc", "revert"),
    ("Tab", "tiles"),
    ("r", "random"),
    ("q", "quit"),
];

const PALETTE_HINTS: &[(&str, &str)] = &[
    ("←/→", "move"),
    ("↑/↓", "row"),
    ("Enter/c", "copy"),
    ("click", "copy"),
    ("Tab", "edit hex"),
    ("r", "random"),
    ("q", "quit"),
];

#[derive(Debug, Default)]
pub struct HintBarComponent;

impl HintBarComponent {
    pub fn hints(focus: Focus) -> &'static [(&'static str, &'static str)] {
        match focus {
            Focus::HexInput => FIELD_HINTS,
            Focus::Palette => PALETTE_HINTS,
        }
    }
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let mut spans = vec![Span::styled("Hints: ", theme::text_muted())];
        for (key, action) in Self::hints(app.focus) {
            spans.push(Span::styled(*key, theme::key_style()));
            spans.push(Span::styled(format!(" {action}  "), theme::text_muted()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}
