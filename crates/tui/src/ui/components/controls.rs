//! Base color controls: the masked hex field and a live swatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use shadegen_types::{Effect, Focus, Msg};
use unicode_width::UnicodeWidthStr;

use super::component::{Component, contains};
use crate::app::App;
use crate::theme;

const FIELD_LABEL: &str = "Hex ";
const SWATCH: &str = "        ";

#[derive(Debug, Default)]
pub struct ControlsComponent {
    area: Rect,
}

impl ControlsComponent {
    fn message_for_key(key: KeyEvent) -> Option<Msg> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => Some(Msg::HexInputClear),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => Some(Msg::HexInputChar(c)),
            KeyCode::Backspace => Some(Msg::HexInputBackspace),
            KeyCode::Left => Some(Msg::HexInputMoveCursor(-1)),
            KeyCode::Right => Some(Msg::HexInputMoveCursor(1)),
            KeyCode::Esc => Some(Msg::HexInputBlur),
            KeyCode::Enter | KeyCode::Down => Some(Msg::FocusNext),
            _ => None,
        }
    }
}

impl Component for ControlsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match Self::message_for_key(key) {
            Some(msg) => self.handle_message(app, msg),
            None => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
        if clicked && app.focus != Focus::HexInput && contains(self.area, mouse.column, mouse.row) {
            return self.handle_message(app, Msg::FocusNext);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        self.area = rect;
        let focused = app.focus == Focus::HexInput;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused))
            .title(Span::styled(" Base color ", theme::title_style()));
        let inner = block.inner(rect);

        let palette = app.palette();
        let line = Line::from(vec![
            Span::styled(FIELD_LABEL, theme::text_muted()),
            Span::styled(format!("{:<7}", app.hex_input.input()), theme::text_style()),
            Span::raw("  "),
            Span::styled(SWATCH, theme::swatch_style(app.color(), app.color())),
            Span::raw("  "),
            Span::styled(
                format!(
                    "{} lighter / {} darker",
                    palette.lighter_tiles.len(),
                    palette.darker_tiles.len()
                ),
                theme::text_muted(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), rect);

        if focused && inner.height > 0 {
            let offset = FIELD_LABEL.width() + app.hex_input.cursor_column();
            let x = inner.x.saturating_add(offset as u16).min(inner.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}
