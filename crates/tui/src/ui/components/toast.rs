//! Transient status line for clipboard results.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::component::Component;
use crate::app::{App, ToastKind};
use crate::theme;

#[derive(Debug, Default)]
pub struct ToastComponent;

impl Component for ToastComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let Some(toast) = app.toast() else {
            return;
        };
        let color = match toast.kind {
            ToastKind::Success => theme::SUCCESS,
            ToastKind::Error => theme::WARN,
        };
        let line = Line::from(Span::styled(
            format!(" {} ", toast.message),
            Style::default().fg(color).bg(theme::BG_PANEL),
        ));
        frame.render_widget(Paragraph::new(line), rect);
    }
}
