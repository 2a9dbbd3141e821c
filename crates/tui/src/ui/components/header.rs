//! Title strip with a swatch tinted by the active color.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use shadegen_engine::readable_text_color;

use super::component::Component;
use crate::app::App;
use crate::theme;

pub const TITLE: &str = "Color Shade Generator";
pub const SUBTITLE: &str = "Pick a base color, then copy any lighter or darker shade.";

#[derive(Debug, Default)]
pub struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let color = app.color();
        let ink = readable_text_color(color.rgb());
        let title = Line::from(vec![
            Span::styled(format!(" {color} "), theme::swatch_style(color, ink)),
            Span::raw(" "),
            Span::styled(TITLE, theme::title_style().fg(theme::FG)),
        ]);
        let subtitle = Line::from(Span::styled(SUBTITLE, theme::text_muted()));
        frame.render_widget(Paragraph::new(vec![title, subtitle]), rect);
    }
}
