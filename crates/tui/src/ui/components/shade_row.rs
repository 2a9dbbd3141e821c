//! One row of swatch tiles (lighter or darker).
//!
//! Tiles share the row width evenly. Each tile paints its own hex as the
//! background with the contrast-selected ink on top, and remembers where it
//! was drawn so mouse clicks can copy it.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use shadegen_engine::{Direction, Tile};
use shadegen_types::{Effect, Focus, Msg};

use super::component::{Component, contains};
use crate::app::App;
use crate::theme;

pub const COPIED_MARKER: &str = "Copied";

#[derive(Debug)]
pub struct ShadeRowComponent {
    direction: Direction,
    /// Where each tile was drawn last frame, indexed like the row's tiles.
    tile_areas: Vec<Rect>,
}

impl ShadeRowComponent {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            tile_areas: Vec::new(),
        }
    }

    /// Heading and subheading for this row.
    pub fn titles(&self) -> (&'static str, &'static str) {
        match self.direction {
            Direction::Lighter => ("Lighter shades", "Toward white"),
            Direction::Darker => ("Darker shades", "Toward black"),
        }
    }

    fn tile_at(&self, column: u16, row: u16) -> Option<usize> {
        self.tile_areas.iter().position(|area| contains(*area, column, row))
    }

    fn tile_lines(tile: &Tile, copied: bool) -> Vec<Line<'static>> {
        let marker = if copied { COPIED_MARKER } else { "" };
        vec![
            Line::from(tile.label.clone()),
            Line::from(tile.hex.to_string()),
            Line::from(marker),
        ]
    }
}

impl Component for ShadeRowComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Vec::new();
        }
        match self.tile_at(mouse.column, mouse.row) {
            Some(index) => self.handle_message(app, Msg::CopyTile(self.direction, index)),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let palette_focused = app.focus == Focus::Palette;
        let row_selected = palette_focused && app.selection.direction == self.direction;
        let (title, subtitle) = self.titles();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(row_selected))
            .title(Line::from(vec![
                Span::styled(format!(" {title} "), theme::title_style()),
                Span::styled(format!("{subtitle} "), theme::text_muted()),
            ]));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let tiles = app.palette().tiles(self.direction);
        if tiles.is_empty() || inner.is_empty() {
            self.tile_areas.clear();
            return;
        }

        let count = tiles.len() as u32;
        let areas = Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count))).split(inner);
        self.tile_areas = areas.to_vec();

        for (index, (tile, area)) in tiles.iter().zip(areas.iter()).enumerate() {
            let mut style = theme::swatch_style(tile.hex, tile.text_color);
            if row_selected && app.selection.index == index {
                style = style.add_modifier(theme::selected_modifier());
            }
            if tile.is_base() {
                style = style.add_modifier(Modifier::ITALIC);
            }
            let paragraph = Paragraph::new(Self::tile_lines(tile, app.is_copied(tile)))
                .style(style)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, *area);
        }
    }
}
