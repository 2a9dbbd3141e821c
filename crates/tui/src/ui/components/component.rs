//! Component system for the shade generator TUI.
//!
//! Components are self-contained UI elements: they translate input into
//! [`Msg`]s for the [`App`], report the resulting [`Effect`]s upward, and draw
//! themselves into the area they are given.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};
use shadegen_types::{Effect, Msg};

use crate::app::App;

/// A UI element with its own presentation state.
///
/// Components never mutate [`App`] directly; every state change goes through
/// [`App::update`] so effects are always reported.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that land anywhere on screen. Components decide
    /// for themselves whether the pointer is inside their last rendered area.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Forward an application message to the controller.
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing,
    /// cursor placement and remembering hit areas for mouse handling.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}

/// Whether a terminal cell lies inside `rect`.
pub(crate) fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(ratatui::layout::Position::new(column, row))
}
