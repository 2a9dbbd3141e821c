//! Top-level view: lays out every component and routes input to them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use shadegen_engine::Direction;
use shadegen_types::{Effect, Focus, Msg};

use super::components::{
    Component, ControlsComponent, HeaderComponent, HintBarComponent, ShadeRowComponent, ToastComponent,
};
use crate::app::App;

/// Whether `key` should end the session regardless of focus.
///
/// `q` is never a hex digit, so it can quit even while the field is focused.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') => !key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[derive(Debug)]
pub struct MainView {
    header: HeaderComponent,
    controls: ControlsComponent,
    lighter: ShadeRowComponent,
    darker: ShadeRowComponent,
    hints: HintBarComponent,
    toast: ToastComponent,
}

impl Default for MainView {
    fn default() -> Self {
        Self::new()
    }
}

impl MainView {
    pub fn new() -> Self {
        Self {
            header: HeaderComponent,
            controls: ControlsComponent::default(),
            lighter: ShadeRowComponent::new(Direction::Lighter),
            darker: ShadeRowComponent::new(Direction::Darker),
            hints: HintBarComponent,
            toast: ToastComponent,
        }
    }

    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let plain = !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => return self.handle_message(app, Msg::FocusNext),
            KeyCode::Char('r') | KeyCode::Char('R') if plain => return self.handle_message(app, Msg::RandomColor),
            _ => {}
        }
        match app.focus {
            Focus::HexInput => self.controls.handle_key_events(app, key),
            Focus::Palette => match palette_message(key) {
                Some(msg) => self.handle_message(app, msg),
                None => Vec::new(),
            },
        }
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = self.lighter.handle_mouse_events(app, mouse);
        effects.extend(self.darker.handle_mouse_events(app, mouse));
        effects.extend(self.controls.handle_mouse_events(app, mouse));
        effects
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let [header, controls, lighter, darker, hints, toast] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.header.render(frame, header, app);
        self.controls.render(frame, controls, app);
        self.lighter.render(frame, lighter, app);
        self.darker.render(frame, darker, app);
        self.hints.render(frame, hints, app);
        self.toast.render(frame, toast, app);
    }
}

fn palette_message(key: KeyEvent) -> Option<Msg> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Msg::MoveSelection(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Msg::MoveSelection(1)),
        KeyCode::Home => Some(Msg::MoveSelection(isize::MIN)),
        KeyCode::End => Some(Msg::MoveSelection(isize::MAX)),
        KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => Some(Msg::SwitchRow),
        KeyCode::Enter | KeyCode::Char('c') => Some(Msg::CopySelected),
        KeyCode::Esc => Some(Msg::DismissToast),
        _ => None,
    }
}
