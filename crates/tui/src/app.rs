//! Application state and logic for the shade generator TUI.
//!
//! [`App::update`] is the only place state changes. It consumes a [`Msg`] and
//! answers with the [`Effect`]s the runtime must perform (clipboard writes,
//! toast timers, terminal restyling). Nothing in here touches the terminal or
//! the clipboard directly, which keeps the whole controller testable.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use shadegen_engine::{
    Direction, HexColor, PaletteConfig, PaletteResult, Tile, build_palette, normalize_hex, random_hex,
    sanitize_hex_input,
};
use shadegen_types::{ClipboardOutcome, Effect, Focus, Msg, ToastId};
use shadegen_util::ShadegenConfig;

use crate::ui::components::common::TextInputState;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(2000);

pub const CLIPBOARD_UNAVAILABLE_MESSAGE: &str = "Clipboard access is unavailable on this system.";
pub const COPY_FAILED_MESSAGE: &str = "Copy failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification. Only one is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

/// Which tile keyboard navigation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub direction: Direction,
    pub index: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            direction: Direction::Lighter,
            index: 0,
        }
    }
}

pub struct App {
    /// The active base color; always canonical.
    color: HexColor,
    config: PaletteConfig,
    /// Recomputed wholesale whenever `color` changes.
    palette: PaletteResult,
    /// Text currently shown in the hex field (masked, possibly incomplete).
    pub hex_input: TextInputState,
    pub focus: Focus,
    pub selection: Selection,
    toast: Option<Toast>,
    /// Hex of the most recent successful copy, shown as "Copied" on its tile.
    copied: Option<HexColor>,
    next_toast_id: ToastId,
    rng: StdRng,
}

impl App {
    pub fn new(config: &ShadegenConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Builds an app with a caller-supplied generator for [`Msg::RandomColor`].
    pub fn with_rng(config: &ShadegenConfig, rng: StdRng) -> Self {
        Self {
            color: config.base_color,
            config: config.palette,
            palette: build_palette(config.base_color, &config.palette),
            hex_input: TextInputState::with_text(config.base_color.to_string()),
            focus: Focus::default(),
            selection: Selection::default(),
            toast: None,
            copied: None,
            next_toast_id: 1,
            rng,
        }
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    pub fn palette(&self) -> &PaletteResult {
        &self.palette
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn copied(&self) -> Option<HexColor> {
        self.copied
    }

    /// Whether `tile` should carry the "Copied" marker.
    pub fn is_copied(&self, tile: &Tile) -> bool {
        self.copied() == Some(tile.hex)
    }

    pub fn selected_tile(&self) -> Option<&Tile> {
        self.palette.tiles(self.selection.direction).get(self.selection.index)
    }

    /// Whether something on screen is waiting on a timer.
    pub fn is_animating(&self) -> bool {
        self.toast.is_some()
    }

    /// Applies `msg` and returns the side effects it requests.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::HexInputChar(c) => {
                self.hex_input.insert_char(*c);
                self.commit_hex_input()
            }
            Msg::HexInputBackspace => {
                self.hex_input.backspace();
                self.commit_hex_input()
            }
            Msg::HexInputClear => {
                self.hex_input.clear();
                Vec::new()
            }
            Msg::HexInputMoveCursor(delta) => {
                for _ in 0..delta.unsigned_abs() {
                    if *delta < 0 {
                        self.hex_input.move_left();
                    } else {
                        self.hex_input.move_right();
                    }
                }
                Vec::new()
            }
            Msg::HexInputBlur => {
                self.reset_hex_input();
                self.focus = Focus::Palette;
                Vec::new()
            }
            Msg::PickColor(hex) => self.set_color(*hex),
            Msg::RandomColor => {
                let hex = random_hex(&mut self.rng);
                self.set_color(hex)
            }
            Msg::MoveSelection(delta) => {
                let len = self.palette.tiles(self.selection.direction).len();
                let target = self.selection.index.saturating_add_signed(*delta);
                self.selection.index = target.min(len.saturating_sub(1));
                Vec::new()
            }
            Msg::SwitchRow => {
                self.selection.direction = self.selection.direction.opposite();
                self.clamp_selection();
                Vec::new()
            }
            Msg::FocusNext => {
                if self.focus == Focus::HexInput {
                    self.reset_hex_input();
                }
                self.focus = self.focus.next();
                Vec::new()
            }
            Msg::CopySelected => match self.selected_tile() {
                Some(tile) => vec![Effect::CopyToClipboardRequested(tile.hex)],
                None => Vec::new(),
            },
            Msg::CopyTile(direction, index) => {
                let Some(tile) = self.palette.tiles(*direction).get(*index) else {
                    return Vec::new();
                };
                let hex = tile.hex;
                self.selection = Selection {
                    direction: *direction,
                    index: *index,
                };
                vec![Effect::CopyToClipboardRequested(hex)]
            }
            Msg::ClipboardCompleted { hex, outcome } => self.finish_copy(*hex, outcome),
            Msg::ToastExpired(id) => {
                if self.toast.as_ref().is_some_and(|toast| toast.id == *id) {
                    self.dismiss_toast();
                }
                Vec::new()
            }
            Msg::DismissToast => {
                self.dismiss_toast();
                Vec::new()
            }
            Msg::Tick | Msg::Resize(..) => Vec::new(),
        }
    }

    /// Masks the field text and adopts it once it holds a full color.
    fn commit_hex_input(&mut self) -> Vec<Effect> {
        let raw = self.hex_input.input();
        let digits_before_cursor = raw[..self.hex_input.cursor()]
            .chars()
            .filter(char::is_ascii_hexdigit)
            .count()
            .min(6);
        let masked = sanitize_hex_input(raw);
        let cursor = if masked.is_empty() { 0 } else { 1 + digits_before_cursor };
        self.hex_input.replace(masked);
        self.hex_input.set_cursor(cursor);

        match normalize_hex(self.hex_input.input()) {
            Some(hex) => self.set_color(hex),
            None => Vec::new(),
        }
    }

    fn set_color(&mut self, hex: HexColor) -> Vec<Effect> {
        if hex == self.color {
            return Vec::new();
        }
        tracing::debug!(from = %self.color, to = %hex, "base color changed");
        self.color = hex;
        self.palette = build_palette(hex, &self.config);
        self.reset_hex_input();
        self.dismiss_toast();
        self.clamp_selection();
        vec![Effect::BaseColorChanged(hex)]
    }

    fn reset_hex_input(&mut self) {
        self.hex_input.replace(self.color.to_string());
    }

    fn clamp_selection(&mut self) {
        let len = self.palette.tiles(self.selection.direction).len();
        self.selection.index = self.selection.index.min(len.saturating_sub(1));
    }

    fn finish_copy(&mut self, hex: HexColor, outcome: &ClipboardOutcome) -> Vec<Effect> {
        let (message, kind) = match outcome {
            ClipboardOutcome::Copied => {
                self.copied = Some(hex);
                (format!("{hex} copied to clipboard"), ToastKind::Success)
            }
            ClipboardOutcome::Unavailable(reason) => {
                tracing::warn!(%hex, reason, "clipboard unavailable");
                (CLIPBOARD_UNAVAILABLE_MESSAGE.to_string(), ToastKind::Error)
            }
            ClipboardOutcome::Failed(reason) => {
                tracing::warn!(%hex, reason, "copy failed");
                (COPY_FAILED_MESSAGE.to_string(), ToastKind::Error)
            }
        };
        vec![self.show_toast(message, kind)]
    }

    /// Replaces any visible toast and schedules its expiry.
    fn show_toast(&mut self, message: String, kind: ToastKind) -> Effect {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toast = Some(Toast { id, message, kind });
        Effect::ToastScheduled {
            id,
            after: TOAST_DURATION,
        }
    }

    fn dismiss_toast(&mut self) {
        self.toast = None;
        self.copied = None;
    }
}
