//! Shared vocabulary between the shade generator's controller and its shells.
//!
//! The terminal UI reduces user input to [`Msg`]s, the controller answers with
//! [`Effect`]s, and the imperative shell performs those effects and feeds the
//! results back as new messages.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shadegen_engine::{Direction, HexColor};

/// Result of asking the system clipboard to store text.
///
/// Unavailability (no clipboard on this system) and a failed write are kept
/// apart so the user sees which one happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum ClipboardOutcome {
    /// The text is on the clipboard.
    Copied,
    /// No clipboard could be opened.
    Unavailable(String),
    /// A clipboard exists but the write failed.
    Failed(String),
}

impl ClipboardOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, ClipboardOutcome::Copied)
    }
}

impl fmt::Display for ClipboardOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardOutcome::Copied => f.write_str("copied"),
            ClipboardOutcome::Unavailable(reason) => write!(f, "clipboard unavailable: {reason}"),
            ClipboardOutcome::Failed(reason) => write!(f, "clipboard write failed: {reason}"),
        }
    }
}

/// Identifies a scheduled toast so stale timers can be ignored.
pub type ToastId = u64;

/// Which area receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The hex text field.
    #[default]
    HexInput,
    /// The swatch rows.
    Palette,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::HexInput => Focus::Palette,
            Focus::Palette => Focus::HexInput,
        }
    }
}

/// Messages that can be sent to update the application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Type a character into the hex field.
    HexInputChar(char),
    /// Remove the character before the cursor in the hex field.
    HexInputBackspace,
    /// Clear the hex field.
    HexInputClear,
    /// Move the hex field cursor by the given number of chars.
    HexInputMoveCursor(isize),
    /// Leave the hex field; its text snaps back to the active color.
    HexInputBlur,
    /// Adopt a color chosen outside the text field.
    PickColor(HexColor),
    /// Adopt a randomly generated color.
    RandomColor,
    /// Move the palette selection within the current row.
    MoveSelection(isize),
    /// Switch the palette selection between the lighter and darker rows.
    SwitchRow,
    /// Cycle keyboard focus.
    FocusNext,
    /// Copy the selected tile.
    CopySelected,
    /// Copy a specific tile (e.g. from a mouse click).
    CopyTile(Direction, usize),
    /// A clipboard write finished.
    ClipboardCompleted { hex: HexColor, outcome: ClipboardOutcome },
    /// The timer for a toast elapsed.
    ToastExpired(ToastId),
    /// Hide the toast immediately.
    DismissToast,
    /// Periodic UI tick.
    Tick,
    /// Terminal resized.
    Resize(u16, u16),
}

/// Side effects requested by state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write a tile's hex code to the clipboard.
    CopyToClipboardRequested(HexColor),
    /// The active base color changed; shells may restyle their surroundings.
    BaseColorChanged(HexColor),
    /// Start (or restart) the timer that hides toast `id` after `after`.
    ToastScheduled { id: ToastId, after: Duration },
}
