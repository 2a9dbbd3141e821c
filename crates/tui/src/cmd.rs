//! # Command Execution Layer
//!
//! Translates [`Effect`]s into imperative [`Cmd`]s and executes them. This is
//! the boundary where the pure controller meets the outside world:
//! - writing to the system clipboard,
//! - restyling the terminal (window title) when the base color changes.
//!
//! Toast timers are owned by the runtime's event loop and never become
//! commands.

use std::io::Write;

use crossterm::{execute, terminal::SetTitle};
use shadegen_engine::HexColor;
use shadegen_types::{Effect, Msg};
use shadegen_util::ClipboardWriter;

/// Side-effectful commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Write a color's canonical text into the clipboard.
    ClipboardSet(HexColor),
    /// Retitle the terminal window.
    SetTitle(String),
}

/// Window title shown while `color` is active.
pub fn window_title(color: HexColor) -> String {
    format!("shadegen {color}")
}

/// Convert application [`Effect`]s into [`Cmd`]s.
pub fn from_effects(effects: Vec<Effect>) -> Vec<Cmd> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::CopyToClipboardRequested(hex) => Some(Cmd::ClipboardSet(hex)),
            Effect::BaseColorChanged(hex) => Some(Cmd::SetTitle(window_title(hex))),
            Effect::ToastScheduled { .. } => None,
        })
        .collect()
}

/// Execute commands and collect the messages their results produce.
///
/// Clipboard writes always report back through [`Msg::ClipboardCompleted`],
/// whatever the outcome. Title updates are best effort.
pub fn run_cmds<W: Write>(cmds: Vec<Cmd>, clipboard: &mut dyn ClipboardWriter, out: &mut W) -> Vec<Msg> {
    let mut messages = Vec::new();
    for cmd in cmds {
        match cmd {
            Cmd::ClipboardSet(hex) => {
                let outcome = clipboard.write_text(&hex.to_string());
                messages.push(Msg::ClipboardCompleted { hex, outcome });
            }
            Cmd::SetTitle(title) => {
                if let Err(error) = execute!(out, SetTitle(&title)) {
                    tracing::debug!(%error, "failed to set terminal title");
                }
            }
        }
    }
    messages
}
