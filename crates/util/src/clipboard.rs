//! Clipboard access behind a small trait so the UI can be tested without a
//! display server.

use std::collections::VecDeque;

use shadegen_types::ClipboardOutcome;
use tracing::{debug, warn};

/// Writes text to some clipboard and reports how it went.
///
/// Implementations never panic and never return an error type; every failure
/// is folded into [`ClipboardOutcome`] so callers can turn it into a toast.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> ClipboardOutcome;
}

/// The operating-system clipboard via `arboard`.
///
/// The handle is opened lazily and kept alive afterwards; on X11 and Wayland
/// the copied contents only survive while the owning handle exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardOutcome> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|error| {
                warn!(error = %error, "clipboard unavailable");
                ClipboardOutcome::Unavailable(error.to_string())
            })?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardOutcome::Unavailable("clipboard handle missing".to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> ClipboardOutcome {
        let clipboard = match self.handle() {
            Ok(clipboard) => clipboard,
            Err(outcome) => return outcome,
        };
        match clipboard.set_text(text.to_owned()) {
            Ok(()) => {
                debug!(text, "copied to clipboard");
                ClipboardOutcome::Copied
            }
            Err(arboard::Error::ClipboardNotSupported) => {
                self.inner = None;
                ClipboardOutcome::Unavailable(arboard::Error::ClipboardNotSupported.to_string())
            }
            Err(error) => {
                warn!(error = %error, "clipboard write failed");
                // Drop the handle so the next attempt reopens it.
                self.inner = None;
                ClipboardOutcome::Failed(error.to_string())
            }
        }
    }
}

/// In-memory clipboard recording every successful write.
///
/// Outcomes can be scripted with [`MemoryClipboard::push_outcome`]; once the
/// script is exhausted every write gets the fallback outcome (success unless
/// built with [`MemoryClipboard::unavailable`]).
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    writes: Vec<String>,
    scripted: VecDeque<ClipboardOutcome>,
    fallback: Option<ClipboardOutcome>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes all report `Unavailable`.
    pub fn unavailable() -> Self {
        Self {
            fallback: Some(ClipboardOutcome::Unavailable("no clipboard".to_string())),
            ..Self::default()
        }
    }

    pub fn push_outcome(&mut self, outcome: ClipboardOutcome) {
        self.scripted.push_back(outcome);
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> ClipboardOutcome {
        let outcome = self
            .scripted
            .pop_front()
            .or_else(|| self.fallback.clone())
            .unwrap_or(ClipboardOutcome::Copied);
        if outcome.is_copied() {
            self.writes.push(text.to_owned());
        }
        outcome
    }
}
