//! # Shadegen TUI
//!
//! Interactive terminal front end for the shade generator. Type a base color
//! into the hex field (or press `r` for a random one) and the lighter and
//! darker rows update immediately; select or click any tile to copy its hex
//! code to the clipboard.
//!
//! ## Architecture
//!
//! State lives in [`app::App`] and only changes through `App::update`, which
//! returns `Effect`s. The runtime turns those into commands (`cmd`) that touch
//! the clipboard or the terminal, then feeds their results back as messages.
//! Components own presentation only: layout, hit areas and key mapping.

mod app;
mod cmd;
mod theme;
mod ui;

use anyhow::Result;
use shadegen_util::{ShadegenConfig, UserPreferences};

/// Runs the TUI until the user quits.
///
/// When the final base color differs from the one the session started with,
/// it is stored as the preferred start color for next time. Failing to store
/// it is logged, not fatal.
///
/// # Errors
///
/// Terminal setup failures (raw mode, alternate screen) and rendering errors.
pub async fn run(config: ShadegenConfig, preferences: &UserPreferences) -> Result<()> {
    let final_color = ui::runtime::run_app(config).await?;
    if final_color != config.base_color
        && let Err(error) = preferences.set_base_color(Some(final_color))
    {
        tracing::warn!(%error, path = %preferences.path().display(), "could not save preferred color");
    }
    Ok(())
}
