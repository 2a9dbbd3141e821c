//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (alternate screen, raw mode, mouse capture).
//! - Multiplex terminal input, the UI ticker, the toast timer and Ctrl-C in a
//!   single `tokio::select!` loop.
//! - Execute the `Effect`s returned by `App::update` through `cmd` and feed
//!   the resulting messages back in.
//! - Render only after something visible changed.
//!
//! Ticking is fast (100 ms) while a toast is on screen and slow (5 s) when
//! idle. Toast expiry itself is driven by a deadline, not by ticks.

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use shadegen_types::{Effect, Msg, ToastId};
use shadegen_util::{ClipboardWriter, ShadegenConfig, SystemClipboard};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, Instant, MissedTickBehavior},
};

use crate::app::App;
use crate::cmd;
use crate::ui::main_component::{MainView, is_quit_key};

type Backend = CrosstermBackend<Stdout>;

/// Spawn a dedicated input task that polls the terminal and forwards
/// `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::task::spawn_blocking(move || {
        let poll_interval = Duration::from_millis(16);
        loop {
            match event::poll(poll_interval) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                }
                Ok(true) => match event::read() {
                    Ok(Event::Mouse(mouse)) if mouse.kind == MouseEventKind::Moved => {}
                    Ok(event) => {
                        if let Err(e) = sender.blocking_send(event) {
                            tracing::debug!("input receiver dropped: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read event: {}", e);
                        break;
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to poll events: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

enum Flow {
    Continue,
    Exit,
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> (Flow, Vec<Effect>) {
    let effects = match input_event {
        Event::Key(key_event) if is_quit_key(&key_event) => return (Flow::Exit, Vec::new()),
        Event::Key(key_event) if key_event.is_press() => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    };
    (Flow::Continue, effects)
}

/// Drains `effects`: arms the toast timer, runs commands, and feeds the
/// resulting messages back until nothing new is requested.
fn process_effects(
    app: &mut App,
    main_view: &mut MainView,
    mut effects: Vec<Effect>,
    clipboard: &mut dyn ClipboardWriter,
    toast_deadline: &mut Option<(ToastId, Instant)>,
    out: &mut Backend,
) {
    while !effects.is_empty() {
        for effect in effects.extract_if(0.., |effect| matches!(effect, Effect::ToastScheduled { .. })) {
            if let Effect::ToastScheduled { id, after } = effect {
                *toast_deadline = Some((id, Instant::now() + after));
            }
        }
        let messages = cmd::run_cmds(cmd::from_effects(std::mem::take(&mut effects)), clipboard, out);
        for msg in messages {
            effects.extend(main_view.handle_message(app, msg));
        }
    }
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal even when the loop fails.
///
/// Returns the base color that was active when the user quit.
pub async fn run_app(config: ShadegenConfig) -> Result<shadegen_engine::HexColor> {
    let mut app = App::new(&config);
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app, &mut main_view).await;
    cleanup_terminal(&mut terminal)?;
    result.map(|()| app.color())
}

async fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut clipboard = SystemClipboard::new();
    let mut toast_deadline: Option<(ToastId, Instant)> = None;

    // Title reflects the starting color before any change.
    let title = cmd::window_title(app.color());
    cmd::run_cmds(vec![cmd::Cmd::SetTitle(title)], &mut clipboard, terminal.backend_mut());

    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let target_interval = if app.is_animating() { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }
        let deadline = toast_deadline.map(|(_, at)| at).unwrap_or_else(Instant::now);

        let mut effects = Vec::new();
        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                let (flow, produced) = handle_input_event(app, main_view, event);
                if matches!(flow, Flow::Exit) {
                    break;
                }
                effects.extend(produced);
                needs_render = true;
            }

            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(app, Msg::Tick));
                needs_render = app.is_animating();
            }

            _ = time::sleep_until(deadline), if toast_deadline.is_some() => {
                if let Some((id, _)) = toast_deadline.take() {
                    effects.extend(main_view.handle_message(app, Msg::ToastExpired(id)));
                }
                needs_render = true;
            }

            _ = signal::ctrl_c() => { break; }
        }

        process_effects(app, main_view, effects, &mut clipboard, &mut toast_deadline, terminal.backend_mut());

        // Some terminals drop resize notifications; poll the size as a fallback.
        if let Ok((w, h)) = crossterm::terminal::size()
            && last_size != Some((w, h))
        {
            last_size = Some((w, h));
            main_view.handle_message(app, Msg::Resize(w, h));
            needs_render = true;
        }

        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}
