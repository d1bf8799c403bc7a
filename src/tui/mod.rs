// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, loader results)
// - Dispatching every interaction from one key handler

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod scroll;
pub mod ui;

use crate::catalog::ResourceDescriptor;
use crate::config::Config;
use crate::events::LoadResult;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal state on the way out.
pub async fn run_tui(
    catalog: Vec<ResourceDescriptor>,
    mut load_rx: mpsc::Receiver<LoadResult>,
    log_buffer: LogBuffer,
    config: &Config,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let theme = Theme::by_name(&config.theme);
    tracing::debug!("Using theme {:?}", theme.name);
    let mut app = App::new(catalog, theme, log_buffer, config.base_url.clone());

    let result = run_event_loop(&mut terminal, &mut app, &mut load_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources at once:
/// 1. Keyboard/mouse input
/// 2. Timer ticks (periodic redraw, notice expiry)
/// 3. Loader results (cards filling in)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    load_rx: &mut mpsc::Receiver<LoadResult>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick: expire transient notices, redraw
            _ = tick_interval.tick() => {
                app.tick();
            }

            // A resource finished loading
            Some(result) = load_rx.recv() => {
                app.apply_load(result);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input.
///
/// Every card shares this one handler; which card an action applies to
/// is decided here from the selection, not by per-card listeners.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Press => {
            // Per-key debounce/repeat gate
            if !app.handle_key_press(key_event.code) {
                return;
            }
            dispatch_key(app, key_event.code);
        }
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// The dispatch table: interaction kind -> state change
fn dispatch_key(app: &mut App, key: KeyCode) {
    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
        }

        // Toggle the selected card's expand/collapse control
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected();
        }

        // Dismiss: collapse the focused text region
        KeyCode::Esc => {
            app.dismiss_focused();
        }

        // Move focus between deck and revealed text
        KeyCode::Tab => {
            app.cycle_focus();
        }

        // Copy the selected card's full text
        KeyCode::Char('y') => {
            app.copy_selected();
        }

        // Everything else is navigation for the focused region
        other => {
            app.navigate(other);
        }
    }
}

/// Handle mouse input: wheel scrolling maps onto the navigation keys
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.navigate(KeyCode::Up),
        MouseEventKind::ScrollDown => app.navigate(KeyCode::Down),
        _ => {}
    }
}
