//! Terminal user interface for the stopwatch.
//!
//! Built with ratatui and crossterm. The main loop runs one tick per
//! period: render the active session, poll for at most one key, dispatch it,
//! repeat. The poll timeout doubles as the inter-tick sleep, so a missing
//! key press never stalls the render cycle.

mod app;
mod event;
mod ui;

pub use app::{App, Flow};
pub use event::{map_key, Action};

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::TallyError;

/// Run the stopwatch TUI until the user quits or an interrupt arrives.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or the event loop
/// fails.
pub fn run(tick: Duration) -> Result<(), TallyError> {
    // An external SIGINT exits immediately, skipping the summary screen.
    // In raw mode Ctrl+C arrives as a key event instead and is handled by
    // the dispatch path.
    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .map_err(|e| TallyError::Terminal(format!("Failed to set interrupt handler: {e}")))?;
    }

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| TallyError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TallyError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TallyError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run the main loop
    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app, tick, &interrupted);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the tick loop until the user quits or an interrupt arrives.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick: Duration,
    interrupted: &AtomicBool,
) -> Result<(), TallyError> {
    loop {
        if interrupted.load(Ordering::SeqCst) {
            return Ok(());
        }

        // Draw, then poll for at most one key this tick
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TallyError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::poll_action(tick)? {
            match app.apply(action) {
                Flow::Continue => {}
                Flow::Summarize => return show_summary(terminal, app),
                Flow::Exit => return Ok(()),
            }
        }
    }
}

/// Render the per-session summary and block until any key is pressed.
fn show_summary<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<(), TallyError> {
    terminal
        .draw(|frame| ui::render_summary(frame, app))
        .map_err(|e| TallyError::Terminal(format!("Failed to draw: {e}")))?;

    event::wait_for_key()
}
