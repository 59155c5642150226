//! Terminal User Interface (TUI) for pomo.
//!
//! Full-screen countdown with a progress gauge, preset buttons and session
//! counter. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::clock::{PresetCatalog, SessionClock, TICK_PERIOD};
use crate::error::ClockError;
use crate::sound::SoundBoard;

/// Run the TUI application.
///
/// Returns a summary line to print once the terminal is restored.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(
    clock: SessionClock,
    sounds: SoundBoard,
    presets: &PresetCatalog,
) -> Result<String, ClockError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| ClockError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| ClockError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| ClockError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(clock, sounds, presets);
    let result = run_app(&mut terminal, &mut app);
    app.shutdown();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map(|()| app.farewell())
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), ClockError> {
    loop {
        app.on_tick(Instant::now());

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| ClockError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        let wait = app
            .clock
            .until_next_tick(Instant::now())
            .unwrap_or(TICK_PERIOD);
        if let Some(event::Action::Quit) = event::handle_events(app, wait)? {
            break;
        }
    }

    Ok(())
}
