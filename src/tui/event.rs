//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::clock::SessionType;
use crate::error::ClockError;
use crate::tui::app::App;

/// Longest wait for input before the clock is polled again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Waits at most `wait` (capped at the poll interval) for input. Returns an
/// action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App<'_>, wait: Duration) -> Result<Option<Action>, ClockError> {
    if event::poll(wait.min(POLL_INTERVAL))
        .map_err(|e| ClockError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| ClockError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key));
            }
        }
    }

    Ok(None)
}

/// Apply a single key press to the app.
pub fn handle_key(app: &mut App<'_>, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        KeyCode::Char('s') | KeyCode::Enter => app.start(),
        KeyCode::Char('p') => app.pause(),
        KeyCode::Char(' ') => app.toggle(),
        KeyCode::Char('r') => app.reset(),

        KeyCode::Char(c @ '1'..='9') => {
            if let Some(position) = c.to_digit(10) {
                app.choose_preset(position as usize);
            }
        }

        KeyCode::Char('a') => app.toggle_auto_advance(),

        KeyCode::Char('w') => app.select_session(SessionType::Work),
        KeyCode::Char('b') => app.select_session(SessionType::ShortBreak),
        KeyCode::Char('l') => app.select_session(SessionType::LongBreak),

        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }

    None
}
