//! Application state for the TUI.

use std::time::Instant;

use tracing::info;

use crate::clock::{PresetCatalog, SessionClock, SessionType};
use crate::sound::SoundBoard;

/// Keys shown in the status bar when there is nothing else to say.
pub const KEY_HINTS: &str =
    "s:start | p:pause | r:reset | 1-9:preset | a:auto | w/b/l:session | ?:help | q:quit";

/// Application state.
pub struct App<'a> {
    /// The clock being displayed.
    pub clock: SessionClock,
    /// Sound cues for transitions.
    sounds: SoundBoard,
    /// Presets offered as buttons.
    pub presets: &'a PresetCatalog,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the key help panel is open.
    pub show_help: bool,
}

impl<'a> App<'a> {
    /// Create a new app instance.
    #[must_use]
    pub fn new(clock: SessionClock, sounds: SoundBoard, presets: &'a PresetCatalog) -> Self {
        Self {
            clock,
            sounds,
            presets,
            status: Some("Press s to start, ? for help".to_string()),
            show_help: false,
        }
    }

    /// Apply due ticks and announce any session change.
    pub fn on_tick(&mut self, now: Instant) {
        self.clock.advance(now);

        for transition in self.clock.take_events() {
            self.sounds.play(transition.signal);
            let follow_up = if transition.auto_started {
                ""
            } else {
                " Press s to start."
            };
            self.status = Some(format!("{}.{follow_up}", transition.summary()));
        }
    }

    pub fn start(&mut self) {
        self.clock.start();
        self.status = None;
    }

    pub fn pause(&mut self) {
        self.clock.pause();
        self.status = Some("Paused".to_string());
    }

    /// Start if paused, pause if running.
    pub fn toggle(&mut self) {
        if self.clock.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.clock.reset();
        self.status = Some("Reset".to_string());
    }

    /// Switch to the preset at 1-based `position`.
    pub fn choose_preset(&mut self, position: usize) {
        match self.presets.nth(position) {
            Some(preset) => {
                info!(preset = preset.label(), "preset chosen");
                self.status = Some(format!("Preset {}", preset.label()));
                self.clock.set_preset(preset.clone());
            }
            None => self.status = Some(format!("No preset #{position}")),
        }
    }

    pub fn toggle_auto_advance(&mut self) {
        let flag = !self.clock.auto_advance();
        self.clock.set_auto_advance(flag);
        self.status = Some(format!(
            "Auto-start next session: {}",
            if flag { "on" } else { "off" }
        ));
    }

    pub fn select_session(&mut self, session_type: SessionType) {
        self.clock.select_session(session_type);
        self.status = Some(format!("Switched to {session_type}"));
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Tear the clock down before the terminal is restored.
    pub fn shutdown(&mut self) {
        self.clock.shutdown();
    }

    /// One-line summary printed after leaving the TUI.
    #[must_use]
    pub fn farewell(&self) -> String {
        let count = self.clock.completed_work_sessions();
        format!(
            "Completed {count} pomodoro{} with preset {}",
            if count == 1 { "" } else { "s" },
            self.clock.preset().label()
        )
    }
}
