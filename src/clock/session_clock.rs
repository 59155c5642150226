//! The session clock: countdown plus the work/break state machine.

use std::collections::VecDeque;
use std::time::Instant;

use chrono::Local;
use tracing::{debug, info};

use super::display::ClockDisplay;
use super::event::Transition;
use super::preset::Preset;
use super::session::{SessionType, LONG_BREAK_EVERY};
use super::ticker::Ticker;

/// Owns all timer state and the one-tick-per-second schedule.
///
/// The clock is driven from a single loop: callers invoke the control
/// operations in response to input and call [`advance`](Self::advance)
/// whenever they wake up. Each call runs to completion, so nobody can observe
/// a countdown at zero that still belongs to the finished session.
///
/// `running` is not stored separately; it is whether the [`Ticker`] is armed.
#[derive(Debug)]
pub struct SessionClock {
    preset: Preset,
    session_type: SessionType,
    remaining_seconds: u32,
    completed_work_sessions: u32,
    auto_advance: bool,
    ticker: Ticker,
    events: VecDeque<Transition>,
}

impl SessionClock {
    /// Create a paused clock at the start of a work session.
    #[must_use]
    pub fn new(preset: Preset) -> Self {
        let remaining_seconds = SessionType::Work.seconds(&preset);
        Self {
            preset,
            session_type: SessionType::Work,
            remaining_seconds,
            completed_work_sessions: 0,
            auto_advance: false,
            ticker: Ticker::default(),
            events: VecDeque::new(),
        }
    }

    /// Builder-style variant of [`set_auto_advance`](Self::set_auto_advance).
    #[must_use]
    pub fn with_auto_advance(mut self, auto_advance: bool) -> Self {
        self.auto_advance = auto_advance;
        self
    }

    /// Start counting down. No-op if already running.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Start counting down with the first tick one second after `now`.
    pub fn start_at(&mut self, now: Instant) {
        if self.ticker.is_active() {
            return;
        }
        self.ticker.start(now);
        debug!(
            session = %self.session_type,
            remaining = self.remaining_seconds,
            "clock started"
        );
    }

    /// Stop counting down. Idempotent.
    pub fn pause(&mut self) {
        if self.ticker.is_active() {
            self.ticker.stop();
            debug!(remaining = self.remaining_seconds, "clock paused");
        }
    }

    /// Stop and go back to a fresh work session, forgetting completed ones.
    pub fn reset(&mut self) {
        self.ticker.stop();
        self.session_type = SessionType::Work;
        self.remaining_seconds = SessionType::Work.seconds(&self.preset);
        self.completed_work_sessions = 0;
        debug!(preset = self.preset.label(), "clock reset");
    }

    /// Switch presets and restart the current session's countdown from its
    /// full length under the new preset.
    pub fn set_preset(&mut self, preset: Preset) {
        self.preset = preset;
        self.remaining_seconds = self.session_type.seconds(&self.preset);
        debug!(
            preset = self.preset.label(),
            remaining = self.remaining_seconds,
            "preset changed"
        );
    }

    /// Choose whether the next session starts by itself.
    pub fn set_auto_advance(&mut self, auto_advance: bool) {
        self.auto_advance = auto_advance;
    }

    /// Jump to `session_type` with a full countdown.
    ///
    /// Running state and the completed-session count are left alone.
    pub fn select_session(&mut self, session_type: SessionType) {
        self.session_type = session_type;
        self.remaining_seconds = session_type.seconds(&self.preset);
        debug!(session = %session_type, "session selected");
    }

    /// Apply one second of countdown.
    ///
    /// Returns true if this tick finished the session. Reaching zero disarms
    /// the ticker before the transition, so an auto-advance restart creates
    /// the only tick source. A tick at zero finishes the session instead of
    /// underflowing.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// [`tick`](Self::tick) with the time an auto-advance restart is armed from.
    fn tick_at(&mut self, now: Instant) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            if self.remaining_seconds > 0 {
                return false;
            }
        }
        self.ticker.stop();
        self.end_session(now);
        true
    }

    /// Apply every tick due at `now`, in order.
    ///
    /// Stops at the first session end: ticks left over from the finished
    /// session are not carried into the next one, and an auto-advanced
    /// session counts from `now`. Returns the number of ticks applied.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let mut applied = 0;
        while self.ticker.poll(now) {
            applied += 1;
            if self.tick_at(now) {
                break;
            }
        }
        if applied > 1 {
            debug!(ticks = applied, "caught up on late ticks");
        }
        applied
    }

    fn end_session(&mut self, now: Instant) {
        let finished = self.session_type;
        let next = match finished {
            SessionType::Work => {
                self.completed_work_sessions += 1;
                if self.completed_work_sessions % LONG_BREAK_EVERY == 0 {
                    SessionType::LongBreak
                } else {
                    SessionType::ShortBreak
                }
            }
            SessionType::ShortBreak | SessionType::LongBreak => SessionType::Work,
        };

        self.session_type = next;
        self.remaining_seconds = next.seconds(&self.preset);

        info!(
            finished = %finished,
            next = %next,
            completed = self.completed_work_sessions,
            "session ended"
        );
        self.events.push_back(Transition {
            finished,
            next,
            signal: next.entry_signal(),
            completed_work_sessions: self.completed_work_sessions,
            next_seconds: self.remaining_seconds,
            auto_started: self.auto_advance,
            at: Local::now(),
        });

        if self.auto_advance {
            self.start_at(now);
        }
    }

    /// Drain queued transitions, oldest first.
    pub fn take_events(&mut self) -> Vec<Transition> {
        self.events.drain(..).collect()
    }

    /// Cancel any pending tick. Called on teardown.
    pub fn shutdown(&mut self) {
        if self.ticker.is_active() {
            debug!("cancelling pending tick on shutdown");
        }
        self.ticker.stop();
    }

    /// Project the state for display. Never mutates.
    #[must_use]
    pub fn display(&self) -> ClockDisplay {
        let total_seconds = self.total_seconds();
        ClockDisplay {
            minutes: self.remaining_seconds / 60,
            seconds: self.remaining_seconds % 60,
            percent_remaining: f64::from(self.remaining_seconds) / f64::from(total_seconds)
                * 100.0,
            remaining_seconds: self.remaining_seconds,
            total_seconds,
            session_type: self.session_type,
            completed_work_sessions: self.completed_work_sessions,
            running: self.is_running(),
            auto_advance: self.auto_advance,
            preset: self.preset.label().to_string(),
        }
    }

    /// Seconds left in the current session.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Full length of the current session in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.session_type.seconds(&self.preset)
    }

    #[must_use]
    pub const fn session_type(&self) -> SessionType {
        self.session_type
    }

    #[must_use]
    pub const fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.ticker.is_active()
    }

    #[must_use]
    pub const fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    #[must_use]
    pub const fn preset(&self) -> &Preset {
        &self.preset
    }

    /// Time until the next tick, for sizing the event loop's wait.
    #[must_use]
    pub fn until_next_tick(&self, now: Instant) -> Option<std::time::Duration> {
        self.ticker.until_next(now)
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(Preset::default())
    }
}

impl Drop for SessionClock {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clock::session::SoundSignal;

    fn preset(work: u32, short: u32, long: u32) -> Preset {
        Preset::new(format!("{work}/{short}"), work, short, long).unwrap()
    }

    fn finish_session(clock: &mut SessionClock) {
        while !clock.tick() {}
    }

    #[test]
    fn test_new_clock() {
        let clock = SessionClock::default();
        assert_eq!(clock.session_type(), SessionType::Work);
        assert_eq!(clock.remaining_seconds(), 1500);
        assert_eq!(clock.completed_work_sessions(), 0);
        assert!(!clock.is_running());
        assert!(!clock.auto_advance());
    }

    #[test]
    fn test_tick_counts_down_by_one() {
        let mut clock = SessionClock::new(preset(1, 1, 1));
        clock.start();

        for expected in (1..60).rev() {
            assert!(!clock.tick());
            assert_eq!(clock.remaining_seconds(), expected);
            assert_eq!(clock.session_type(), SessionType::Work);
        }
        assert!(clock.tick());
        assert_eq!(clock.session_type(), SessionType::ShortBreak);
    }

    #[test]
    fn test_reaching_zero_stops_ticker() {
        let mut clock = SessionClock::new(preset(1, 2, 3));
        clock.start();
        finish_session(&mut clock);

        assert!(!clock.is_running());
        assert_eq!(clock.remaining_seconds(), 120);
    }

    #[test]
    fn test_tick_at_zero_ends_session_without_underflow() {
        let mut clock = SessionClock::new(preset(1, 2, 3));
        clock.remaining_seconds = 0;

        assert!(clock.tick());
        assert_eq!(clock.session_type(), SessionType::ShortBreak);
        assert_eq!(clock.remaining_seconds(), 120);
        assert_eq!(clock.completed_work_sessions(), 1);
    }

    #[test]
    fn test_long_break_every_fourth_work_session() {
        let mut clock = SessionClock::new(preset(1, 1, 1));
        let mut breaks = Vec::new();

        for _ in 0..8 {
            finish_session(&mut clock);
            breaks.push(clock.session_type());
            finish_session(&mut clock);
            assert_eq!(clock.session_type(), SessionType::Work);
        }

        use SessionType::{LongBreak, ShortBreak};
        assert_eq!(
            breaks,
            [
                ShortBreak, ShortBreak, ShortBreak, LongBreak, ShortBreak, ShortBreak,
                ShortBreak, LongBreak
            ]
        );
        assert_eq!(clock.completed_work_sessions(), 8);
    }

    #[test]
    fn test_breaks_do_not_count() {
        let mut clock = SessionClock::new(preset(1, 1, 1));
        clock.select_session(SessionType::ShortBreak);
        finish_session(&mut clock);

        assert_eq!(clock.session_type(), SessionType::Work);
        assert_eq!(clock.completed_work_sessions(), 0);
    }

    #[test]
    fn test_start_and_pause_are_idempotent() {
        let mut clock = SessionClock::default();
        let t0 = Instant::now();
        clock.start_at(t0);
        clock.start_at(t0 + Duration::from_millis(600));
        assert!(clock.is_running());
        assert_eq!(clock.until_next_tick(t0), Some(Duration::from_secs(1)));

        clock.pause();
        clock.pause();
        assert!(!clock.is_running());
        assert_eq!(clock.until_next_tick(t0), None);
    }

    #[test]
    fn test_paused_clock_ignores_advance() {
        let mut clock = SessionClock::default();
        let t0 = Instant::now();
        clock.start_at(t0);
        assert_eq!(clock.advance(t0 + Duration::from_secs(2)), 2);

        clock.pause();
        assert_eq!(clock.advance(t0 + Duration::from_secs(60)), 0);
        assert_eq!(clock.remaining_seconds(), 1498);
    }

    #[test]
    fn test_advance_stops_at_session_end() {
        let mut clock = SessionClock::new(preset(1, 1, 1)).with_auto_advance(true);
        let t0 = Instant::now();
        clock.start_at(t0);

        let applied = clock.advance(t0 + Duration::from_secs(100));
        assert_eq!(applied, 60);
        assert_eq!(clock.session_type(), SessionType::ShortBreak);
        assert_eq!(clock.remaining_seconds(), 60);
        assert!(clock.is_running());
    }

    #[test]
    fn test_auto_advance_counts_from_advance_time() {
        let mut clock = SessionClock::new(preset(1, 1, 1)).with_auto_advance(true);
        let t0 = Instant::now() + Duration::from_secs(3600);
        clock.start_at(t0);

        let ended_at = t0 + Duration::from_secs(60);
        assert_eq!(clock.advance(ended_at), 60);
        assert_eq!(clock.session_type(), SessionType::ShortBreak);
        assert_eq!(clock.until_next_tick(ended_at), Some(Duration::from_secs(1)));

        assert_eq!(clock.advance(ended_at + Duration::from_secs(1)), 1);
        assert_eq!(clock.session_type(), SessionType::ShortBreak);
        assert_eq!(clock.remaining_seconds(), 59);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut clock = SessionClock::new(preset(1, 1, 1));
        for _ in 0..3 {
            finish_session(&mut clock);
        }
        clock.start();
        clock.reset();

        assert_eq!(clock.session_type(), SessionType::Work);
        assert_eq!(clock.completed_work_sessions(), 0);
        assert_eq!(clock.remaining_seconds(), 60);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_set_preset_restarts_current_countdown() {
        let mut clock = SessionClock::default();
        clock.select_session(SessionType::ShortBreak);
        clock.remaining_seconds = 30;
        clock.start();

        clock.set_preset(preset(50, 10, 20));

        assert_eq!(clock.remaining_seconds(), 600);
        assert_eq!(clock.session_type(), SessionType::ShortBreak);
        assert!(clock.is_running());
    }

    #[test]
    fn test_set_preset_keeps_count() {
        let mut clock = SessionClock::new(preset(1, 1, 1));
        finish_session(&mut clock);
        clock.set_preset(preset(2, 2, 2));
        assert_eq!(clock.completed_work_sessions(), 1);
    }

    #[test]
    fn test_events_queue() {
        let mut clock = SessionClock::new(preset(1, 2, 3));
        finish_session(&mut clock);
        finish_session(&mut clock);

        let events = clock.take_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].signal, SoundSignal::BreakStart);
        assert_eq!(events[0].next_seconds, 120);
        assert_eq!(events[1].finished, SessionType::ShortBreak);
        assert_eq!(events[1].signal, SoundSignal::WorkStart);
        assert!(clock.take_events().is_empty());
    }

    #[test]
    fn test_auto_advance_restarts() {
        let mut clock = SessionClock::new(preset(1, 1, 1)).with_auto_advance(true);
        clock.start();
        finish_session(&mut clock);

        assert!(clock.is_running());
        assert!(clock.take_events()[0].auto_started);
    }

    #[test]
    fn test_display() {
        let mut clock = SessionClock::default();
        clock.remaining_seconds = 750;
        let display = clock.display();

        assert_eq!(display.minutes, 12);
        assert_eq!(display.seconds, 30);
        assert!((display.percent_remaining - 50.0).abs() < 1e-9);
        assert_eq!(display.total_seconds, 1500);
        assert_eq!(display.preset, "25/5");
        assert!(!display.running);
    }

    #[test]
    fn test_shutdown_cancels_tick() {
        let mut clock = SessionClock::default();
        clock.start();
        clock.shutdown();
        assert!(!clock.is_running());
    }
}
