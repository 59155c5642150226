//! Events the clock queues for its listeners.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::session::{SessionType, SoundSignal};

/// A finished session and the one that replaced it.
///
/// The clock queues one of these every time a countdown reaches zero; the
/// presentation layer drains them with
/// [`SessionClock::take_events`](super::SessionClock::take_events) and
/// turns the signal into sound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Session that just ran out.
    pub finished: SessionType,
    /// Session the clock moved to.
    pub next: SessionType,
    /// Sound cue for the new session.
    pub signal: SoundSignal,
    /// Completed work sessions after the transition.
    pub completed_work_sessions: u32,
    /// Length of the new session in seconds.
    pub next_seconds: u32,
    /// Whether the next session started on its own.
    pub auto_started: bool,
    /// When the transition happened.
    pub at: DateTime<Local>,
}

impl Transition {
    /// One-line human summary, e.g. `Work finished, Short Break next (5m)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} finished, {} next ({}m)",
            self.finished,
            self.next,
            self.next_seconds / 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let t = Transition {
            finished: SessionType::Work,
            next: SessionType::LongBreak,
            signal: SoundSignal::LongBreakStart,
            completed_work_sessions: 4,
            next_seconds: 900,
            auto_started: false,
            at: Local::now(),
        };
        assert_eq!(t.summary(), "Work finished, Long Break next (15m)");
    }
}
