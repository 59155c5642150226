//! Periodic tick source for the session clock.

use std::time::{Duration, Instant};

/// Interval between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A deadline-based, single-source periodic timer.
///
/// The ticker does no waiting of its own: the event loop calls [`poll`]
/// whenever it wakes up and applies one tick per `true` it gets back. Only
/// one deadline exists at a time, so ticks never overlap.
///
/// [`poll`]: Ticker::poll
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Create a disarmed ticker with the given period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Arm the ticker; the first tick is due one period after `now`.
    ///
    /// Does nothing if the ticker is already armed.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    /// Disarm the ticker, dropping any pending tick.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Whether a tick source is currently armed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Consume one due tick, if any.
    ///
    /// Returns true when a tick was due at `now`; the next deadline then moves
    /// one period forward, so a late caller catches up tick by tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(due + self.period);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, if armed.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_never_ticks() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        assert!(!ticker.is_active());
        assert!(!ticker.poll(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_first_tick_after_one_period() {
        let mut ticker = Ticker::default();
        let t0 = Instant::now();
        ticker.start(t0);

        assert!(!ticker.poll(t0 + Duration::from_millis(999)));
        assert!(ticker.poll(t0 + Duration::from_secs(1)));
        assert!(!ticker.poll(t0 + Duration::from_millis(1500)));
    }

    #[test]
    fn test_start_twice_keeps_single_deadline() {
        let mut ticker = Ticker::default();
        let t0 = Instant::now();
        ticker.start(t0);
        ticker.start(t0 + Duration::from_millis(700));

        assert_eq!(ticker.until_next(t0), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_late_poll_catches_up_one_at_a_time() {
        let mut ticker = Ticker::default();
        let t0 = Instant::now();
        ticker.start(t0);

        let late = t0 + Duration::from_millis(3200);
        let mut ticks = 0;
        while ticker.poll(late) {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_stop_drops_pending_tick() {
        let mut ticker = Ticker::default();
        let t0 = Instant::now();
        ticker.start(t0);
        ticker.stop();

        assert!(!ticker.is_active());
        assert!(!ticker.poll(t0 + Duration::from_secs(5)));
        assert_eq!(ticker.until_next(t0), None);
    }
}
