//! Plain-text clock for terminals without the TUI.
//!
//! Prints a status line when the clock starts and a line for every session
//! transition, playing the sound cue as it goes.

use std::io::Write;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::clock::{SessionClock, TICK_PERIOD};
use crate::error::ClockError;
use crate::output::{format_display, format_transition};
use crate::sound::SoundBoard;

/// Drives a [`SessionClock`] from a sleep loop.
#[derive(Debug)]
pub struct Runner {
    clock: SessionClock,
    sounds: SoundBoard,
    format: OutputFormat,
    /// Stop after this many session ends; `None` means stop when the clock
    /// stops on its own.
    session_limit: Option<u32>,
    /// Print a status line at every whole minute.
    verbose: bool,
    ended: u32,
}

impl Runner {
    #[must_use]
    pub fn new(
        clock: SessionClock,
        sounds: SoundBoard,
        format: OutputFormat,
        session_limit: Option<u32>,
        verbose: bool,
    ) -> Self {
        Self {
            clock,
            sounds,
            format,
            session_limit,
            verbose,
            ended: 0,
        }
    }

    /// Start the clock and print the opening status line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn begin<W: Write>(&mut self, now: Instant, out: &mut W) -> Result<(), ClockError> {
        self.clock.start_at(now);
        writeln!(out, "{}", format_display(&self.clock.display(), self.format)?)?;
        Ok(())
    }

    /// Apply the ticks due at `now` and report what happened.
    ///
    /// Returns false once the run is over.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn step<W: Write>(&mut self, now: Instant, out: &mut W) -> Result<bool, ClockError> {
        let applied = self.clock.advance(now);

        for transition in self.clock.take_events() {
            self.sounds.play(transition.signal);
            writeln!(out, "{}", format_transition(&transition, self.format)?)?;
            self.ended += 1;
        }

        if self
            .session_limit
            .is_some_and(|limit| self.ended >= limit)
        {
            debug!(ended = self.ended, "session limit reached");
            return Ok(false);
        }

        if !self.clock.is_running() {
            if self.session_limit.is_none() {
                return Ok(false);
            }
            self.clock.start_at(now);
        }

        let remaining = self.clock.remaining_seconds();
        if self.verbose && applied > 0 && remaining % 60 == 0 && remaining > 0 {
            writeln!(out, "{}", format_display(&self.clock.display(), self.format)?)?;
        }
        out.flush()?;
        Ok(true)
    }

    /// Run until the session limit is reached or the clock stops.
    ///
    /// Returns the number of sessions that ended.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn run<W: Write>(mut self, out: &mut W) -> Result<u32, ClockError> {
        self.begin(Instant::now(), out)?;
        loop {
            let wait = self
                .clock
                .until_next_tick(Instant::now())
                .unwrap_or(TICK_PERIOD)
                .max(Duration::from_millis(10));
            std::thread::sleep(wait);
            if !self.step(Instant::now(), out)? {
                break;
            }
        }
        self.clock.shutdown();
        Ok(self.ended)
    }

    /// The clock being driven.
    #[must_use]
    pub const fn clock(&self) -> &SessionClock {
        &self.clock
    }

    /// Sessions ended so far.
    #[must_use]
    pub const fn ended(&self) -> u32 {
        self.ended
    }
}
