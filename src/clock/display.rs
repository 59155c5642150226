//! Read-only projection of the clock for presentation.

use serde::Serialize;

use super::session::SessionType;

/// Everything a view needs to draw the clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockDisplay {
    /// Whole minutes left.
    pub minutes: u32,
    /// Seconds left past the whole minutes.
    pub seconds: u32,
    /// Share of the current session still to go, 0.0 to 100.0.
    pub percent_remaining: f64,
    /// Seconds left in total.
    pub remaining_seconds: u32,
    /// Full length of the current session in seconds.
    pub total_seconds: u32,
    pub session_type: SessionType,
    pub completed_work_sessions: u32,
    pub running: bool,
    pub auto_advance: bool,
    /// Label of the active preset.
    pub preset: String,
}

impl ClockDisplay {
    /// Countdown as `MM:SS`.
    #[must_use]
    pub fn format_mmss(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }

    /// Share of the session already elapsed, 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        1.0 - self.percent_remaining / 100.0
    }

    /// `Running` or `Paused`.
    #[must_use]
    pub const fn state_label(&self) -> &'static str {
        if self.running {
            "Running"
        } else {
            "Paused"
        }
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress.clamp(0.0, 1.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
