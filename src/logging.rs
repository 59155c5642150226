//! Tracing subscriber setup.
//!
//! Filters come from `POMO_LOG` (e.g. `POMO_LOG=pomo=debug`), defaulting to
//! `info`, or `debug` with `--verbose`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::ClockError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "POMO_LOG";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error; for commands that do not own the screen.
    Stderr,
    /// Append to a file; for the TUI, where stderr would corrupt the display.
    File(&'a Path),
}

fn filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber.
///
/// Installing twice is not an error; the first subscriber stays.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(target: LogTarget<'_>, verbose: bool) -> Result<(), ClockError> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(verbose));

    let installed = match target {
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    // Only one global subscriber per process; later calls keep the first.
    if let Err(e) = installed {
        tracing::debug!(error = %e, "log subscriber already installed");
    }
    Ok(())
}
