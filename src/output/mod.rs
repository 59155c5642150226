//! Output formatting for pomo.
//!
//! This module provides formatters for displaying presets, clock snapshots
//! and session transitions in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::clock::{ClockDisplay, PresetCatalog, Transition};
use crate::error::ClockError;

pub use json::*;
pub use pretty::*;

/// Format the preset catalog based on output format
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_presets(
    catalog: &PresetCatalog,
    active: &str,
    format: OutputFormat,
) -> Result<String, ClockError> {
    match format {
        OutputFormat::Pretty => Ok(format_presets_pretty(catalog, active)),
        OutputFormat::Json => format_presets_json(catalog, active),
    }
}

/// Format a clock snapshot based on output format
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_display(display: &ClockDisplay, format: OutputFormat) -> Result<String, ClockError> {
    match format {
        OutputFormat::Pretty => Ok(format_display_pretty(display)),
        OutputFormat::Json => format_display_json(display),
    }
}

/// Format a session transition based on output format
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_transition(transition: &Transition, format: OutputFormat) -> Result<String, ClockError> {
    match format {
        OutputFormat::Pretty => Ok(format_transition_pretty(transition)),
        OutputFormat::Json => format_transition_json(transition),
    }
}
