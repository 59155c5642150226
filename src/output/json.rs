//! JSON output formatting for pomo.

use serde::Serialize;
use serde_json::json;

use crate::clock::{ClockDisplay, PresetCatalog, Transition};
use crate::error::ClockError;

/// Format the preset catalog as JSON
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_presets_json(catalog: &PresetCatalog, active: &str) -> Result<String, ClockError> {
    let items: Vec<_> = catalog
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            json!({
                "position": i + 1,
                "label": preset.label(),
                "work_minutes": preset.work_minutes(),
                "short_break_minutes": preset.short_break_minutes(),
                "long_break_minutes": preset.long_break_minutes(),
                "active": preset.label() == active,
            })
        })
        .collect();

    let output = json!({
        "active": active,
        "count": catalog.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a clock snapshot as JSON
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_display_json(display: &ClockDisplay) -> Result<String, ClockError> {
    Ok(serde_json::to_string(display)?)
}

/// Format a transition as a single JSON line
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn format_transition_json(transition: &Transition) -> Result<String, ClockError> {
    Ok(serde_json::to_string(transition)?)
}

/// Serialize any value to JSON
///
/// # Errors
///
/// Returns `ClockError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ClockError> {
    Ok(serde_json::to_string_pretty(value)?)
}
