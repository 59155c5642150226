//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur while configuring or presenting the clock.
///
/// The session clock itself never fails; every variant here belongs to the
/// layers around it (configuration, presets, terminal, output).
#[derive(Debug, Error)]
pub enum ClockError {
    /// Configuration could not be loaded, saved or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A preset has a non-positive duration or an empty label.
    #[error("Invalid preset: {0}")]
    InvalidPreset(String),

    /// A named item (preset, shell) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The terminal could not be set up, drawn or read.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Filesystem or process I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// YAML (de)serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ClockError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidPreset(_) | Self::Yaml(_) => 2,
            Self::NotFound(_) => 3,
            Self::Terminal(_) | Self::Io(_) | Self::Parse(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClockError::InvalidPreset("work minutes must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid preset: work minutes must be positive"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ClockError::Config(String::new()).exit_code(), 2);
        assert_eq!(ClockError::NotFound(String::new()).exit_code(), 3);
        assert_eq!(ClockError::Terminal(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ClockError = io.into();
        assert!(matches!(err, ClockError::Io(_)));
    }
}
