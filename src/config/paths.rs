//! Path resolution for pomo configuration and data files.
//!
//! All pomo data lives in `~/.pomo/`:
//! - `config.yaml` - Main configuration file
//! - `pomo.log` - Log file written while the TUI owns the terminal
//! - `sounds/` - `work-start.mp3`, `break-start.mp3`, `long-break-start.mp3`

use std::path::PathBuf;

use crate::error::ClockError;

/// Paths to pomo configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomo/`
    pub root: PathBuf,
    /// Config file: `~/.pomo/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.pomo/pomo.log`
    pub log_file: PathBuf,
    /// Sounds directory: `~/.pomo/sounds/`
    pub sounds: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ClockError> {
        let home = std::env::var("HOME")
            .map_err(|_| ClockError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("pomo.log"),
            sounds: root.join("sounds"),
            root,
        }
    }

    /// Paths whose config file is `config_file`; everything else sits next
    /// to it.
    #[must_use]
    pub fn for_config_file(config_file: PathBuf) -> Self {
        let root = config_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), std::path::Path::to_path_buf);
        Self {
            config_file,
            ..Self::with_root(root)
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), ClockError> {
        for dir in [&self.root, &self.sounds] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    ClockError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".pomo"))
        })
    }
}
