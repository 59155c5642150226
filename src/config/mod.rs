//! Configuration management for pomo.
//!
//! This module handles loading and saving configuration from `~/.pomo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ClockConfig, ColorSetting, Config, GeneralConfig, SoundConfig};
