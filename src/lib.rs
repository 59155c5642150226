//! pomo - A Pomodoro session clock for the terminal
//!
//! The heart of the crate is [`clock::SessionClock`], a single-threaded
//! state machine that counts down work and break sessions. Everything else
//! (the TUI, the plain-text runner, sound cues) only reads its display model
//! and calls its operations.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod headless;
pub mod logging;
pub mod output;
pub mod sound;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use clock::{Preset, PresetCatalog, SessionClock, SessionType, SoundSignal};
pub use error::ClockError;
