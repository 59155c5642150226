//! Pomodoro session clock.
//!
//! Provides the countdown and work/break state machine:
//! - One tick per second while running
//! - Short break after each work session, long break after every fourth
//! - Named duration presets
//! - Transition events carrying the sound cue for the next session

pub mod display;
pub mod event;
pub mod preset;
pub mod session;
pub mod session_clock;
pub mod ticker;

pub use display::{render_progress_bar, ClockDisplay};
pub use event::Transition;
pub use preset::{Preset, PresetCatalog, MAX_MINUTES};
pub use session::{SessionType, SoundSignal, LONG_BREAK_EVERY};
pub use session_clock::SessionClock;
pub use ticker::{Ticker, TICK_PERIOD};
