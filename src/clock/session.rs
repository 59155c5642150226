//! Session kinds and the sound signal each one announces.

use serde::{Deserialize, Serialize};

use super::preset::Preset;

/// Every this many completed work sessions, the break is a long one.
pub const LONG_BREAK_EVERY: u32 = 4;

/// Kind of session the clock is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionType {
    /// Focused work.
    Work,
    /// Break after a work session.
    ShortBreak,
    /// Break after every fourth work session.
    LongBreak,
}

impl SessionType {
    /// Duration of this session under `preset`, in minutes.
    #[must_use]
    pub const fn minutes(self, preset: &Preset) -> u32 {
        match self {
            Self::Work => preset.work_minutes(),
            Self::ShortBreak => preset.short_break_minutes(),
            Self::LongBreak => preset.long_break_minutes(),
        }
    }

    /// Duration of this session under `preset`, in seconds.
    #[must_use]
    pub const fn seconds(self, preset: &Preset) -> u32 {
        self.minutes(preset) * 60
    }

    /// Signal fired when a session of this kind begins.
    #[must_use]
    pub const fn entry_signal(self) -> SoundSignal {
        match self {
            Self::Work => SoundSignal::WorkStart,
            Self::ShortBreak => SoundSignal::BreakStart,
            Self::LongBreak => SoundSignal::LongBreakStart,
        }
    }

    /// Parse a session type from a user-supplied string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "work" | "w" | "pomodoro" => Some(Self::Work),
            "short" | "short-break" | "break" | "sb" => Some(Self::ShortBreak),
            "long" | "long-break" | "lb" => Some(Self::LongBreak),
            _ => None,
        }
    }

    /// Stable machine-readable key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::ShortBreak => "short-break",
            Self::LongBreak => "long-break",
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break type.
    #[must_use]
    pub const fn is_break(self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Named sound cue emitted when a new session begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundSignal {
    /// A work session begins.
    WorkStart,
    /// A short break begins.
    BreakStart,
    /// A long break begins.
    LongBreakStart,
}

impl SoundSignal {
    /// All signals, in the order the files are usually listed.
    pub const ALL: [Self; 3] = [Self::WorkStart, Self::BreakStart, Self::LongBreakStart];

    /// Stable name of the signal; also the sound file stem.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WorkStart => "work-start",
            Self::BreakStart => "break-start",
            Self::LongBreakStart => "long-break-start",
        }
    }

    /// File name the signal resolves to inside the sounds directory.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.mp3", self.name())
    }
}

impl std::fmt::Display for SoundSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_minutes() {
        let preset = Preset::new("50/10", 50, 10, 20).unwrap();
        assert_eq!(SessionType::Work.minutes(&preset), 50);
        assert_eq!(SessionType::ShortBreak.minutes(&preset), 10);
        assert_eq!(SessionType::LongBreak.minutes(&preset), 20);
        assert_eq!(SessionType::LongBreak.seconds(&preset), 1200);
    }

    #[test]
    fn test_session_type_parse() {
        assert_eq!(SessionType::parse("work"), Some(SessionType::Work));
        assert_eq!(SessionType::parse(" W "), Some(SessionType::Work));
        assert_eq!(SessionType::parse("sb"), Some(SessionType::ShortBreak));
        assert_eq!(SessionType::parse("long-break"), Some(SessionType::LongBreak));
        assert_eq!(SessionType::parse("nap"), None);
    }

    #[test]
    fn test_entry_signals() {
        assert_eq!(SessionType::Work.entry_signal(), SoundSignal::WorkStart);
        assert_eq!(SessionType::ShortBreak.entry_signal(), SoundSignal::BreakStart);
        assert_eq!(
            SessionType::LongBreak.entry_signal(),
            SoundSignal::LongBreakStart
        );
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(SoundSignal::WorkStart.name(), "work-start");
        assert_eq!(SoundSignal::BreakStart.to_string(), "break-start");
        assert_eq!(
            SoundSignal::LongBreakStart.file_name(),
            "long-break-start.mp3"
        );
    }

    #[test]
    fn test_serde_keys() {
        let json = serde_json::to_string(&SessionType::ShortBreak).unwrap();
        assert_eq!(json, "\"short-break\"");
        let json = serde_json::to_string(&SoundSignal::LongBreakStart).unwrap();
        assert_eq!(json, "\"long-break-start\"");
    }

    #[test]
    fn test_is_break() {
        assert!(!SessionType::Work.is_break());
        assert!(SessionType::ShortBreak.is_break());
        assert!(SessionType::LongBreak.is_break());
    }
}
