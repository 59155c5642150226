//! Duration presets and the catalog the user picks from.

use serde::{Deserialize, Serialize};

use crate::error::ClockError;

/// Work, short-break and long-break durations, in minutes, under one label.
///
/// A `Preset` can only be built through [`Preset::new`] (or deserialized,
/// which goes through the same checks), so every duration is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPreset")]
pub struct Preset {
    label: String,
    work_minutes: u32,
    short_break_minutes: u32,
    long_break_minutes: u32,
}

/// Unchecked preset as it appears in the config file.
#[derive(Deserialize)]
struct RawPreset {
    label: String,
    work_minutes: u32,
    short_break_minutes: u32,
    long_break_minutes: u32,
}

impl TryFrom<RawPreset> for Preset {
    type Error = ClockError;

    fn try_from(raw: RawPreset) -> Result<Self, Self::Error> {
        Self::new(
            raw.label,
            raw.work_minutes,
            raw.short_break_minutes,
            raw.long_break_minutes,
        )
    }
}

/// Longest session a preset may ask for: one day.
pub const MAX_MINUTES: u32 = 24 * 60;

impl Preset {
    /// Create a preset.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::InvalidPreset` if the label is blank or any
    /// duration is zero or longer than [`MAX_MINUTES`].
    pub fn new(
        label: impl Into<String>,
        work_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
    ) -> Result<Self, ClockError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ClockError::InvalidPreset("label must not be empty".to_string()));
        }
        for (name, value) in [
            ("work", work_minutes),
            ("short break", short_break_minutes),
            ("long break", long_break_minutes),
        ] {
            if value == 0 {
                return Err(ClockError::InvalidPreset(format!(
                    "{label}: {name} minutes must be positive"
                )));
            }
            if value > MAX_MINUTES {
                return Err(ClockError::InvalidPreset(format!(
                    "{label}: {name} minutes must be at most {MAX_MINUTES}"
                )));
            }
        }

        Ok(Self {
            label,
            work_minutes,
            short_break_minutes,
            long_break_minutes,
        })
    }

    /// Parse a custom preset written as `work/short/long`, e.g. `45/10/20`.
    ///
    /// The label is the full `work/short/long` triple so it never collides
    /// with a catalog label that has a different long break.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::InvalidPreset` if the string is malformed or a
    /// duration is out of range.
    pub fn parse(s: &str) -> Result<Self, ClockError> {
        let parts: Vec<&str> = s.trim().split('/').map(str::trim).collect();
        let [work, short, long] = parts.as_slice() else {
            return Err(ClockError::InvalidPreset(format!(
                "'{s}' is not of the form work/short/long"
            )));
        };

        let minutes = |part: &str| {
            part.parse::<u32>().map_err(|_| {
                ClockError::InvalidPreset(format!("'{part}' is not a whole number of minutes"))
            })
        };
        let (work, short, long) = (minutes(work)?, minutes(short)?, minutes(long)?);

        Self::new(format!("{work}/{short}/{long}"), work, short, long)
    }

    /// Display label, e.g. `25/5`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Work session length in minutes.
    #[must_use]
    pub const fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    /// Short break length in minutes.
    #[must_use]
    pub const fn short_break_minutes(&self) -> u32 {
        self.short_break_minutes
    }

    /// Long break length in minutes.
    #[must_use]
    pub const fn long_break_minutes(&self) -> u32 {
        self.long_break_minutes
    }

    fn builtin(label: &str, work: u32, short: u32, long: u32) -> Self {
        Self {
            label: label.to_string(),
            work_minutes: work,
            short_break_minutes: short,
            long_break_minutes: long,
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::builtin("25/5", 25, 5, 15)
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}m work, {}m short break, {}m long break)",
            self.label, self.work_minutes, self.short_break_minutes, self.long_break_minutes
        )
    }
}

/// Ordered, non-empty list of presets with unique labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Preset>", into = "Vec<Preset>")]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Build a catalog.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::Config` if the list is empty or two presets share
    /// a label.
    pub fn new(presets: Vec<Preset>) -> Result<Self, ClockError> {
        if presets.is_empty() {
            return Err(ClockError::Config(
                "preset catalog must contain at least one preset".to_string(),
            ));
        }
        for (i, preset) in presets.iter().enumerate() {
            if presets[..i].iter().any(|p| p.label == preset.label) {
                return Err(ClockError::Config(format!(
                    "duplicate preset label '{}'",
                    preset.label
                )));
            }
        }
        Ok(Self { presets })
    }

    /// The preset a fresh clock starts with.
    #[must_use]
    pub fn default_preset(&self) -> &Preset {
        &self.presets[0]
    }

    /// Find a preset by its label (case-insensitive).
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Preset> {
        self.presets
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(label.trim()))
    }

    /// Find a preset by its 1-based position, as shown in listings.
    #[must_use]
    pub fn nth(&self, position: usize) -> Option<&Preset> {
        position.checked_sub(1).and_then(|i| self.presets.get(i))
    }

    /// Resolve user input: a catalog label, a 1-based position, or a custom
    /// `work/short/long` preset. A custom preset with the same durations as a
    /// catalog entry resolves to that entry.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::NotFound` if nothing matches and the input is not a
    /// valid custom preset.
    pub fn resolve(&self, input: &str) -> Result<Preset, ClockError> {
        if let Some(preset) = self.get(input) {
            return Ok(preset.clone());
        }
        if let Some(preset) = input.trim().parse().ok().and_then(|n| self.nth(n)) {
            return Ok(preset.clone());
        }
        if input.matches('/').count() == 2 {
            let custom = Preset::parse(input)?;
            let same_durations = |p: &&Preset| {
                p.work_minutes == custom.work_minutes
                    && p.short_break_minutes == custom.short_break_minutes
                    && p.long_break_minutes == custom.long_break_minutes
            };
            return Ok(self.iter().find(same_durations).cloned().unwrap_or(custom));
        }
        Err(ClockError::NotFound(format!("no preset named '{input}'")))
    }

    /// 1-based position of the preset with this label.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.presets.iter().position(|p| p.label == label).map(|i| i + 1)
    }

    /// Iterate over presets in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Preset> {
        self.presets.iter()
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Always false; a catalog holds at least one preset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self {
            presets: vec![
                Preset::builtin("25/5", 25, 5, 15),
                Preset::builtin("50/10", 50, 10, 20),
                Preset::builtin("90/20", 90, 20, 30),
            ],
        }
    }
}

impl TryFrom<Vec<Preset>> for PresetCatalog {
    type Error = ClockError;

    fn try_from(presets: Vec<Preset>) -> Result<Self, Self::Error> {
        Self::new(presets)
    }
}

impl From<PresetCatalog> for Vec<Preset> {
    fn from(catalog: PresetCatalog) -> Self {
        catalog.presets
    }
}

impl<'a> IntoIterator for &'a PresetCatalog {
    type Item = &'a Preset;
    type IntoIter = std::slice::Iter<'a, Preset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
