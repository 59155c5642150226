//! Sound cues for session transitions.
//!
//! The clock only names a [`SoundSignal`]; this module resolves it to a file
//! and hands it to a [`SoundPlayer`]. Playback is fire-and-forget: failures
//! are logged and dropped here and never reach the clock.

mod player;

pub use player::{BellPlayer, CommandPlayer, SilentPlayer, SoundPlayer};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::clock::SoundSignal;
use crate::config::{Paths, SoundConfig};
use crate::error::ClockError;

/// Maps sound signals to files and plays them.
pub struct SoundBoard {
    directory: PathBuf,
    player: Box<dyn SoundPlayer>,
}

impl SoundBoard {
    /// Create a board reading files from `directory`.
    #[must_use]
    pub fn new(directory: PathBuf, player: Box<dyn SoundPlayer>) -> Self {
        Self { directory, player }
    }

    /// Build the board described by the sound settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured player command is blank.
    pub fn from_config(config: &SoundConfig, paths: &Paths) -> Result<Self, ClockError> {
        let directory = config
            .directory
            .clone()
            .unwrap_or_else(|| paths.sounds.clone());

        let player: Box<dyn SoundPlayer> = if !config.enabled {
            Box::new(SilentPlayer)
        } else if let Some(ref command) = config.player {
            Box::new(CommandPlayer::from_command_line(command)?)
        } else {
            Box::new(BellPlayer)
        };

        Ok(Self::new(directory, player))
    }

    /// A board that never makes a sound.
    #[must_use]
    pub fn silent() -> Self {
        Self::new(PathBuf::new(), Box::new(SilentPlayer))
    }

    /// File a signal resolves to.
    #[must_use]
    pub fn path_for(&self, signal: SoundSignal) -> PathBuf {
        self.directory.join(signal.file_name())
    }

    /// Directory sound files are read from.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Description of the playback backend.
    #[must_use]
    pub fn player_name(&self) -> String {
        self.player.describe()
    }

    /// Play the file for `signal`. Never fails; errors are logged.
    pub fn play(&mut self, signal: SoundSignal) {
        let path = self.path_for(signal);
        match self.player.play(&path) {
            Ok(()) => debug!(%signal, path = %path.display(), "playing sound"),
            Err(e) => warn!(%signal, path = %path.display(), error = %e, "failed to play sound"),
        }
    }
}

impl std::fmt::Debug for SoundBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundBoard")
            .field("directory", &self.directory)
            .field("player", &self.player.describe())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::player::MockSoundPlayer;
    use super::*;

    #[test]
    fn test_path_for_signal() {
        let board = SoundBoard::new(PathBuf::from("/sounds"), Box::new(SilentPlayer));
        assert_eq!(
            board.path_for(SoundSignal::LongBreakStart),
            PathBuf::from("/sounds/long-break-start.mp3")
        );
    }

    #[test]
    fn test_play_hands_path_to_player() {
        let mut player = MockSoundPlayer::new();
        player
            .expect_play()
            .withf(|path| path == Path::new("/sounds/work-start.mp3"))
            .times(1)
            .returning(|_| Ok(()));

        let mut board = SoundBoard::new(PathBuf::from("/sounds"), Box::new(player));
        board.play(SoundSignal::WorkStart);
    }

    #[test]
    fn test_play_swallows_failure() {
        let mut player = MockSoundPlayer::new();
        player
            .expect_play()
            .times(2)
            .returning(|_| Err(ClockError::NotFound("speaker".to_string())));

        let mut board = SoundBoard::new(PathBuf::from("/sounds"), Box::new(player));
        board.play(SoundSignal::BreakStart);
        board.play(SoundSignal::BreakStart);
    }

    #[test]
    fn test_from_config() {
        let paths = Paths::with_root(PathBuf::from("/tmp/pomo-test"));

        let config = SoundConfig::default();
        let board = SoundBoard::from_config(&config, &paths).unwrap();
        assert_eq!(board.directory(), paths.sounds.as_path());
        assert_eq!(board.player_name(), "terminal bell");

        let config = SoundConfig {
            enabled: true,
            directory: Some(PathBuf::from("/opt/sounds")),
            player: Some("paplay".to_string()),
        };
        let board = SoundBoard::from_config(&config, &paths).unwrap();
        assert_eq!(board.directory(), Path::new("/opt/sounds"));
        assert_eq!(board.player_name(), "paplay");

        let config = SoundConfig {
            enabled: false,
            ..SoundConfig::default()
        };
        let board = SoundBoard::from_config(&config, &paths).unwrap();
        assert_eq!(board.player_name(), "silent");
    }
}
