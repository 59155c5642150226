//! Playback backends.

use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use tracing::debug;

use crate::error::ClockError;

/// Something that can play a sound file.
#[cfg_attr(test, mockall::automock)]
pub trait SoundPlayer {
    /// Start playing `path` without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if playback could not be started.
    fn play(&mut self, path: &Path) -> Result<(), ClockError>;

    /// Short name for logs and listings.
    fn describe(&self) -> String;
}

/// Plays sounds by spawning an external command, e.g. `paplay` or
/// `mpv --no-video`, with the file appended as the last argument.
#[derive(Debug)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
    children: Vec<Child>,
}

impl CommandPlayer {
    /// Build a player from a command line.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::Config` if the command line is blank.
    pub fn from_command_line(command_line: &str) -> Result<Self, ClockError> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words
            .next()
            .ok_or_else(|| ClockError::Config("sound player command is empty".to_string()))?;

        Ok(Self {
            program,
            args: words.collect(),
            children: Vec::new(),
        })
    }

    /// Reap players that have already exited.
    fn reap(&mut self) {
        self.children
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

impl Drop for CommandPlayer {
    fn drop(&mut self) {
        self.reap();
        if !self.children.is_empty() {
            debug!(
                running = self.children.len(),
                "leaving sound players to finish on their own"
            );
        }
    }
}

impl SoundPlayer for CommandPlayer {
    fn play(&mut self, path: &Path) -> Result<(), ClockError> {
        self.reap();

        if !path.exists() {
            return Err(ClockError::NotFound(format!(
                "sound file {}",
                path.display()
            )));
        }

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        debug!(pid = child.id(), program = %self.program, "spawned sound player");
        self.children.push(child);
        Ok(())
    }

    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Rings the terminal bell instead of playing a file.
#[derive(Debug, Default)]
pub struct BellPlayer;

impl SoundPlayer for BellPlayer {
    fn play(&mut self, _path: &Path) -> Result<(), ClockError> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "terminal bell".to_string()
    }
}

/// Plays nothing.
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&mut self, _path: &Path) -> Result<(), ClockError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "silent".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_line_parsing() {
        let player = CommandPlayer::from_command_line("mpv --no-video --really-quiet").unwrap();
        assert_eq!(player.program, "mpv");
        assert_eq!(player.args, ["--no-video", "--really-quiet"]);
        assert_eq!(player.describe(), "mpv --no-video --really-quiet");
    }

    #[test]
    fn test_blank_command_rejected() {
        assert!(matches!(
            CommandPlayer::from_command_line("   "),
            Err(ClockError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut player = CommandPlayer::from_command_line("true").unwrap();
        let result = player.play(&temp_dir.path().join("work-start.mp3"));
        assert!(matches!(result, Err(ClockError::NotFound(_))));
    }

    #[test]
    fn test_missing_program_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("break-start.mp3");
        std::fs::write(&file, b"").unwrap();

        let mut player =
            CommandPlayer::from_command_line("pomo-no-such-player-binary").unwrap();
        assert!(matches!(player.play(&file), Err(ClockError::Io(_))));
    }

    #[test]
    fn test_finished_players_are_reaped() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("work-start.mp3");
        std::fs::write(&file, b"").unwrap();

        let mut player = CommandPlayer::from_command_line("true").unwrap();
        player.play(&file).unwrap();
        assert_eq!(player.children.len(), 1);

        for _ in 0..100 {
            player.reap();
            if player.children.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert!(player.children.is_empty());
    }

    #[test]
    fn test_silent_player() {
        let mut player = SilentPlayer;
        assert!(player.play(Path::new("/nowhere.mp3")).is_ok());
    }
}
