//! Command implementations for pomo.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod config;

pub use completions::{completions, generate_completions, shell_from_str};
pub use config::config;

use tracing::info;

use crate::cli::args::{ClockArgs, Cli, OutputFormat, RunArgs};
use crate::clock::SessionClock;
use crate::config::{Config, Paths};
use crate::error::ClockError;
use crate::headless::Runner;
use crate::logging::{self, LogTarget};
use crate::output::format_presets;
use crate::sound::SoundBoard;

/// Everything a command needs from the command line and config file.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub paths: Paths,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Context {
    /// Load the config file named on the command line, or the default one.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn from_cli(cli: &Cli) -> Result<Self, ClockError> {
        let paths = match cli.config {
            Some(ref file) => Paths::for_config_file(file.clone()),
            None => Paths::default(),
        };
        let config = Config::load_from_path(&paths.config_file)?;
        config.general.color.apply();

        Ok(Self {
            format: cli.output.unwrap_or(config.general.default_output),
            verbose: cli.verbose,
            config,
            paths,
        })
    }

    /// Build the clock and sound board for `args`.
    ///
    /// # Errors
    ///
    /// Returns an error if the requested preset does not exist or the sound
    /// player is misconfigured.
    pub fn build_clock(&self, args: &ClockArgs) -> Result<(SessionClock, SoundBoard), ClockError> {
        let preset = self.config.initial_preset(args.preset.as_deref())?;
        let auto_advance = args.auto_advance || self.config.clock.auto_advance;
        let clock = SessionClock::new(preset).with_auto_advance(auto_advance);

        let sounds = if args.mute {
            SoundBoard::silent()
        } else {
            SoundBoard::from_config(&self.config.sound, &self.paths)?
        };

        info!(
            preset = clock.preset().label(),
            auto_advance,
            player = %sounds.player_name(),
            "clock ready"
        );
        Ok((clock, sounds))
    }
}

/// Execute presets command
///
/// # Errors
///
/// Returns an error if the configured default preset cannot be resolved or
/// output formatting fails.
pub fn presets(ctx: &Context) -> Result<String, ClockError> {
    let active = ctx.config.initial_preset(None)?;
    format_presets(&ctx.config.presets, active.label(), ctx.format)
}

/// Execute tui command
///
/// # Errors
///
/// Returns an error if the clock cannot be built or the terminal fails.
pub fn tui(ctx: &Context, args: &ClockArgs) -> Result<String, ClockError> {
    logging::init(LogTarget::File(&ctx.paths.log_file), ctx.verbose)?;
    let (clock, sounds) = ctx.build_clock(args)?;
    let summary = crate::tui::run(clock, sounds, &ctx.config.presets)?;
    Ok(summary)
}

/// Execute run command
///
/// # Errors
///
/// Returns an error if the clock cannot be built or output fails.
pub fn run(ctx: &Context, args: &RunArgs) -> Result<String, ClockError> {
    logging::init(LogTarget::Stderr, ctx.verbose)?;
    let (clock, sounds) = ctx.build_clock(&args.clock)?;
    let runner = Runner::new(clock, sounds, ctx.format, args.sessions, ctx.verbose);

    let mut stdout = std::io::stdout().lock();
    let ended = runner.run(&mut stdout)?;
    info!(ended, "run finished");
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn context_for(dir: &TempDir, yaml: &str, extra: &[&str]) -> Context {
        let file = dir.path().join("config.yaml");
        std::fs::write(&file, yaml).unwrap();
        let mut argv = vec!["pomo", "--config", file.to_str().unwrap()];
        argv.extend_from_slice(extra);
        let cli = Cli::try_parse_from(argv).unwrap();
        Context::from_cli(&cli).unwrap()
    }

    #[test]
    fn test_context_uses_config_output() {
        let dir = TempDir::new().unwrap();
        let ctx = context_for(&dir, "general:\n  default_output: json\n", &[]);
        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.paths.root, dir.path());

        let ctx = context_for(&dir, "general:\n  default_output: json\n", &["-o", "pretty"]);
        assert_eq!(ctx.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_build_clock_merges_flags() {
        let dir = TempDir::new().unwrap();
        let ctx = context_for(&dir, "clock:\n  default_preset: \"50/10\"\n", &[]);

        let (clock, sounds) = ctx.build_clock(&ClockArgs::default()).unwrap();
        assert_eq!(clock.preset().label(), "50/10");
        assert_eq!(clock.remaining_seconds(), 3000);
        assert!(!clock.auto_advance());
        assert_eq!(sounds.player_name(), "terminal bell");

        let args = ClockArgs {
            preset: Some("3".to_string()),
            auto_advance: true,
            mute: true,
        };
        let (clock, sounds) = ctx.build_clock(&args).unwrap();
        assert_eq!(clock.preset().label(), "90/20");
        assert!(clock.auto_advance());
        assert_eq!(sounds.player_name(), "silent");
    }

    #[test]
    fn test_build_clock_unknown_preset() {
        let dir = TempDir::new().unwrap();
        let ctx = context_for(&dir, "{}\n", &[]);
        let args = ClockArgs {
            preset: Some("lunch".to_string()),
            ..ClockArgs::default()
        };
        assert!(matches!(
            ctx.build_clock(&args),
            Err(ClockError::NotFound(_))
        ));
    }

    #[test]
    fn test_presets_json() {
        let dir = TempDir::new().unwrap();
        let ctx = context_for(&dir, "{}\n", &["-o", "json"]);
        let json = presets(&ctx).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["active"], "25/5");
        assert_eq!(parsed["count"], 3);
    }
}
