//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::ClockError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or serialized.
pub fn config(
    cmd: ConfigCommands,
    config: &Config,
    paths: &Paths,
    format: OutputFormat,
) -> Result<String, ClockError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => Ok(serde_yaml::to_string(config)?),
        },

        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),

        ConfigCommands::Init { force } => init_config(paths, force),
    }
}

fn init_config(paths: &Paths, force: bool) -> Result<String, ClockError> {
    if paths.config_file.exists() && !force {
        return Err(ClockError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;

    Ok(format!(
        "{} Wrote {}\n   Put work-start.mp3, break-start.mp3 and long-break-start.mp3 in {}",
        "✓".green(),
        paths.config_file.display(),
        paths.sounds.display()
    ))
}
