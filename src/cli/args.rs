use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro session clock for the terminal")]
#[command(long_about = "pomo - A Pomodoro session clock for the terminal

Alternates work sessions with short breaks, and gives you a long break
after every fourth completed work session. Pick between duration presets
(25/5, 50/10, 90/20 or your own) and let sessions run into each other
with auto-advance.

QUICK START:
  pomo                      Open the interactive clock
  pomo tui --preset 50/10   Start with the 50/10 preset
  pomo run --auto-advance   Plain-text clock that keeps cycling
  pomo presets              List the available presets

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Use this config file instead of ~/.pomo/config.yaml
    #[arg(long, short = 'c', global = true, env = "POMO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug details (to ~/.pomo/pomo.log while the TUI is open)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive clock (default)
    ///
    /// Full-screen countdown with a progress gauge, preset picker and
    /// session counter.
    ///
    /// # Keybindings
    ///
    ///   s / Enter      Start
    ///   p              Pause
    ///   Space          Start/pause
    ///   r              Reset (back to work, count cleared)
    ///   1-9            Choose preset
    ///   a              Toggle auto-advance
    ///   w / b / l      Jump to work / short break / long break
    ///   ?              Help
    ///   q / Esc        Quit
    ///
    /// # Examples
    ///
    ///   pomo tui                    Launch with the default preset
    ///   pomo tui -p 90/20 -a        Long sessions, auto-advance on
    Tui(ClockArgs),

    /// Run the clock in plain-text mode
    ///
    /// Starts immediately and prints a line every time a session ends.
    /// Stops after the given number of sessions, or after the first one
    /// when auto-advance is off.
    ///
    /// # Examples
    ///
    ///   pomo run                         One work session
    ///   pomo run -a --sessions 8         Four work sessions and their breaks
    ///   pomo run -p 45/10/20 -o json     Custom preset, JSON lines
    Run(RunArgs),

    /// List the available presets
    ///
    /// Shows every preset in the catalog with its work, short break and
    /// long break durations. The preset a new clock starts with is marked.
    Presets,

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// Example: pomo completions bash > ~/.bash_completion.d/pomo
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

/// Options shared by every command that builds a clock.
#[derive(Args, Debug, Clone, Default)]
pub struct ClockArgs {
    /// Preset label, position in `pomo presets`, or custom work/short/long
    #[arg(long, short = 'p')]
    pub preset: Option<String>,

    /// Start the next session automatically when one ends
    #[arg(long, short = 'a')]
    pub auto_advance: bool,

    /// Do not play sound cues
    #[arg(long)]
    pub mute: bool,
}

/// Arguments for the plain-text runner.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub clock: ClockArgs,

    /// Stop after this many sessions have ended
    #[arg(long, short = 'n')]
    pub sessions: Option<u32>,
}

/// Arguments for config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the path of the configuration file
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
