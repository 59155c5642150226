use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{ClockArgs, Cli, Commands};
use pomo::cli::commands::{self, Context};
use pomo::error::ClockError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        let code = e
            .downcast_ref::<ClockError>()
            .map_or(1, ClockError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli).context("loading configuration")?;

    let output = match cli.command {
        None => commands::tui(&ctx, &ClockArgs::default())?,
        Some(Commands::Tui(args)) => commands::tui(&ctx, &args)?,
        Some(Commands::Run(args)) => commands::run(&ctx, &args)?,
        Some(Commands::Presets) => commands::presets(&ctx)?,
        Some(Commands::Config(args)) => {
            commands::config(args.command, &ctx.config, &ctx.paths, ctx.format)?
        }
        Some(Commands::Completions { shell }) => commands::completions(&shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
