//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing::Level;

use crate::config::Config;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;

    // Determine output format
    let output_format = cli.output.or(config.output_format).unwrap_or_default();

    let ctx = commands::Context {
        output_format,
        verbose: cli.verbose,
        config,
        config_path,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Parse(args) => commands::parse::execute(&ctx, args),
        Commands::Resolve(args) => commands::resolve::execute(&ctx, args),
        Commands::Path(args) => commands::path::execute(&ctx, args),
        Commands::ReferenceTypes => commands::reference_types::execute(&ctx),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Diagnostics go to stderr so they never mix with command output.
fn init_logging(verbose: bool, no_color: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!no_color)
        .init();
}
