//! `uanode config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::{emit, OutputFormat};
use uanode_types::NamespaceTable;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    emit(ctx.output_format, &ctx.config, |config| {
        println!("{}", "Current Configuration:".bold());
        println!();

        println!(
            "  {} {}",
            "output_format:".bold(),
            config.output_format.unwrap_or(OutputFormat::Pretty)
        );

        if config.namespaces.is_empty() {
            println!("  {} {}", "namespaces:".bold(), "(not set)".dimmed());
        } else {
            println!("  {}", "namespaces:".bold());
            for (i, ns) in config.namespaces.iter().enumerate() {
                let ns = if ns.is_empty() {
                    "(empty)".dimmed().to_string()
                } else {
                    ns.to_string()
                };
                println!("    {:>3}  {}", i.to_string().cyan(), ns);
            }
        }
    })
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load(&ctx.config_path)?;

    match key {
        "namespaces" | "namespace_array" => {
            config.namespaces = value.split(',').map(str::trim).collect::<NamespaceTable>();
            println!(
                "{} Namespace table set ({} entries).",
                "Success:".green().bold(),
                config.namespaces.len()
            );
        }
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
            println!("{} Output format set to {}.", "Success:".green().bold(), value.cyan());
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 namespaces     - Namespace array in index order (comma-separated)\n  \
                 output_format  - Default output format (pretty/json/yaml)",
                key
            );
        }
    }

    config.save(&ctx.config_path)?;

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}
