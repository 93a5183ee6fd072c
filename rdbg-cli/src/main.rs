//! rdbg CLI application
//!
//! Command-line front end for the rdbg debugger client: configuration
//! handling plus the interactive session loop.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod repl;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "rdbg")]
#[command(about = "rdbg - Interactive debugger client")]
#[command(version = "0.1.0")]
#[command(author = "Jamey Milner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = CliConfig::load(cli.config.as_deref())?;
    debug!(path = ?cli.config, "configuration loaded");

    match cli.command {
        Some(Commands::Config { action }) => handle_config(action, &config, cli.config.as_deref()),
        None => repl::run(config, cli.quiet),
    }
}

fn handle_config(
    action: ConfigAction,
    config: &CliConfig,
    path: Option<&std::path::Path>,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
        ConfigAction::Init { force } => {
            let target = path
                .map(std::path::Path::to_path_buf)
                .unwrap_or_else(CliConfig::config_file_path);
            if target.exists() && !force {
                println!(
                    "{} Configuration already exists; use --force to overwrite",
                    "⚠️".yellow()
                );
                return Ok(());
            }
            let defaults = CliConfig::default();
            defaults.save(Some(&target))?;
            println!(
                "{} Configuration written to {}",
                "✅".green(),
                target.display()
            );
            Ok(())
        }
    }
}
