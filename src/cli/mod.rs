//! Command-line interface for Spellsweep
//!
//! Argument parsing with clap, per-command modules, and tracing setup keyed
//! off the repeated `-v` verbosity flag.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// Spellsweep - concurrent spell checking against a word-list
#[derive(Parser)]
#[command(
    name = "spellsweep",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concurrent spell checking against a word-list, one worker per file",
    propagate_version = true
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a batch of files and report one combined summary
    Check(commands::check::CheckArgs),
    /// Submit spell-check tasks one at a time from a menu loop
    Interactive(commands::interactive::InteractiveArgs),
    /// Show version information
    Version(commands::version::VersionArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        match self.command {
            Commands::Check(args) => {
                commands::check::execute(args, self.quiet, self.config.as_deref()).await
            }
            Commands::Interactive(args) => {
                commands::interactive::execute(args, self.quiet, self.config.as_deref()).await
            }
            Commands::Version(args) => commands::version::execute(args).await,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
