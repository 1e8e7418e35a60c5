use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "challenger")]
#[command(about = "Challenger - daily habit challenges with streaks, scores and rank badges")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.challenger/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (reads commands from stdin)
    Session {
        /// Read commands from this file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// List challenges
    List {
        /// Only show joined challenges
        #[arg(long)]
        joined: bool,

        /// Only show challenges in this category
        #[arg(long)]
        category: Option<String>,

        /// Only show challenges whose title or description contains this text
        #[arg(long)]
        search: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the rank ladder
    Ladder,

    /// Show the rank tier for a number of check-in days
    Rank {
        days: u32,
    },

    /// Write the default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Session { script }) => {
            cli::session::session_command(config_path, script.as_deref())?;
        }
        Some(Commands::List {
            joined,
            category,
            search,
            json,
        }) => {
            let filter = cli::list::ListFilter {
                joined,
                category,
                search,
            };
            cli::list::list_command(config_path, &filter, json)?;
        }
        Some(Commands::Ladder) => {
            cli::ladder::ladder_command(config_path)?;
        }
        Some(Commands::Rank { days }) => {
            cli::ladder::rank_command(config_path, days)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path, force)?;
        }
        None => {
            // Default: interactive session
            cli::session::session_command(config_path, None)?;
        }
    }

    Ok(())
}
