//! Philia CLI - social network queries from the command line.
//!
//! Philia loads a friendship network from a text file and answers friend
//! list, connection, and statistics queries against it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Philia: friendship network query interface.
#[derive(Parser)]
#[command(name = "philia")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the direct friends of an account
    Friends {
        /// Network file to load
        file: PathBuf,

        /// Account ID to look up
        id: usize,
    },

    /// Find the shortest friendship path between two accounts
    Connection {
        /// Network file to load
        file: PathBuf,

        /// Starting account ID
        from: usize,

        /// Target account ID
        to: usize,
    },

    /// Show summary statistics for a network file
    Stats {
        /// Network file to load
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Run the appropriate command
    let result = match cli.command {
        Commands::Friends { file, id } => cli::friends::run(&file, id),
        Commands::Connection { file, from, to } => cli::connection::run(&file, from, to),
        Commands::Stats { file } => cli::stats::run(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
