//! Driftwatch CLI
//!
//! Command-line interface for driftwatch

use clap::{Parser, Subcommand};
use driftwatch_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "driftwatch")]
#[command(about = "Driftwatch - API drift detection", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines instead of human-readable output
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two recorded snapshots and report drift
    Compare(commands::compare::CompareArgs),
    /// Analyze stability and latency trends over a snapshot history
    Trend(commands::trend::TrendArgs),
}

fn main() {
    let cli = Cli::parse();

    let profile = if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    };
    logging_facility::init(profile);

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Trend(args) => commands::trend::execute(args),
    };

    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
