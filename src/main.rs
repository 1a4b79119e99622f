//! kbt-logkeys CLI
//!
//! Analyze a logkeys log and write per-key statistics as JSON.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use kbt_logkeys::commands::{execute_analyze, validate_args, validate_stats_file, AnalyzeArgs};

/// Analyze a logkeys log to generate statistics.
#[derive(Parser, Debug)]
#[command(name = "kbt-logkeys")]
#[command(version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    /// Optional subcommand; without one the log is analyzed
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    analyze: AnalyzeCli,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Arguments for the default analyze action
#[derive(Args, Debug)]
struct AnalyzeCli {
    /// Path to the logkeys log file.
    #[arg(required = true)]
    infile: Option<PathBuf>,

    /// Path to create the analysis file.
    #[arg(required = true)]
    outfile: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Do not print the ranked key summary
    #[arg(short, long)]
    quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a stats JSON file
    Validate {
        /// Path to stats JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Some(Commands::Validate { file }) => {
            validate_stats_file(&file)?;
        }

        None => {
            let args = AnalyzeArgs {
                input: cli.analyze.infile.unwrap_or_default(),
                output: cli.analyze.outfile.unwrap_or_default(),
                compact: cli.analyze.compact,
                print_summary: !cli.analyze.quiet,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(&args)?;
        }
    }

    Ok(())
}
