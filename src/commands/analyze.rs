//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads the logkeys log
//! 2. Aggregates per-key statistics
//! 3. Writes the JSON stats file
//! 4. Prints the ranked summary

use super::models::AnalyzeArgs;
use crate::aggregator::{analyze_log, Analysis};
use crate::output::{ranked_summary, session_line, write_stats, write_stats_compact};
use crate::utils::config::SUMMARY_HEADING;
use crate::utils::error::ArgsError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Analyze command arguments
///
/// # Returns
/// The completed analysis, after the stats file has been written
///
/// # Errors
/// * Input file cannot be opened or read
/// * Stats file cannot be written
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<Analysis> {
    let start_time = Instant::now();

    // Step 1: Read and aggregate
    info!("Step 1/2: Analyzing log: {}", args.input.display());
    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open log file {}", args.input.display()))?;
    let analysis = analyze_log(BufReader::new(file))
        .with_context(|| format!("Failed to read log file {}", args.input.display()))?;

    info!("{}", session_line(&analysis.session, &analysis.stats));

    debug!("Top 3 keys:");
    for (i, key) in analysis.stats.ranked_keys().iter().take(3).enumerate() {
        if let Some(record) = analysis.stats.get(key) {
            debug!("  {}. {:?} pressed {} times", i + 1, record.key, record.count);
        }
    }

    // Step 2: Write outputs
    info!("Step 2/2: Writing stats...");
    let written = if args.compact {
        write_stats_compact(&analysis.stats, &args.output)
    } else {
        write_stats(&analysis.stats, &args.output)
    };
    written.context("Failed to write stats JSON")?;

    info!("✓ Stats written to: {}", args.output.display());

    if args.print_summary {
        println!("{}", SUMMARY_HEADING);
        for line in ranked_summary(&analysis.stats) {
            println!("{}", line);
        }
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(analysis)
}

/// Validate analyze arguments before touching any files
///
/// **Public** - called by main.rs before execution
pub fn validate_args(args: &AnalyzeArgs) -> Result<(), ArgsError> {
    if args.input.as_os_str().is_empty() {
        return Err(ArgsError::EmptyInput);
    }

    if args.output.as_os_str().is_empty() {
        return Err(ArgsError::EmptyOutput);
    }

    if !args.input.is_file() {
        return Err(ArgsError::InputNotFound(args.input.clone()));
    }

    // Writing over the log would truncate it before it is read
    let same = match (args.input.canonicalize(), args.output.canonicalize()) {
        (Ok(input), Ok(output)) => input == output,
        _ => args.input == args.output,
    };
    if same {
        return Err(ArgsError::SameFile(args.output.clone()));
    }

    Ok(())
}
