//! JSON stats output writer.
//!
//! Writes the key-to-record mapping as a flat JSON object keyed by key
//! identifier.

use crate::aggregator::KeyStats;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write stats to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `stats` - Aggregated key statistics
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let analysis = analyze_log(reader)?;
/// write_stats(&analysis.stats, "stats.json")?;
/// ```
pub fn write_stats(stats: &KeyStats, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    write_with(stats, output_path.as_ref(), true)
}

/// Write stats as compact JSON (no formatting)
pub fn write_stats_compact(
    stats: &KeyStats,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    write_with(stats, output_path.as_ref(), false)
}

/// Serialize stats to a pretty JSON string
pub fn stats_to_string(stats: &KeyStats) -> Result<String, OutputError> {
    serde_json::to_string_pretty(stats).map_err(OutputError::SerializationFailed)
}

/// **Private** - shared body of the pretty and compact writers
fn write_with(stats: &KeyStats, output_path: &Path, pretty: bool) -> Result<(), OutputError> {
    info!("Writing stats to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, stats)?;
    } else {
        serde_json::to_writer(&mut writer, stats)?;
    }
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Stats written successfully ({} keys, {} bytes)",
        stats.len(),
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read stats back from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::ReadFailed` - File read error
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_stats(input_path: impl AsRef<Path>) -> Result<KeyStats, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading stats from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let stats: KeyStats = serde_json::from_reader(BufReader::new(file))?;

    debug!("Stats loaded: {} keys", stats.len());

    Ok(stats)
}
