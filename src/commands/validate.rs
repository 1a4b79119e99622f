use crate::output::read_stats;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a stats JSON file
pub fn validate_stats_file(file_path: &Path) -> Result<()> {
    println!("Validating stats: {}", file_path.display());

    let stats = read_stats(file_path)
        .with_context(|| format!("Invalid stats file {}", file_path.display()))?;

    println!("✓ Valid stats JSON");
    println!("  Distinct keys: {}", stats.len());
    println!("  Total presses: {}", stats.total_presses());
    if let Some(top) = stats.ranked_keys().first() {
        println!("  Most pressed:  {:?}", top);
    }

    Ok(())
}
