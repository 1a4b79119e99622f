//! Aggregation of logkeys lines into per-key statistics.
//!
//! This module transforms raw log lines into:
//! - Per-key press counts
//! - Per-key, per-modifier counts
//! - Line and timestamp bookkeeping for the session

pub mod analyze;
pub mod key_stats;

// Re-export main types and functions
pub use analyze::{analyze_lines, analyze_log, Aggregator, Analysis, SessionInfo};
pub use key_stats::{KeyRecord, KeyStats, ModifierCounts};
