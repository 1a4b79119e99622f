//! Output writers for key statistics.
//!
//! This module handles:
//! - JSON stats files (pretty and compact)
//! - The ranked text summary printed after an analysis

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_stats, stats_to_string, write_stats, write_stats_compact};
pub use summary::{is_printable_key, ranked_summary, session_line};
