//! Human-readable ranked key summary.

use crate::aggregator::{KeyStats, SessionInfo};

/// Whether a key belongs in the printed ranking
///
/// Named keys (`<enter>`, `<bckspc>`, ...) and the space bar are left out of
/// the printed list. They stay in the JSON output.
pub fn is_printable_key(key: &str) -> bool {
    !(key.starts_with('<') || key.starts_with(' '))
}

/// Ranked `"<key>: <count>"` lines for printable keys
///
/// **Public** - main entry point for the text report
pub fn ranked_summary(stats: &KeyStats) -> Vec<String> {
    stats
        .ranked_keys()
        .into_iter()
        .filter(|key| is_printable_key(key))
        .filter_map(|key| stats.get(key))
        .map(|record| format!("{}: {}", record.key, record.count))
        .collect()
}

/// One-line description of the analyzed session, for logging
pub fn session_line(session: &SessionInfo, stats: &KeyStats) -> String {
    let mut line = format!(
        "{} data lines, {} noise lines, {} keys pressed, {} distinct",
        session.data_lines(),
        session.lines_skipped,
        stats.total_presses(),
        stats.len()
    );

    if let (Some(first), Some(last)) = (session.first_timestamp, session.last_timestamp) {
        line.push_str(&format!(
            " | {} to {}",
            first.format("%Y-%m-%d %H:%M:%S"),
            last.format("%Y-%m-%d %H:%M:%S")
        ));
    }

    line
}
