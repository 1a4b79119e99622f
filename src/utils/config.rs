//! Configuration and constants for the analyzer.

/// Separator between the timestamp and the logged keys on a data line
pub const LOG_SEPARATOR: &str = " > ";

/// Named token a literal newline is rewritten to
pub const ENTER_TOKEN: &str = "<enter>";

/// Timestamp layout written by logkeys, e.g. "2020-01-01 12:00:00+0100"
pub const LOGKEYS_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%z";

/// Same layout without a UTC offset (older logkeys builds)
pub const LOGKEYS_NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Heading printed above the ranked summary
pub const SUMMARY_HEADING: &str = "Keys in order of popularity:";
