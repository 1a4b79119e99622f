//! Splitting of raw logkeys lines into timestamp and keys.
//!
//! logkeys writes one line per burst of typing:
//!
//! ```text
//! 2020-01-01 12:00:00+0100 > <lshft>hello
//! ```
//!
//! Lines without the `" > "` separator (session banners, blank lines) carry
//! no key data and are reported as `None`.

use crate::utils::config::{
    ENTER_TOKEN, LOGKEYS_NAIVE_TIMESTAMP_FORMAT, LOGKEYS_TIMESTAMP_FORMAT, LOG_SEPARATOR,
};
use chrono::{DateTime, NaiveDateTime};

/// A data line, case-folded and split at the first separator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Everything before the separator
    pub timestamp: String,

    /// Everything after the separator, with newlines rewritten to `<enter>`
    pub keys: String,
}

impl LogLine {
    /// Parse one raw line
    ///
    /// **Public** - main entry point for line splitting
    ///
    /// The whole line is lower-cased before splitting, so literal keys and
    /// bracket names compare case-insensitively. Returns `None` for lines
    /// without a separator.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.contains(LOG_SEPARATOR) {
            return None;
        }

        let folded = line.to_lowercase();
        let (timestamp, keys) = folded.split_once(LOG_SEPARATOR)?;

        Some(Self {
            timestamp: timestamp.to_string(),
            keys: keys.replace('\n', ENTER_TOKEN),
        })
    }

    /// Wall-clock time of this line, if the timestamp is in logkeys format
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }
}

/// Parse a logkeys timestamp, with or without a UTC offset
///
/// Offset timestamps keep their local wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    DateTime::parse_from_str(raw, LOGKEYS_TIMESTAMP_FORMAT)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, LOGKEYS_NAIVE_TIMESTAMP_FORMAT))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_data_line() {
        let line = LogLine::parse("2020-01-01 12:00:00 > <LShft>fK\n").unwrap();
        assert_eq!(line.timestamp, "2020-01-01 12:00:00");
        assert_eq!(line.keys, "<lshft>fk<enter>");
    }

    #[test]
    fn test_lines_without_separator_are_skipped() {
        assert_eq!(LogLine::parse("foo"), None);
        assert_eq!(LogLine::parse("\n"), None);
        assert_eq!(LogLine::parse("Logging started ...\n"), None);
        assert_eq!(LogLine::parse("a>b"), None);
    }

    #[test]
    fn test_split_at_first_separator_only() {
        let line = LogLine::parse("ts > a > b").unwrap();
        assert_eq!(line.timestamp, "ts");
        assert_eq!(line.keys, "a > b");
    }

    #[test]
    fn test_empty_keys_part() {
        let line = LogLine::parse(" > ").unwrap();
        assert_eq!(line.timestamp, "");
        assert_eq!(line.keys, "");
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let parsed = parse_timestamp("2020-01-01 12:00:00+0100").unwrap();
        let expected = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_timestamp_without_offset() {
        assert!(parse_timestamp("2020-01-01 12:00:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
