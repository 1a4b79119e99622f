//! Fold logkeys lines into key statistics.
//!
//! Each data line is tokenized and scanned left to right. Modifier tokens are
//! buffered; the next ordinary key is recorded with the buffered modifiers
//! and the buffer is cleared. Modifiers left in the buffer when the line ends
//! are dropped, they never apply to a key on the following line.

use super::key_stats::KeyStats;
use crate::parser::{tokenize, LogLine, Modifier};
use chrono::NaiveDateTime;
use log::{debug, info};
use std::io::{self, BufRead};

/// Bookkeeping about the lines an analysis consumed
///
/// Kept apart from `KeyStats` so it never leaks into the serialized mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInfo {
    /// Lines read from the source
    pub lines_read: u64,

    /// Lines skipped for lacking a separator
    pub lines_skipped: u64,

    /// Earliest timestamp seen on a data line
    pub first_timestamp: Option<NaiveDateTime>,

    /// Latest timestamp seen on a data line
    pub last_timestamp: Option<NaiveDateTime>,
}

impl SessionInfo {
    /// Number of lines that carried key data
    pub fn data_lines(&self) -> u64 {
        self.lines_read - self.lines_skipped
    }

    fn observe_timestamp(&mut self, ts: NaiveDateTime) {
        self.first_timestamp = Some(self.first_timestamp.map_or(ts, |t| t.min(ts)));
        self.last_timestamp = Some(self.last_timestamp.map_or(ts, |t| t.max(ts)));
    }
}

/// Result of a completed analysis
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub stats: KeyStats,
    pub session: SessionInfo,
}

/// Incremental analyzer, one line at a time
#[derive(Debug, Default)]
pub struct Aggregator {
    stats: KeyStats,
    session: SessionInfo,
    pending: Vec<Modifier>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one raw line, including its trailing newline if any
    pub fn feed_line(&mut self, line: &str) {
        self.session.lines_read += 1;

        let Some(parsed) = LogLine::parse(line) else {
            self.session.lines_skipped += 1;
            return;
        };

        if let Some(ts) = parsed.parsed_timestamp() {
            self.session.observe_timestamp(ts);
        }

        for token in tokenize(&parsed.keys) {
            match Modifier::from_token(token) {
                Some(modifier) => self.pending.push(modifier),
                None => {
                    self.stats.record_keypress(token, &self.pending);
                    self.pending.clear();
                }
            }
        }

        if !self.pending.is_empty() {
            debug!(
                "Dropping {} trailing modifier(s) at end of line {}",
                self.pending.len(),
                self.session.lines_read
            );
            self.pending.clear();
        }
    }

    /// Finish the run and hand over the results
    pub fn finish(self) -> Analysis {
        Analysis {
            stats: self.stats,
            session: self.session,
        }
    }
}

/// Analyze a whole logkeys log
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `source` - Buffered reader over the log
///
/// # Returns
/// Key statistics plus line bookkeeping
///
/// # Errors
/// Only I/O errors from `source`. Invalid UTF-8 is decoded lossily and
/// malformed lines are skipped.
pub fn analyze_log<R: BufRead>(mut source: R) -> io::Result<Analysis> {
    let mut aggregator = Aggregator::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if source.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        feed_chunk(&mut aggregator, &String::from_utf8_lossy(&buf));
    }

    let analysis = aggregator.finish();
    info!(
        "Analyzed {} lines ({} skipped), {} distinct keys",
        analysis.session.lines_read,
        analysis.session.lines_skipped,
        analysis.stats.len()
    );

    Ok(analysis)
}

/// Feed text read up to and including a `'\n'`
///
/// **Private** - universal newlines: `"\r\n"` and a lone `'\r'` both end a
/// line and read as `'\n'`.
fn feed_chunk(aggregator: &mut Aggregator, chunk: &str) {
    let mut rest = chunk;

    while let Some(pos) = rest.find('\r') {
        let (line, tail) = rest.split_at(pos);
        aggregator.feed_line(&format!("{}\n", line));

        let tail = &tail[1..];
        rest = tail.strip_prefix('\n').unwrap_or(tail);
    }

    if !rest.is_empty() {
        aggregator.feed_line(rest);
    }
}

/// Analyze lines already held in memory
///
/// Each item is one line; include the trailing `"\n"` where the log had one.
pub fn analyze_lines<I, S>(lines: I) -> Analysis
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = Aggregator::new();
    for line in lines {
        aggregator.feed_line(line.as_ref());
    }
    aggregator.finish()
}
