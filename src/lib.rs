//! Keyboard Tools: logkeys analyzer
//!
//! Per-key usage statistics from keystroke logs written by `logkeys`.
//! Every key press is counted along with the modifier keys (shift, ctrl,
//! meta, alt) held at the time.
//!
//! This crate provides the core implementation for the
//! `kbt-logkeys` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! kbt-logkeys ~/.logkeys.log keystats.json
//! ```
//!
//! As a library:
//!
//! ```
//! use kbt_logkeys::aggregator::analyze_lines;
//!
//! let analysis = analyze_lines(["2020-01-01 12:00:00 > <lshft>hi\n"]);
//! assert_eq!(analysis.stats.get("h").unwrap().count, 1);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
