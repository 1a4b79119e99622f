//! Log line parsing.
//!
//! This module handles:
//! - Splitting logkeys lines into timestamp and keys
//! - Tokenizing the keys into literal and bracketed key tokens
//! - Recognizing the fixed set of modifier tokens

pub mod log_line;
pub mod modifier;
pub mod tokenizer;

// Re-export main types
pub use log_line::{parse_timestamp, LogLine};
pub use modifier::Modifier;
pub use tokenizer::{tokenize, Tokens};
