//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! The aggregator itself has no error type: it accepts any text and only
//! surfaces `std::io::Error` from the line source.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors raised while validating analyze command arguments
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("Input path cannot be empty")]
    EmptyInput,

    #[error("Output path cannot be empty")]
    EmptyOutput,

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input and output refer to the same file: {}", .0.display())]
    SameFile(PathBuf),
}
