//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::statistics::FailureCause;
use thiserror::Error;

/// Errors raised by the statistics accumulators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatisticsError {
    /// The fatal-exception slot is write-once; the first cause is kept.
    #[error("Fatal exception already recorded: {existing}")]
    FatalExceptionAlreadySet { existing: FailureCause },
}

/// Errors that can occur while writing or reading report files
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
