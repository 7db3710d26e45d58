use std::io;

use thiserror::Error;

/// Errors from parsing a single log line.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The first 10 characters were not a valid `[HH:MM:SS]` prefix.
    #[error("malformed timestamp prefix in line: {line:?}")]
    MalformedTimestamp { line: String },

    /// The line matched a known shape but had too few tokens for it.
    #[error("malformed line, too few tokens for its shape: {line:?}")]
    MalformedLine { line: String },
}

/// Errors that abort a whole ingestion run. A log file is trusted to be
/// well-formed; any of these indicates corruption worth halting on.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Read failure surfaced by the underlying line source.
    #[error("failed to read from log source: {0}")]
    Source(#[from] io::Error),
}
