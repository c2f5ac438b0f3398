//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a graph from a trace
///
/// Any of these aborts construction; there is no partial graph.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read trace {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot determine size of {path}: {source}")]
    FilesystemError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed trace at line {line}: {reason}")]
    MalformedTrace { line: usize, reason: String },
}

impl TraceError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        TraceError::MalformedTrace {
            line,
            reason: reason.into(),
        }
    }
}

/// Errors raised while replaying a graph
#[derive(Error, Debug)]
pub enum TraversalError {
    /// The graph reached its own root again, so it was not built as a DAG
    #[error("Graph invariant violated: {0}")]
    GraphInvariantViolation(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
