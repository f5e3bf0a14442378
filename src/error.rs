//! Error types for dump loading and classification.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a dump or building the rule tables.
///
/// Per-file problems during classification are not errors: the file is
/// logged and excluded. Only inputs nothing downstream can do without
/// surface here.
#[derive(Error, Debug)]
pub enum DtError {
    #[error("missing input: {what} not found at {}", path.display())]
    MissingInput { what: &'static str, path: PathBuf },

    #[error("malformed {kind} entry at line {line}: {content:?}")]
    MalformedEntry {
        kind: &'static str,
        line: usize,
        content: String,
    },

    #[error("invalid pattern {pattern:?} in {owner}: {source}")]
    InvalidPattern {
        owner: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DtError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for dtgen operations.
pub type Result<T> = std::result::Result<T, DtError>;
