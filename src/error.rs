//! Error types for the oracle generator and the KAT ingester.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for oracle and ingest operations
pub type Result<T> = std::result::Result<T, KatError>;

/// Which of the three vector fields a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Key,
    Plaintext,
    Ciphertext,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Key => write!(f, "key"),
            Field::Plaintext => write!(f, "plaintext"),
            Field::Ciphertext => write!(f, "ciphertext"),
        }
    }
}

/// Errors that can occur while producing or ingesting vectors
#[derive(Debug, Error)]
pub enum KatError {
    /// The randomness source refused to produce bytes
    #[error("randomness source unavailable: {0}")]
    Entropy(#[from] rand_core::Error),

    /// A corpus file could not be read
    #[error("failed to read corpus file {path}: {source}")]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing records or emitted code failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// A field line has no value token after `label =`
    #[error("{file}:{line}: {field} line has no value: {text:?}")]
    MalformedLine {
        file: String,
        line: usize,
        field: Field,
        text: String,
    },

    /// A field value is not hex or has the wrong length (strict extraction)
    #[error("{file}:{line}: invalid {field} value {value:?}: expected {expected} hex digits")]
    InvalidField {
        file: String,
        line: usize,
        field: Field,
        value: String,
        expected: usize,
    },

    /// An oracle record does not have the `key pt ct` hex shape
    #[error("oracle record {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// Unknown built-in template name
    #[error("unknown harness template {0:?} (expected \"c\" or \"rust\")")]
    UnknownTemplate(String),
}
