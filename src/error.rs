//! Error types for the search benchmark

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchmarkError>;

#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Malformed directory entry at line {line}: {entry:?} has no key separator")]
    MalformedEntry { line: usize, entry: String },

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
