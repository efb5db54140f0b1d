// File: crates/survival-core/src/error.rs
// Summary: Error types for loading and validating survival datasets.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed survival JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("record {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, DataError>;
