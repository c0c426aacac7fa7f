//! Harness error type.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
    #[error("invalid options for case '{case}': radix {radix}")]
    InvalidOptions { case: String, radix: u32 },
}
