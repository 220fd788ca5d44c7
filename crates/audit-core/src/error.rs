use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by Ledger Audit.
///
/// Only loading can fail; every query is total over a loaded dataset, so no
/// variant exists for query-time failures.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The transactions document could not be opened or read from disk.
    #[error("Failed to read transactions document {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid JSON array of transaction objects.
    #[error("Failed to parse transactions JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the audit crates.
pub type Result<T> = std::result::Result<T, AuditError>;
