//! Error Types
//!
//! Storage and snapshot failures. Neither is fatal: the in-memory list stays
//! authoritative and the user only sees a non-blocking warning.

use thiserror::Error;

/// Errors raised by a key-value store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("could not serialize snapshot: {0}")]
    Serialize(String),
}

/// Errors raised while reading the persisted snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("could not read snapshot: {0}")]
    Read(#[from] StorageError),

    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
}
