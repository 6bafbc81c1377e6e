//! Error types for store operations.

use std::io;

/// Failure kinds reported by [`ClientStore`](crate::ClientStore) operations.
///
/// Errors are returned to the caller as structured values at the operation
/// boundary; the store never terminates the process on an I/O failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The records directory cannot be created or scanned.
    #[error("records directory unavailable: {0}")]
    StorageUnavailable(#[source] io::Error),

    /// Create was called for a name already present in the index.
    #[error("client '{0}' already exists")]
    DuplicateClient(String),

    /// Lookup miss on append, read, or remove.
    #[error("client '{0}' is not registered")]
    ClientNotFound(String),

    /// The name is empty or cannot form a record filename.
    #[error("invalid client name '{0}'")]
    InvalidName(String),

    /// A record file operation failed after a valid lookup.
    #[error("record file operation failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
