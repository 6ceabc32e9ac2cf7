//! Error types for Kindred

use thiserror::Error;

/// Main error type for Kindred operations
#[derive(Error, Debug)]
pub enum KindredError {
    /// A wire string did not name a known enum variant
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A cache record decoded cleanly but failed a sanity check
    #[error("Cache record corrupt: {0}")]
    CacheCorrupt(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using KindredError
pub type KindredResult<T> = Result<T, KindredError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KindredError::UnknownVariant("Tertiary".to_string());
        assert_eq!(format!("{}", err), "Unknown variant: Tertiary");
    }

    #[test]
    fn test_cache_corrupt_display() {
        let err = KindredError::CacheCorrupt("query echo mismatch".to_string());
        assert_eq!(format!("{}", err), "Cache record corrupt: query echo mismatch");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KindredError = io_err.into();
        assert!(matches!(err, KindredError::Io(_)));
    }
}
