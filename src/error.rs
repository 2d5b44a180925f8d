//! Error types for the rolodex directory.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Domain validation has its own error type in [`crate::domain::errors`];
//! the kinds here cover storage, lookup, and paging failures. None of them is
//! fatal: the interactive layer catches each kind, renders a message, and the
//! operation can be retried with corrected input.

use thiserror::Error;

/// Errors that can occur while reading or writing the backing file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("I/O error on backing file: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not deserialize
    #[error("Corrupt backing file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors raised when a referenced entity does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No record is stored under the given name
    #[error("No contact named '{0}'")]
    Record(String),

    /// The record has no phone with the given value
    #[error("Phone number '{0}' is not on this record")]
    Phone(String),
}

/// Error raised when a page index falls outside the paginated range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Page {page} is out of range (1..={page_count})")]
pub struct OutOfRangeError {
    /// The requested 1-based page index
    pub page: usize,
    /// The number of pages actually available
    pub page_count: usize,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// No data path was configured and no platform data directory exists
    #[error("Cannot determine a data directory; set ROLODEX_DATA_PATH")]
    NoDataDir,
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NotFoundError::Record("Ann".to_string());
        assert_eq!(err.to_string(), "No contact named 'Ann'");

        let err = NotFoundError::Phone("380501234567".to_string());
        assert_eq!(
            err.to_string(),
            "Phone number '380501234567' is not on this record"
        );

        let err = OutOfRangeError {
            page: 5,
            page_count: 4,
        };
        assert_eq!(err.to_string(), "Page 5 is out of range (1..=4)");

        let err = ConfigError::NoDataDir;
        assert!(err.to_string().contains("ROLODEX_DATA_PATH"));
    }

    #[test]
    fn test_storage_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StorageError::from(io);
        assert!(matches!(err, StorageError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
