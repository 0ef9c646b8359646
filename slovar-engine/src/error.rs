//! Engine error types

use slovar_core::{StoreError, TableError};
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Dictionary store failure, passed through unchanged
    #[error("dictionary store error: {0}")]
    Store(#[from] StoreError),

    /// Mapping table failed to load
    #[error("mapping table error: {0}")]
    Table(#[from] TableError),

    /// Invalid chunk boundaries
    #[error("invalid chunk boundary at position {position}")]
    InvalidChunkBoundary {
        /// The byte position where the invalid boundary was detected
        position: usize,
    },

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_is_wrapped_verbatim() {
        let err: EngineError = StoreError::Unavailable("locked".into()).into();
        assert!(matches!(err, EngineError::Store(StoreError::Unavailable(_))));
        assert!(err.to_string().contains("locked"));
    }

    #[test]
    fn test_utf8_error_conversion() {
        let err: EngineError = String::from_utf8(vec![0xff, 0xfe]).unwrap_err().into();
        assert!(matches!(err, EngineError::EncodingError(_)));
    }
}
