//! Core error types
//!
//! Conversion itself never fails: unmapped characters and unknown words have
//! defined outputs. The only runtime failures are table validation at load
//! time and errors reported by a dictionary store.

use crate::store::Column;
use thiserror::Error;

/// Mapping table loading or validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// TOML could not be parsed
    #[error("Failed to parse {name} table: {reason}")]
    Parse { name: String, reason: String },

    /// A letter row is malformed
    #[error("Invalid letter row {cyrillic:?} -> {latin:?}: {reason}")]
    InvalidLetter {
        cyrillic: String,
        latin: String,
        reason: String,
    },

    /// The same letter appears twice on one side of the table
    #[error("Duplicate {side} letter {letter:?}")]
    DuplicateLetter { side: &'static str, letter: String },

    /// A vocabulary exception breaks the transliteration invariant or uniqueness
    #[error("Invalid vocabulary exception {cyrillic:?}: {reason}")]
    InvalidException { cyrillic: String, reason: String },
}

/// A dictionary row that must not be stored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("Empty {0} form")]
    Empty(Column),

    /// The two script forms disagree under the mapping rules
    #[error("Script forms disagree: {cyrillic:?} <-> {latin:?}")]
    ScriptMismatch { cyrillic: String, latin: String },

    /// Stored forms are lowercase so that case-folded lookups find them
    #[error("{column} form {value:?} is not lowercase")]
    NotLowercase { column: Column, value: String },
}

/// Errors reported by a dictionary store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Uniqueness constraint violated; ingestion treats this as a skip
    #[error("Duplicate {column} value {value:?}")]
    Duplicate { column: Column, value: String },

    /// Row rejected before reaching storage
    #[error("Invalid entry: {0}")]
    InvalidEntry(#[from] EntryError),

    /// Persisted dictionary data is inconsistent
    #[error("Invalid dictionary data: {0}")]
    InvalidData(String),

    /// Storage failure, surfaced to the caller unchanged
    #[error("Dictionary store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether this error is the non-fatal duplicate signal
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Duplicate { .. })
    }
}

/// Umbrella error for callers that load tables and talk to a store
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
