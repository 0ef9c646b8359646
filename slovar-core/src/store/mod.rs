//! Dictionary store contract
//!
//! The store owns every dictionary row. The core only asks it to look a
//! word up, to insert a row if none of its forms is taken yet, and to
//! register the source files words came from.

pub mod entry;
pub mod memory;

pub use entry::{SourceFile, SourceId, WordEntry};
pub use memory::{MemoryStore, StoreSnapshot};

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Searchable column of the words table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "sr_cirilica")]
    Cirilica,
    #[serde(rename = "sr_latinica")]
    Latinica,
    #[serde(rename = "hr_language")]
    Hr,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Cirilica, Column::Latinica, Column::Hr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Cirilica => "sr_cirilica",
            Column::Latinica => "sr_latinica",
            Column::Hr => "hr_language",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sr_cirilica" | "cirilica" => Ok(Column::Cirilica),
            "sr_latinica" | "latinica" => Ok(Column::Latinica),
            "hr_language" | "hr" => Ok(Column::Hr),
            other => Err(format!("Unknown column: {other}")),
        }
    }
}

/// Storage backend for dictionary rows
///
/// Implementations must make [`insert`](DictionaryStore::insert) atomic:
/// when two callers race to insert rows sharing a unique value, exactly
/// one succeeds and the other gets [`StoreError::Duplicate`].
pub trait DictionaryStore: Send + Sync {
    /// Row whose `column` equals `word` exactly
    fn lookup(&self, word: &str, column: Column) -> Result<Option<WordEntry>, StoreError>;

    /// Insert the row unless one of its unique values is already taken
    fn insert(&self, entry: WordEntry) -> Result<(), StoreError>;

    /// Id for a source file name, creating it on first sight
    fn register_source(&self, file_name: &str) -> Result<SourceId, StoreError>;

    /// Number of stored words
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        assert_eq!(Column::Cirilica.to_string(), "sr_cirilica");
        assert_eq!(Column::Hr.to_string(), "hr_language");
        assert_eq!("sr_latinica".parse::<Column>().unwrap(), Column::Latinica);
        assert!("words".parse::<Column>().is_err());
    }
}
