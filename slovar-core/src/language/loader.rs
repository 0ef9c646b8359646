//! Embedded mapping table loader
//!
//! The Serbian table ships inside the binary and is parsed once per process.

use std::sync::{Arc, OnceLock};

use super::config::{VocabularyConfig, VocabularyException};
use super::table::MappingTable;
use crate::error::TableError;

/// Parsed embedded table, or the error it failed with
static EMBEDDED: OnceLock<Result<Arc<MappingTable>, TableError>> = OnceLock::new();

const SERBIAN_TOML: &str = include_str!("../../configs/serbian.toml");

/// Shared handle to the embedded Serbian table
pub fn embedded_table() -> Result<Arc<MappingTable>, TableError> {
    EMBEDDED
        .get_or_init(|| {
            let table = MappingTable::from_toml_str("serbian", SERBIAN_TOML)?;
            log::debug!(
                "Loaded {} table: {} letters, {} vocabulary exceptions",
                table.name(),
                table.letter_count(),
                table.exceptions().len()
            );
            Ok(Arc::new(table))
        })
        .clone()
}

/// Parse a standalone vocabulary file
///
/// The file holds only the `[vocabulary]` section of a table:
///
/// ```toml
/// [vocabulary]
/// exceptions = [{ cyrillic = "сат", latin = "sat", croatian = "ura" }]
/// ```
pub fn parse_vocabulary(name: &str, toml_str: &str) -> Result<Vec<VocabularyException>, TableError> {
    #[derive(serde::Deserialize)]
    struct VocabularyFile {
        #[serde(default)]
        vocabulary: VocabularyConfig,
    }

    let file: VocabularyFile = toml::from_str(toml_str).map_err(|e| TableError::Parse {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok(file.vocabulary.exceptions)
}

impl MappingTable {
    /// Shared handle to the embedded Serbian table
    pub fn embedded() -> Result<Arc<MappingTable>, TableError> {
        embedded_table()
    }
}
