//! Mapping tables for Serbian Cyrillic/Latin correspondence
//!
//! Tables are data: a TOML file lists lowercase letter pairs, ligatures
//! accepted on Latin input, and the vocabulary exceptions used for the
//! Croatian variant.

pub mod config;
pub mod loader;
pub mod table;

pub use config::{TableConfig, VocabularyException};
pub use loader::{embedded_table, parse_vocabulary};
pub use table::MappingTable;
