//! Serbian Cyrillic/Latin transliteration and Croatian vocabulary
//! substitution
//!
//! The crate converts text between three variants: Serbian in Cyrillic
//! script (`sr_cirilica`), Serbian in Latin script (`sr_latinica`) and
//! Croatian (`hr_language`). Script conversion is driven by a mapping table
//! loaded once per process; the Croatian variant additionally substitutes
//! vocabulary from a dictionary store and the table's exception list.
//!
//! # Architecture
//!
//! - **Language layer**: the TOML mapping table and its validation
//! - **Domain layer**: tokenizer, script classifier, transliterator, case
//! - **Store layer**: dictionary rows and the store contract
//! - **Application layer**: resolver, text converter, ingestion
//!
//! # Example
//!
//! ```rust
//! use slovar_core::{TextConverter, Variant};
//!
//! let converter = TextConverter::embedded().unwrap();
//! let text = "Идем у Београд, хлеб купујем.";
//!
//! assert_eq!(
//!     converter.convert(text, Variant::SrLatinica).unwrap(),
//!     "Idem u Beograd, hleb kupujem."
//! );
//! assert_eq!(
//!     converter.convert(text, Variant::HrLanguage).unwrap(),
//!     "Idem u Beograd, kruh kupujem."
//! );
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod language;
pub mod store;

pub use application::{
    ConversionStats, IngestReport, Ingestor, Resolution, ResolvedBy, SourceProvider,
    TextConverter, Upsert, VocabularyResolver,
};
pub use domain::{
    apply_case, is_word_char, reconstruct, tokenize, Script, ScriptClassifier, Segment,
    SegmentKind, Transliterator, Variant,
};
pub use error::{EntryError, Error, Result, StoreError, TableError};
pub use language::{MappingTable, VocabularyException};
pub use store::{
    Column, DictionaryStore, MemoryStore, SourceFile, SourceId, StoreSnapshot, WordEntry,
};
