//! Use cases built on the domain layer: resolving words, converting text
//! and feeding the dictionary

pub mod converter;
pub mod ingest;
pub mod resolver;

pub use converter::{ConversionStats, TextConverter};
pub use ingest::{IngestReport, Ingestor, SourceProvider, Upsert};
pub use resolver::{Resolution, ResolvedBy, VocabularyResolver};
