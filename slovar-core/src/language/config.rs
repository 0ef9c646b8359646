//! TOML schema for mapping tables

use serde::{Deserialize, Serialize};

/// Root of a mapping table file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub metadata: MetadataConfig,
    pub alphabet: AlphabetConfig,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphabetConfig {
    pub letters: Vec<LetterPair>,
    #[serde(default)]
    pub ligatures: Vec<Ligature>,
}

/// One lowercase Cyrillic letter and its Latin letter or digraph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterPair {
    pub cyrillic: String,
    pub latin: String,
}

/// A single-codepoint Latin digraph accepted on input only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ligature {
    pub latin: String,
    pub cyrillic: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub exceptions: Vec<VocabularyException>,
}

/// A word whose Croatian form differs from its Serbian Latin form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyException {
    pub cyrillic: String,
    pub latin: String,
    pub croatian: String,
}
