//! Whole-text conversion
//!
//! Text is split into words and separators. Each word is classified,
//! brought to its canonical Latin form and resolved into the target
//! variant; separators are copied as they are. Words are handled
//! independently, so any split of the text on segment boundaries
//! converts to the same result.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;
use std::sync::Arc;

use super::resolver::{ResolvedBy, VocabularyResolver};
use crate::domain::{apply_case, tokenize, Script, ScriptClassifier, Transliterator, Variant};
use crate::error::{StoreError, TableError};
use crate::language::MappingTable;
use crate::store::DictionaryStore;

/// Counters collected while converting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    pub words: usize,
    /// Words copied verbatim because they hold no mapped letter
    pub neutral_words: usize,
    pub separators: usize,
    pub dictionary_hits: usize,
    pub exception_hits: usize,
    /// Croatian target only: words neither the dictionary nor the table knew
    pub fallbacks: usize,
}

impl AddAssign for ConversionStats {
    fn add_assign(&mut self, other: Self) {
        self.words += other.words;
        self.neutral_words += other.neutral_words;
        self.separators += other.separators;
        self.dictionary_hits += other.dictionary_hits;
        self.exception_hits += other.exception_hits;
        self.fallbacks += other.fallbacks;
    }
}

/// Converts text between Serbian Cyrillic, Serbian Latin and Croatian
#[derive(Debug, Clone)]
pub struct TextConverter {
    classifier: ScriptClassifier,
    translit: Transliterator,
    resolver: VocabularyResolver,
}

impl TextConverter {
    pub fn new(table: Arc<MappingTable>) -> Self {
        let translit = Transliterator::new(table.clone());
        Self {
            classifier: ScriptClassifier::new(table),
            resolver: VocabularyResolver::new(translit.clone()),
            translit,
        }
    }

    /// Converter over the embedded Serbian table, without a dictionary
    pub fn embedded() -> Result<Self, TableError> {
        Ok(Self::new(MappingTable::embedded()?))
    }

    /// Consult `store` before the table's vocabulary exceptions
    pub fn with_store(mut self, store: Arc<dyn DictionaryStore>) -> Self {
        self.resolver = self.resolver.with_store(store);
        self
    }

    pub fn transliterator(&self) -> &Transliterator {
        &self.translit
    }

    pub fn classifier(&self) -> &ScriptClassifier {
        &self.classifier
    }

    pub fn convert(&self, text: &str, target: Variant) -> Result<String, StoreError> {
        self.convert_with_stats(text, target).map(|(out, _)| out)
    }

    pub fn convert_with_stats(
        &self,
        text: &str,
        target: Variant,
    ) -> Result<(String, ConversionStats), StoreError> {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        let mut stats = ConversionStats::default();

        for segment in tokenize(text) {
            if !segment.is_word() {
                stats.separators += 1;
                out.push_str(segment.text);
                continue;
            }

            stats.words += 1;
            match self.convert_word(segment.text, target)? {
                Some((word, source)) => {
                    match source {
                        ResolvedBy::Dictionary => stats.dictionary_hits += 1,
                        ResolvedBy::Exception => stats.exception_hits += 1,
                        ResolvedBy::Fallback => stats.fallbacks += 1,
                        ResolvedBy::Transliteration => {}
                    }
                    out.push_str(&word);
                }
                None => {
                    stats.neutral_words += 1;
                    out.push_str(segment.text);
                }
            }
        }

        Ok((out, stats))
    }

    /// Convert one word; `None` for neutral words, which stay as they are
    pub fn convert_word(
        &self,
        word: &str,
        target: Variant,
    ) -> Result<Option<(String, ResolvedBy)>, StoreError> {
        let script = self.classifier.classify(word);
        if script == Script::Neutral {
            return Ok(None);
        }

        let canonical = self.translit.to_latin(word);
        let converted = match target {
            Variant::SrLatinica => (canonical, ResolvedBy::Transliteration),
            // Cyrillic spellings such as инјекција have no Latin round trip
            Variant::SrCirilica if script == Script::Cyrillic => (
                self.translit.to_cyrillic(word),
                ResolvedBy::Transliteration,
            ),
            Variant::SrCirilica => (
                self.translit.to_cyrillic(&canonical),
                ResolvedBy::Transliteration,
            ),
            Variant::HrLanguage => {
                let resolution = self.resolver.resolve(&canonical, target)?;
                (apply_case(&canonical, &resolution.text), resolution.source)
            }
        };

        Ok(Some(converted))
    }
}
