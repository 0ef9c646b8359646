//! Script detection for single words

use std::sync::Arc;

use super::types::Script;
use crate::language::MappingTable;

/// Letters of a word counted per alphabet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    pub cyrillic: usize,
    pub latin: usize,
}

impl ScriptCounts {
    /// Majority vote; ties go to Latin
    pub fn script(&self) -> Script {
        if self.cyrillic > self.latin {
            Script::Cyrillic
        } else if self.latin > 0 {
            Script::Latin
        } else {
            Script::Neutral
        }
    }
}

/// Classifies words by the alphabet their letters come from
///
/// Only letters the mapping table knows are counted, so foreign letters
/// (`q`, `ß`, Greek) make no difference to the vote.
#[derive(Debug, Clone)]
pub struct ScriptClassifier {
    table: Arc<MappingTable>,
}

impl ScriptClassifier {
    pub fn new(table: Arc<MappingTable>) -> Self {
        Self { table }
    }

    pub fn counts(&self, word: &str) -> ScriptCounts {
        word.chars().fold(ScriptCounts::default(), |mut counts, ch| {
            if self.table.is_cyrillic_letter(ch) {
                counts.cyrillic += 1;
            } else if self.table.is_latin_letter(ch) {
                counts.latin += 1;
            }
            counts
        })
    }

    pub fn classify(&self, word: &str) -> Script {
        self.counts(word).script()
    }
}
