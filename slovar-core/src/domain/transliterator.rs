//! Cyrillic <-> Latin transliteration
//!
//! Both directions are total: characters the table does not cover are
//! copied unchanged.

use std::sync::Arc;

use crate::error::TableError;
use crate::language::table::{lower, upper};
use crate::language::MappingTable;

/// Transliterator bound to a mapping table
#[derive(Debug, Clone)]
pub struct Transliterator {
    table: Arc<MappingTable>,
}

impl Transliterator {
    pub fn new(table: Arc<MappingTable>) -> Self {
        Self { table }
    }

    /// Transliterator over the embedded Serbian table
    pub fn embedded() -> Result<Self, TableError> {
        Ok(Self::new(MappingTable::embedded()?))
    }

    pub fn table(&self) -> &Arc<MappingTable> {
        &self.table
    }

    pub fn to_latin(&self, text: &str) -> String {
        latin_of(&self.table, text)
    }

    pub fn to_cyrillic(&self, text: &str) -> String {
        cyrillic_of(&self.table, text)
    }

    /// Latin text with ligature codepoints (`ǉ`, `ǈ`, `Ǌ`) spelled as digraphs
    pub fn expand_ligatures(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            let latin = self
                .table
                .ligature(ch)
                .and_then(|cyr| self.table.latin_for(lower(cyr)));
            let Some(latin) = latin else {
                out.push(ch);
                continue;
            };

            if ch.is_lowercase() {
                out.push_str(latin);
            } else if ch.is_uppercase() {
                out.extend(latin.chars().map(upper));
            } else {
                // titlecase ligature
                let mut letters = latin.chars();
                out.extend(letters.next().map(upper));
                out.extend(letters);
            }
        }
        out
    }

    /// Whether the two forms map onto each other in both directions
    pub fn round_trips(&self, cyrillic: &str, latin: &str) -> bool {
        self.to_latin(cyrillic) == latin && self.to_cyrillic(latin) == cyrillic
    }
}

/// Cyrillic to Latin, one letter at a time
pub(crate) fn latin_of(table: &MappingTable, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &ch) in chars.iter().enumerate() {
        let folded = lower(ch);
        let Some(latin) = table.latin_for(folded) else {
            out.push(ch);
            continue;
        };

        if folded == ch {
            out.push_str(latin);
            continue;
        }

        let mut letters = latin.chars();
        if let Some(first) = letters.next() {
            out.push(upper(first));
        }
        // Љ -> LJ inside an uppercase run, Lj otherwise
        if shouts(&chars, i) {
            out.extend(letters.map(upper));
        } else {
            out.extend(letters);
        }
    }

    out
}

/// Whether the uppercase letter at `i` sits in an all-caps run
fn shouts(chars: &[char], i: usize) -> bool {
    match chars.get(i + 1) {
        Some(next) if next.is_alphabetic() => next.is_uppercase(),
        _ => i > 0 && chars[i - 1].is_alphabetic() && chars[i - 1].is_uppercase(),
    }
}

/// Latin to Cyrillic with longest-match digraphs
pub(crate) fn cyrillic_of(table: &MappingTable, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if let Some(cyr) = table.ligature(ch) {
            out.push(cyr);
            i += 1;
            continue;
        }

        let folded = lower(ch);
        let digraph = chars
            .get(i + 1)
            .and_then(|&next| table.cyrillic_for_digraph(folded, lower(next)));

        let (cyr, width) = match digraph {
            Some(cyr) => (cyr, 2),
            None => match table.cyrillic_for(folded) {
                Some(cyr) => (cyr, 1),
                None => {
                    out.push(ch);
                    i += 1;
                    continue;
                }
            },
        };

        out.push(if ch.is_uppercase() { upper(cyr) } else { cyr });
        i += width;
    }

    out
}
