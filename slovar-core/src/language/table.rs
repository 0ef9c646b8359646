//! Runtime mapping table built from a validated [`TableConfig`]

use super::config::{TableConfig, VocabularyException};
use crate::domain::transliterator::{cyrillic_of, latin_of};
use crate::error::TableError;
use std::collections::{HashMap, HashSet};

/// Immutable Cyrillic/Latin correspondence plus vocabulary exceptions.
///
/// All keys are lowercase; callers fold case before asking.
#[derive(Debug, Clone)]
pub struct MappingTable {
    code: String,
    name: String,
    /// lowercase Cyrillic letter -> lowercase Latin letter or digraph
    to_latin: HashMap<char, String>,
    /// lowercase single Latin letter -> lowercase Cyrillic letter
    latin_single: HashMap<char, char>,
    /// lowercase Latin digraph -> lowercase Cyrillic letter
    latin_digraph: HashMap<(char, char), char>,
    /// Latin ligature codepoint -> Cyrillic letter, case included
    ligatures: HashMap<char, char>,
    exceptions: Vec<VocabularyException>,
    exception_by_latin: HashMap<String, usize>,
    exception_by_cyrillic: HashMap<String, usize>,
}

impl MappingTable {
    /// Parse and validate a table from TOML text
    pub fn from_toml_str(name: &str, toml_str: &str) -> Result<Self, TableError> {
        let config: TableConfig = toml::from_str(toml_str).map_err(|e| TableError::Parse {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_config(config)
    }

    /// Build a table from an already parsed config
    pub fn from_config(config: TableConfig) -> Result<Self, TableError> {
        let mut table = Self {
            code: config.metadata.code,
            name: config.metadata.name,
            to_latin: HashMap::new(),
            latin_single: HashMap::new(),
            latin_digraph: HashMap::new(),
            ligatures: HashMap::new(),
            exceptions: Vec::new(),
            exception_by_latin: HashMap::new(),
            exception_by_cyrillic: HashMap::new(),
        };

        let mut digraphs = Vec::new();
        for pair in &config.alphabet.letters {
            let cyr = single_lowercase_letter(&pair.cyrillic).ok_or_else(|| {
                invalid_letter(pair, "Cyrillic side must be one lowercase letter")
            })?;
            let latin: Vec<char> = pair.latin.chars().collect();
            if latin.is_empty() || latin.len() > 2 || latin.iter().any(|c| lower(*c) != *c) {
                return Err(invalid_letter(
                    pair,
                    "Latin side must be one or two lowercase letters",
                ));
            }

            if table.to_latin.insert(cyr, pair.latin.clone()).is_some() {
                return Err(TableError::DuplicateLetter {
                    side: "Cyrillic",
                    letter: pair.cyrillic.clone(),
                });
            }

            match latin.as_slice() {
                [single] => {
                    if table.latin_single.insert(*single, cyr).is_some() {
                        return Err(TableError::DuplicateLetter {
                            side: "Latin",
                            letter: pair.latin.clone(),
                        });
                    }
                }
                [first, second] => digraphs.push((pair, *first, *second, cyr)),
                _ => unreachable!("length checked above"),
            }
        }

        // Digraphs are checked once every single letter is known
        for (pair, first, second, cyr) in digraphs {
            if !table.latin_single.contains_key(&first) || !table.latin_single.contains_key(&second)
            {
                return Err(invalid_letter(
                    pair,
                    "both letters of a digraph need their own single-letter rows",
                ));
            }
            if table.latin_digraph.insert((first, second), cyr).is_some() {
                return Err(TableError::DuplicateLetter {
                    side: "Latin",
                    letter: pair.latin.clone(),
                });
            }
        }

        for ligature in &config.alphabet.ligatures {
            let mut latin = ligature.latin.chars();
            let mut cyr = ligature.cyrillic.chars();
            let (Some(lat), None, Some(c), None) = (latin.next(), latin.next(), cyr.next(), cyr.next())
            else {
                return Err(TableError::InvalidLetter {
                    cyrillic: ligature.cyrillic.clone(),
                    latin: ligature.latin.clone(),
                    reason: "ligature rows map one codepoint to one letter".into(),
                });
            };
            if !table.to_latin.contains_key(&lower(c)) {
                return Err(TableError::InvalidLetter {
                    cyrillic: ligature.cyrillic.clone(),
                    latin: ligature.latin.clone(),
                    reason: "ligature maps to a letter missing from the alphabet".into(),
                });
            }
            if table.ligatures.insert(lat, c).is_some() {
                return Err(TableError::DuplicateLetter {
                    side: "Latin",
                    letter: ligature.latin.clone(),
                });
            }
        }

        table.add_exceptions(config.vocabulary.exceptions)?;
        Ok(table)
    }

    /// Return a copy of this table extended with more vocabulary exceptions
    pub fn with_extra_vocabulary(
        &self,
        extra: Vec<VocabularyException>,
    ) -> Result<Self, TableError> {
        let mut table = self.clone();
        table.add_exceptions(extra)?;
        Ok(table)
    }

    fn add_exceptions(&mut self, exceptions: Vec<VocabularyException>) -> Result<(), TableError> {
        let mut croatian: HashSet<String> =
            self.exceptions.iter().map(|e| e.croatian.clone()).collect();

        for exception in exceptions {
            let invalid = |reason: &str| TableError::InvalidException {
                cyrillic: exception.cyrillic.clone(),
                reason: reason.to_string(),
            };

            if exception.cyrillic.is_empty()
                || exception.latin.is_empty()
                || exception.croatian.is_empty()
            {
                return Err(invalid("all three forms are required"));
            }
            if exception.cyrillic != exception.cyrillic.to_lowercase()
                || exception.latin != exception.latin.to_lowercase()
                || exception.croatian != exception.croatian.to_lowercase()
            {
                return Err(invalid("forms must be lowercase"));
            }
            if latin_of(self, &exception.cyrillic) != exception.latin
                || cyrillic_of(self, &exception.latin) != exception.cyrillic
            {
                return Err(invalid("Latin form is not the transliteration of the Cyrillic form"));
            }
            if self.exception_by_cyrillic.contains_key(&exception.cyrillic) {
                return Err(invalid("listed twice"));
            }
            if !croatian.insert(exception.croatian.clone()) {
                return Err(invalid("Croatian form already used by another word"));
            }

            let idx = self.exceptions.len();
            self.exception_by_latin.insert(exception.latin.clone(), idx);
            self.exception_by_cyrillic
                .insert(exception.cyrillic.clone(), idx);
            self.exceptions.push(exception);
        }

        Ok(())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latin letter or digraph for a lowercase Cyrillic letter
    pub fn latin_for(&self, cyrillic: char) -> Option<&str> {
        self.to_latin.get(&cyrillic).map(String::as_str)
    }

    /// Cyrillic letter for a lowercase single Latin letter
    pub fn cyrillic_for(&self, latin: char) -> Option<char> {
        self.latin_single.get(&latin).copied()
    }

    /// Cyrillic letter for a lowercase Latin digraph
    pub fn cyrillic_for_digraph(&self, first: char, second: char) -> Option<char> {
        self.latin_digraph.get(&(first, second)).copied()
    }

    /// Cyrillic letter for a Latin ligature codepoint
    pub fn ligature(&self, latin: char) -> Option<char> {
        self.ligatures.get(&latin).copied()
    }

    /// Whether the letter (any case) belongs to the Cyrillic side
    pub fn is_cyrillic_letter(&self, ch: char) -> bool {
        self.to_latin.contains_key(&lower(ch))
    }

    /// Whether the letter (any case) belongs to the Latin side
    pub fn is_latin_letter(&self, ch: char) -> bool {
        self.latin_single.contains_key(&lower(ch)) || self.ligatures.contains_key(&ch)
    }

    /// Exception keyed by lowercase Latin form
    pub fn exception_by_latin(&self, latin: &str) -> Option<&VocabularyException> {
        self.exception_by_latin
            .get(latin)
            .map(|&idx| &self.exceptions[idx])
    }

    /// Exception keyed by lowercase Cyrillic form
    pub fn exception_by_cyrillic(&self, cyrillic: &str) -> Option<&VocabularyException> {
        self.exception_by_cyrillic
            .get(cyrillic)
            .map(|&idx| &self.exceptions[idx])
    }

    pub fn exceptions(&self) -> &[VocabularyException] {
        &self.exceptions
    }

    /// Number of alphabet rows
    pub fn letter_count(&self) -> usize {
        self.to_latin.len()
    }
}

/// Lowercase a single char, keeping it when folding would expand it
pub(crate) fn lower(ch: char) -> char {
    let mut folded = ch.to_lowercase();
    match (folded.next(), folded.next()) {
        (Some(c), None) => c,
        _ => ch,
    }
}

/// Uppercase a single char, keeping it when folding would expand it
pub(crate) fn upper(ch: char) -> char {
    let mut folded = ch.to_uppercase();
    match (folded.next(), folded.next()) {
        (Some(c), None) => c,
        _ => ch,
    }
}

fn single_lowercase_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() && lower(c) == c => Some(c),
        _ => None,
    }
}

fn invalid_letter(pair: &super::config::LetterPair, reason: &str) -> TableError {
    TableError::InvalidLetter {
        cyrillic: pair.cyrillic.clone(),
        latin: pair.latin.clone(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
        [metadata]
        code = "sr"
        name = "Serbian"
    "#;

    fn table(body: &str) -> Result<MappingTable, TableError> {
        MappingTable::from_toml_str("test", &format!("{HEADER}\n{body}"))
    }

    #[test]
    fn test_digraph_lookup() {
        let t = table(
            r#"
            [alphabet]
            letters = [
                { cyrillic = "л", latin = "l" },
                { cyrillic = "ј", latin = "j" },
                { cyrillic = "љ", latin = "lj" },
            ]
        "#,
        )
        .unwrap();

        assert_eq!(t.latin_for('љ'), Some("lj"));
        assert_eq!(t.cyrillic_for('l'), Some('л'));
        assert_eq!(t.cyrillic_for_digraph('l', 'j'), Some('љ'));
        assert!(t.is_cyrillic_letter('Љ'));
        assert!(t.is_latin_letter('L'));
        assert!(!t.is_latin_letter('q'));
    }

    #[test]
    fn test_digraph_without_single_rows_is_rejected() {
        let err = table(
            r#"
            [alphabet]
            letters = [
                { cyrillic = "ј", latin = "j" },
                { cyrillic = "љ", latin = "lj" },
            ]
        "#,
        )
        .unwrap_err();

        assert!(matches!(err, TableError::InvalidLetter { .. }));
    }

    #[test]
    fn test_duplicate_latin_letter_is_rejected() {
        let err = table(
            r#"
            [alphabet]
            letters = [
                { cyrillic = "а", latin = "a" },
                { cyrillic = "б", latin = "a" },
            ]
        "#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            TableError::DuplicateLetter {
                side: "Latin",
                letter: "a".into()
            }
        );
    }

    #[test]
    fn test_uppercase_row_is_rejected() {
        let err = table(
            r#"
            [alphabet]
            letters = [{ cyrillic = "А", latin = "a" }]
        "#,
        )
        .unwrap_err();

        assert!(matches!(err, TableError::InvalidLetter { .. }));
    }

    #[test]
    fn test_exception_must_round_trip() {
        let err = table(
            r#"
            [alphabet]
            letters = [
                { cyrillic = "а", latin = "a" },
                { cyrillic = "б", latin = "b" },
            ]

            [vocabulary]
            exceptions = [{ cyrillic = "аб", latin = "ba", croatian = "x" }]
        "#,
        )
        .unwrap_err();

        assert!(matches!(err, TableError::InvalidException { .. }));
    }

    #[test]
    fn test_extra_vocabulary_rejects_reused_croatian_form() {
        let t = table(
            r#"
            [alphabet]
            letters = [
                { cyrillic = "а", latin = "a" },
                { cyrillic = "б", latin = "b" },
            ]

            [vocabulary]
            exceptions = [{ cyrillic = "аб", latin = "ab", croatian = "x" }]
        "#,
        )
        .unwrap();

        let extra = vec![VocabularyException {
            cyrillic: "ба".into(),
            latin: "ba".into(),
            croatian: "x".into(),
        }];
        assert!(t.with_extra_vocabulary(extra).is_err());

        let extra = vec![VocabularyException {
            cyrillic: "ба".into(),
            latin: "ba".into(),
            croatian: "y".into(),
        }];
        let extended = t.with_extra_vocabulary(extra).unwrap();
        assert_eq!(extended.exceptions().len(), 2);
        assert_eq!(extended.exception_by_latin("ba").unwrap().croatian, "y");
        // the original table is untouched
        assert_eq!(t.exceptions().len(), 1);
    }

    #[test]
    fn test_parse_error_names_the_table() {
        let err = MappingTable::from_toml_str("broken", "not = [toml").unwrap_err();
        match err {
            TableError::Parse { name, .. } => assert_eq!(name, "broken"),
            other => panic!("Expected parse error, got {other:?}"),
        }
    }
}
