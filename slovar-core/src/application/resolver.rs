//! Vocabulary resolution for a single canonical word

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{Transliterator, Variant};
use crate::error::StoreError;
use crate::store::{Column, DictionaryStore};

/// Where a resolved form came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedBy {
    /// Plain script conversion, no vocabulary involved
    Transliteration,
    /// A dictionary row
    Dictionary,
    /// A vocabulary exception from the mapping table
    Exception,
    /// Unknown word, passed through in Latin script
    Fallback,
}

/// A resolved word and its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub source: ResolvedBy,
}

/// Maps canonical forms onto a target variant
///
/// Without a store only the table's vocabulary exceptions are consulted
/// for the Croatian variant.
#[derive(Clone)]
pub struct VocabularyResolver {
    translit: Transliterator,
    store: Option<Arc<dyn DictionaryStore>>,
}

impl VocabularyResolver {
    pub fn new(translit: Transliterator) -> Self {
        Self {
            translit,
            store: None,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn DictionaryStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Resolve `canonical` into `variant`
    ///
    /// Never fails for unknown words; the only error is a store failure.
    pub fn resolve(&self, canonical: &str, variant: Variant) -> Result<Resolution, StoreError> {
        let latin = self.translit.to_latin(canonical);

        let (text, source) = match variant {
            Variant::SrLatinica => (latin, ResolvedBy::Transliteration),
            Variant::SrCirilica => (
                self.translit.to_cyrillic(&latin),
                ResolvedBy::Transliteration,
            ),
            Variant::HrLanguage => return self.resolve_croatian(latin),
        };

        Ok(Resolution { text, source })
    }

    fn resolve_croatian(&self, latin: String) -> Result<Resolution, StoreError> {
        let key = latin.to_lowercase();

        if let Some(store) = &self.store {
            let row = match store.lookup(&key, Column::Latinica)? {
                Some(row) => Some(row),
                None => store.lookup(&self.translit.to_cyrillic(&key), Column::Cirilica)?,
            };
            if let Some(row) = row {
                return Ok(Resolution {
                    text: row.form(Variant::HrLanguage).to_string(),
                    source: ResolvedBy::Dictionary,
                });
            }
        }

        if let Some(exception) = self.translit.table().exception_by_latin(&key) {
            return Ok(Resolution {
                text: exception.croatian.clone(),
                source: ResolvedBy::Exception,
            });
        }

        Ok(Resolution {
            text: latin,
            source: ResolvedBy::Fallback,
        })
    }
}

impl std::fmt::Debug for VocabularyResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VocabularyResolver")
            .field("table", &self.translit.table().code())
            .field("has_store", &self.has_store())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, WordEntry};

    fn resolver_with(rows: &[(&str, &str, Option<&str>)]) -> VocabularyResolver {
        let store = MemoryStore::embedded().unwrap();
        for (cyr, lat, hr) in rows {
            let row = WordEntry::checked(*cyr, *lat, hr.map(String::from), store.transliterator())
                .unwrap();
            store.insert(row).unwrap();
        }
        let translit = store.transliterator().clone();
        VocabularyResolver::new(translit).with_store(Arc::new(store))
    }

    #[test]
    fn test_script_variants_are_transliteration() {
        let r = resolver_with(&[]);
        let res = r.resolve("ljubav", Variant::SrCirilica).unwrap();
        assert_eq!(res.text, "љубав");
        assert_eq!(res.source, ResolvedBy::Transliteration);
        assert_eq!(r.resolve("љубав", Variant::SrLatinica).unwrap().text, "ljubav");
    }

    #[test]
    fn test_dictionary_hit_with_croatian_form() {
        let r = resolver_with(&[("сат", "sat", Some("ura"))]);
        let res = r.resolve("sat", Variant::HrLanguage).unwrap();
        assert_eq!(res.text, "ura");
        assert_eq!(res.source, ResolvedBy::Dictionary);
    }

    #[test]
    fn test_null_croatian_form_is_identity() {
        let r = resolver_with(&[("воз", "voz", None)]);
        let res = r.resolve("voz", Variant::HrLanguage).unwrap();
        assert_eq!(res.text, "voz");
        assert_eq!(res.source, ResolvedBy::Dictionary);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let r = resolver_with(&[("сат", "sat", Some("ura"))]);
        assert_eq!(r.resolve("SAT", Variant::HrLanguage).unwrap().text, "ura");
        assert_eq!(r.resolve("Сат", Variant::HrLanguage).unwrap().text, "ura");
    }

    #[test]
    fn test_cyrillic_column_matches_when_latin_key_misses() {
        // a ligature spelling misses sr_latinica but its Cyrillic form is stored
        let r = resolver_with(&[("љубав", "ljubav", Some("ljubav"))]);
        let res = r.resolve("ǉubav", Variant::HrLanguage).unwrap();
        assert_eq!(res.text, "ljubav");
        assert_eq!(res.source, ResolvedBy::Dictionary);
    }

    #[test]
    fn test_exception_when_dictionary_misses() {
        let r = resolver_with(&[]);
        let res = r.resolve("hleb", Variant::HrLanguage).unwrap();
        assert_eq!(res.text, "kruh");
        assert_eq!(res.source, ResolvedBy::Exception);
    }

    #[test]
    fn test_dictionary_overrides_exception() {
        // a row with a null Croatian form wins over the built-in kava
        let r = resolver_with(&[("кафа", "kafa", None)]);
        assert_eq!(r.resolve("kafa", Variant::HrLanguage).unwrap().text, "kafa");
    }

    #[test]
    fn test_unknown_word_falls_back() {
        let r = VocabularyResolver::new(Transliterator::embedded().unwrap());
        let res = r.resolve("Beograd", Variant::HrLanguage).unwrap();
        assert_eq!(res.text, "Beograd");
        assert_eq!(res.source, ResolvedBy::Fallback);
    }

    struct BrokenStore;

    impl DictionaryStore for BrokenStore {
        fn lookup(&self, _: &str, _: Column) -> Result<Option<WordEntry>, StoreError> {
            Err(StoreError::Unavailable("connection reset".into()))
        }
        fn insert(&self, _: WordEntry) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection reset".into()))
        }
        fn register_source(&self, _: &str) -> Result<crate::store::SourceId, StoreError> {
            Err(StoreError::Unavailable("connection reset".into()))
        }
        fn len(&self) -> Result<usize, StoreError> {
            Ok(0)
        }
    }

    #[test]
    fn test_store_failure_is_surfaced() {
        let r = VocabularyResolver::new(Transliterator::embedded().unwrap())
            .with_store(Arc::new(BrokenStore));
        let err = r.resolve("hleb", Variant::HrLanguage).unwrap_err();
        assert_eq!(err, StoreError::Unavailable("connection reset".into()));
        // script variants never touch the store
        assert!(r.resolve("hleb", Variant::SrCirilica).is_ok());
    }
}
