//! Dictionary ingestion
//!
//! Every word is reduced to one insert-if-absent call against the store.
//! The pre-check by both script columns only saves work; the store's
//! uniqueness constraints decide, and a duplicate reported by the store is
//! counted as skipped.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::AddAssign;
use std::sync::Arc;

use crate::domain::{Script, ScriptClassifier, Transliterator};
use crate::error::StoreError;
use crate::store::{Column, DictionaryStore, SourceId, WordEntry};

/// Progress is logged every this many words
const PROGRESS_EVERY: usize = 5000;

/// Supplies words together with the file they were read from
pub trait SourceProvider {
    /// `(word, source_file)` pairs; consumed once per ingestion run
    fn words(&self) -> Box<dyn Iterator<Item = (String, String)> + '_>;
}

impl SourceProvider for Vec<(String, String)> {
    fn words(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(self.iter().cloned())
    }
}

/// Outcome of an ingestion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    pub added: usize,
    pub skipped: usize,
}

impl IngestReport {
    pub fn total(&self) -> usize {
        self.added + self.skipped
    }

    pub fn merge(&mut self, other: IngestReport) {
        self.added += other.added;
        self.skipped += other.skipped;
    }

    fn record(&mut self, outcome: Upsert) {
        match outcome {
            Upsert::Added => self.added += 1,
            Upsert::Skipped => self.skipped += 1,
        }
    }
}

impl AddAssign for IngestReport {
    fn add_assign(&mut self, other: Self) {
        self.merge(other);
    }
}

/// Result of offering one word to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added,
    /// Already known, neutral, or not representable as a valid row
    Skipped,
}

/// Feeds words into a dictionary store
#[derive(Clone)]
pub struct Ingestor {
    store: Arc<dyn DictionaryStore>,
    translit: Transliterator,
    classifier: ScriptClassifier,
}

impl Ingestor {
    pub fn new(store: Arc<dyn DictionaryStore>, translit: Transliterator) -> Self {
        let classifier = ScriptClassifier::new(translit.table().clone());
        Self {
            store,
            translit,
            classifier,
        }
    }

    /// Ingest bare words with no source attribution
    pub fn ingest<I, S>(&self, words: I) -> Result<IngestReport, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = IngestReport::default();
        for word in words {
            let word = word.as_ref();
            let script = self.classifier.classify(word);
            report.record(self.upsert_if_absent(word, script, None)?);
            self.log_progress(&report);
        }

        log::info!(
            "Ingest complete: {} added, {} skipped",
            report.added,
            report.skipped
        );
        Ok(report)
    }

    /// Ingest words from a provider, registering each source file once
    pub fn ingest_source(&self, provider: &dyn SourceProvider) -> Result<IngestReport, StoreError> {
        let mut report = IngestReport::default();
        let mut sources: HashMap<String, SourceId> = HashMap::new();

        for (word, file_name) in provider.words() {
            let source = match sources.get(&file_name) {
                Some(&id) => id,
                None => {
                    let id = self.store.register_source(&file_name)?;
                    sources.insert(file_name, id);
                    id
                }
            };

            let script = self.classifier.classify(&word);
            report.record(self.upsert_if_absent(&word, script, Some(source))?);
            self.log_progress(&report);
        }

        log::info!(
            "Ingested {} sources: {} added, {} skipped",
            sources.len(),
            report.added,
            report.skipped
        );
        Ok(report)
    }

    /// Insert `word` unless the dictionary already knows it in either script
    pub fn upsert_if_absent(
        &self,
        word: &str,
        script: Script,
        source: Option<SourceId>,
    ) -> Result<Upsert, StoreError> {
        let word = word.trim().to_lowercase();
        let (cyrillic, latin) = match script {
            _ if word.is_empty() => return Ok(Upsert::Skipped),
            Script::Neutral => return Ok(Upsert::Skipped),
            Script::Cyrillic => {
                let latin = self.translit.to_latin(&word);
                (word, latin)
            }
            Script::Latin => {
                let latin = self.translit.expand_ligatures(&word);
                (self.translit.to_cyrillic(&latin), latin)
            }
        };

        if self.store.lookup(&cyrillic, Column::Cirilica)?.is_some()
            || self.store.lookup(&latin, Column::Latinica)?.is_some()
        {
            return Ok(Upsert::Skipped);
        }

        let croatian = self
            .translit
            .table()
            .exception_by_latin(&latin)
            .map(|e| e.croatian.clone());

        let entry = match WordEntry::checked(cyrillic, latin, croatian, &self.translit) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping word: {e}");
                return Ok(Upsert::Skipped);
            }
        };
        let entry = match source {
            Some(id) => entry.with_source(id),
            None => entry,
        };

        match self.store.insert(entry) {
            Ok(()) => Ok(Upsert::Added),
            Err(e) if e.is_duplicate() => {
                log::debug!("Lost insert race: {e}");
                Ok(Upsert::Skipped)
            }
            Err(e) => Err(e),
        }
    }

    fn log_progress(&self, report: &IngestReport) {
        let total = report.total();
        if total % PROGRESS_EVERY == 0 {
            log::info!("Processed {total} words...");
        }
    }
}

impl std::fmt::Debug for Ingestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ingestor")
            .field("table", &self.translit.table().code())
            .finish_non_exhaustive()
    }
}
