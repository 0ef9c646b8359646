//! In-memory dictionary store
//!
//! Rows live in a vector with one unique index per column. Uniqueness is
//! checked and the row inserted under a single write lock.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Column, DictionaryStore, SourceFile, SourceId, WordEntry};
use crate::domain::Transliterator;
use crate::error::{StoreError, TableError};

/// Serializable copy of a store's contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub sources: Vec<SourceFile>,
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

#[derive(Debug, Default)]
struct Tables {
    words: Vec<WordEntry>,
    by_cirilica: HashMap<String, usize>,
    by_latinica: HashMap<String, usize>,
    by_hr: HashMap<String, usize>,
    sources: Vec<SourceFile>,
    source_by_name: HashMap<String, SourceId>,
}

impl Tables {
    fn index(&self, column: Column) -> &HashMap<String, usize> {
        match column {
            Column::Cirilica => &self.by_cirilica,
            Column::Latinica => &self.by_latinica,
            Column::Hr => &self.by_hr,
        }
    }

    /// First unique value of `entry` already taken
    fn conflict(&self, entry: &WordEntry) -> Option<StoreError> {
        Column::ALL.into_iter().find_map(|column| {
            let value = entry.value(column)?;
            self.index(column)
                .contains_key(value)
                .then(|| StoreError::Duplicate {
                    column,
                    value: value.to_string(),
                })
        })
    }

    fn push(&mut self, entry: WordEntry) {
        let idx = self.words.len();
        self.by_cirilica.insert(entry.sr_cirilica.clone(), idx);
        self.by_latinica.insert(entry.sr_latinica.clone(), idx);
        if let Some(hr) = &entry.hr_language {
            self.by_hr.insert(hr.clone(), idx);
        }
        self.words.push(entry);
    }
}

/// Thread-safe dictionary held in memory
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    translit: Transliterator,
}

impl MemoryStore {
    /// Empty store validating rows with `translit`
    pub fn new(translit: Transliterator) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            translit,
        }
    }

    /// Empty store over the embedded Serbian table
    pub fn embedded() -> Result<Self, TableError> {
        Ok(Self::new(Transliterator::embedded()?))
    }

    /// Rebuild a store, re-checking every row and uniqueness constraint
    pub fn from_snapshot(
        snapshot: StoreSnapshot,
        translit: Transliterator,
    ) -> Result<Self, StoreError> {
        let store = Self::new(translit);
        {
            let mut tables = store.tables.write();
            for source in snapshot.sources {
                if tables.source_by_name.contains_key(&source.file_name)
                    || tables.sources.iter().any(|s| s.id == source.id)
                {
                    return Err(StoreError::InvalidData(format!(
                        "Source {} ({}) listed twice",
                        source.id, source.file_name
                    )));
                }
                tables
                    .source_by_name
                    .insert(source.file_name.clone(), source.id);
                tables.sources.push(source);
            }

            for entry in snapshot.words {
                entry.validate(&store.translit)?;
                if let Some(err) = tables.conflict(&entry) {
                    return Err(err);
                }
                tables.push(entry);
            }
        }

        log::debug!("Restored dictionary with {} words", store.tables.read().words.len());
        Ok(store)
    }

    /// Copy of every source and row, in insertion order
    pub fn snapshot(&self) -> StoreSnapshot {
        let tables = self.tables.read();
        StoreSnapshot {
            sources: tables.sources.clone(),
            words: tables.words.clone(),
        }
    }

    pub fn sources(&self) -> Vec<SourceFile> {
        self.tables.read().sources.clone()
    }

    pub fn transliterator(&self) -> &Transliterator {
        &self.translit
    }
}

impl DictionaryStore for MemoryStore {
    fn lookup(&self, word: &str, column: Column) -> Result<Option<WordEntry>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .index(column)
            .get(word)
            .map(|&idx| tables.words[idx].clone()))
    }

    fn insert(&self, entry: WordEntry) -> Result<(), StoreError> {
        entry.validate(&self.translit)?;

        let mut tables = self.tables.write();
        if let Some(err) = tables.conflict(&entry) {
            return Err(err);
        }
        tables.push(entry);
        Ok(())
    }

    fn register_source(&self, file_name: &str) -> Result<SourceId, StoreError> {
        if let Some(&id) = self.tables.read().source_by_name.get(file_name) {
            return Ok(id);
        }

        let mut tables = self.tables.write();
        // another writer may have registered it between the two locks
        if let Some(&id) = tables.source_by_name.get(file_name) {
            return Ok(id);
        }

        let next = tables.sources.iter().map(|s| s.id.0).max().unwrap_or(0) + 1;
        let id = SourceId(next);
        tables.sources.push(SourceFile {
            id,
            file_name: file_name.to_string(),
        });
        tables.source_by_name.insert(file_name.to_string(), id);
        log::debug!("Registered source {file_name} as {id}");
        Ok(id)
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.tables.read().words.len())
    }
}
