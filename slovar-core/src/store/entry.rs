//! Dictionary rows

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::Column;
use crate::domain::{Transliterator, Variant};
use crate::error::EntryError;

/// Identifier of a registered source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(pub u32);

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A file that contributed words to the dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub id: SourceId,
    pub file_name: String,
}

/// One dictionary row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub sr_cirilica: String,
    pub sr_latinica: String,
    /// `None` means the Croatian form equals `sr_latinica`
    #[serde(default)]
    pub hr_language: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub source_refs: BTreeSet<SourceId>,
}

impl WordEntry {
    /// Build a row whose script forms agree under `translit`
    pub fn checked(
        sr_cirilica: impl Into<String>,
        sr_latinica: impl Into<String>,
        hr_language: Option<String>,
        translit: &Transliterator,
    ) -> Result<Self, EntryError> {
        let entry = Self {
            sr_cirilica: sr_cirilica.into(),
            sr_latinica: sr_latinica.into(),
            hr_language,
            source_refs: BTreeSet::new(),
        };
        entry.validate(translit)?;
        Ok(entry)
    }

    /// Check non-empty lowercase forms and the transliteration round trip
    pub fn validate(&self, translit: &Transliterator) -> Result<(), EntryError> {
        for column in [Column::Cirilica, Column::Latinica, Column::Hr] {
            let Some(value) = self.value(column) else {
                continue;
            };
            if value.is_empty() {
                return Err(EntryError::Empty(column));
            }
            if value.chars().any(char::is_uppercase) {
                return Err(EntryError::NotLowercase {
                    column,
                    value: value.to_string(),
                });
            }
        }
        if !translit.round_trips(&self.sr_cirilica, &self.sr_latinica) {
            return Err(EntryError::ScriptMismatch {
                cyrillic: self.sr_cirilica.clone(),
                latin: self.sr_latinica.clone(),
            });
        }
        Ok(())
    }

    pub fn with_source(mut self, id: SourceId) -> Self {
        self.source_refs.insert(id);
        self
    }

    /// Stored value of a column; `None` only for a null `hr_language`
    pub fn value(&self, column: Column) -> Option<&str> {
        match column {
            Column::Cirilica => Some(&self.sr_cirilica),
            Column::Latinica => Some(&self.sr_latinica),
            Column::Hr => self.hr_language.as_deref(),
        }
    }

    /// The word as written in a variant
    pub fn form(&self, variant: Variant) -> &str {
        match variant {
            Variant::SrCirilica => &self.sr_cirilica,
            Variant::SrLatinica => &self.sr_latinica,
            Variant::HrLanguage => self
                .hr_language
                .as_deref()
                .unwrap_or(self.sr_latinica.as_str()),
        }
    }
}
