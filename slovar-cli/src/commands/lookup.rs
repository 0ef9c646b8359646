//! Lookup command implementation

use crate::commands::{init_logging, load_table};
use crate::config::CliConfig;
use crate::dictionary;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use slovar_core::{Column, DictionaryStore, StoreError, Transliterator, WordEntry};
use std::path::PathBuf;

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Word in Cyrillic, Latin or its Croatian form
    #[arg(value_name = "WORD")]
    pub word: String,

    /// JSON dictionary to search
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let config = CliConfig::load(self.config.as_deref())?;
        let path = config.dictionary_path(self.dictionary.as_deref());
        let translit = Transliterator::new(load_table(None)?);
        let store = dictionary::load(&path, translit.clone())?;

        match find_entry(&store, &translit, &self.word)? {
            Some(entry) => {
                println!("{}", serde_json::to_string_pretty(&entry)?);
                Ok(())
            }
            None => Err(CliError::WordNotFound(self.word.clone()).into()),
        }
    }
}

/// Row for `word` searched by its Latin form, then as written in each column
pub fn find_entry(
    store: &dyn DictionaryStore,
    translit: &Transliterator,
    word: &str,
) -> Result<Option<WordEntry>, StoreError> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Ok(None);
    }

    if let Some(entry) = store.lookup(&translit.to_latin(&word), Column::Latinica)? {
        return Ok(Some(entry));
    }
    for column in [Column::Cirilica, Column::Hr] {
        if let Some(entry) = store.lookup(&word, column)? {
            return Ok(Some(entry));
        }
    }
    Ok(None)
}
