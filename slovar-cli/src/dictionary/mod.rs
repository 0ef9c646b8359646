//! JSON dictionary file
//!
//! The file holds a serialized store snapshot. Writes go to a temporary
//! file in the same directory which then replaces the target, so a crash
//! never leaves a half-written dictionary behind.

use crate::error::CliError;
use anyhow::{Context, Result};
use slovar_core::{MemoryStore, StoreSnapshot, Transliterator};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Restore a dictionary file; the file must exist
pub fn load(path: &Path, translit: Transliterator) -> Result<MemoryStore> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
    let snapshot: StoreSnapshot = serde_json::from_str(&content)
        .map_err(|e| CliError::DictionaryError(format!("{}: {e}", path.display())))?;

    let words = snapshot.words.len();
    let store = MemoryStore::from_snapshot(snapshot, translit)
        .map_err(|e| CliError::DictionaryError(format!("{}: {e}", path.display())))?;

    log::info!("Loaded {words} words from {}", path.display());
    Ok(store)
}

/// Restore a dictionary file, or start empty when it does not exist yet
pub fn load_or_empty(path: &Path, translit: Transliterator) -> Result<MemoryStore> {
    if path.exists() {
        load(path, translit)
    } else {
        log::info!("Creating new dictionary at {}", path.display());
        Ok(MemoryStore::new(translit))
    }
}

/// Write the store's contents to `path` atomically
pub fn save(store: &MemoryStore, path: &Path) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, &store.snapshot())?;
        writeln!(writer)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(path)
        .map_err(|e| CliError::DictionaryError(format!("{}: {}", path.display(), e.error)))?;

    log::debug!("Saved dictionary to {}", path.display());
    Ok(())
}
