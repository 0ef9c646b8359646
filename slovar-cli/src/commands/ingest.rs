//! Ingest command implementation

use crate::commands::{init_logging, load_table};
use crate::config::CliConfig;
use crate::dictionary;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileWords, WordSplit};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use slovar_core::{DictionaryStore, IngestReport, Ingestor, Transliterator};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the ingest command
#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// JSON dictionary to extend (created when missing)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Number of files ingested at once (default: one per core)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Read one word per line instead of running text
    #[arg(long)]
    pub lines: bool,

    /// TOML file with extra vocabulary exceptions
    #[arg(long, value_name = "FILE")]
    pub vocabulary: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl IngestArgs {
    /// Execute the ingest command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = CliConfig::load(self.config.as_deref())?;
        let path = config.dictionary_path(self.dictionary.as_deref());
        let files = resolve_patterns(&self.input)?;

        let translit = Transliterator::new(load_table(self.vocabulary.as_deref())?);
        let store = Arc::new(dictionary::load_or_empty(&path, translit.clone())?);
        let before = store.len()?;

        let report = self.ingest_files(&files, store.clone(), translit, &config)?;

        dictionary::save(&store, &path)?;
        log::info!(
            "Dictionary {} grew from {before} to {} words",
            path.display(),
            store.len()?
        );

        println!("Added: {}", report.added);
        println!("Skipped: {}", report.skipped);
        Ok(())
    }

    /// Ingest every file concurrently into one shared store
    fn ingest_files(
        &self,
        files: &[PathBuf],
        store: Arc<dyn DictionaryStore>,
        translit: Transliterator,
        config: &CliConfig,
    ) -> Result<IngestReport> {
        let jobs = match self.jobs.or_else(|| config.worker_threads()) {
            Some(0) => {
                return Err(
                    CliError::ConfigError("Job count must be greater than 0".into()).into(),
                )
            }
            Some(n) => n,
            None => num_cpus::get(),
        };
        log::debug!("Ingesting {} files with {jobs} workers", files.len());
        let split = if self.lines {
            WordSplit::Lines
        } else {
            WordSplit::Text
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .thread_name(|i| format!("slovar-ingest-{i}"))
            .build()
            .context("Failed to start ingest workers")?;

        let ingestor = Ingestor::new(store, translit);
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let reports = pool.install(|| {
            files
                .par_iter()
                .map(|path| -> Result<IngestReport> {
                    let words = FileWords::read(path, split)?;
                    let report = ingestor
                        .ingest_source(&words)
                        .with_context(|| format!("Failed to ingest {}", path.display()))?;

                    log::debug!(
                        "{}: {} added, {} skipped",
                        words.file_name(),
                        report.added,
                        report.skipped
                    );
                    progress.file_completed(words.file_name());
                    Ok(report)
                })
                .collect::<Result<Vec<_>>>()
        })?;
        progress.finish();

        let mut total = IngestReport::default();
        for report in reports {
            total += report;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slovar_core::{Column, MemoryStore};
    use std::fs;
    use tempfile::TempDir;

    fn args(jobs: Option<usize>, lines: bool) -> IngestArgs {
        IngestArgs {
            input: vec![],
            dictionary: None,
            jobs,
            lines,
            vocabulary: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_files_share_one_store() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "Хлеб и вода.").unwrap();
        fs::write(&b, "hleb i so").unwrap();

        let translit = Transliterator::embedded().unwrap();
        let store = Arc::new(MemoryStore::new(translit.clone()));
        let report = args(Some(2), false)
            .ingest_files(&[a, b], store.clone(), translit, &CliConfig::default())
            .unwrap();

        // хлеб/hleb and и/i are shared between the files
        assert_eq!(report.added, 4);
        assert_eq!(report.skipped, 2);
        assert_eq!(store.len().unwrap(), 4);
        assert_eq!(store.sources().len(), 2);

        let row = store.lookup("hleb", Column::Latinica).unwrap().unwrap();
        assert_eq!(row.hr_language.as_deref(), Some("kruh"));
    }

    #[test]
    fn test_line_mode() {
        let dir = TempDir::new().unwrap();
        let list = dir.path().join("lista.txt");
        fs::write(&list, "kafa\nšargarepa\nkafa\n").unwrap();

        let translit = Transliterator::embedded().unwrap();
        let store = Arc::new(MemoryStore::new(translit.clone()));
        let report = args(Some(1), true)
            .ingest_files(&[list], store.clone(), translit, &CliConfig::default())
            .unwrap();

        assert_eq!(report.added, 2);
        assert_eq!(report.skipped, 1);
        assert!(store.lookup("шаргарепа", Column::Cirilica).unwrap().is_some());
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let translit = Transliterator::embedded().unwrap();
        let store = Arc::new(MemoryStore::new(translit.clone()));
        let err = args(Some(0), false)
            .ingest_files(&[], store, translit, &CliConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("Job count must be greater than 0"));
    }
}
