//! Convert command implementation

use crate::commands::{init_logging, load_table};
use crate::config::CliConfig;
use crate::dictionary;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use slovar_core::{ConversionStats, Transliterator, Variant};
use slovar_engine::{DocumentConverter, ExecutionMode, Input};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Input name that reads the document from stdin
const STDIN: &str = "-";
/// Source name reported for stdin
const STDIN_NAME: &str = "<stdin>";

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input files or patterns (supports glob); `-` reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Target variant: sr_cirilica, sr_latinica or hr_language
    #[arg(short, long, value_name = "VARIANT")]
    pub target: Option<Variant>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// JSON dictionary consulted for the Croatian variant
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// TOML file with extra vocabulary exceptions
    #[arg(long, value_name = "FILE")]
    pub vocabulary: Option<PathBuf>,

    /// Force parallel processing even for small files
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: one per core)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Chunk size in KB
    #[arg(long, value_name = "KB")]
    pub chunk_kb: Option<usize>,

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

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Converted text
    Text,
    /// JSON array of documents with metadata
    Json,
}

impl OutputFormat {
    fn formatter<W>(self, writer: W) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting conversion");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let converter = self.build_converter(&config)?;
        log::info!("Target variant: {}", converter.target());

        let documents = self.documents()?;
        let mut formatter = self.formatter()?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(documents.len() as u64);

        let mut totals = ConversionStats::default();
        for (source, input) in documents {
            log::debug!("Converting {source}");
            let output = converter
                .convert(input)
                .with_context(|| format!("Failed to convert {source}"))?;

            log::debug!(
                "{source}: {} chunks, {} mode, {:.2} ms",
                output.metadata.chunks_processed,
                output.metadata.execution_mode,
                output.metadata.processing_time_ms
            );
            totals += output.metadata.stats;

            formatter.format_document(&source, &output)?;
            progress.file_completed(&source);
        }

        formatter.finish()?;
        progress.finish();

        log::info!(
            "Converted {} words: {} from dictionary, {} from exceptions, {} neutral",
            totals.words,
            totals.dictionary_hits,
            totals.exception_hits,
            totals.neutral_words
        );
        Ok(())
    }

    /// Merge flags over the config file into a ready converter
    fn build_converter(&self, config: &CliConfig) -> Result<DocumentConverter> {
        let target = match self.target {
            Some(target) => target,
            None => config.default_target()?,
        };

        let chunk_kb = self.chunk_kb.unwrap_or(config.performance.chunk_size_kb);
        if chunk_kb == 0 {
            return Err(CliError::ConfigError("Chunk size must be greater than 0".into()).into());
        }

        let table = load_table(self.vocabulary.as_deref())?;

        let mut builder = DocumentConverter::builder()
            .target(target)
            .table(Arc::clone(&table))
            .threads(self.threads.or_else(|| config.worker_threads()))
            .parallel_threshold(config.performance.parallel_threshold_kb * 1024)
            .chunk_size_kb(chunk_kb);

        if self.parallel {
            builder = builder.execution_mode(ExecutionMode::Parallel);
        }

        // only an explicitly named dictionary is required to exist
        let dictionary = self
            .dictionary
            .clone()
            .or_else(|| config.dictionary.path.clone());
        if let Some(path) = dictionary {
            let store = dictionary::load(&path, Transliterator::new(table))?;
            builder = builder.store(Arc::new(store));
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Named inputs in order: stdin first when `-` was given, then files
    fn documents(&self) -> Result<Vec<(String, Input)>> {
        let reads_stdin = self.input.iter().any(|p| p == STDIN);
        let patterns: Vec<String> = self
            .input
            .iter()
            .filter(|p| p.as_str() != STDIN)
            .cloned()
            .collect();

        let files = if patterns.is_empty() {
            Vec::new()
        } else {
            resolve_patterns(&patterns)?
        };
        log::info!(
            "Converting {} files ({} bytes){}",
            files.len(),
            FileReader::total_size(&files)?,
            if reads_stdin { " and stdin" } else { "" }
        );

        let mut documents = Vec::with_capacity(files.len() + 1);
        if reads_stdin {
            documents.push((STDIN_NAME.to_string(), Input::from_reader(io::stdin())));
        }
        documents.extend(
            files
                .into_iter()
                .map(|path| (path.display().to_string(), Input::from_file(path))),
        );
        Ok(documents)
    }

    fn formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(self.format.formatter(BufWriter::new(file)))
            }
            None => Ok(self.format.formatter(io::stdout())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> ConvertArgs {
        ConvertArgs {
            input: vec![input.to_string()],
            target: None,
            output: None,
            format: OutputFormat::Text,
            dictionary: None,
            vocabulary: None,
            parallel: false,
            threads: None,
            chunk_kb: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_convert_args_debug() {
        let debug_str = format!("{:?}", args("vesti.txt"));
        assert!(debug_str.contains("ConvertArgs"));
        assert!(debug_str.contains("vesti.txt"));
    }

    #[test]
    fn test_target_flag_overrides_config() {
        let mut config = CliConfig::default();
        config.conversion.default_target = "hr_language".into();

        let converter = args("x").build_converter(&config).unwrap();
        assert_eq!(converter.target(), Variant::HrLanguage);

        let mut with_flag = args("x");
        with_flag.target = Some(Variant::SrCirilica);
        let converter = with_flag.build_converter(&config).unwrap();
        assert_eq!(converter.target(), Variant::SrCirilica);
    }

    #[test]
    fn test_performance_settings_reach_engine() {
        let mut config = CliConfig::default();
        config.performance.parallel_threshold_kb = 8;
        config.performance.worker_threads = 2;

        let mut a = args("x");
        a.chunk_kb = Some(64);
        let converter = a.build_converter(&config).unwrap();

        assert_eq!(converter.config().parallel_threshold, 8 * 1024);
        assert_eq!(converter.config().threads, Some(2));
        assert_eq!(converter.config().chunk_policy.size(), 64 * 1024);
        assert_eq!(converter.config().execution_mode, ExecutionMode::Adaptive);
    }

    #[test]
    fn test_parallel_flag() {
        let mut a = args("x");
        a.parallel = true;
        let converter = a.build_converter(&CliConfig::default()).unwrap();
        assert_eq!(converter.config().execution_mode, ExecutionMode::Parallel);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut a = args("x");
        a.chunk_kb = Some(0);
        let err = a.build_converter(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Chunk size must be greater than 0"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut a = args("x");
        a.threads = Some(0);
        let err = a.build_converter(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_stdin_comes_before_files() {
        let mut a = args("-");
        a.input.push("tests/fixtures/latin-sample.txt".into());
        let documents = a.documents().unwrap();

        let names: Vec<&str> = documents.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["<stdin>", "tests/fixtures/latin-sample.txt"]);
        assert!(matches!(documents[0].1, Input::Reader(_)));
    }

    #[test]
    fn test_missing_dictionary_is_error() {
        let mut a = args("x");
        a.dictionary = Some(PathBuf::from("/nonexistent/words.json"));
        let err = a.build_converter(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("File not found:"));
    }
}
