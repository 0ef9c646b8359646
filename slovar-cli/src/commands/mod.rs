//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use slovar_core::language::parse_vocabulary;
use slovar_core::{MappingTable, Variant};
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub mod convert;
pub mod ingest;
pub mod lookup;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert text files into a target variant
    Convert(convert::ConvertArgs),

    /// Add the words of text files to the dictionary
    Ingest(ingest::IngestArgs),

    /// Show the dictionary row for a word
    Lookup(lookup::LookupArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List target variants
    Variants,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::Ingest(args) => args.execute(),
            Commands::Lookup(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) {
        match self {
            ListCommands::Variants => {
                println!("Target variants:");
                for variant in Variant::ALL {
                    println!("  {:<12} - {}", variant.as_str(), variant.description());
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                println!("  text         - Converted text, documents back to back");
                println!("  json         - JSON array with text, timing and word counts");
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // ignore a second initialization from the same process
        let _ =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init();
    }
}

/// Embedded table, extended by a vocabulary file when one is given
pub(crate) fn load_table(vocabulary: Option<&Path>) -> Result<Arc<MappingTable>> {
    let table = MappingTable::embedded()?;
    let Some(path) = vocabulary else {
        return Ok(table);
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read vocabulary: {}", path.display()))?;
    let extra = parse_vocabulary(&path.display().to_string(), &content)?;
    log::info!(
        "Loaded {} vocabulary exceptions from {}",
        extra.len(),
        path.display()
    );
    Ok(Arc::new(table.with_extra_vocabulary(extra)?))
}
