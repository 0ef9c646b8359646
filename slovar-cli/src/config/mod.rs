//! Configuration module
//!
//! Values come from an optional `slovar.toml`; command-line flags override
//! them.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use slovar_core::Variant;
use std::fs;
use std::path::{Path, PathBuf};

/// Dictionary file used when neither a flag nor the config names one
pub const DEFAULT_DICTIONARY: &str = "slovar-dictionary.json";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Dictionary configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Conversion configuration
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Dictionary-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct DictionaryConfig {
    /// JSON dictionary file
    pub path: Option<PathBuf>,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ConversionConfig {
    /// Target variant when `--target` is not given
    pub default_target: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            default_target: Variant::SrLatinica.as_str().to_string(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Input size from which conversion goes parallel (KB)
    pub parallel_threshold_kb: usize,

    /// Chunk size for processing (KB)
    pub chunk_size_kb: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold_kb: 100,
            chunk_size_kb: 256,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Config from `path`, or defaults when no file was given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Configured default target
    pub fn default_target(&self) -> Result<Variant> {
        self.conversion
            .default_target
            .parse::<Variant>()
            .map_err(|e| CliError::ConfigError(format!("{e}")).into())
    }

    /// Worker thread count, `None` meaning one per core
    pub fn worker_threads(&self) -> Option<usize> {
        match self.performance.worker_threads {
            0 => None,
            n => Some(n),
        }
    }

    /// Dictionary path from a flag, the config, or the default name
    pub fn dictionary_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.dictionary.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY))
    }
}
