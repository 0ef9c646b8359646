//! Execution strategies for text conversion

use crate::{config::EngineConfig, error::Result};
use slovar_core::{ConversionStats, TextConverter, Variant};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded parallel processing
    Parallel,
    /// Pick sequential or parallel from the input size
    Adaptive,
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        };
        f.write_str(name)
    }
}

/// Converted text together with what the run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutput {
    /// Converted text
    pub text: String,
    /// Counters summed over every chunk
    pub stats: ConversionStats,
    /// Number of chunks converted
    pub chunks: usize,
    /// Mode that actually ran
    pub mode_used: ExecutionMode,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Convert `text` into `target`, keeping chunk order
    fn execute(
        &self,
        text: &str,
        target: Variant,
        converter: &TextConverter,
    ) -> Result<ExecutionOutput>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on text size
pub fn auto_select(text_len: usize, config: &EngineConfig) -> ExecutionMode {
    if text_len < 1024 || text_len < config.parallel_threshold {
        // Small texts: thread startup costs more than it saves
        return ExecutionMode::Sequential;
    }

    #[cfg(feature = "parallel")]
    {
        let cores = config.threads.unwrap_or_else(num_cpus::get);
        if cores > 1 {
            return ExecutionMode::Parallel;
        }
    }

    ExecutionMode::Sequential
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_text_is_sequential() {
        let config = EngineConfig {
            parallel_threshold: 0,
            ..Default::default()
        };
        assert_eq!(auto_select(500, &config), ExecutionMode::Sequential);
    }

    #[test]
    fn test_threshold_decides() {
        let config = EngineConfig {
            threads: Some(4),
            parallel_threshold: 100_000,
            ..Default::default()
        };
        assert_eq!(auto_select(10_000, &config), ExecutionMode::Sequential);

        #[cfg(feature = "parallel")]
        assert_eq!(auto_select(200_000, &config), ExecutionMode::Parallel);
    }

    #[test]
    fn test_single_thread_stays_sequential() {
        let config = EngineConfig {
            threads: Some(1),
            parallel_threshold: 10,
            ..Default::default()
        };
        assert_eq!(auto_select(200_000, &config), ExecutionMode::Sequential);
    }
}
