//! Configuration types for the engine

use crate::{
    error::{EngineError, Result},
    ExecutionMode,
};

/// Chunking policy for text processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkPolicy {
    /// Fixed chunk size in bytes
    Fixed {
        /// Size of each chunk in bytes
        size: usize,
    },
    /// Evenly sized chunks close to a target size
    Auto {
        /// Target size for each chunk in bytes
        target_bytes: usize,
    },
}

impl ChunkPolicy {
    /// Nominal chunk size in bytes
    pub fn size(&self) -> usize {
        match self {
            ChunkPolicy::Fixed { size } => *size,
            ChunkPolicy::Auto { target_bytes } => *target_bytes,
        }
    }
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        ChunkPolicy::Auto {
            target_bytes: 256 * 1024,
        } // 256KB default
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Chunk sizing policy
    pub chunk_policy: ChunkPolicy,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum text size in bytes for parallel processing
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            chunk_policy: ChunkPolicy::default(),
            threads: None,
            parallel_threshold: 100_000, // 100KB
        }
    }
}

impl EngineConfig {
    /// Create a fast configuration optimized for throughput
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            chunk_policy: ChunkPolicy::Fixed { size: 64 * 1024 }, // 64KB chunks
            threads: None,                                        // Use all available
            parallel_threshold: 32 * 1024,                        // 32KB
        }
    }

    /// Create a balanced configuration
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
            ..Self::default()
        }
    }

    /// Check values that would make chunking or thread setup fail
    pub fn validate(&self) -> Result<()> {
        if self.chunk_policy.size() == 0 {
            return Err(EngineError::ConfigError(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
