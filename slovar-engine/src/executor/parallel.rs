//! Parallel execution strategy
//!
//! Words convert independently, so chunks cut on segment boundaries are
//! converted on the rayon pool and joined back in order.

use crate::{
    chunker::ChunkManager,
    config::ChunkPolicy,
    error::{EngineError, Result},
    executor::{ExecutionMode, ExecutionOutput, Executor},
};
use rayon::prelude::*;
use slovar_core::{ConversionStats, TextConverter, Variant};

/// Parallel multi-threaded executor
#[derive(Debug)]
pub struct ParallelExecutor {
    chunk_manager: ChunkManager,
    pool: Option<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create a new parallel executor on the global rayon pool
    pub fn new(chunk_policy: ChunkPolicy) -> Self {
        Self {
            chunk_manager: ChunkManager::new(chunk_policy),
            pool: None,
        }
    }

    /// Create a parallel executor with a dedicated pool of `threads` workers
    pub fn with_threads(chunk_policy: ChunkPolicy, threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("slovar-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ParallelError(e.to_string()))?;

        Ok(Self {
            chunk_manager: ChunkManager::new(chunk_policy),
            pool: Some(pool),
        })
    }

    fn convert_chunks(
        &self,
        text: &str,
        target: Variant,
        converter: &TextConverter,
    ) -> Result<ExecutionOutput> {
        // Phase 1: Chunk the text
        let chunks = self.chunk_manager.chunk_text(text)?;
        log::debug!(
            "Converting {} bytes in {} chunks",
            text.len(),
            chunks.len()
        );

        // Phase 2: Convert chunks in parallel; collect keeps input order
        let converted: Vec<(String, ConversionStats)> = chunks
            .par_iter()
            .map(|chunk| {
                converter
                    .convert_with_stats(chunk.text, target)
                    .map_err(EngineError::from)
            })
            .collect::<Result<Vec<_>>>()?;

        // Phase 3: Join
        let mut out = String::with_capacity(converted.iter().map(|(t, _)| t.len()).sum());
        let mut stats = ConversionStats::default();
        for (chunk_text, chunk_stats) in &converted {
            out.push_str(chunk_text);
            stats += *chunk_stats;
        }

        Ok(ExecutionOutput {
            text: out,
            stats,
            chunks: chunks.len(),
            mode_used: ExecutionMode::Parallel,
        })
    }
}

impl Executor for ParallelExecutor {
    fn execute(
        &self,
        text: &str,
        target: Variant,
        converter: &TextConverter,
    ) -> Result<ExecutionOutput> {
        match &self.pool {
            Some(pool) => pool.install(|| self.convert_chunks(text, target, converter)),
            None => self.convert_chunks(text, target, converter),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SequentialExecutor;

    #[test]
    fn test_parallel_matches_sequential() {
        let converter = TextConverter::embedded().unwrap();
        let text = "Хлеб и музика, кафа у позоришту. Воз за Ниш касни!\n".repeat(200);

        let executor = ParallelExecutor::with_threads(ChunkPolicy::Fixed { size: 256 }, 4).unwrap();
        for target in Variant::ALL {
            let parallel = executor.execute(&text, target, &converter).unwrap();
            let sequential = SequentialExecutor.execute(&text, target, &converter).unwrap();

            assert_eq!(parallel.text, sequential.text);
            assert_eq!(parallel.stats, sequential.stats);
            assert!(parallel.chunks > 1);
        }
    }
}
