//! Adaptive execution dispatcher
//!
//! Selects between sequential and parallel execution from the input size
//! and the configured threshold.

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, ExecutionOutput, Executor, SequentialExecutor},
};
use slovar_core::{TextConverter, Variant};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Adaptive execution dispatcher
#[derive(Debug)]
pub struct AdaptiveDispatcher {
    sequential_executor: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel_executor: ParallelExecutor,
    config: EngineConfig,
}

impl AdaptiveDispatcher {
    /// Create a new adaptive dispatcher with the given configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        let parallel_executor = match config.threads {
            Some(threads) => ParallelExecutor::with_threads(config.chunk_policy, threads)?,
            None => ParallelExecutor::new(config.chunk_policy),
        };

        Ok(Self {
            sequential_executor: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel_executor,
            config,
        })
    }

    /// Configuration the dispatcher was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Select the execution mode for the given input size
    pub fn select_mode(&self, input_size: usize) -> ExecutionMode {
        auto_select(input_size, &self.config)
    }

    /// Convert with the mode from the configuration
    pub fn execute_configured(
        &self,
        text: &str,
        target: Variant,
        converter: &TextConverter,
    ) -> Result<ExecutionOutput> {
        self.execute_with_mode(text, target, converter, self.config.execution_mode)
    }

    /// Convert with the specified execution mode
    pub fn execute_with_mode(
        &self,
        text: &str,
        target: Variant,
        converter: &TextConverter,
        mode: ExecutionMode,
    ) -> Result<ExecutionOutput> {
        match mode {
            ExecutionMode::Sequential => self.sequential_executor.execute(text, target, converter),
            ExecutionMode::Adaptive => {
                let selected = self.select_mode(text.len());
                log::debug!("Adaptive mode selected {selected} for {} bytes", text.len());
                self.execute_with_mode(text, target, converter, selected)
            }
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.parallel_executor.execute(text, target, converter),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                // Fallback to sequential if parallel is not available
                self.sequential_executor.execute(text, target, converter)
            }
        }
    }
}

impl Executor for AdaptiveDispatcher {
    fn execute(
        &self,
        text: &str,
        target: Variant,
        converter: &TextConverter,
    ) -> Result<ExecutionOutput> {
        self.execute_with_mode(text, target, converter, ExecutionMode::Adaptive)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Adaptive
    }
}
