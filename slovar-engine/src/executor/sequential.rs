//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, ExecutionOutput, Executor},
};
use slovar_core::{TextConverter, Variant};

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(
        &self,
        text: &str,
        target: Variant,
        converter: &TextConverter,
    ) -> Result<ExecutionOutput> {
        let (text, stats) = converter.convert_with_stats(text, target)?;

        Ok(ExecutionOutput {
            text,
            stats,
            chunks: 1,
            mode_used: ExecutionMode::Sequential,
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
