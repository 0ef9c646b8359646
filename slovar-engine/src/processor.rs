//! Document converter and builder

use crate::{
    adaptive_dispatcher::AdaptiveDispatcher,
    config::{ChunkPolicy, EngineConfig},
    error::Result,
    executor::{ExecutionMode, ExecutionOutput},
    input::Input,
};
use slovar_core::{ConversionStats, DictionaryStore, MappingTable, TextConverter, Variant};
use std::sync::Arc;
use std::time::Instant;

/// Converts whole documents into a target variant
///
/// Holds an immutable mapping table, an optional dictionary store and the
/// execution setup; one instance can be shared by many threads.
#[derive(Debug)]
pub struct DocumentConverter {
    converter: TextConverter,
    dispatcher: AdaptiveDispatcher,
    target: Variant,
}

/// Converted text with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Converted text
    pub text: String,
    /// What the run did and how long it took
    pub metadata: ConversionMetadata,
}

/// Conversion metadata
#[derive(Debug, Clone)]
pub struct ConversionMetadata {
    /// Variant the text was converted into
    pub target: Variant,
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
    /// Total bytes of input
    pub bytes_processed: usize,
    /// Number of chunks converted
    pub chunks_processed: usize,
    /// Word and vocabulary counters
    pub stats: ConversionStats,
}

impl ConversionMetadata {
    fn from_execution(
        output: &ExecutionOutput,
        target: Variant,
        bytes: usize,
        started: Instant,
    ) -> Self {
        Self {
            target,
            execution_mode: output.mode_used,
            processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            bytes_processed: bytes,
            chunks_processed: output.chunks,
            stats: output.stats,
        }
    }
}

impl DocumentConverter {
    /// Converter over the embedded table with default settings
    pub fn new(target: Variant) -> Result<Self> {
        DocumentConverterBuilder::new().target(target).build()
    }

    /// Start building a converter
    pub fn builder() -> DocumentConverterBuilder {
        DocumentConverterBuilder::new()
    }

    /// Default target variant
    pub fn target(&self) -> Variant {
        self.target
    }

    /// Engine configuration in use
    pub fn config(&self) -> &EngineConfig {
        self.dispatcher.config()
    }

    /// Word-level converter used for every chunk
    pub fn text_converter(&self) -> &TextConverter {
        &self.converter
    }

    /// Convert input into the default target
    pub fn convert(&self, input: Input) -> Result<Output> {
        self.convert_to(input, self.target)
    }

    /// Convert a string into the default target
    pub fn convert_text(&self, text: &str) -> Result<Output> {
        self.convert_text_to(text, self.target)
    }

    /// Convert input into `target`
    pub fn convert_to(&self, input: Input, target: Variant) -> Result<Output> {
        let text = input.to_text()?;
        self.convert_text_to(&text, target)
    }

    /// Convert input into `target` with an explicit execution mode
    pub fn convert_with_mode(
        &self,
        input: Input,
        target: Variant,
        mode: ExecutionMode,
    ) -> Result<Output> {
        let text = input.to_text()?;
        let started = Instant::now();
        let output = self
            .dispatcher
            .execute_with_mode(&text, target, &self.converter, mode)?;
        Ok(self.finish(output, target, text.len(), started))
    }

    fn convert_text_to(&self, text: &str, target: Variant) -> Result<Output> {
        let started = Instant::now();
        let output = self
            .dispatcher
            .execute_configured(text, target, &self.converter)?;
        Ok(self.finish(output, target, text.len(), started))
    }

    fn finish(
        &self,
        output: ExecutionOutput,
        target: Variant,
        bytes: usize,
        started: Instant,
    ) -> Output {
        let metadata = ConversionMetadata::from_execution(&output, target, bytes, started);
        log::debug!(
            "Converted {} bytes to {} in {:.2}ms ({} mode, {} chunks)",
            metadata.bytes_processed,
            metadata.target,
            metadata.processing_time_ms,
            metadata.execution_mode,
            metadata.chunks_processed
        );
        Output {
            text: output.text,
            metadata,
        }
    }
}

/// Builder for DocumentConverter
///
/// Provides a fluent interface for configuring the converter.
pub struct DocumentConverterBuilder {
    config: EngineConfig,
    target: Variant,
    table: Option<Arc<MappingTable>>,
    store: Option<Arc<dyn DictionaryStore>>,
}

impl Default for DocumentConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentConverterBuilder {
    /// Create a new builder targeting Serbian Latin
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            target: Variant::SrLatinica,
            table: None,
            store: None,
        }
    }

    /// Set the default target variant
    pub fn target(mut self, target: Variant) -> Self {
        self.target = target;
        self
    }

    /// Use a mapping table instead of the embedded one
    pub fn table(mut self, table: Arc<MappingTable>) -> Self {
        self.table = Some(table);
        self
    }

    /// Consult a dictionary store for the Croatian variant
    pub fn store(mut self, store: Arc<dyn DictionaryStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the whole engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the size in bytes from which adaptive mode goes parallel
    pub fn parallel_threshold(mut self, bytes: usize) -> Self {
        self.config.parallel_threshold = bytes;
        self
    }

    /// Set the chunk policy
    pub fn chunk_policy(mut self, policy: ChunkPolicy) -> Self {
        self.config.chunk_policy = policy;
        self
    }

    /// Use fixed chunks of `kb` kilobytes
    pub fn chunk_size_kb(mut self, kb: usize) -> Self {
        self.config.chunk_policy = ChunkPolicy::Fixed { size: kb * 1024 };
        self
    }

    /// Use fast configuration preset
    pub fn fast(mut self) -> Self {
        self.config = EngineConfig::fast();
        self
    }

    /// Use balanced configuration preset
    pub fn balanced(mut self) -> Self {
        self.config = EngineConfig::balanced();
        self
    }

    /// Build the converter
    pub fn build(self) -> Result<DocumentConverter> {
        let table = match self.table {
            Some(table) => table,
            None => MappingTable::embedded()?,
        };

        let mut converter = TextConverter::new(table);
        if let Some(store) = self.store {
            converter = converter.with_store(store);
        }

        let dispatcher = AdaptiveDispatcher::new(self.config)?;

        Ok(DocumentConverter {
            converter,
            dispatcher,
            target: self.target,
        })
    }
}
