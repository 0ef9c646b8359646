//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use slovar_core::{ConversionStats, Variant};
use slovar_engine::Output;
use std::io::Write;

/// JSON formatter - outputs documents as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file the text came from
    pub source: String,
    pub target: Variant,
    /// Converted text
    pub text: String,
    pub execution_mode: String,
    pub chunks: usize,
    pub bytes: usize,
    pub processing_time_ms: f64,
    pub stats: ConversionStats,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        let meta = &output.metadata;
        self.documents.push(DocumentData {
            source: source.to_string(),
            target: meta.target,
            text: output.text.clone(),
            execution_mode: meta.execution_mode.to_string(),
            chunks: meta.chunks_processed,
            bytes: meta.bytes_processed,
            processing_time_ms: meta.processing_time_ms,
            stats: meta.stats,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
