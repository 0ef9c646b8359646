//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use slovar_engine::Output;
use std::io::{self, Write};

/// Plain text formatter - outputs converted documents back to back
///
/// A newline is added only after a document that does not end with one.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, output: &Output) -> Result<()> {
        self.writer.write_all(output.text.as_bytes())?;
        if !output.text.is_empty() && !output.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
