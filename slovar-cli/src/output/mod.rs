//! Output formatting module

use anyhow::Result;
use slovar_engine::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one converted document
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use slovar_engine::{DocumentConverter, Output, Variant};

    pub fn converted(text: &str, target: Variant) -> Output {
        DocumentConverter::new(target)
            .unwrap()
            .convert_text(text)
            .unwrap()
    }
}
