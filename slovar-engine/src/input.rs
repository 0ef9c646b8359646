//! Where a document's text comes from

use crate::error::{EngineError, Result};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Source of one document, read in full before conversion
pub enum Input {
    /// Text already in memory
    Text(String),
    /// UTF-8 file on disk
    File(PathBuf),
    /// Stream read to its end, such as stdin
    Reader(Box<dyn Read + Send>),
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => write!(f, "Text({} bytes)", text.len()),
            Input::File(path) => write!(f, "File({})", path.display()),
            Input::Reader(_) => f.write_str("Reader"),
        }
    }
}

impl Input {
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Load the whole document; invalid UTF-8 is an encoding error
    pub fn to_text(self) -> Result<String> {
        let (bytes, origin) = match self {
            Input::Text(text) => return Ok(text),
            Input::File(path) => {
                let bytes = fs::read(&path).map_err(|e| {
                    EngineError::IoError(format!("cannot read {}: {e}", path.display()))
                })?;
                (bytes, path.display().to_string())
            }
            Input::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader
                    .read_to_end(&mut bytes)
                    .map_err(|e| EngineError::IoError(format!("cannot read stream: {e}")))?;
                (bytes, "stream".to_string())
            }
        };

        String::from_utf8(bytes)
            .map_err(|e| EngineError::EncodingError(format!("{origin} is not UTF-8: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_is_read_to_end() {
        let input = Input::from_reader(Cursor::new("Здраво, свете".as_bytes().to_vec()));
        assert_eq!(input.to_text().unwrap(), "Здраво, свете");
    }

    #[test]
    fn test_truncated_utf8_in_stream() {
        // first byte of a two-byte Cyrillic letter
        let err = Input::from_reader(Cursor::new(vec![b'a', 0xd0]))
            .to_text()
            .unwrap_err();
        assert!(matches!(err, EngineError::EncodingError(ref msg) if msg.starts_with("stream")));
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/slovar/input.txt")
            .to_text()
            .unwrap_err();
        assert!(matches!(err, EngineError::IoError(_)));
    }

    #[test]
    fn test_debug_hides_contents() {
        assert_eq!(format!("{:?}", Input::from_text("хлеб")), "Text(8 bytes)");
        assert_eq!(format!("{:?}", Input::from_reader(std::io::empty())), "Reader");
    }
}
