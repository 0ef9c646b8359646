//! Text chunking on segment boundaries
//!
//! Cuts are first placed on UTF-8 boundaries and then moved forward until
//! the characters on both sides differ in kind (word vs separator), so no
//! word and no separator run is ever split across two chunks.

use crate::{
    config::ChunkPolicy,
    error::{EngineError, Result},
};
use slovar_core::is_word_char;

/// A chunk of text with its position in the original
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunk<'a> {
    /// The text content
    pub text: &'a str,
    /// Byte offset in original text
    pub start: usize,
    /// Byte length
    pub len: usize,
}

/// Manages text chunking with UTF-8 and word safety
#[derive(Debug, Clone)]
pub struct ChunkManager {
    policy: ChunkPolicy,
}

impl ChunkManager {
    /// Create a new chunk manager
    pub fn new(policy: ChunkPolicy) -> Self {
        Self { policy }
    }

    /// Chunk text according to the policy
    pub fn chunk_text<'a>(&self, text: &'a str) -> Result<Vec<TextChunk<'a>>> {
        match self.policy {
            ChunkPolicy::Fixed { size } => self.chunk_fixed(text, size),
            ChunkPolicy::Auto { target_bytes } => self.chunk_auto(text, target_bytes),
        }
    }

    /// Fixed-size chunking
    fn chunk_fixed<'a>(&self, text: &'a str, chunk_size: usize) -> Result<Vec<TextChunk<'a>>> {
        if chunk_size == 0 {
            return Err(EngineError::ConfigError(
                "chunk size must be greater than zero".to_string(),
            ));
        }

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < text.len() {
            let mut end = (start + chunk_size).min(text.len());

            // Ensure we're at a valid UTF-8 boundary
            while !text.is_char_boundary(end) {
                end += 1;
            }
            let end = segment_boundary(text, end);

            if end <= start {
                return Err(EngineError::InvalidChunkBoundary { position: start });
            }

            chunks.push(TextChunk {
                text: &text[start..end],
                start,
                len: end - start,
            });

            start = end;
        }

        Ok(chunks)
    }

    /// Auto-sizing based on target size
    fn chunk_auto<'a>(&self, text: &'a str, target_bytes: usize) -> Result<Vec<TextChunk<'a>>> {
        // Determine chunk count, then spread the text evenly
        let total_bytes = text.len();
        let chunk_count = total_bytes.div_ceil(target_bytes.max(1)).max(1);
        let chunk_size = total_bytes / chunk_count;

        self.chunk_fixed(text, chunk_size.max(1))
    }
}

/// First position at or after `pos` where the segment kind changes
fn segment_boundary(text: &str, mut pos: usize) -> usize {
    while pos > 0 && pos < text.len() {
        let prev = text[..pos].chars().next_back();
        let next = text[pos..].chars().next();
        match (prev, next) {
            (Some(p), Some(n)) if is_word_char(p) == is_word_char(n) => pos += n.len_utf8(),
            _ => break,
        }
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(chunks: &[TextChunk<'_>]) -> String {
        chunks.iter().map(|c| c.text).collect()
    }

    #[test]
    fn test_chunks_never_split_words() {
        let text = "Идем у Београд, хлеб купујем.";
        let manager = ChunkManager::new(ChunkPolicy::Fixed { size: 5 });
        let chunks = manager.chunk_text(text).unwrap();

        assert!(chunks.len() > 1);
        assert_eq!(joined(&chunks), text);
        for pair in chunks.windows(2) {
            let last = pair[0].text.chars().next_back().unwrap();
            let first = pair[1].text.chars().next().unwrap();
            assert_ne!(is_word_char(last), is_word_char(first));
        }
    }

    #[test]
    fn test_offsets_are_contiguous() {
        let text = "jedan dva tri četiri pet šest sedam";
        let chunks = ChunkManager::new(ChunkPolicy::Fixed { size: 8 })
            .chunk_text(text)
            .unwrap();

        let mut expected_start = 0;
        for chunk in &chunks {
            assert_eq!(chunk.start, expected_start);
            assert_eq!(chunk.len, chunk.text.len());
            expected_start += chunk.len;
        }
        assert_eq!(expected_start, text.len());
    }

    #[test]
    fn test_single_long_word_is_one_chunk() {
        let text = "прекоокеански";
        let chunks = ChunkManager::new(ChunkPolicy::Fixed { size: 3 })
            .chunk_text(text)
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
    }

    #[test]
    fn test_auto_policy_spreads_evenly() {
        let text = "reč ".repeat(1000);
        let chunks = ChunkManager::new(ChunkPolicy::Auto { target_bytes: 1024 })
            .chunk_text(&text)
            .unwrap();
        assert!(chunks.len() >= 4);
        assert_eq!(joined(&chunks), text);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        let chunks = ChunkManager::new(ChunkPolicy::default())
            .chunk_text("")
            .unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_zero_size_is_an_error() {
        let result = ChunkManager::new(ChunkPolicy::Fixed { size: 0 }).chunk_text("abc");
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }
}
