//! Word lists read from files

use super::FileReader;
use anyhow::Result;
use slovar_core::{tokenize, SourceProvider};
use std::path::Path;

/// How a file is split into words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordSplit {
    /// Every word token of running text
    #[default]
    Text,
    /// One word per non-empty line
    Lines,
}

/// All words of one file, attributed to its file name
#[derive(Debug)]
pub struct FileWords {
    file_name: String,
    text: String,
    split: WordSplit,
}

impl FileWords {
    /// Read `path` and keep its text for word iteration
    pub fn read(path: &Path, split: WordSplit) -> Result<Self> {
        let text = FileReader::read_text(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::from_text(file_name, text, split))
    }

    pub fn from_text(file_name: impl Into<String>, text: String, split: WordSplit) -> Self {
        Self {
            file_name: file_name.into(),
            text,
            split,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl SourceProvider for FileWords {
    fn words(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        let name = self.file_name.as_str();
        match self.split {
            WordSplit::Text => Box::new(
                tokenize(&self.text)
                    .into_iter()
                    .filter(|s| s.is_word())
                    .map(move |s| (s.text.to_string(), name.to_string())),
            ),
            WordSplit::Lines => Box::new(
                self.text
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(move |l| (l.to_string(), name.to_string())),
            ),
        }
    }
}
