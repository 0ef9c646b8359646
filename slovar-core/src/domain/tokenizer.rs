//! Word/separator segmentation that keeps every byte of the input

/// Kind of a text segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Word,
    /// Whitespace, punctuation, apostrophes, hyphens, symbols
    Separator,
}

/// A slice of the input tagged with its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == SegmentKind::Word
    }
}

/// Whether `ch` belongs inside a word
///
/// Combining diacritics (U+0300..=U+036F) stay attached to the letter they
/// decorate.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ('\u{0300}'..='\u{036F}').contains(&ch)
}

/// Split text into alternating word and separator segments
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut current: Option<SegmentKind> = None;

    for (idx, ch) in text.char_indices() {
        let kind = if is_word_char(ch) {
            SegmentKind::Word
        } else {
            SegmentKind::Separator
        };

        match current {
            Some(prev) if prev == kind => {}
            Some(prev) => {
                segments.push(Segment {
                    kind: prev,
                    text: &text[start..idx],
                });
                start = idx;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
    }

    if let Some(kind) = current {
        segments.push(Segment {
            kind,
            text: &text[start..],
        });
    }

    segments
}

/// Concatenate segments back into text
pub fn reconstruct(segments: &[Segment<'_>]) -> String {
    let len = segments.iter().map(|s| s.text.len()).sum();
    segments.iter().fold(String::with_capacity(len), |mut out, s| {
        out.push_str(s.text);
        out
    })
}
