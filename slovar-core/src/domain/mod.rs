//! Word-level text handling: script detection, transliteration,
//! segmentation and case

pub mod case;
pub mod classifier;
pub mod tokenizer;
pub mod transliterator;
pub mod types;

pub use case::{apply_case, CasePattern};
pub use classifier::{ScriptClassifier, ScriptCounts};
pub use tokenizer::{is_word_char, reconstruct, tokenize, Segment, SegmentKind};
pub use transliterator::Transliterator;
pub use types::{ParseVariantError, Script, Variant};
