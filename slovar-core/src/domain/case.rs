//! Re-applying the case pattern of a source word to its replacement

use crate::language::table::{lower, upper};

/// Dominant case of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    Lower,
    /// First letter uppercase, rest lowercase
    Capitalized,
    /// Two or more cased letters, all uppercase
    Upper,
}

impl CasePattern {
    pub fn of(word: &str) -> Self {
        let mut cased = word.chars().filter(|c| c.is_uppercase() || c.is_lowercase());
        let Some(first) = cased.next() else {
            return CasePattern::Lower;
        };

        let mut rest = 0;
        let mut rest_upper = true;
        for ch in cased {
            rest += 1;
            rest_upper &= ch.is_uppercase();
        }

        match (first.is_uppercase(), rest > 0 && rest_upper) {
            (true, true) => CasePattern::Upper,
            (true, false) => CasePattern::Capitalized,
            (false, _) => CasePattern::Lower,
        }
    }

    pub fn apply(&self, word: &str) -> String {
        match self {
            CasePattern::Lower => word.chars().map(lower).collect(),
            CasePattern::Upper => word.chars().map(upper).collect(),
            CasePattern::Capitalized => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => std::iter::once(upper(first))
                        .chain(chars.map(lower))
                        .collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Give `replacement` the case of `source`
///
/// When both have the same number of characters the case is copied
/// character by character. Otherwise the dominant [`CasePattern`] of the
/// source is applied to the whole replacement.
pub fn apply_case(source: &str, replacement: &str) -> String {
    if source.chars().count() == replacement.chars().count() {
        return source
            .chars()
            .zip(replacement.chars())
            .map(|(s, r)| {
                if s.is_uppercase() {
                    upper(r)
                } else if s.is_lowercase() {
                    lower(r)
                } else {
                    r
                }
            })
            .collect();
    }

    CasePattern::of(source).apply(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_pattern_of() {
        assert_eq!(CasePattern::of("hleb"), CasePattern::Lower);
        assert_eq!(CasePattern::of("Hleb"), CasePattern::Capitalized);
        assert_eq!(CasePattern::of("HLEB"), CasePattern::Upper);
        assert_eq!(CasePattern::of("A"), CasePattern::Capitalized);
        assert_eq!(CasePattern::of("hLEB"), CasePattern::Lower);
        assert_eq!(CasePattern::of("123"), CasePattern::Lower);
    }

    #[test]
    fn test_equal_length_copies_per_char() {
        assert_eq!(apply_case("Hleb", "kruh"), "Kruh");
        assert_eq!(apply_case("HLEB", "kruh"), "KRUH");
        assert_eq!(apply_case("hLeB", "kruh"), "kRuH");
    }

    #[test]
    fn test_different_length_uses_dominant_case() {
        assert_eq!(apply_case("Kafa", "glazba"), "Glazba");
        assert_eq!(apply_case("MUZIKA", "glazba"), "GLAZBA");
        assert_eq!(apply_case("fudbal", "Nogomet"), "nogomet");
        assert_eq!(apply_case("Avion", "zrakoplov"), "Zrakoplov");
    }

    #[test]
    fn test_digraph_letters_follow_dominant_case() {
        assert_eq!(apply_case("LJUBAV", "ljubav"), "LJUBAV");
        assert_eq!(apply_case("Љубав", "ljubav"), "Ljubav");
    }
}
