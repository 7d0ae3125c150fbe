//! Word-boundary classification.
//!
//! Word motion and word deletion stop at separators. What counts as a
//! separator is locale territory, so it sits behind [`CharClassifier`]; the
//! [`DefaultClassifier`] treats whitespace and punctuation (ASCII and the
//! common Unicode punctuation blocks) as separators.

/// Decides which characters separate words.
pub trait CharClassifier {
    /// Whether `c` is whitespace or punctuation.
    fn is_separator(&self, c: char) -> bool;
}

/// Whitespace and punctuation classifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultClassifier;

impl CharClassifier for DefaultClassifier {
    fn is_separator(&self, c: char) -> bool {
        c.is_whitespace() || is_punctuation(c)
    }
}

/// Punctuation and symbol test covering ASCII plus the Unicode
/// punctuation ranges a terminal user is likely to type.
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation();
    }
    matches!(c,
        '\u{00a1}'..='\u{00bf}'     // Latin-1 punctuation and symbols
        | '\u{00d7}' | '\u{00f7}'   // multiplication, division
        | '\u{2010}'..='\u{2027}'   // dashes, quotes, bullets
        | '\u{2030}'..='\u{205e}'   // per mille, primes, brackets
        | '\u{3001}'..='\u{3003}'   // ideographic comma, full stop
        | '\u{3008}'..='\u{3011}'   // CJK brackets
        | '\u{ff01}'..='\u{ff0f}'   // fullwidth ASCII punctuation
        | '\u{ff1a}'..='\u{ff20}'
        | '\u{ff3b}'..='\u{ff40}'
        | '\u{ff5b}'..='\u{ff65}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separators() {
        let c = DefaultClassifier;
        for sep in [' ', '\t', '/', '.', '-', '@', ':', '«', '—', '、', '！'] {
            assert!(c.is_separator(sep), "{sep:?} should separate words");
        }
        for word in ['a', 'Z', '0', 'é', '漢', 'ß'] {
            assert!(!c.is_separator(word), "{word:?} should be a word character");
        }
    }

    #[test]
    fn test_underscore_is_ascii_punctuation() {
        // Matches the C locale: '_' is punct, so it splits words.
        assert!(DefaultClassifier.is_separator('_'));
    }

    #[test]
    fn test_custom_classifier() {
        struct SpacesOnly;
        impl CharClassifier for SpacesOnly {
            fn is_separator(&self, c: char) -> bool {
                c == ' '
            }
        }
        assert!(SpacesOnly.is_separator(' '));
        assert!(!SpacesOnly.is_separator('/'));
    }
}
