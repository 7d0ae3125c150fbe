//! Grapheme-aware stepping over character offsets.
//!
//! Cursor motion and single-character deletion treat a base character and
//! the zero-width marks that follow it as one unit. These helpers answer
//! "how many `char`s does one step cover" from a character offset.

use unicode_segmentation::UnicodeSegmentation;

/// Byte offset of the `char_idx`-th character (clamped to the end).
#[must_use]
pub fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

/// Number of characters in the step forward from `char_idx`.
///
/// Returns 0 at the end of the text.
#[must_use]
pub fn next_step_len(s: &str, char_idx: usize) -> usize {
    let start = char_to_byte(s, char_idx);
    s[start..]
        .graphemes(true)
        .next()
        .map_or(0, |g| g.chars().count())
}

/// Number of characters in the step backward from `char_idx`.
///
/// Returns 0 at the start of the text.
#[must_use]
pub fn prev_step_len(s: &str, char_idx: usize) -> usize {
    let end = char_to_byte(s, char_idx);
    s[..end]
        .graphemes(true)
        .next_back()
        .map_or(0, |g| g.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_byte() {
        assert_eq!(char_to_byte("héllo", 0), 0);
        assert_eq!(char_to_byte("héllo", 2), 3);
        assert_eq!(char_to_byte("héllo", 99), 6);
    }

    #[test]
    fn test_next_step_plain() {
        assert_eq!(next_step_len("abc", 0), 1);
        assert_eq!(next_step_len("abc", 3), 0);
    }

    #[test]
    fn test_next_step_combining() {
        // e + combining acute is one step of two chars
        let s = "ae\u{0301}b";
        assert_eq!(next_step_len(s, 1), 2);
        assert_eq!(next_step_len(s, 3), 1);
    }

    #[test]
    fn test_prev_step_combining() {
        let s = "ae\u{0301}b";
        assert_eq!(prev_step_len(s, 3), 2);
        assert_eq!(prev_step_len(s, 1), 1);
        assert_eq!(prev_step_len(s, 0), 0);
    }

    #[test]
    fn test_step_zwj_sequence() {
        let family = "👨\u{200d}👩\u{200d}👧";
        let chars = family.chars().count();
        assert_eq!(next_step_len(family, 0), chars);
        assert_eq!(prev_step_len(family, chars), chars);
    }
}
