//! Incremental UTF-8 decoding of raw input bytes.
//!
//! Terminals deliver a multi-byte character one byte at a time. The
//! [`CodepointAssembler`] collects those bytes until they form exactly one
//! character, rejecting malformed sequences as soon as they are detected.

use crate::error::{Error, Result};

/// Longest UTF-8 encoding of a single character.
pub const MAX_CHAR_BYTES: usize = 4;

/// Outcome of feeding one byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feed {
    /// A valid prefix; more bytes are needed.
    Incomplete,
    /// The bytes form one complete character.
    Complete(char),
    /// The sequence is malformed and has been discarded.
    Invalid,
}

/// Staging buffer for a character that is still being typed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodepointAssembler {
    buf: [u8; MAX_CHAR_BYTES],
    len: usize,
}

impl CodepointAssembler {
    /// Create an empty assembler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of the character in progress.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Whether no partial character is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop any partial character.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Feed one byte.
    ///
    /// A byte that cannot continue the held prefix discards the prefix and
    /// itself; the next byte starts a fresh character.
    pub fn feed(&mut self, byte: u8) -> Feed {
        if self.len >= MAX_CHAR_BYTES {
            self.reset();
        }
        self.buf[self.len] = byte;
        self.len += 1;

        match std::str::from_utf8(&self.buf[..self.len]) {
            Ok(s) => {
                let c = s.chars().next();
                self.reset();
                c.map_or(Feed::Invalid, Feed::Complete)
            }
            // A valid prefix cut short.
            Err(e) if e.error_len().is_none() && self.len < MAX_CHAR_BYTES => Feed::Incomplete,
            Err(_) => {
                self.reset();
                Feed::Invalid
            }
        }
    }

    /// Feed one byte, reporting a malformed sequence as an error.
    ///
    /// Returns `Ok(None)` while the character is incomplete.
    pub fn feed_checked(&mut self, byte: u8) -> Result<Option<char>> {
        let held = self.len.min(MAX_CHAR_BYTES - 1);
        let mut bytes = self.buf[..held].to_vec();
        bytes.push(byte);
        match self.feed(byte) {
            Feed::Incomplete => Ok(None),
            Feed::Complete(c) => Ok(Some(c)),
            Feed::Invalid => Err(Error::MalformedCharacter { bytes }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(asm: &mut CodepointAssembler, bytes: &[u8]) -> Vec<Feed> {
        bytes.iter().map(|&b| asm.feed(b)).collect()
    }

    #[test]
    fn test_ascii_completes_immediately() {
        let mut asm = CodepointAssembler::new();
        assert_eq!(asm.feed(b'a'), Feed::Complete('a'));
        assert!(asm.is_empty());
    }

    #[test]
    fn test_multibyte_sequence() {
        let mut asm = CodepointAssembler::new();
        let bytes = "é".as_bytes();
        assert_eq!(asm.feed(bytes[0]), Feed::Incomplete);
        assert_eq!(asm.pending(), &bytes[..1]);
        assert_eq!(asm.feed(bytes[1]), Feed::Complete('é'));
        assert!(asm.is_empty());
    }

    #[test]
    fn test_four_byte_sequence() {
        let mut asm = CodepointAssembler::new();
        let out = feed_all(&mut asm, "😀".as_bytes());
        assert_eq!(
            out,
            vec![
                Feed::Incomplete,
                Feed::Incomplete,
                Feed::Incomplete,
                Feed::Complete('😀')
            ]
        );
    }

    #[test]
    fn test_lone_continuation_rejected() {
        let mut asm = CodepointAssembler::new();
        assert_eq!(asm.feed(0x80), Feed::Invalid);
        assert!(asm.is_empty());
    }

    #[test]
    fn test_broken_sequence_discards_both_bytes() {
        let mut asm = CodepointAssembler::new();
        assert_eq!(asm.feed(0xC3), Feed::Incomplete);
        assert_eq!(asm.feed(b'a'), Feed::Invalid);
        assert!(asm.is_empty());
        assert_eq!(asm.feed(b'b'), Feed::Complete('b'));
    }

    #[test]
    fn test_overlong_and_surrogates_rejected() {
        let mut asm = CodepointAssembler::new();
        // Overlong encoding of '/'
        assert_eq!(asm.feed(0xC0), Feed::Invalid);
        // UTF-16 surrogate half (U+D800)
        assert_eq!(asm.feed(0xED), Feed::Incomplete);
        assert_eq!(asm.feed(0xA0), Feed::Invalid);
    }

    #[test]
    fn test_feed_checked_reports_bytes() {
        let mut asm = CodepointAssembler::new();
        assert_eq!(asm.feed_checked(0xE2).ok(), Some(None));
        match asm.feed_checked(b'x') {
            Err(Error::MalformedCharacter { bytes }) => assert_eq!(bytes, vec![0xE2, b'x']),
            other => panic!("expected malformed character, got {other:?}"),
        }
        assert_eq!(asm.feed_checked(b'y').ok(), Some(Some('y')));
    }

    #[test]
    fn test_reset_drops_prefix() {
        let mut asm = CodepointAssembler::new();
        asm.feed(0xF0);
        asm.reset();
        assert!(asm.pending().is_empty());
        assert_eq!(asm.feed(b'z'), Feed::Complete('z'));
    }
}
