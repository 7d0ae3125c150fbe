//! Character-indexed text storage with capacity accounting.
//!
//! [`TextStore`] wraps a [`ropey::Rope`] so callers only ever deal in
//! character offsets. It also tracks a logical byte capacity: the line grows
//! in chunks sized to the visible width, may be capped by a byte limit, and
//! never shrinks until the whole text is reassigned.

use std::fmt;
use std::ops::Range;

use ropey::Rope;

use crate::error::{Error, Result};
use crate::unicode::{next_step_len, prev_step_len};

/// Characters examined per grapheme lookup before widening the window.
const STEP_WINDOW: usize = 16;

/// Rope-backed text with a logical byte capacity.
#[derive(Clone, Debug)]
pub struct TextStore {
    rope: Rope,
    /// Bytes reserved, including the terminator slot.
    capacity: usize,
    limit: Option<usize>,
}

impl Default for TextStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStore {
    /// Create an empty store with room for the terminator only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            capacity: 1,
            limit: None,
        }
    }

    /// Create a store holding `text`, sized for a `width`-column line.
    #[must_use]
    pub fn with_text(text: &str, width: usize) -> Self {
        let mut store = Self::new();
        store.assign(text, width);
        store
    }

    /// Cap capacity growth at `limit` bytes.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the number of bytes.
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Logical capacity in bytes. Always at least `len_bytes() + 1`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Growth ceiling, if any.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Character at `char_idx`.
    #[must_use]
    pub fn char_at(&self, char_idx: usize) -> Option<char> {
        self.rope.get_char(char_idx)
    }

    /// Characters in `range` (clamped) as an owned string.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let end = range.end.min(len);
        let start = range.start.min(end);
        self.rope.slice(start..end).to_string()
    }

    /// Iterate over all characters.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.rope.chars()
    }

    /// Insert `text` at `char_idx`, growing capacity by at least `growth`.
    ///
    /// On failure the text is left untouched.
    pub fn insert(&mut self, char_idx: usize, text: &str, growth: usize) -> Result<()> {
        let needed = self.len_bytes() + text.len() + 1;
        if needed > self.capacity {
            self.grow(needed, growth + text.len())?;
        }
        let idx = char_idx.min(self.len_chars());
        self.rope.insert(idx, text);
        Ok(())
    }

    /// Insert one character at `char_idx`.
    pub fn insert_char(&mut self, char_idx: usize, c: char, growth: usize) -> Result<()> {
        let mut buf = [0u8; 4];
        self.insert(char_idx, c.encode_utf8(&mut buf), growth)
    }

    /// Check that swapping `removed` bytes for `added` bytes stays within the
    /// growth limit. Nothing is modified.
    pub fn check_replace(&self, removed: usize, added: usize) -> Result<()> {
        let needed = self.len_bytes().saturating_sub(removed) + added + 1;
        match self.limit {
            Some(limit) if needed > limit => {
                tracing::warn!(needed, limit, "line buffer growth refused");
                Err(Error::BufferGrowth {
                    requested: needed,
                    limit,
                })
            }
            _ => Ok(()),
        }
    }

    /// Remove the characters in `range` (clamped). Capacity is kept.
    pub fn remove(&mut self, range: Range<usize>) {
        let len = self.len_chars();
        let end = range.end.min(len);
        let start = range.start.min(end);
        if start < end {
            self.rope.remove(start..end);
        }
    }

    /// Remove everything after `char_idx`, returning it.
    pub fn truncate(&mut self, char_idx: usize) -> String {
        let len = self.len_chars();
        let tail = self.slice(char_idx..len);
        self.remove(char_idx..len);
        tail
    }

    /// Clear all content. Capacity is kept.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
    }

    /// Replace the whole content, resizing to `1 + max(width, len)` bytes.
    ///
    /// Programmatic assignment is not subject to the growth limit.
    pub fn assign(&mut self, text: &str, width: usize) {
        self.rope = Rope::from_str(text);
        self.capacity = 1 + width.max(text.len());
    }

    /// Characters covered by one step forward from `char_idx`.
    ///
    /// A base character plus its combining marks is one step.
    #[must_use]
    pub fn next_step(&self, char_idx: usize) -> usize {
        let len = self.len_chars();
        if char_idx >= len {
            return 0;
        }
        let mut window = STEP_WINDOW;
        loop {
            let end = (char_idx + window).min(len);
            let chunk = self.slice(char_idx..end);
            let step = next_step_len(&chunk, 0);
            if step < end - char_idx || end == len {
                return step;
            }
            window *= 2;
        }
    }

    /// Characters covered by one step backward from `char_idx`.
    #[must_use]
    pub fn prev_step(&self, char_idx: usize) -> usize {
        let idx = char_idx.min(self.len_chars());
        if idx == 0 {
            return 0;
        }
        let mut window = STEP_WINDOW;
        loop {
            let start = idx.saturating_sub(window);
            let chunk = self.slice(start..idx);
            let step = prev_step_len(&chunk, idx - start);
            if step < idx - start || start == 0 {
                return step;
            }
            window *= 2;
        }
    }

    fn grow(&mut self, needed: usize, growth: usize) -> Result<()> {
        let mut target = self.capacity + growth;
        if let Some(limit) = self.limit {
            if needed > limit {
                tracing::warn!(needed, limit, "line buffer growth refused");
                return Err(Error::BufferGrowth {
                    requested: target,
                    limit,
                });
            }
            target = target.min(limit);
        }
        tracing::trace!(from = self.capacity, to = target, "line buffer grown");
        self.capacity = target.max(needed);
        Ok(())
    }
}

impl fmt::Display for TextStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl From<&str> for TextStore {
    fn from(s: &str) -> Self {
        Self::with_text(s, 0)
    }
}
