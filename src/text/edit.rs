//! Editable single-line buffer with cursor and selection.
//!
//! This module provides [`LineBuffer`], which wraps a [`TextStore`] with a
//! cursor (`point`), a mark-based [`Selection`] and a [`CodepointAssembler`]
//! for byte-at-a-time input.
//!
//! # Examples
//!
//! ```
//! use termline::{Direction, LineBuffer};
//!
//! let mut buf = LineBuffer::with_text("foo bar", 20);
//! buf.move_word(Direction::Backward);
//! assert_eq!(buf.point(), 4);
//!
//! buf.feed_bytes("baz ".as_bytes());
//! assert_eq!(buf.text(), "foo baz bar");
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::text::{CodepointAssembler, Selection, TextStore};
use crate::unicode::{CharClassifier, DefaultClassifier};

/// Direction of a cursor motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the start of the line.
    Backward,
    /// Toward the end of the line.
    Forward,
}

/// Unit of a cursor motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// One character, with combining marks folded in.
    Char,
    /// Across separators, then to the next word boundary.
    Word,
}

/// Single-line text with a cursor, a selection and pending input bytes.
///
/// `point` is a character offset and always lies in `0..=len_chars()`.
/// Every structural edit leaves the assembler empty.
pub struct LineBuffer {
    store: TextStore,
    point: usize,
    assembler: CodepointAssembler,
    selection: Selection,
    classifier: Box<dyn CharClassifier>,
    /// Visible width, used as the growth step.
    width: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("text", &self.store.to_string())
            .field("point", &self.point)
            .field("selection", &self.selection)
            .field("pending", &self.assembler.pending())
            .field("capacity", &self.store.capacity())
            .finish_non_exhaustive()
    }
}

impl LineBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_text("", 0)
    }

    /// Create a buffer holding `text` for a `width`-column line, point at end.
    #[must_use]
    pub fn with_text(text: &str, width: usize) -> Self {
        let store = TextStore::with_text(text, width);
        let point = store.len_chars();
        Self {
            store,
            point,
            assembler: CodepointAssembler::new(),
            selection: Selection::new(),
            classifier: Box::new(DefaultClassifier),
            width,
        }
    }

    /// Use `classifier` for word motion.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Box<dyn CharClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Cap buffer growth at `limit` bytes.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.store = self.store.with_limit(limit);
        self
    }

    /// Get the text as a string.
    #[must_use]
    pub fn text(&self) -> String {
        self.store.to_string()
    }

    /// Get the underlying store.
    #[must_use]
    pub fn store(&self) -> &TextStore {
        &self.store
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.store.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Logical capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Cursor offset in characters.
    #[must_use]
    pub fn point(&self) -> usize {
        self.point
    }

    /// Move the cursor to `point` (clamped). Returns whether it moved.
    pub fn set_point(&mut self, point: usize) -> bool {
        let point = point.min(self.len_chars());
        let moved = point != self.point;
        self.point = point;
        self.assembler.reset();
        moved
    }

    /// Visible width used as the growth step.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Change the growth step.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Get the selection state.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Get mutable selection state.
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Mark offset while highlighting.
    #[must_use]
    pub fn mark(&self) -> Option<usize> {
        self.selection.mark()
    }

    /// Selected character range, ordered.
    #[must_use]
    pub fn active_range(&self) -> Option<(usize, usize)> {
        self.selection.active_range(self.point)
    }

    /// Selected text.
    #[must_use]
    pub fn selected_text(&self) -> Option<String> {
        self.active_range().map(|(a, b)| self.store.slice(a..b))
    }

    /// Anchor the mark at the cursor and start highlighting.
    pub fn start_mark(&mut self) {
        self.selection.start(self.point);
    }

    /// Stop highlighting.
    pub fn stop_mark(&mut self) {
        self.selection.stop();
    }

    /// Characters in `start..end` (clamped).
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.store.slice(start..end)
    }

    /// Bytes of a partially typed character.
    #[must_use]
    pub fn pending_bytes(&self) -> &[u8] {
        self.assembler.pending()
    }

    /// Feed one raw input byte.
    ///
    /// Returns `Ok(true)` once a character has been inserted and `Ok(false)`
    /// while a multi-byte character is still incomplete.
    pub fn feed_byte(&mut self, byte: u8) -> Result<bool> {
        match self.assembler.feed_checked(byte)? {
            Some(c) => self.insert_char(c).map(|()| true),
            None => Ok(false),
        }
    }

    /// Feed raw bytes, dropping malformed sequences and refused inserts.
    ///
    /// Returns the number of characters inserted.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> usize {
        let mut inserted = 0;
        for &byte in bytes {
            match self.feed_byte(byte) {
                Ok(true) => inserted += 1,
                Ok(false) => {}
                Err(Error::MalformedCharacter { bytes }) => {
                    tracing::debug!(?bytes, "dropped malformed input sequence");
                }
                Err(err) => tracing::warn!(%err, "insert dropped"),
            }
        }
        inserted
    }

    /// Insert `c` at the cursor, replacing the selection if one is active.
    ///
    /// A refused growth leaves the text unchanged.
    pub fn insert_char(&mut self, c: char) -> Result<()> {
        if let Some((start, end)) = self.active_range() {
            let removed = self.store.slice(start..end).len();
            self.store.check_replace(removed, c.len_utf8())?;
            self.delete_region(start, end);
        }
        self.store.insert_char(self.point, c, self.width)?;
        self.point += 1;
        Ok(())
    }

    /// Insert `text` at the cursor without touching the selection.
    pub fn insert_str(&mut self, text: &str) -> Result<()> {
        self.assembler.reset();
        self.store.insert(self.point, text, self.width)?;
        self.point += text.chars().count();
        Ok(())
    }

    /// Replace `[start, end)` with `text` and put the cursor after it.
    ///
    /// A refused growth leaves the text and cursor unchanged.
    pub fn replace_range(&mut self, start: usize, end: usize, text: &str) -> Result<()> {
        let removed = self.store.slice(start..end).len();
        self.store.check_replace(removed, text.len())?;
        self.delete_region(start, end);
        self.insert_str(text)
    }

    /// Delete the unit at the cursor. Returns whether anything was removed.
    pub fn delete_forward(&mut self) -> bool {
        self.assembler.reset();
        let step = self.store.next_step(self.point);
        if step == 0 {
            return false;
        }
        self.store.remove(self.point..self.point + step);
        true
    }

    /// Delete the unit before the cursor. Returns whether anything was removed.
    pub fn delete_backward(&mut self) -> bool {
        self.assembler.reset();
        let step = self.store.prev_step(self.point);
        if step == 0 {
            return false;
        }
        self.store.remove(self.point - step..self.point);
        self.point -= step;
        true
    }

    /// Remove `[min(a, b), max(a, b))`, stop the selection and put the
    /// cursor at the start of the region. Returns the removed text.
    pub fn delete_region(&mut self, a: usize, b: usize) -> String {
        let len = self.len_chars();
        let start = a.min(b).min(len);
        let end = a.max(b).min(len);
        self.stop_mark();
        let removed = self.store.slice(start..end);
        self.store.remove(start..end);
        self.point = start;
        self.assembler.reset();
        removed
    }

    /// Remove the active selection, if any.
    pub fn delete_selection(&mut self) -> Option<String> {
        let (start, end) = self.active_range()?;
        Some(self.delete_region(start, end))
    }

    /// Remove everything from the cursor to the end, returning it.
    pub fn delete_to_end(&mut self) -> String {
        self.assembler.reset();
        self.store.truncate(self.point)
    }

    /// Empty the text and reset cursor and selection. Capacity is kept.
    pub fn clear(&mut self) {
        self.store.clear();
        self.point = 0;
        self.stop_mark();
        self.assembler.reset();
    }

    /// Replace the whole text; the cursor goes to the end.
    pub fn assign(&mut self, text: &str) {
        self.store.assign(text, self.width);
        self.point = self.store.len_chars();
        self.stop_mark();
        self.assembler.reset();
    }

    /// Move the cursor. Returns whether it moved.
    pub fn move_cursor(&mut self, direction: Direction, granularity: Granularity) -> bool {
        match granularity {
            Granularity::Char => self.move_char(direction),
            Granularity::Word => self.move_word(direction),
        }
    }

    /// Move one character, stepping over combining marks.
    pub fn move_char(&mut self, direction: Direction) -> bool {
        self.assembler.reset();
        let step = match direction {
            Direction::Forward => self.store.next_step(self.point),
            Direction::Backward => self.store.prev_step(self.point),
        };
        match direction {
            Direction::Forward => self.point += step,
            Direction::Backward => self.point -= step,
        }
        step > 0
    }

    /// Move one word.
    pub fn move_word(&mut self, direction: Direction) -> bool {
        let target = self.word_boundary(direction);
        self.set_point(target)
    }

    /// Move to the start of the line.
    pub fn move_to_begin(&mut self) -> bool {
        self.set_point(0)
    }

    /// Move to the end of the line.
    pub fn move_to_end(&mut self) -> bool {
        self.set_point(self.len_chars())
    }

    /// Offset one word away from the cursor.
    ///
    /// Separators next to the cursor are skipped first, then the word
    /// characters that follow them.
    #[must_use]
    pub fn word_boundary(&self, direction: Direction) -> usize {
        let len = self.len_chars();
        let is_sep = |idx: usize| {
            self.store
                .char_at(idx)
                .is_some_and(|c| self.classifier.is_separator(c))
        };
        let mut p = self.point;
        match direction {
            Direction::Forward => {
                while p < len && is_sep(p) {
                    p += 1;
                }
                while p < len && !is_sep(p) {
                    p += 1;
                }
            }
            Direction::Backward => {
                while p > 0 && is_sep(p - 1) {
                    p -= 1;
                }
                while p > 0 && !is_sep(p - 1) {
                    p -= 1;
                }
            }
        }
        p
    }

    /// Delete to the next word boundary. The kill ring is not involved.
    pub fn delete_word_forward(&mut self) -> bool {
        let old = self.point;
        self.move_word(Direction::Forward);
        let new = self.point;
        self.delete_region(old, new);
        old != new
    }

    /// Delete to the previous word boundary. The kill ring is not involved.
    pub fn delete_word_backward(&mut self) -> bool {
        let old = self.point;
        self.move_word(Direction::Backward);
        let new = self.point;
        self.delete_region(old, new);
        old != new
    }

    /// Re-establish cursor and mark bounds after external changes.
    pub fn clamp(&mut self) {
        let len = self.len_chars();
        debug_assert!(self.point <= len, "point {} past end {len}", self.point);
        self.point = self.point.min(len);
        self.selection.clamp(len);
    }
}
