//! Input history: a de-duplicated list of prior entries with a cursor.
//!
//! Entries are kept oldest first; the newest entry is the last one. The
//! "current" marker is an index into the list and moves with
//! [`History::previous`] and [`History::next`]. Loading from and saving to a
//! backend goes through [`HistoryStore`].

mod password;
mod store;

pub use password::strip_password;
pub use store::{HistoryStore, MemoryHistoryStore};

/// Where the current marker sits, for the history button glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryPosition {
    /// At the newest entry; only older entries remain.
    Newest,
    /// At the oldest entry.
    Oldest,
    /// Somewhere in between.
    Middle,
}

impl HistoryPosition {
    /// Glyph drawn inside the history button.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Newest => '^',
            Self::Oldest => 'v',
            Self::Middle => '|',
        }
    }
}

/// Named, ordered, de-duplicated entry list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    name: Option<String>,
    entries: Vec<String>,
    current: usize,
    changed: bool,
    strip_password: bool,
}

impl History {
    /// Create an empty history persisted under `name`.
    #[must_use]
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Redact `user:password@` credentials on push.
    #[must_use]
    pub fn with_strip_password(mut self, strip: bool) -> Self {
        self.strip_password = strip;
        self
    }

    /// Persistence key.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Mutable access for a browser that may delete entries.
    ///
    /// The marker is reset to the newest entry afterwards by
    /// [`History::reconcile`].
    pub fn entries_mut(&mut self) -> &mut Vec<String> {
        &mut self.entries
    }

    /// Get the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest entry.
    #[must_use]
    pub fn newest(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Entry under the marker.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.current).map(String::as_str)
    }

    /// Index of the marker.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Marker position, or `None` when there are no entries.
    #[must_use]
    pub fn position(&self) -> Option<HistoryPosition> {
        if self.entries.is_empty() {
            None
        } else if self.current + 1 >= self.entries.len() {
            Some(HistoryPosition::Newest)
        } else if self.current == 0 {
            Some(HistoryPosition::Oldest)
        } else {
            Some(HistoryPosition::Middle)
        }
    }

    /// Whether the list differs from what was loaded.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Flag the list as modified.
    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    /// Flag the list as persisted.
    pub fn clear_changed(&mut self) {
        self.changed = false;
    }

    /// Replace the list with entries from a store. Marker at newest.
    pub fn load(&mut self, entries: Vec<String>) {
        tracing::debug!(name = ?self.name, count = entries.len(), "history loaded");
        self.entries = entries;
        self.current = self.newest_index();
        self.changed = false;
    }

    /// Record `text` as the newest entry.
    ///
    /// Blank text is never recorded. Text equal to the newest entry is
    /// skipped unless the list is already modified. Any older copy of the
    /// entry is removed. Returns whether the list changed.
    pub fn push(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let entry = if self.name.is_some() && self.strip_password {
            strip_password(text)
        } else {
            text.to_string()
        };
        if self.newest() == Some(entry.as_str()) && !self.changed {
            return false;
        }
        self.entries.retain(|e| *e != entry);
        tracing::debug!(name = ?self.name, entry = %entry, "history push");
        self.entries.push(entry);
        self.current = self.newest_index();
        self.changed = true;
        true
    }

    /// Step to the next older entry, returning it.
    pub fn previous(&mut self) -> Option<&str> {
        if self.current == 0 || self.entries.is_empty() {
            return None;
        }
        self.current -= 1;
        self.changed = true;
        self.current()
    }

    /// Put the marker back on the newest entry, returning it.
    pub fn rewind(&mut self) -> Option<&str> {
        self.current = self.newest_index();
        self.newest()
    }

    /// Step to the next newer entry, returning it.
    ///
    /// Past the newest entry the marker returns to the newest entry and
    /// `None` is returned.
    pub fn next(&mut self) -> Option<&str> {
        if self.current + 1 >= self.entries.len() {
            self.current = self.newest_index();
            return None;
        }
        self.current += 1;
        self.changed = true;
        self.current()
    }

    /// Fix the marker after the list was edited externally. Returns whether
    /// the length changed, in which case the list is flagged modified.
    pub fn reconcile(&mut self, old_len: usize) -> bool {
        self.current = self.newest_index();
        let changed = old_len != self.entries.len();
        if changed {
            self.changed = true;
        }
        changed
    }

    /// The newest `max` entries, oldest first.
    #[must_use]
    pub fn tail(&self, max: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(max);
        &self.entries[start..]
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current = 0;
    }

    fn newest_index(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }
}
