//! Persistence seam for named history channels.

use std::collections::HashMap;

use crate::error::Result;

/// Backend that persists history lists, keyed by history name.
///
/// Entries are ordered oldest first.
pub trait HistoryStore {
    /// Load the entries saved under `name`. Unknown names yield no entries.
    fn load(&self, name: &str) -> Result<Vec<String>>;

    /// Replace the entries saved under `name`.
    fn save(&mut self, name: &str, entries: &[String]) -> Result<()>;
}

/// In-memory [`HistoryStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryHistoryStore {
    channels: HashMap<String, Vec<String>>,
    saves: usize,
}

impl MemoryHistoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a channel.
    #[must_use]
    pub fn with_channel<I, S>(mut self, name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels
            .insert(name.to_string(), entries.into_iter().map(Into::into).collect());
        self
    }

    /// Entries currently stored under `name`.
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<&[String]> {
        self.channels.get(name).map(Vec::as_slice)
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.channels.get(name).cloned().unwrap_or_default())
    }

    fn save(&mut self, name: &str, entries: &[String]) -> Result<()> {
        self.channels.insert(name.to_string(), entries.to_vec());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_channel_is_empty() {
        let store = MemoryHistoryStore::new();
        assert!(store.load("nope").unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryHistoryStore::new().with_channel("cmd", ["ls"]);
        assert_eq!(store.load("cmd").unwrap(), vec!["ls".to_string()]);
        store
            .save("cmd", &["ls".to_string(), "pwd".to_string()])
            .unwrap();
        assert_eq!(store.channel("cmd").map(<[String]>::len), Some(2));
        assert_eq!(store.save_count(), 1);
    }
}
