//! Collaborators an [`InputLine`](crate::InputLine) calls out to.
//!
//! Completion, the system clipboard, the history picker dialog and the raw
//! terminal byte source all live outside the editor. Each is a trait the
//! host implements and injects; the editor works without any of them.

use std::io::Read;

use crate::error::Result;

/// Produces completion candidates for the word ending at the cursor.
pub trait Completer {
    /// Candidates for `text` with the cursor at character offset `point`,
    /// best first. Each candidate replaces the whole word.
    fn complete(&mut self, text: &str, point: usize) -> Vec<String>;
}

/// Bridge to a clipboard outside the process.
pub trait ClipboardBridge {
    /// Publish `text` to the clipboard.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Current clipboard text, if any.
    fn read(&mut self) -> Result<Option<String>>;

    /// Copy requested with nothing to copy from the line.
    ///
    /// Hosts that own a broader selection (a file list, say) copy that
    /// instead. The default does nothing.
    fn copy_fallback(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Dialog that lets the user pick a history entry.
pub trait HistoryBrowser {
    /// Show `entries` (oldest first) with `current` preselected.
    ///
    /// The browser may delete entries. Returns the chosen entry.
    fn pick(&mut self, entries: &mut Vec<String>, current: usize) -> Option<String>;
}

/// Blocking read of a single raw terminal byte.
pub trait RawByteSource {
    /// Wait for and return the next byte.
    fn read_byte(&mut self) -> Result<u8>;
}

/// [`RawByteSource`] over any [`Read`] implementation.
#[derive(Debug)]
pub struct ReaderByteSource<R> {
    reader: R,
}

impl<R: Read> ReaderByteSource<R> {
    /// Wrap `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> RawByteSource for ReaderByteSource<R> {
    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.reader.read_exact(&mut byte)?;
        Ok(byte[0])
    }
}

/// Clipboard held in memory, for hosts without a system clipboard.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fallbacks: usize,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard holding `text`.
    #[must_use]
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            fallbacks: 0,
        }
    }

    /// Current contents.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// How often a copy fell back to the host selection.
    #[must_use]
    pub fn fallback_count(&self) -> usize {
        self.fallbacks
    }
}

impl ClipboardBridge for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn read(&mut self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn copy_fallback(&mut self) -> Result<()> {
        self.fallbacks += 1;
        Ok(())
    }
}

/// [`Completer`] over a fixed vocabulary.
#[derive(Clone, Debug, Default)]
pub struct WordListCompleter {
    words: Vec<String>,
}

impl WordListCompleter {
    /// Complete against `words`, offered in the given order.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl Completer for WordListCompleter {
    fn complete(&mut self, text: &str, point: usize) -> Vec<String> {
        let prefix = word_before(text, point);
        if prefix.is_empty() {
            return Vec::new();
        }
        self.words
            .iter()
            .filter(|w| w.starts_with(prefix) && w.as_str() != prefix)
            .cloned()
            .collect()
    }
}

/// The whitespace-delimited word ending at character offset `point`.
#[must_use]
pub fn word_before(text: &str, point: usize) -> &str {
    let end = text.char_indices().nth(point).map_or(text.len(), |(i, _)| i);
    let head = &text[..end];
    let start = head
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    &head[start..]
}
