//! Mark and highlight state for a single-line selection.

/// Selection anchored at a mark.
///
/// The selection is the span between the mark and the cursor while
/// `highlight` is on. The stored mark is meaningless otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    mark: usize,
    highlight: bool,
    /// One-shot flag: the command being handled extends the selection, so
    /// the key pass must not drop the highlight afterwards.
    extending: bool,
}

impl Selection {
    /// Create an inactive selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor the mark at `point` and turn the highlight on.
    pub fn start(&mut self, point: usize) {
        self.mark = point;
        self.highlight = true;
    }

    /// Turn the highlight off.
    pub fn stop(&mut self) {
        self.highlight = false;
        self.mark = 0;
    }

    /// Turn the highlight off but keep the mark where it is.
    pub fn release(&mut self) {
        self.highlight = false;
    }

    /// Begin extending from `point` unless already highlighting.
    ///
    /// Also arms the one-shot extend flag for the current key pass.
    pub fn extend_from(&mut self, point: usize) {
        if !self.highlight {
            self.stop();
            self.start(point);
        }
        self.extending = true;
    }

    /// Consume the one-shot extend flag.
    pub fn take_extending(&mut self) -> bool {
        std::mem::take(&mut self.extending)
    }

    /// Whether a selection is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.highlight
    }

    /// Mark offset while highlighting.
    #[must_use]
    pub fn mark(&self) -> Option<usize> {
        self.highlight.then_some(self.mark)
    }

    /// Raw stored mark, regardless of highlight.
    #[must_use]
    pub fn raw_mark(&self) -> usize {
        self.mark
    }

    /// Set the stored mark without touching the highlight.
    pub fn set_mark(&mut self, mark: usize) {
        self.mark = mark;
    }

    /// `(min(mark, point), max(mark, point))` while highlighting.
    #[must_use]
    pub fn active_range(&self, point: usize) -> Option<(usize, usize)> {
        self.mark()
            .map(|mark| (mark.min(point), mark.max(point)))
    }

    /// Clamp the mark to a text of `len` characters.
    pub fn clamp(&mut self, len: usize) {
        self.mark = self.mark.min(len);
    }
}
