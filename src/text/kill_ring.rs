//! Single-slot kill buffer shared between line editors.
//!
//! The host session creates one [`KillRing`] and hands a clone to every
//! [`InputLine`](crate::InputLine) it builds; all clones see the same slot.
//! The handle is `Rc`-based: editors live on the UI thread.

use std::cell::RefCell;
use std::rc::Rc;

use crate::text::LineBuffer;

/// Shared handle to the most recently killed or copied text.
#[derive(Clone, Debug, Default)]
pub struct KillRing {
    slot: Rc<RefCell<Option<String>>>,
}

impl KillRing {
    /// Create an empty kill ring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the payload. Last write wins.
    pub fn set(&self, text: impl Into<String>) {
        *self.slot.borrow_mut() = Some(text.into());
    }

    /// Current payload.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Check if nothing has been killed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.borrow().is_none()
    }

    /// Drop the payload.
    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }

    /// Whether two handles share one slot.
    #[must_use]
    pub fn same_ring(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    /// Feed the payload into `buffer` byte by byte, as if typed.
    ///
    /// Returns the number of characters inserted.
    pub fn yank_into(&self, buffer: &mut LineBuffer) -> usize {
        let Some(text) = self.get() else {
            return 0;
        };
        buffer.feed_bytes(text.as_bytes())
    }
}
