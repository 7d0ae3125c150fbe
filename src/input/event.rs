//! Input events delivered to a line editor.

use crate::input::keyboard::KeyEvent;
use crate::input::mouse::MouseEvent;

/// An input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event.
    Key(KeyEvent),
    /// Mouse event.
    Mouse(MouseEvent),
    /// Bracketed paste; inserted as one batch.
    Paste(String),
}

impl Event {
    /// Check if this is a key event.
    #[must_use]
    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Check if this is a mouse event.
    #[must_use]
    pub fn is_mouse(&self) -> bool {
        matches!(self, Self::Mouse(_))
    }

    /// Get the key event if this is one.
    #[must_use]
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }

    /// Get the mouse event if this is one.
    #[must_use]
    pub fn mouse(&self) -> Option<&MouseEvent> {
        match self {
            Self::Mouse(e) => Some(e),
            _ => None,
        }
    }

    /// Get the pasted text if this is a paste.
    #[must_use]
    pub fn paste(&self) -> Option<&str> {
        match self {
            Self::Paste(text) => Some(text),
            _ => None,
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}

impl From<MouseEvent> for Event {
    fn from(e: MouseEvent) -> Self {
        Self::Mouse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    #[test]
    fn test_event_accessors() {
        let key: Event = KeyEvent::key(KeyCode::Home).into();
        assert!(key.is_key());
        assert_eq!(key.key().map(|k| k.code), Some(KeyCode::Home));
        assert!(key.mouse().is_none());

        let mouse: Event = MouseEvent::down(4).into();
        assert!(mouse.is_mouse());

        let paste = Event::Paste("abc".to_string());
        assert_eq!(paste.paste(), Some("abc"));
    }
}
