//! Decoded key presses.

use bitflags::bitflags;

bitflags! {
    /// Modifiers held with a key.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 0b0000_0001;
        /// Alt/Meta.
        const ALT = 0b0000_0010;
        const CTRL = 0b0000_0100;
    }
}

/// Keys the line editor distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Tab,
    Delete,
    Insert,
    /// Function key by number.
    F(u8),
    /// A printable character, space included.
    Char(char),
    Esc,
    /// NUL byte (Ctrl+Space).
    Null,
}

impl KeyCode {
    /// The character of a `Char` key.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// A key with its modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Unmodified key.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Unmodified character key.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    #[must_use]
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CTRL)
    }

    #[must_use]
    pub fn with_alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    #[must_use]
    pub fn with_shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    /// Character this key inserts when no command claims it.
    ///
    /// Shift alone still types; Ctrl or Alt chords do not.
    #[must_use]
    pub fn typed_char(&self) -> Option<char> {
        if self.ctrl() || self.alt() {
            return None;
        }
        self.code.char()
    }
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        Self::char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_flags() {
        let event = KeyEvent::new(KeyCode::Left, KeyModifiers::CTRL | KeyModifiers::SHIFT);
        assert!(event.ctrl());
        assert!(event.shift());
        assert!(!event.alt());
    }

    #[test]
    fn test_typed_char() {
        assert_eq!(KeyEvent::char('x').typed_char(), Some('x'));
        assert_eq!(
            KeyEvent::with_shift(KeyCode::Char('X')).typed_char(),
            Some('X')
        );
        assert_eq!(KeyEvent::with_ctrl(KeyCode::Char('x')).typed_char(), None);
        assert_eq!(KeyEvent::with_alt(KeyCode::Char('x')).typed_char(), None);
        assert_eq!(KeyEvent::key(KeyCode::Left).typed_char(), None);
    }

    #[test]
    fn test_from_char() {
        let event: KeyEvent = 'z'.into();
        assert_eq!(event, KeyEvent::char('z'));
    }
}
