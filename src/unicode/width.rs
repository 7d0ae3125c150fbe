//! Display width calculation for terminal rendering.
//!
//! Besides plain width queries this module converts between character
//! offsets and terminal columns, which the viewport and the mouse handler
//! need to place the cursor.

use std::sync::atomic::{AtomicU8, Ordering};
use unicode_width::UnicodeWidthChar;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

const WIDTH_METHOD_WCWIDTH: u8 = 0;
const WIDTH_METHOD_UNICODE: u8 = 1;

static WIDTH_METHOD: AtomicU8 = AtomicU8::new(WIDTH_METHOD_WCWIDTH);

/// Set the global width method used by `display_width` helpers.
pub fn set_width_method(method: WidthMethod) {
    let value = match method {
        WidthMethod::WcWidth => WIDTH_METHOD_WCWIDTH,
        WidthMethod::Unicode => WIDTH_METHOD_UNICODE,
    };
    WIDTH_METHOD.store(value, Ordering::Relaxed);
}

/// Get the global width method.
#[must_use]
pub fn width_method() -> WidthMethod {
    match WIDTH_METHOD.load(Ordering::Relaxed) {
        WIDTH_METHOD_UNICODE => WidthMethod::Unicode,
        _ => WidthMethod::WcWidth,
    }
}

/// Get the display width of a string in terminal columns (global method).
#[must_use]
pub fn display_width(s: &str) -> usize {
    s.chars().map(display_width_char).sum()
}

/// Get the display width of a character in terminal columns (global method).
///
/// Control characters occupy no column; a literal newline or control code
/// typed into the line is stored but not drawn.
#[inline]
#[must_use]
pub fn display_width_char(c: char) -> usize {
    // Fast path: ASCII printable characters are always width 1
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    if c.is_control() {
        return 0;
    }
    display_width_char_with_method(c, width_method())
}

/// Get the display width of a character in terminal columns using a specific method.
#[must_use]
pub fn display_width_char_with_method(c: char, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

/// Columns occupied by the first `chars` characters of `s`.
#[must_use]
pub fn prefix_width(s: &str, chars: usize) -> usize {
    s.chars().take(chars).map(display_width_char).sum()
}

/// Character offset whose column range contains `column`.
///
/// Columns past the end of the text map to the character count. A column
/// inside a wide character maps to that character's offset.
#[must_use]
pub fn column_to_char(s: &str, column: usize) -> usize {
    let mut col = 0;
    for (idx, c) in s.chars().enumerate() {
        let w = display_width_char(c);
        if column < col + w {
            return idx;
        }
        col += w;
    }
    s.chars().count()
}
