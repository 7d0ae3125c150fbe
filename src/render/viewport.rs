//! Horizontal scrolling for a one-row text field.

use crate::unicode::display_width_char;

/// A character that falls inside the visible window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleChar {
    /// Character offset in the text.
    pub index: usize,
    /// The character.
    pub ch: char,
    /// Column relative to the window's left edge.
    pub column: usize,
    /// Columns the character occupies.
    pub width: usize,
}

/// The part of a text that fits in the window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleSlice {
    /// Blank columns at the left edge where a wide character was cut.
    pub lead: usize,
    /// Characters drawn, left to right.
    pub chars: Vec<VisibleChar>,
    /// Columns used by `lead` and `chars`.
    pub columns: usize,
}

impl VisibleSlice {
    /// Number of drawn characters that take up space.
    #[must_use]
    pub fn spacing_count(&self) -> usize {
        self.chars.iter().filter(|c| c.width > 0).count()
    }
}

/// Leftmost column shown in a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    first_column: usize,
}

impl Viewport {
    /// Create a viewport scrolled to the start.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible column.
    #[must_use]
    pub fn first_column(&self) -> usize {
        self.first_column
    }

    /// Scroll back to the start.
    pub fn reset(&mut self) {
        self.first_column = 0;
    }

    /// Bring `cursor_column` into `[first, first + text_width)`.
    ///
    /// When the cursor is outside the window, the window is re-anchored so
    /// the cursor sits about a third of the field width from the left edge.
    /// Returns whether the window moved.
    pub fn recompute(&mut self, cursor_column: usize, text_width: usize, field_width: usize) -> bool {
        let first = self.first_column;
        if cursor_column < first || cursor_column >= first + text_width {
            self.first_column = cursor_column.saturating_sub(field_width / 3);
        }
        self.first_column != first
    }

    /// Characters of `text` visible in a window `text_width` columns wide.
    ///
    /// Control characters are not drawn. Zero-width marks follow the
    /// character they combine with.
    #[must_use]
    pub fn visible(&self, text: &str, text_width: usize) -> VisibleSlice {
        let first = self.first_column;
        let end = first + text_width;
        let mut slice = VisibleSlice::default();
        let mut col = 0;
        let mut base_shown = false;

        for (index, ch) in text.chars().enumerate() {
            if ch.is_control() {
                continue;
            }
            let width = display_width_char(ch);
            if width > 0 && col >= end {
                break;
            }
            if width == 0 {
                if base_shown {
                    slice.chars.push(VisibleChar {
                        index,
                        ch,
                        column: col.saturating_sub(first),
                        width,
                    });
                }
                continue;
            }
            if col < first {
                // Cut at the left edge
                if col + width > first {
                    slice.lead = (col + width - first).min(text_width);
                }
                base_shown = false;
            } else if col + width <= end {
                slice.chars.push(VisibleChar {
                    index,
                    ch,
                    column: col - first,
                    width,
                });
                base_shown = true;
            } else {
                break;
            }
            col += width;
        }
        slice.columns = slice.lead + slice.chars.iter().map(|c| c.width).sum::<usize>();
        slice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(slice: &VisibleSlice) -> String {
        slice.chars.iter().map(|c| c.ch).collect()
    }

    #[test]
    fn test_cursor_inside_window_keeps_scroll() {
        let mut vp = Viewport::new();
        assert!(!vp.recompute(5, 10, 10));
        assert_eq!(vp.first_column(), 0);
    }

    #[test]
    fn test_cursor_past_window_recenters() {
        let mut vp = Viewport::new();
        assert!(vp.recompute(10, 10, 10));
        assert_eq!(vp.first_column(), 7);
        assert!(vp.recompute(2, 10, 10));
        assert_eq!(vp.first_column(), 0);
    }

    #[test]
    fn test_visible_plain() {
        let vp = Viewport::new();
        let slice = vp.visible("hello world", 5);
        assert_eq!(shown(&slice), "hello");
        assert_eq!(slice.columns, 5);
        assert_eq!(slice.lead, 0);
    }

    #[test]
    fn test_visible_scrolled() {
        let mut vp = Viewport::new();
        vp.recompute(11, 5, 6);
        assert_eq!(vp.first_column(), 9);
        let slice = vp.visible("hello world", 5);
        assert_eq!(shown(&slice), "ld");
        assert_eq!(slice.chars[0].index, 9);
    }

    #[test]
    fn test_wide_char_cut_at_edges() {
        let mut vp = Viewport::new();
        vp.recompute(5, 3, 3);
        assert_eq!(vp.first_column(), 4);
        // 漢 spans columns 3..5, so the window starting at 4 cuts it.
        let slice = vp.visible("abc漢de", 3);
        assert_eq!(slice.lead, 1);
        assert_eq!(shown(&slice), "de");
        assert_eq!(slice.columns, 3);

        let slice = Viewport::new().visible("ab漢", 3);
        assert_eq!(shown(&slice), "ab");
        assert_eq!(slice.columns, 2);
    }

    #[test]
    fn test_combining_marks_follow_base() {
        let slice = Viewport::new().visible("e\u{0301}x", 1);
        assert_eq!(shown(&slice), "e\u{0301}");
        assert_eq!(slice.spacing_count(), 1);
    }

    #[test]
    fn test_control_chars_skipped() {
        let slice = Viewport::new().visible("a\nb", 5);
        assert_eq!(shown(&slice), "ab");
        assert_eq!(slice.chars[1].index, 2);
    }
}
