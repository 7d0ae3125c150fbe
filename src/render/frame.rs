//! A rendered input line: styled spans plus a cursor column.

use crate::error::Result;
use crate::history::HistoryPosition;
use crate::render::surface::RenderSurface;
use crate::render::{InputColors, Viewport};
use crate::style::Style;
use crate::unicode::display_width;

/// Columns taken by the history button.
pub const HISTORY_BUTTON_WIDTH: usize = 3;

/// A run of text drawn in one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    /// Column of the first cell.
    pub column: usize,
    /// Text to draw.
    pub text: String,
    /// Style for every cell of the run.
    pub style: Style,
}

/// Snapshot of a line's state, input to [`Frame::compose`].
#[derive(Clone, Copy, Debug)]
pub struct LineView<'a> {
    /// Full text.
    pub text: &'a str,
    /// Cursor column in the unscrolled text.
    pub cursor_column: usize,
    /// Selected character range while highlighting.
    pub selection: Option<(usize, usize)>,
    /// Mask character for password fields.
    pub mask: Option<char>,
    /// Text is still the untouched default.
    pub pristine: bool,
    /// Field is disabled.
    pub disabled: bool,
    /// History marker, when the button is shown.
    pub history: Option<HistoryPosition>,
    /// Field width, button included.
    pub width: usize,
    /// Palette.
    pub colors: &'a InputColors,
}

/// What a field looks like after a redraw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    spans: Vec<Span>,
    cursor: usize,
}

impl Frame {
    /// Create a blank frame.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            spans: Vec::new(),
            cursor: 0,
        }
    }

    /// Field width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Styled runs, left to right.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Cursor column within the field.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Append a run. Empty runs are dropped.
    pub fn push(&mut self, column: usize, text: impl Into<String>, style: Style) {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span {
                column,
                text,
                style,
            });
        }
    }

    /// Set the cursor column.
    pub fn set_cursor(&mut self, column: usize) {
        self.cursor = column;
    }

    /// Plain text of the whole field, blanks included.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut col = 0;
        let mut spans: Vec<&Span> = self.spans.iter().collect();
        spans.sort_by_key(|s| s.column);
        for span in spans {
            if span.column > col {
                out.extend(std::iter::repeat_n(' ', span.column - col));
                col = span.column;
            }
            out.push_str(&span.text);
            col += display_width(&span.text);
        }
        if col < self.width {
            out.extend(std::iter::repeat_n(' ', self.width - col));
        }
        out
    }

    /// Paint the frame onto `surface`, then place the cursor.
    pub fn render_to(&self, surface: &mut dyn RenderSurface) -> Result<()> {
        for span in &self.spans {
            surface.put_str(span.column, &span.text, span.style)?;
        }
        surface.set_cursor(self.cursor)
    }

    /// Lay out `view` through `viewport`.
    ///
    /// The viewport must already have been scrolled for the cursor.
    #[must_use]
    pub fn compose(view: &LineView<'_>, viewport: &Viewport) -> Self {
        let colors = view.colors;
        let button = view
            .history
            .filter(|_| view.width > HISTORY_BUTTON_WIDTH * 2 + 1);
        let text_width = if button.is_some() {
            view.width - HISTORY_BUTTON_WIDTH
        } else {
            view.width
        };
        let base = if view.disabled {
            colors.disabled
        } else if view.pristine {
            colors.unchanged
        } else {
            colors.main
        };

        let mut frame = Self::new(view.width);
        let slice = viewport.visible(view.text, text_width);

        if let Some(mask) = view.mask {
            let count = slice.spacing_count().min(text_width);
            let mut masked: String = std::iter::repeat_n(mask, count).collect();
            masked.extend(std::iter::repeat_n(' ', text_width - count));
            let style = if view.disabled { colors.disabled } else { colors.main };
            frame.push(0, masked, style);
        } else if let Some((m1, m2)) = view.selection.filter(|_| !view.disabled) {
            let mut parts = [String::new(), String::new(), String::new()];
            parts[0].extend(std::iter::repeat_n(' ', slice.lead));
            for c in &slice.chars {
                let bucket = if c.index < m1 {
                    0
                } else if c.index < m2 {
                    1
                } else {
                    2
                };
                parts[bucket].push(c.ch);
            }
            let styles = [colors.main, colors.mark, colors.main];
            let mut col = 0;
            for (text, style) in parts.into_iter().zip(styles) {
                let w = display_width(&text);
                frame.push(col, text, style);
                col += w;
            }
            frame.push(col, " ".repeat(text_width - slice.columns), colors.main);
        } else {
            let mut text: String = std::iter::repeat_n(' ', slice.lead).collect();
            text.extend(slice.chars.iter().map(|c| c.ch));
            text.extend(std::iter::repeat_n(' ', text_width - slice.columns));
            frame.push(0, text, base);
        }

        if let Some(position) = button {
            let style = if view.disabled { colors.disabled } else { colors.history };
            frame.push(text_width, format!("[{}]", position.glyph()), style);
        }

        let cursor = view
            .cursor_column
            .saturating_sub(viewport.first_column())
            .min(text_width.saturating_sub(1));
        frame.set_cursor(cursor);
        frame
    }
}
