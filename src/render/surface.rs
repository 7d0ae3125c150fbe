//! Targets a [`Frame`](crate::render::Frame) can be painted onto.

use std::io::{self, Write};

use crate::error::Result;
use crate::style::Style;
use crate::unicode::display_width_char;

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Clear from cursor to end of line.
pub const CLEAR_LINE_RIGHT: &str = "\x1b[K";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Write a move to 0-based `column` on the current row (CHA).
pub fn write_cursor_column(w: &mut impl Write, column: usize) -> io::Result<()> {
    write!(w, "\x1b[{}G", column + 1)
}

/// A one-row drawing target.
pub trait RenderSurface {
    /// Draw `text` starting at `column` in `style`.
    fn put_str(&mut self, column: usize, text: &str, style: Style) -> Result<()>;

    /// Place the terminal cursor at `column`.
    fn set_cursor(&mut self, column: usize) -> Result<()>;
}

/// One cell of a [`LineCanvas`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasCell {
    /// Grapheme in the cell; empty for the right half of a wide character.
    pub text: String,
    /// Style of the cell.
    pub style: Style,
}

impl Default for CanvasCell {
    fn default() -> Self {
        Self {
            text: " ".to_string(),
            style: Style::NONE,
        }
    }
}

/// In-memory cell grid for one row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineCanvas {
    cells: Vec<CanvasCell>,
    cursor: Option<usize>,
}

impl LineCanvas {
    /// Create a blank canvas `width` cells wide.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            cells: vec![CanvasCell::default(); width],
            cursor: None,
        }
    }

    /// Get the width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Get a cell.
    #[must_use]
    pub fn cell(&self, column: usize) -> Option<&CanvasCell> {
        self.cells.get(column)
    }

    /// Style of the cell at `column`.
    #[must_use]
    pub fn style_at(&self, column: usize) -> Option<Style> {
        self.cells.get(column).map(|c| c.style)
    }

    /// Cursor column, once placed.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Row contents as text.
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(CanvasCell::default());
        self.cursor = None;
    }
}

impl RenderSurface for LineCanvas {
    fn put_str(&mut self, column: usize, text: &str, style: Style) -> Result<()> {
        let mut col = column;
        for ch in text.chars() {
            let w = display_width_char(ch);
            if w == 0 {
                // Attach to the base cell, skipping wide-character continuations.
                let end = col.min(self.cells.len());
                let base = self.cells[..end]
                    .iter_mut()
                    .rev()
                    .find(|c| !c.text.is_empty());
                if let Some(base) = base {
                    base.text.push(ch);
                }
                continue;
            }
            if col + w > self.cells.len() {
                break;
            }
            self.cells[col] = CanvasCell {
                text: ch.to_string(),
                style,
            };
            for cont in &mut self.cells[col + 1..col + w] {
                *cont = CanvasCell {
                    text: String::new(),
                    style,
                };
            }
            col += w;
        }
        Ok(())
    }

    fn set_cursor(&mut self, column: usize) -> Result<()> {
        self.cursor = Some(column.min(self.cells.len()));
        Ok(())
    }
}

/// Buffered ANSI writer for a field placed at `origin` on the current row.
///
/// Style changes are only emitted when the style differs from the last one
/// written.
pub struct AnsiSurface<W: Write> {
    writer: W,
    buffer: Vec<u8>,
    origin: usize,
    current: Option<Style>,
}

impl<W: Write> AnsiSurface<W> {
    /// Create a surface whose column 0 is screen column `origin`.
    pub fn new(writer: W, origin: usize) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(256),
            origin,
            current: None,
        }
    }

    /// Bytes not yet flushed.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Reset attributes and flush to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.buffer.extend_from_slice(RESET.as_bytes());
        self.current = None;
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        self.writer.flush()
    }

    /// Get the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSurface for AnsiSurface<W> {
    fn put_str(&mut self, column: usize, text: &str, style: Style) -> Result<()> {
        write_cursor_column(&mut self.buffer, self.origin + column)?;
        if self.current != Some(style) {
            self.buffer.extend_from_slice(style.sgr().as_bytes());
            self.current = Some(style);
        }
        self.buffer.extend_from_slice(text.as_bytes());
        Ok(())
    }

    fn set_cursor(&mut self, column: usize) -> Result<()> {
        write_cursor_column(&mut self.buffer, self.origin + column)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_canvas_put_str() {
        let mut canvas = LineCanvas::new(6);
        canvas.put_str(1, "ab", Style::bold()).unwrap();
        assert_eq!(canvas.text(), " ab   ");
        assert_eq!(canvas.style_at(1), Some(Style::bold()));
        assert_eq!(canvas.style_at(0), Some(Style::NONE));
    }

    #[test]
    fn test_canvas_wide_and_combining() {
        let mut canvas = LineCanvas::new(4);
        canvas.put_str(0, "漢e\u{0301}", Style::NONE).unwrap();
        assert_eq!(canvas.cell(1).map(|c| c.text.as_str()), Some(""));
        assert_eq!(canvas.cell(2).map(|c| c.text.as_str()), Some("e\u{0301}"));
        assert_eq!(canvas.text(), "漢e\u{0301} ");
    }

    #[test]
    fn test_canvas_mark_after_wide_char_joins_base() {
        let mut canvas = LineCanvas::new(3);
        canvas.put_str(0, "漢\u{0301}x", Style::NONE).unwrap();
        assert_eq!(canvas.cell(0).map(|c| c.text.as_str()), Some("漢\u{0301}"));
        assert_eq!(canvas.cell(1).map(|c| c.text.as_str()), Some(""));
        assert_eq!(canvas.cell(2).map(|c| c.text.as_str()), Some("x"));
    }

    #[test]
    fn test_canvas_clips_at_edge() {
        let mut canvas = LineCanvas::new(3);
        canvas.put_str(2, "漢x", Style::NONE).unwrap();
        assert_eq!(canvas.text(), "   ");
        canvas.set_cursor(9).unwrap();
        assert_eq!(canvas.cursor(), Some(3));
    }

    #[test]
    fn test_ansi_surface_output() {
        let mut surface = AnsiSurface::new(Vec::new(), 4);
        let style = Style::fg(Color::RED);
        surface.put_str(0, "ab", style).unwrap();
        surface.put_str(2, "c", style).unwrap();
        surface.set_cursor(3).unwrap();
        assert_eq!(
            surface.buffer(),
            b"\x1b[5G\x1b[0;31mab\x1b[7Gc\x1b[8G".as_slice()
        );
        surface.flush().unwrap();
        assert!(surface.buffer().is_empty());
        let out = surface.into_inner();
        assert!(out.ends_with(RESET.as_bytes()));
    }
}
