//! Viewport scrolling and rendering of an input line.
//!
//! Rendering is split in two steps. [`Frame::compose`] turns the line state
//! into styled spans for the visible window; [`Frame::render_to`] paints
//! those spans on any [`RenderSurface`]. [`LineCanvas`] keeps the result in
//! memory and [`AnsiSurface`] writes escape sequences.

mod frame;
mod surface;
mod viewport;

pub use frame::{Frame, HISTORY_BUTTON_WIDTH, LineView, Span};
pub use surface::{
    AnsiSurface, CLEAR_LINE_RIGHT, CURSOR_HIDE, CURSOR_SHOW, CanvasCell, LineCanvas, RESET,
    RenderSurface, write_cursor_column,
};
pub use viewport::{VisibleChar, VisibleSlice, Viewport};

use crate::color::Color;
use crate::style::Style;

/// Palette for an input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputColors {
    /// Edited text.
    pub main: Style,
    /// Selected text.
    pub mark: Style,
    /// Default text nobody has touched yet.
    pub unchanged: Style,
    /// History button.
    pub history: Style,
    /// Whole field while disabled.
    pub disabled: Style,
}

impl Default for InputColors {
    fn default() -> Self {
        Self {
            main: Style::fg(Color::BLACK).with_bg(Color::CYAN),
            mark: Style::fg(Color::CYAN).with_bg(Color::BLACK),
            unchanged: Style::fg(Color::GRAY).with_bg(Color::CYAN),
            history: Style::fg(Color::BLACK).with_bg(Color::WHITE),
            disabled: Style::fg(Color::GRAY).with_bg(Color::WHITE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors_distinct() {
        let c = InputColors::default();
        assert_ne!(c.main, c.mark);
        assert_ne!(c.main, c.unchanged);
        assert_ne!(c.history, c.main);
    }
}
