//! Terminal colors used by input line styles.
//!
//! Input lines are drawn with a handful of color roles (main text, marked
//! text, unchanged default text, the history button). [`Color`] covers the
//! three ways a terminal can be asked for a color: its own default, a
//! palette index, or a 24-bit value.
//!
//! # Examples
//!
//! ```
//! use termline::Color;
//!
//! let accent = Color::Rgb(0x1a, 0x1a, 0x2e);
//! assert_eq!(accent.to_string(), "#1a1a2e");
//! assert_eq!(Color::BLUE.fg_params(), "34");
//! ```

use std::fmt;

/// A terminal color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// The terminal's configured default.
    #[default]
    Default,
    /// Palette index (0-15 are the classic ANSI colors).
    Indexed(u8),
    /// 24-bit true color.
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Self::Indexed(0);
    pub const RED: Self = Self::Indexed(1);
    pub const GREEN: Self = Self::Indexed(2);
    pub const YELLOW: Self = Self::Indexed(3);
    pub const BLUE: Self = Self::Indexed(4);
    pub const MAGENTA: Self = Self::Indexed(5);
    pub const CYAN: Self = Self::Indexed(6);
    pub const WHITE: Self = Self::Indexed(7);
    pub const GRAY: Self = Self::Indexed(8);
    pub const BRIGHT_WHITE: Self = Self::Indexed(15);

    /// SGR parameters selecting this color as foreground.
    #[must_use]
    pub fn fg_params(self) -> String {
        match self {
            Self::Default => "39".to_string(),
            Self::Indexed(i @ 0..=7) => format!("{}", 30 + u16::from(i)),
            Self::Indexed(i @ 8..=15) => format!("{}", 90 + u16::from(i - 8)),
            Self::Indexed(i) => format!("38;5;{i}"),
            Self::Rgb(r, g, b) => format!("38;2;{r};{g};{b}"),
        }
    }

    /// SGR parameters selecting this color as background.
    #[must_use]
    pub fn bg_params(self) -> String {
        match self {
            Self::Default => "49".to_string(),
            Self::Indexed(i @ 0..=7) => format!("{}", 40 + u16::from(i)),
            Self::Indexed(i @ 8..=15) => format!("{}", 100 + u16::from(i - 8)),
            Self::Indexed(i) => format!("48;5;{i}"),
            Self::Rgb(r, g, b) => format!("48;2;{r};{g};{b}"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Indexed(i) => write!(f, "color{i}"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sgr_params() {
        assert_eq!(Color::Default.fg_params(), "39");
        assert_eq!(Color::RED.fg_params(), "31");
        assert_eq!(Color::GRAY.fg_params(), "90");
        assert_eq!(Color::Indexed(200).bg_params(), "48;5;200");
        assert_eq!(Color::Rgb(1, 2, 3).fg_params(), "38;2;1;2;3");
        assert_eq!(Color::CYAN.bg_params(), "46");
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Rgb(0xab, 0, 0x10).to_string(), "#ab0010");
        assert_eq!(Color::Indexed(4).to_string(), "color4");
    }
}
