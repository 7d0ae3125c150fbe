//! Colors and attributes for one run of input-line text.
//!
//! ```
//! use termline::{Color, Style, TextAttributes};
//!
//! let selected = Style::fg(Color::CYAN).with_bg(Color::BLACK);
//! let hint = Style::fg(Color::GRAY).with_attributes(TextAttributes::DIM);
//! assert_eq!(selected.sgr(), "\x1b[0;36;40m");
//! assert_eq!(hint.sgr(), "\x1b[0;2;90m");
//! ```

use crate::color::Color;
use bitflags::bitflags;

bitflags! {
    /// Attributes a terminal can apply on top of colors.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        const BOLD          = 0x01;
        const DIM           = 0x02;
        const ITALIC        = 0x04;
        const UNDERLINE     = 0x08;
        /// Swapped foreground/background.
        const INVERSE       = 0x10;
        const STRIKETHROUGH = 0x20;
    }
}

impl TextAttributes {
    /// SGR parameter for each set flag, lowest flag first.
    #[must_use]
    pub fn sgr_codes(self) -> Vec<u8> {
        [
            (Self::BOLD, 1),
            (Self::DIM, 2),
            (Self::ITALIC, 3),
            (Self::UNDERLINE, 4),
            (Self::INVERSE, 7),
            (Self::STRIKETHROUGH, 9),
        ]
        .into_iter()
        .filter_map(|(flag, code)| self.contains(flag).then_some(code))
        .collect()
    }
}

/// Foreground, background and attributes of a span.
///
/// An unset color leaves the terminal default in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attributes: TextAttributes,
}

impl Style {
    /// Terminal defaults.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Only a foreground color.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Self::NONE
        }
    }

    /// Bold, default colors.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            attributes: TextAttributes::BOLD,
            ..Self::NONE
        }
    }

    #[must_use]
    pub const fn with_fg(self, color: Color) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    #[must_use]
    pub const fn with_bg(self, color: Color) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Add `attrs` to the attributes already set.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attrs),
            ..self
        }
    }

    /// SGR sequence that selects this style starting from a reset.
    #[must_use]
    pub fn sgr(&self) -> String {
        let mut params = vec!["0".to_string()];
        params.extend(self.attributes.sgr_codes().iter().map(u8::to_string));
        params.extend(self.fg.map(Color::fg_params));
        params.extend(self.bg.map(Color::bg_params));
        format!("\x1b[{}m", params.join(";"))
    }
}
