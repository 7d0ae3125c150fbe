//! Unicode utilities: display width, grapheme stepping and word classes.

mod classify;
mod grapheme;
mod width;

pub use classify::{CharClassifier, DefaultClassifier, is_punctuation};
pub use grapheme::{char_to_byte, next_step_len, prev_step_len};
pub use width::{
    WidthMethod, column_to_char, display_width, display_width_char,
    display_width_char_with_method, prefix_width, set_width_method, width_method,
};
