//! `termline` - single-line text input for terminal applications
//!
//! An editable line with a cursor, a mark-based selection, a shared kill
//! buffer, input history and completion hooks. Input arrives as key, mouse
//! or raw byte events; output is a styled [`Frame`] that can be painted on
//! any [`RenderSurface`].

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow history::HistoryStore etc
#![allow(clippy::struct_excessive_bools)] // Options and line state need several flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_possible_truncation)] // Byte arithmetic on ASCII control codes
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod collab;
pub mod color;
pub mod command;
pub mod error;
pub mod history;
pub mod input;
pub mod input_line;
pub mod render;
pub mod style;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use color::Color;
pub use error::{Error, Result};
pub use style::{Style, TextAttributes};

// Re-export the editor
pub use command::{Command, CommandTable, DefaultKeymap, KeyResolver};
pub use input_line::{InputLine, InputOptions, KeyOutcome};
pub use text::{Direction, Granularity, KillRing, LineBuffer, Selection};

// Re-export input types
pub use input::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

// Re-export collaborator seams
pub use collab::{
    ClipboardBridge, Completer, HistoryBrowser, MemoryClipboard, RawByteSource, ReaderByteSource,
    WordListCompleter,
};
pub use history::{History, HistoryStore, MemoryHistoryStore, strip_password};

// Re-export rendering types
pub use render::{AnsiSurface, Frame, InputColors, LineCanvas, RenderSurface};
pub use unicode::{CharClassifier, WidthMethod, set_width_method};
