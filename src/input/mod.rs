//! Key and mouse event types consumed by the line editor.
//!
//! Decoding terminal byte streams into these events belongs to the host
//! application; the editor only sees the decoded form (or raw bytes through
//! [`InputLine::handle_raw_byte`](crate::InputLine::handle_raw_byte)).

mod event;
mod keyboard;
mod mouse;

pub use event::Event;
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use mouse::{MouseEvent, MouseEventKind};
