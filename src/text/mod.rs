//! Line text storage and editing.
//!
//! Key types:
//!
//! - [`CodepointAssembler`]: byte-at-a-time UTF-8 decoding of typed input
//! - [`TextStore`]: rope-backed storage addressed by character offset
//! - [`LineBuffer`]: text plus cursor, selection and pending input bytes
//! - [`Selection`]: mark and highlight state
//! - [`KillRing`]: shared single-slot kill buffer
//!
//! # Examples
//!
//! ```
//! use termline::{KillRing, LineBuffer};
//!
//! let ring = KillRing::new();
//! ring.set("xyz");
//!
//! let mut buf = LineBuffer::with_text("ab", 10);
//! buf.set_point(1);
//! ring.yank_into(&mut buf);
//! assert_eq!(buf.text(), "axyzb");
//! assert_eq!(buf.point(), 4);
//! ```

mod assembler;
mod edit;
mod kill_ring;
mod selection;
mod store;

pub use assembler::{CodepointAssembler, Feed, MAX_CHAR_BYTES};
pub use edit::{Direction, Granularity, LineBuffer};
pub use kill_ring::KillRing;
pub use selection::Selection;
pub use store::TextStore;
