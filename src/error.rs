//! Error types for termline.
//!
//! Nothing here is fatal to an [`InputLine`](crate::InputLine): the line
//! logs these and carries on with the edit dropped.

use std::fmt;
use std::io;

/// Result type alias for termline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for termline operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a raw byte source or collaborator.
    Io(io::Error),
    /// Byte sequence that can never become a valid character.
    MalformedCharacter { bytes: Vec<u8> },
    /// The text store could not grow to hold an insert.
    BufferGrowth { requested: usize, limit: usize },
    /// Clipboard bridge failure.
    Clipboard(String),
    /// History store failure.
    History(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MalformedCharacter { bytes } => {
                write!(f, "malformed character sequence: {bytes:02x?}")
            }
            Self::BufferGrowth { requested, limit } => {
                write!(
                    f,
                    "cannot grow buffer to {requested} bytes (limit {limit})"
                )
            }
            Self::Clipboard(msg) => write!(f, "clipboard error: {msg}"),
            Self::History(msg) => write!(f, "history error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MalformedCharacter {
            bytes: vec![0xc3, 0x28],
        };
        assert!(err.to_string().contains("c3"));

        let err = Error::BufferGrowth {
            requested: 128,
            limit: 64,
        };
        assert!(err.to_string().contains("128"));
        assert!(err.to_string().contains("limit 64"));

        let err = Error::Clipboard("no clipboard".to_string());
        assert!(err.to_string().contains("clipboard error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
