//! Defines [`Error`], representing failures of the byte codec.
use std::fmt::{Display, Formatter};

/// Every fallible operation of this crate returns this error type.
///
/// Arithmetic conversions never fail: values outside of the 64-bit range wrap.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Returned when a source ends before the encoding terminates, or when a
    /// sink is too small to hold an encoding.
    OutOfRange(String),
    /// Returned when ten bytes were read and the last one still had its
    /// continuation bit set.
    Overflow,
    /// Error from an underlying reader or writer.
    Io(std::io::Error),
}

impl Error {
    /// Creates an [`Error::OutOfRange`].
    pub(crate) fn oor<A: Into<String>>(msg: A) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Whether this error signals missing bytes (truncated source or short sink).
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfRange(desc) => write!(f, "Out of range: {}", desc),
            Error::Overflow => write!(f, "Invalid varint encoding: more than 64 bits"),
            Error::Io(desc) => write!(f, "Io error: {}", desc),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(error) => Some(error),
            _ => None,
        }
    }
}

/// Typedef for a [`std::result::Result`] of an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
