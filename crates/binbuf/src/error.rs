use std::{io, result};

use thiserror::Error;

use crate::Shape;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for binbuf operations.
///
/// I/O failures come from the byte store and surface as
/// `RawBuf(rawbuf::Error::IO(_))`, see [`Error::io`].
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    RawBuf(#[from] rawbuf::Error),

    #[error("Unsupported type: {type_name} ({shape}) can't be decoded in place, read it with an element count")]
    UnsupportedType {
        type_name: &'static str,
        shape: Shape,
    },
    #[error("Element not constructible: {type_name} has no empty instance to decode into")]
    ElementNotConstructible { type_name: &'static str },
    #[error("Char {0:?} doesn't fit in a single UTF-16 code unit")]
    CharOutOfRange(char),
    #[error("Invalid char: code unit {0:#06x} is a surrogate")]
    InvalidChar(u16),
}

impl Error {
    /// Returns the underlying byte store error, if any.
    pub fn raw(&self) -> Option<&rawbuf::Error> {
        match self {
            Self::RawBuf(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the underlying I/O error, if any.
    pub fn io(&self) -> Option<&io::Error> {
        match self.raw()? {
            rawbuf::Error::IO(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wrong_mode(&self) -> bool {
        self.raw().is_some_and(rawbuf::Error::is_wrong_mode)
    }

    #[inline]
    pub fn is_capacity_exceeded(&self) -> bool {
        self.raw().is_some_and(rawbuf::Error::is_capacity_exceeded)
    }

    #[inline]
    pub fn is_overflow(&self) -> bool {
        self.raw().is_some_and(rawbuf::Error::is_overflow)
    }

    #[inline]
    pub fn is_underflow(&self) -> bool {
        self.raw().is_some_and(rawbuf::Error::is_underflow)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::RawBuf(rawbuf::Error::IO(e))
    }
}
