use std::{io, result};

use thiserror::Error;

use crate::Mode;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for rawbuf operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] io::Error),

    // Mode errors
    #[error("Wrong mode: operation requires {expected:?} mode, store is in {found:?} mode")]
    WrongMode { expected: Mode, found: Mode },

    // Capacity errors
    #[error(
        "Capacity exceeded: requested {requested} bytes, {available} available in fixed store of {capacity} bytes"
    )]
    CapacityExceeded {
        requested: usize,
        available: usize,
        capacity: usize,
    },

    // Cursor errors
    #[error("Overflow: moving {requested} bytes from position {position} goes past length {len}")]
    Overflow {
        position: usize,
        requested: usize,
        len: usize,
    },

    #[error("Underflow: moving {delta} bytes back from position {position} goes before the start")]
    Underflow { position: usize, delta: usize },
}

impl Error {
    #[inline]
    pub fn is_wrong_mode(&self) -> bool {
        matches!(self, Self::WrongMode { .. })
    }

    #[inline]
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }

    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    #[inline]
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow { .. })
    }
}
