use std::fmt;

/// Operating state of a [`Store`](crate::Store).
///
/// Writes are only accepted in [`Mode::Write`] and reads only in [`Mode::Read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Write,
    Read,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write => f.write_str("write"),
            Self::Read => f.write_str("read"),
        }
    }
}

/// Capacity policy of a [`Store`](crate::Store).
///
/// A `Growable` store reallocates when a write does not fit, a `Fixed` store
/// fails with [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) instead
/// and never reallocates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    #[default]
    Growable,
    Fixed,
}

impl Policy {
    #[inline]
    pub fn is_fixed(self) -> bool {
        self == Self::Fixed
    }
}
