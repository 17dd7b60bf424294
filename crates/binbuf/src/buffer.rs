use std::{
    io::Read,
    ops::{Deref, DerefMut},
    path::Path,
};

use rawbuf::Store;

use crate::{BufferOptions, Policy, Result};

/// Binary serialization buffer.
///
/// Values are written with [`Buffer::write`] while the buffer is in write mode,
/// then read back in the same order with [`Buffer::read`] and friends after
/// [`to_read`](Store::to_read). Everything is big-endian and fixed width, with no
/// length prefixes or type tags: the reader must know what was written.
///
/// Byte level operations (mode switches, seeking, snapshots) are available
/// through [`Deref`] to the underlying [`Store`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buffer(Store);

impl Buffer {
    /// Creates an empty buffer in write mode.
    pub fn new(policy: Policy, size: usize) -> Self {
        Self(Store::new(policy, size))
    }

    #[inline]
    pub fn growable(size: usize) -> Self {
        Self::new(Policy::Growable, size)
    }

    #[inline]
    pub fn fixed(size: usize) -> Self {
        Self::new(Policy::Fixed, size)
    }

    pub fn with_options(options: impl Into<BufferOptions>) -> Self {
        let BufferOptions { policy, size } = options.into();
        Self::new(policy, size)
    }

    /// Creates a buffer in read mode holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(Store::from(bytes))
    }

    /// Creates a buffer in read mode holding a copy of the first `count` bytes.
    pub fn from_bytes_prefix(bytes: &[u8], count: usize) -> Result<Self> {
        Ok(Self(Store::from_prefix(bytes, count)?))
    }

    /// Creates a buffer in read mode from a reader, to its end or exactly
    /// `count` bytes.
    pub fn from_reader<R: Read>(reader: R, count: Option<usize>) -> Result<Self> {
        Ok(Self(Store::from_reader(reader, count)?))
    }

    /// Creates a buffer in read mode from a file, whole or its first `count` bytes.
    pub fn open(path: &Path, count: Option<usize>) -> Result<Self> {
        Ok(Self(Store::open(path, count)?))
    }

    #[inline]
    pub fn into_store(self) -> Store {
        self.0
    }

    /// Consumes the buffer, returning exactly the written bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }
}

impl Deref for Buffer {
    type Target = Store;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Buffer {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Store> for Buffer {
    fn from(value: Store) -> Self {
        Self(value)
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(value: Vec<u8>) -> Self {
        Self(Store::from_vec(value))
    }
}

impl From<BufferOptions> for Buffer {
    fn from(value: BufferOptions) -> Self {
        Self::with_options(value)
    }
}
