use std::{
    fs::{self, File},
    io::{Read, Write},
    path::Path,
};

use log::debug;

use crate::{DEFAULT_SIZE, Error, Mode, Policy, Result};

/// Owned byte region with a cursor, a capacity policy and a mode.
///
/// In [`Mode::Write`] the cursor points at the next unwritten byte and every
/// byte before it has been written. In [`Mode::Read`] the storage holds exactly
/// the written bytes and the cursor points at the next unread byte.
///
/// `0 <= cursor <= len` holds at all times.
#[derive(Debug, Clone)]
pub struct Store {
    data: Vec<u8>,
    cursor: usize,
    policy: Policy,
    mode: Mode,
}

impl Store {
    /// Creates an empty store in write mode with `size` bytes of capacity.
    pub fn new(policy: Policy, size: usize) -> Self {
        Self {
            data: vec![0; size],
            cursor: 0,
            policy,
            mode: Mode::Write,
        }
    }

    /// Takes ownership of already encoded bytes. The store starts in read mode.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            data,
            cursor: 0,
            policy: Policy::Fixed,
            mode: Mode::Read,
        }
    }

    /// Copies the first `count` bytes of `bytes` into a store in read mode.
    pub fn from_prefix(bytes: &[u8], count: usize) -> Result<Self> {
        if count > bytes.len() {
            return Err(Error::Overflow {
                position: 0,
                requested: count,
                len: bytes.len(),
            });
        }
        Ok(Self::from_vec(bytes[..count].to_vec()))
    }

    /// Reads a store from `reader`, either to its end or exactly `count` bytes.
    pub fn from_reader<R: Read>(mut reader: R, count: Option<usize>) -> Result<Self> {
        let data = match count {
            Some(count) => {
                let mut data = vec![0; count];
                reader.read_exact(&mut data)?;
                data
            }
            None => {
                let mut data = Vec::new();
                reader.read_to_end(&mut data)?;
                data
            }
        };
        debug!("Read {} bytes from reader.", data.len());
        Ok(Self::from_vec(data))
    }

    /// Reads the file at `path`, whole or its first `count` bytes, into a store
    /// in read mode.
    pub fn open(path: &Path, count: Option<usize>) -> Result<Self> {
        let file = File::open(path)?;
        debug!("File opened.");

        if let Some(count) = count {
            let file_len = file.metadata()?.len();
            if count as u64 > file_len {
                return Err(Error::Overflow {
                    position: 0,
                    requested: count,
                    len: usize::try_from(file_len).unwrap_or(usize::MAX),
                });
            }
        }

        let store = Self::from_reader(file, count)?;
        debug!("Copied {} bytes from {}.", store.len(), path.display());
        Ok(store)
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the storage, including unwritten capacity in write mode.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes between the cursor and the end of the storage.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn written_len(&self) -> usize {
        match self.mode {
            Mode::Write => self.cursor,
            Mode::Read => self.data.len(),
        }
    }

    /// Borrows the written bytes without copying.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.written_len()]
    }

    /// Returns a copy of exactly the written bytes.
    pub fn snapshot_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Consumes the store, returning exactly the written bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        let len = self.written_len();
        self.data.truncate(len);
        self.data
    }

    /// Writes exactly the written bytes to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.as_bytes())?;
        Ok(())
    }

    /// Writes exactly the written bytes to the file at `path`, replacing it.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.as_bytes())?;
        debug!("Saved {} bytes to {}.", self.written_len(), path.display());
        Ok(())
    }

    #[inline]
    pub fn check_mode(&self, expected: Mode) -> Result<()> {
        if self.mode != expected {
            return Err(Error::WrongMode {
                expected,
                found: self.mode,
            });
        }
        Ok(())
    }

    /// Makes sure `additional` bytes can be written at the cursor.
    ///
    /// A growable store doubles its length, or grows exactly to fit when a
    /// single request is larger than that. A fixed store fails instead.
    pub fn ensure_capacity(&mut self, additional: usize) -> Result<()> {
        let capacity = self.data.len();
        let available = capacity - self.cursor;
        if available >= additional {
            return Ok(());
        }

        if self.policy.is_fixed() {
            return Err(Error::CapacityExceeded {
                requested: additional,
                available,
                capacity,
            });
        }

        let new_len = (capacity * 2).max(self.cursor + additional);
        self.data.resize(new_len, 0);
        debug!("Store grown from {capacity} to {new_len} bytes.");
        Ok(())
    }

    /// Appends `bytes` at the cursor.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.check_mode(Mode::Write)?;
        self.ensure_capacity(bytes.len())?;
        let end = self.cursor + bytes.len();
        self.data[self.cursor..end].copy_from_slice(bytes);
        self.cursor = end;
        Ok(())
    }

    #[inline]
    pub fn put_byte(&mut self, byte: u8) -> Result<()> {
        self.put_bytes(&[byte])
    }

    /// Consumes `len` bytes at the cursor.
    pub fn take_bytes(&mut self, len: usize) -> Result<&[u8]> {
        self.check_mode(Mode::Read)?;
        if len > self.remaining() {
            return Err(Error::Overflow {
                position: self.cursor,
                requested: len,
                len: self.data.len(),
            });
        }
        let start = self.cursor;
        self.cursor += len;
        Ok(&self.data[start..self.cursor])
    }

    #[inline]
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut array = [0; N];
        array.copy_from_slice(self.take_bytes(N)?);
        Ok(array)
    }

    #[inline]
    pub fn take_byte(&mut self) -> Result<u8> {
        Ok(self.take_array::<1>()?[0])
    }

    /// Moves the cursor by `delta` bytes without reading or writing.
    pub fn seek(&mut self, delta: isize) -> Result<()> {
        let position = self.cursor;
        let distance = delta.unsigned_abs();

        if delta >= 0 {
            self.cursor = position
                .checked_add(distance)
                .filter(|&end| end <= self.data.len())
                .ok_or(Error::Overflow {
                    position,
                    requested: distance,
                    len: self.data.len(),
                })?;
        } else {
            self.cursor = position.checked_sub(distance).ok_or(Error::Underflow {
                position,
                delta: distance,
            })?;
        }

        Ok(())
    }

    /// Moves the cursor back to the start. Mode and policy are unchanged, so in
    /// write mode the next writes overwrite what was there.
    #[inline]
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Switches to read mode.
    ///
    /// The storage is cut down to the written bytes, the policy becomes
    /// [`Policy::Fixed`] and the cursor goes back to the start. No-op when
    /// already reading.
    pub fn to_read(&mut self) {
        if self.mode == Mode::Read {
            return;
        }
        self.data.truncate(self.cursor);
        self.mode = Mode::Read;
        self.policy = Policy::Fixed;
        self.cursor = 0;
        debug!("Store switched to read mode ({} bytes).", self.data.len());
    }

    /// Switches to write mode, appending after the existing bytes.
    ///
    /// `extra` zeroed bytes of capacity are added and `policy` applies from
    /// now on. No-op when already writing.
    pub fn to_write(&mut self, policy: Policy, extra: usize) {
        if self.mode == Mode::Write {
            return;
        }
        self.cursor = self.data.len();
        self.data.resize(self.cursor + extra, 0);
        self.mode = Mode::Write;
        self.policy = policy;
        debug!(
            "Store switched to write mode ({} bytes, {extra} extra, {policy:?}).",
            self.cursor
        );
    }

    /// Switches to write mode as a growable store with [`DEFAULT_SIZE`] extra bytes.
    #[inline]
    pub fn to_write_default(&mut self) {
        self.to_write(Policy::Growable, DEFAULT_SIZE)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Policy::Growable, DEFAULT_SIZE)
    }
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && self.policy == other.policy
            && self.cursor == other.cursor
            && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Store {}

impl From<Vec<u8>> for Store {
    fn from(value: Vec<u8>) -> Self {
        Self::from_vec(value)
    }
}

impl From<&[u8]> for Store {
    fn from(value: &[u8]) -> Self {
        Self::from_vec(value.to_vec())
    }
}
