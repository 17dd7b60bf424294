use std::any::type_name;

use crate::{Buffer, Error, Result};

/// Types that can be read from a [`Buffer`] into an existing value.
///
/// Decoding writes into the destination rather than producing a new value, so
/// arrays and slices are filled slot by slot and keep their length. Containers
/// (vectors, deques, lists, sets, heaps, maps) fail with
/// [`Error::UnsupportedType`]: the stream carries no element count, so they must
/// be read with [`Buffer::read_into`] and a count.
pub trait Decode {
    /// Reads into `self` from the buffer's cursor.
    fn decode(&mut self, buf: &mut Buffer) -> Result<()>;
}

/// Types that can produce a fresh instance to decode into.
///
/// Container reconstruction calls [`Decodable::instantiate`] once per element
/// before decoding it. Primitives start from zero. The default implementation
/// fails with [`Error::ElementNotConstructible`], for types that can be decoded
/// in place but have no sensible empty value.
pub trait Decodable: Decode + Sized {
    fn instantiate() -> Result<Self> {
        Err(Error::ElementNotConstructible {
            type_name: type_name::<Self>(),
        })
    }
}
