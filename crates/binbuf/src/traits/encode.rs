use std::fmt;

use crate::{Buffer, Result};

/// Shape of an encodable value, deciding how it is laid out in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Single fixed width primitive.
    Scalar,
    /// Fixed length array or slice, elements in index order.
    Array,
    /// Homogeneous container, elements in iteration order.
    Iterable,
    /// Key-value container, each key followed by its value, in iteration order.
    Map,
    /// User type encoding itself through [`Serializable`](crate::Serializable).
    Serializable,
    /// Tuple, members left to right.
    Tuple,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::Array => "array",
            Self::Iterable => "iterable",
            Self::Map => "map",
            Self::Serializable => "serializable",
            Self::Tuple => "tuple",
        };
        f.write_str(name)
    }
}

/// Types that can be written to a [`Buffer`].
///
/// Implemented for primitives, arrays and slices, standard containers and maps,
/// tuples, references and boxes. User types get it from
/// [`impl_serializable!`](crate::impl_serializable) or the `Serializable` derive.
///
/// The trait is dyn compatible so heterogeneous values can be written in one
/// call with [`Buffer::write_dyn`].
pub trait Encode {
    /// Writes `self` at the buffer's cursor.
    fn encode(&self, buf: &mut Buffer) -> Result<()>;

    fn shape(&self) -> Shape;
}
