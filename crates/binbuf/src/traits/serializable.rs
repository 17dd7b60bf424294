use crate::{Buffer, Result};

/// Contract for user types that serialize themselves.
///
/// Both methods are called exactly at the buffer's cursor. The type decides its
/// own field order and nesting and hands the byte work back to the buffer,
/// typically one [`Buffer::write`] / [`Buffer::read`] per field. The two methods
/// must visit fields in the same order.
///
/// Implementing this trait alone doesn't make a type usable with
/// [`Buffer::write`]; use [`impl_serializable!`](crate::impl_serializable) or
/// `#[derive(Serializable)]` (with the `derive` feature) to also get
/// [`Encode`](crate::Encode), [`Decode`](crate::Decode) and
/// [`Decodable`](crate::Decodable).
pub trait Serializable {
    fn encode_self(&self, buf: &mut Buffer) -> Result<()>;

    fn decode_self(&mut self, buf: &mut Buffer) -> Result<()>;
}

/// Routes [`Encode`](crate::Encode) and [`Decode`](crate::Decode) for a type to
/// its [`Serializable`] implementation.
///
/// `impl_serializable!(Type)` also implements [`Decodable`](crate::Decodable)
/// through `Default`. `impl_serializable!(Type, no_default)` implements it
/// without a constructor, so reconstructing containers of `Type` fails with
/// [`Error::ElementNotConstructible`](crate::Error::ElementNotConstructible).
#[macro_export]
macro_rules! impl_serializable {
    (@dispatch $ty:ty) => {
        impl $crate::Encode for $ty {
            #[inline]
            fn encode(&self, buf: &mut $crate::Buffer) -> $crate::Result<()> {
                $crate::Serializable::encode_self(self, buf)
            }

            #[inline]
            fn shape(&self) -> $crate::Shape {
                $crate::Shape::Serializable
            }
        }

        impl $crate::Decode for $ty {
            #[inline]
            fn decode(&mut self, buf: &mut $crate::Buffer) -> $crate::Result<()> {
                $crate::Serializable::decode_self(self, buf)
            }
        }
    };
    ($ty:ty, no_default) => {
        $crate::impl_serializable!(@dispatch $ty);

        impl $crate::Decodable for $ty {}
    };
    ($ty:ty) => {
        $crate::impl_serializable!(@dispatch $ty);

        impl $crate::Decodable for $ty {
            #[inline]
            fn instantiate() -> $crate::Result<Self> {
                Ok(<Self as ::core::default::Default>::default())
            }
        }
    };
}
