use rawbuf::Store;

use crate::{Buffer, Error, Result};

/// Fixed width scalar with a big-endian wire encoding.
///
/// Integers and floats are written most significant byte first, floats as
/// their IEEE-754 bit pattern. `bool` takes one byte (1 or 0) and `char` takes
/// two, as a single UTF-16 code unit.
pub trait Primitive: Copy + Sized + 'static {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Value fresh elements start from before being decoded.
    const ZERO: Self;

    fn put(self, store: &mut Store) -> Result<()>;

    fn take(store: &mut Store) -> Result<Self>;
}

macro_rules! impl_primitive_for_numeric {
    ($($t:ty),*) => {
        $(
            impl Primitive for $t {
                const WIDTH: usize = size_of::<$t>();
                const ZERO: Self = 0 as $t;

                #[inline]
                fn put(self, store: &mut Store) -> Result<()> {
                    store.put_bytes(&self.to_be_bytes())?;
                    Ok(())
                }

                #[inline]
                fn take(store: &mut Store) -> Result<Self> {
                    Ok(<$t>::from_be_bytes(store.take_array()?))
                }
            }
        )*
    };
}

impl_primitive_for_numeric!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl Primitive for bool {
    const WIDTH: usize = 1;
    const ZERO: Self = false;

    #[inline]
    fn put(self, store: &mut Store) -> Result<()> {
        store.put_byte(u8::from(self))?;
        Ok(())
    }

    #[inline]
    fn take(store: &mut Store) -> Result<Self> {
        Ok(store.take_byte()? == 1)
    }
}

impl Primitive for char {
    const WIDTH: usize = 2;
    const ZERO: Self = '\0';

    #[inline]
    fn put(self, store: &mut Store) -> Result<()> {
        let unit = u16::try_from(u32::from(self)).map_err(|_| Error::CharOutOfRange(self))?;
        unit.put(store)
    }

    #[inline]
    fn take(store: &mut Store) -> Result<Self> {
        let unit = u16::take(store)?;
        char::from_u32(u32::from(unit)).ok_or(Error::InvalidChar(unit))
    }
}

impl Buffer {
    /// Writes a single primitive.
    #[inline]
    pub fn write_value<T: Primitive>(&mut self, value: T) -> Result<()> {
        value.put(self)
    }

    /// Reads a single primitive.
    #[inline]
    pub fn read_value<T: Primitive>(&mut self) -> Result<T> {
        T::take(self)
    }
}

macro_rules! impl_read_fns {
    ($($name:ident => $t:ty),*) => {
        impl Buffer {
            $(
                #[doc = concat!("Reads one `", stringify!($t), "`.")]
                #[inline]
                pub fn $name(&mut self) -> Result<$t> {
                    self.read_value()
                }
            )*
        }
    };
}

impl_read_fns!(
    read_i8 => i8,
    read_u8 => u8,
    read_bool => bool,
    read_char => char,
    read_i16 => i16,
    read_u16 => u16,
    read_i32 => i32,
    read_u32 => u32,
    read_i64 => i64,
    read_u64 => u64,
    read_f32 => f32,
    read_f64 => f64
);
