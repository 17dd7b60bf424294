use crate::{Buffer, Decodable, Decode, Encode, Primitive, Result, Shape};

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Encode for $t {
                #[inline]
                fn encode(&self, buf: &mut Buffer) -> Result<()> {
                    (*self).put(buf)
                }

                #[inline]
                fn shape(&self) -> Shape {
                    Shape::Scalar
                }
            }

            impl Decode for $t {
                #[inline]
                fn decode(&mut self, buf: &mut Buffer) -> Result<()> {
                    *self = <$t as Primitive>::take(buf)?;
                    Ok(())
                }
            }

            impl Decodable for $t {
                #[inline]
                fn instantiate() -> Result<Self> {
                    Ok(<$t as Primitive>::ZERO)
                }
            }
        )*
    };
}

impl_scalar!(i8, u8, bool, char, i16, u16, i32, u32, i64, u64, f32, f64);
