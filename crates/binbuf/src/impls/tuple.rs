use crate::{Buffer, Decodable, Decode, Encode, Result, Shape};

macro_rules! impl_tuple {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            #[inline]
            fn encode(&self, buf: &mut Buffer) -> Result<()> {
                $(self.$idx.encode(buf)?;)+
                Ok(())
            }

            #[inline]
            fn shape(&self) -> Shape {
                Shape::Tuple
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            #[inline]
            fn decode(&mut self, buf: &mut Buffer) -> Result<()> {
                $(self.$idx.decode(buf)?;)+
                Ok(())
            }
        }

        impl<$($name: Decodable),+> Decodable for ($($name,)+) {
            #[inline]
            fn instantiate() -> Result<Self> {
                Ok(($($name::instantiate()?,)+))
            }
        }
    };
}

impl_tuple!(A 0);
impl_tuple!(A 0, B 1);
impl_tuple!(A 0, B 1, C 2);
impl_tuple!(A 0, B 1, C 2, D 3);
impl_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
