use crate::{Buffer, Decodable, Decode, Encode, Result, Shape};

impl<T: Encode + ?Sized> Encode for &T {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        (**self).encode(buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Encode + ?Sized> Encode for &mut T {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        (**self).encode(buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Decode + ?Sized> Decode for &mut T {
    #[inline]
    fn decode(&mut self, buf: &mut Buffer) -> Result<()> {
        (**self).decode(buf)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        (**self).encode(buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Decode + ?Sized> Decode for Box<T> {
    #[inline]
    fn decode(&mut self, buf: &mut Buffer) -> Result<()> {
        (**self).decode(buf)
    }
}

impl<T: Decodable> Decodable for Box<T> {
    #[inline]
    fn instantiate() -> Result<Self> {
        Ok(Box::new(T::instantiate()?))
    }
}
