use std::{
    any::type_name,
    collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque},
};

use crate::{Buffer, Decodable, Decode, Encode, Error, Result, Shape};

fn encode_each<'a, T, I>(items: I, buf: &mut Buffer) -> Result<()>
where
    T: Encode + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().try_for_each(|item| item.encode(buf))
}

fn decode_each<'a, T, I>(slots: I, buf: &mut Buffer) -> Result<()>
where
    T: Decode + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    slots.into_iter().try_for_each(|slot| slot.decode(buf))
}

fn unsupported<T: ?Sized>() -> Result<()> {
    Err(Error::UnsupportedType {
        type_name: type_name::<T>(),
        shape: Shape::Iterable,
    })
}

impl<T: Encode> Encode for [T] {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        encode_each(self, buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Array
    }
}

impl<T: Decode> Decode for [T] {
    #[inline]
    fn decode(&mut self, buf: &mut Buffer) -> Result<()> {
        decode_each(self, buf)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        self.as_slice().encode(buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Array
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    #[inline]
    fn decode(&mut self, buf: &mut Buffer) -> Result<()> {
        self.as_mut_slice().decode(buf)
    }
}

impl<T: Decodable, const N: usize> Decodable for [T; N] {
    fn instantiate() -> Result<Self> {
        let elements = (0..N).map(|_| T::instantiate()).collect::<Result<Vec<_>>>()?;
        <[T; N]>::try_from(elements).map_err(|_| Error::ElementNotConstructible {
            type_name: type_name::<Self>(),
        })
    }
}

impl<T: Encode> Encode for Vec<T> {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        encode_each(self, buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Iterable
    }
}

/// The element count isn't in the stream, read vectors with
/// [`Buffer::read_into`](crate::Buffer::read_into). Pre-sized storage can be
/// filled through `as_mut_slice()`.
impl<T> Decode for Vec<T> {
    fn decode(&mut self, _: &mut Buffer) -> Result<()> {
        unsupported::<Self>()
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        encode_each(self, buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Iterable
    }
}

impl<T> Decode for VecDeque<T> {
    fn decode(&mut self, _: &mut Buffer) -> Result<()> {
        unsupported::<Self>()
    }
}

impl<T: Encode> Encode for LinkedList<T> {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        encode_each(self, buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Iterable
    }
}

impl<T> Decode for LinkedList<T> {
    fn decode(&mut self, _: &mut Buffer) -> Result<()> {
        unsupported::<Self>()
    }
}

impl<T: Encode, S> Encode for HashSet<T, S> {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        encode_each(self, buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Iterable
    }
}

impl<T, S> Decode for HashSet<T, S> {
    fn decode(&mut self, _: &mut Buffer) -> Result<()> {
        unsupported::<Self>()
    }
}

impl<T: Encode> Encode for BTreeSet<T> {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        encode_each(self, buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Iterable
    }
}

impl<T> Decode for BTreeSet<T> {
    fn decode(&mut self, _: &mut Buffer) -> Result<()> {
        unsupported::<Self>()
    }
}

/// Elements are written in the heap's internal order, not sorted.
impl<T: Encode> Encode for BinaryHeap<T> {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        encode_each(self, buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Iterable
    }
}

impl<T> Decode for BinaryHeap<T> {
    fn decode(&mut self, _: &mut Buffer) -> Result<()> {
        unsupported::<Self>()
    }
}
