use std::{
    any::type_name,
    collections::{BTreeMap, HashMap},
};

use crate::{Buffer, Decode, Encode, Error, Result, Shape};

fn encode_entries<'a, K, V, I>(entries: I, buf: &mut Buffer) -> Result<()>
where
    K: Encode + 'a,
    V: Encode + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    entries.into_iter().try_for_each(|(key, value)| {
        key.encode(buf)?;
        value.encode(buf)
    })
}

fn unsupported<T: ?Sized>() -> Result<()> {
    Err(Error::UnsupportedType {
        type_name: type_name::<T>(),
        shape: Shape::Map,
    })
}

impl<K: Encode, V: Encode, S> Encode for HashMap<K, V, S> {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        encode_entries(self, buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Map
    }
}

impl<K, V, S> Decode for HashMap<K, V, S> {
    fn decode(&mut self, _: &mut Buffer) -> Result<()> {
        unsupported::<Self>()
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    #[inline]
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        encode_entries(self, buf)
    }

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Map
    }
}

impl<K, V> Decode for BTreeMap<K, V> {
    fn decode(&mut self, _: &mut Buffer) -> Result<()> {
        unsupported::<Self>()
    }
}
