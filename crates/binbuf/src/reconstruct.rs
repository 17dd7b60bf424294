use std::any::type_name;

use log::trace;

use crate::{Buffer, Codec, Container, Decodable, MapContainer, Mode, Result};

impl Buffer {
    /// Reads `count` elements into `dest`, in the order they were written.
    ///
    /// Each element is created with [`Decodable::instantiate`], decoded, then
    /// inserted. Sets keep one copy of duplicates, maps read `(key, value)` pairs.
    ///
    /// ```
    /// use std::collections::BTreeSet;
    ///
    /// use binbuf::Buffer;
    ///
    /// let mut buf = Buffer::default();
    /// buf.write(&[3_u16, 1, 2])?;
    /// buf.to_read();
    ///
    /// let mut set = BTreeSet::<u16>::new();
    /// buf.read_into(&mut set, 3)?;
    /// assert_eq!(set.into_iter().collect::<Vec<u16>>(), vec![1, 2, 3]);
    /// # Ok::<(), binbuf::Error>(())
    /// ```
    pub fn read_into<C>(&mut self, dest: &mut C, count: usize) -> Result<()>
    where
        C: Container + ?Sized,
        C::Element: Decodable,
    {
        self.check_mode(Mode::Read)?;
        trace!(
            "Reconstructing {count} element(s) of {}.",
            type_name::<C::Element>()
        );

        for _ in 0..count {
            let mut element = <C::Element as Decodable>::instantiate()?;
            self.read(&mut element)?;
            dest.insert_element(element);
        }

        Ok(())
    }

    /// Reads `count` entries into `dest`: a key, then its value, per entry.
    pub fn read_map_into<M>(&mut self, dest: &mut M, count: usize) -> Result<()>
    where
        M: MapContainer + ?Sized,
        M::Key: Decodable,
        M::Value: Decodable,
    {
        self.check_mode(Mode::Read)?;
        trace!(
            "Reconstructing {count} map entries of {} => {}.",
            type_name::<M::Key>(),
            type_name::<M::Value>()
        );

        for _ in 0..count {
            let mut key = <M::Key as Decodable>::instantiate()?;
            let mut value = <M::Value as Decodable>::instantiate()?;
            self.read(&mut key)?;
            self.read(&mut value)?;
            dest.insert_entry(key, value);
        }

        Ok(())
    }

    /// [`Buffer::read_into`] with elements created and decoded by `codec`.
    pub fn read_into_with<C, X>(&mut self, codec: &X, dest: &mut C, count: usize) -> Result<()>
    where
        C: Container + ?Sized,
        X: Codec<C::Element> + ?Sized,
    {
        self.check_mode(Mode::Read)?;
        trace!(
            "Reconstructing {count} element(s) of {} with codec.",
            codec.type_name()
        );

        for _ in 0..count {
            let element = self.read_new_with(codec)?;
            dest.insert_element(element);
        }

        Ok(())
    }

    /// [`Buffer::read_map_into`] with keys and values created and decoded by
    /// their codecs.
    pub fn read_map_into_with<M, KC, VC>(
        &mut self,
        key_codec: &KC,
        value_codec: &VC,
        dest: &mut M,
        count: usize,
    ) -> Result<()>
    where
        M: MapContainer + ?Sized,
        KC: Codec<M::Key> + ?Sized,
        VC: Codec<M::Value> + ?Sized,
    {
        self.check_mode(Mode::Read)?;
        trace!(
            "Reconstructing {count} map entries of {} => {} with codecs.",
            key_codec.type_name(),
            value_codec.type_name()
        );

        for _ in 0..count {
            let mut key = key_codec.instantiate()?;
            let mut value = value_codec.instantiate()?;
            self.read_with(key_codec, &mut key)?;
            self.read_with(value_codec, &mut value)?;
            dest.insert_entry(key, value);
        }

        Ok(())
    }
}
