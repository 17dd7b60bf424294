use crate::{Buffer, Codec, Decodable, Decode, Encode, Mode, Result};

impl Buffer {
    /// Writes `value` at the cursor.
    ///
    /// Primitives take their fixed width, arrays and containers write each
    /// element in order, maps write each key followed by its value, and
    /// serializable types run their own encoding. Nothing else is written:
    /// no lengths, no tags.
    #[inline]
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.check_mode(Mode::Write)?;
        value.encode(self)
    }

    /// Writes every value left to right, exactly as one [`Buffer::write`] per value.
    pub fn write_dyn(&mut self, values: &[&dyn Encode]) -> Result<()> {
        self.check_mode(Mode::Write)?;
        values.iter().try_for_each(|value| value.encode(self))
    }

    /// Reads into `dest` from the cursor.
    ///
    /// Arrays and slices are filled slot by slot, so they must have the length
    /// they were written with. Containers fail with
    /// [`Error::UnsupportedType`](crate::Error::UnsupportedType), use
    /// [`Buffer::read_into`] for them.
    #[inline]
    pub fn read<T: Decode + ?Sized>(&mut self, dest: &mut T) -> Result<()> {
        self.check_mode(Mode::Read)?;
        dest.decode(self)
    }

    /// Reads into every destination left to right, exactly as one
    /// [`Buffer::read`] per destination.
    pub fn read_dyn(&mut self, dests: &mut [&mut dyn Decode]) -> Result<()> {
        self.check_mode(Mode::Read)?;
        dests.iter_mut().try_for_each(|dest| dest.decode(self))
    }

    /// Reads a fresh `T`.
    pub fn read_new<T: Decodable>(&mut self) -> Result<T> {
        let mut value = T::instantiate()?;
        self.read(&mut value)?;
        Ok(value)
    }

    /// Writes `value` with an external codec.
    #[inline]
    pub fn write_with<T, C>(&mut self, codec: &C, value: &T) -> Result<()>
    where
        C: Codec<T> + ?Sized,
    {
        self.check_mode(Mode::Write)?;
        codec.encode(value, self)
    }

    /// Writes every value with an external codec, in iteration order.
    pub fn write_all_with<'a, T, C, I>(&mut self, codec: &C, values: I) -> Result<()>
    where
        T: 'a,
        C: Codec<T> + ?Sized,
        I: IntoIterator<Item = &'a T>,
    {
        self.check_mode(Mode::Write)?;
        values
            .into_iter()
            .try_for_each(|value| codec.encode(value, self))
    }

    /// Reads into `dest` with an external codec.
    #[inline]
    pub fn read_with<T, C>(&mut self, codec: &C, dest: &mut T) -> Result<()>
    where
        C: Codec<T> + ?Sized,
    {
        self.check_mode(Mode::Read)?;
        codec.decode(dest, self)
    }

    /// Reads a fresh value created by the codec.
    pub fn read_new_with<T, C>(&mut self, codec: &C) -> Result<T>
    where
        C: Codec<T> + ?Sized,
    {
        let mut value = codec.instantiate()?;
        self.read_with(codec, &mut value)?;
        Ok(value)
    }
}
