use std::{any::type_name, fmt};

use crate::{Buffer, Error, Result};

/// Serialization logic for `T` that lives outside of `T`.
///
/// Useful for foreign types, or for types with more than one encoding. Used
/// with [`Buffer::write_with`], [`Buffer::read_with`] and the `_with` variants
/// of container reconstruction.
pub trait Codec<T> {
    fn encode(&self, value: &T, buf: &mut Buffer) -> Result<()>;

    fn decode(&self, dest: &mut T, buf: &mut Buffer) -> Result<()>;

    /// Fresh instance for [`Codec::decode`] to fill during container
    /// reconstruction.
    fn instantiate(&self) -> Result<T> {
        Err(Error::ElementNotConstructible {
            type_name: self.type_name(),
        })
    }

    /// Name of the decoded type, for diagnostics.
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// [`Codec`] built from an encoder closure and a decoder closure.
///
/// ```
/// use binbuf::{Buffer, FnCodec};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Celsius(f32);
///
/// let codec = FnCodec::new(
///     |value: &Celsius, buf: &mut Buffer| buf.write(&value.0),
///     |dest: &mut Celsius, buf: &mut Buffer| buf.read(&mut dest.0),
/// )
/// .with_default();
///
/// let mut buf = Buffer::default();
/// buf.write_with(&codec, &Celsius(21.5))?;
/// buf.to_read();
/// assert_eq!(buf.read_new_with(&codec)?, Celsius(21.5));
/// # Ok::<(), binbuf::Error>(())
/// ```
pub struct FnCodec<T, E, D> {
    encoder: E,
    decoder: D,
    factory: Option<fn() -> T>,
}

impl<T, E, D> FnCodec<T, E, D>
where
    E: Fn(&T, &mut Buffer) -> Result<()>,
    D: Fn(&mut T, &mut Buffer) -> Result<()>,
{
    pub fn new(encoder: E, decoder: D) -> Self {
        Self {
            encoder,
            decoder,
            factory: None,
        }
    }

    /// Sets how fresh elements are created during container reconstruction.
    pub fn with_factory(mut self, factory: fn() -> T) -> Self {
        self.factory = Some(factory);
        self
    }
}

impl<T, E, D> FnCodec<T, E, D>
where
    T: Default,
    E: Fn(&T, &mut Buffer) -> Result<()>,
    D: Fn(&mut T, &mut Buffer) -> Result<()>,
{
    /// Creates fresh elements with `T::default()`.
    pub fn with_default(self) -> Self {
        self.with_factory(T::default)
    }
}

impl<T, E, D> Codec<T> for FnCodec<T, E, D>
where
    E: Fn(&T, &mut Buffer) -> Result<()>,
    D: Fn(&mut T, &mut Buffer) -> Result<()>,
{
    #[inline]
    fn encode(&self, value: &T, buf: &mut Buffer) -> Result<()> {
        (self.encoder)(value, buf)
    }

    #[inline]
    fn decode(&self, dest: &mut T, buf: &mut Buffer) -> Result<()> {
        (self.decoder)(dest, buf)
    }

    fn instantiate(&self) -> Result<T> {
        self.factory
            .map(|factory| factory())
            .ok_or(Error::ElementNotConstructible {
                type_name: self.type_name(),
            })
    }
}

impl<T, E, D> fmt::Debug for FnCodec<T, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCodec")
            .field("type", &type_name::<T>())
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}
