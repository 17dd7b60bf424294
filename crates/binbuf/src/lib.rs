#![doc = include_str!("../README.md")]

pub use rawbuf::{DEFAULT_SIZE, Error as RawBufError, Mode, Policy, Store};

#[cfg(feature = "derive")]
pub use binbuf_derive::Serializable;

mod buffer;
mod dispatch;
mod error;
mod impls;
mod options;
mod primitive;
mod reconstruct;
mod traits;

pub use buffer::*;
pub use error::*;
pub use options::*;
pub use primitive::*;
pub use traits::*;
