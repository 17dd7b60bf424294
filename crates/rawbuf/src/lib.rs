#![doc = include_str!("../README.md")]

pub mod error;
mod mode;
mod store;

pub use error::*;
pub use mode::*;
pub use store::*;

/// Capacity, in bytes, of a store created without an explicit size, and the
/// extra capacity added by [`Store::to_write_default`].
pub const DEFAULT_SIZE: usize = 32;
