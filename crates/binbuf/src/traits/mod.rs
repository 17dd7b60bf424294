mod codec;
mod container;
mod decode;
mod encode;
mod serializable;

pub use codec::*;
pub use container::*;
pub use decode::*;
pub use encode::*;
pub use serializable::*;
