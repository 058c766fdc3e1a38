//! Raw storage blocks backing the vector.

pub(crate) mod raw;

pub(crate) mod utils;

#[cfg(feature = "zeroize")]
mod zero;

pub use self::raw::RawMemory;
