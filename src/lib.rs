//! A growable contiguous vector with explicit storage ownership.
//!
//! [`RawMemory`] owns a block of uninitialized slots and knows nothing of
//! which are live; [`Vector`] tracks the live prefix and provides the
//! container operations, with growth governed by a [`Grow`] policy.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(test, not(feature = "std")))]
#[macro_use]
extern crate std;

extern crate alloc;

pub mod capacity;

pub(crate) mod error;

pub mod storage;

pub mod vec;

pub use {
    self::capacity::{Grow, GrowDoubling, GrowExact},
    self::error::{InsertionError, StorageError},
    self::storage::RawMemory,
    self::vec::Vector,
};
