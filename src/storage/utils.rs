use core::alloc::Layout;
use core::mem::{align_of, size_of};

use crate::error::StorageError;

#[inline]
pub fn array_layout<T>(count: usize) -> Result<Layout, StorageError> {
    Layout::array::<T>(count).map_err(StorageError::LayoutError)
}

/// Layout of a block which is known to have been allocated before.
///
/// # Safety
/// `count` must be the capacity of a successful `array_layout::<T>` call.
#[inline]
pub unsafe fn array_layout_unchecked<T>(count: usize) -> Layout {
    Layout::from_size_align_unchecked(size_of::<T>() * count, align_of::<T>())
}

#[inline]
pub const fn is_zst<T>() -> bool {
    size_of::<T>() == 0
}
