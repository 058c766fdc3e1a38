use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop, MaybeUninit};
use core::ptr::NonNull;
use core::slice;

use alloc::alloc::{alloc as raw_alloc, dealloc as raw_dealloc};
use const_default::ConstDefault;

use crate::error::StorageError;

use super::utils::{array_layout, array_layout_unchecked, is_zst};

/// An owned block of uninitialized slots for values of type `T`.
///
/// The block knows its capacity but not which of its slots hold live
/// values: dropping a `RawMemory` releases the memory without running
/// any destructors. The empty block (capacity zero) never touches the
/// allocator, and neither does a block of zero-sized values.
pub struct RawMemory<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> RawMemory<T> {
    /// The empty block, holding no allocation.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate a block of exactly `capacity` slots.
    pub fn try_allocate(capacity: usize) -> Result<Self, StorageError> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        if is_zst::<T>() {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }
        let layout = array_layout::<T>(capacity)?;
        // SAFETY: the layout has a non-zero size
        let Some(ptr) = NonNull::new(unsafe { raw_alloc(layout) }) else {
            log::error!(
                "failed to allocate {} bytes for {} slots",
                layout.size(),
                capacity
            );
            return Err(StorageError::AllocError);
        };
        Ok(Self {
            ptr: ptr.cast(),
            capacity,
            _marker: PhantomData,
        })
    }

    /// Allocate a block of exactly `capacity` slots, panicking on failure.
    #[inline]
    pub fn allocate(capacity: usize) -> Self {
        match Self::try_allocate(capacity) {
            Ok(buf) => buf,
            Err(error) => error.panic(),
        }
    }

    /// Assemble a block from a pointer and capacity.
    ///
    /// # Safety
    /// Unless `capacity` is zero or `T` is zero-sized, `ptr` must have been
    /// allocated by the global allocator with the layout of `[T; capacity]`,
    /// and ownership of that allocation passes to the new block.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, capacity: usize) -> Self {
        if capacity == 0 {
            Self::new()
        } else {
            Self {
                ptr,
                capacity,
                _marker: PhantomData,
            }
        }
    }

    /// Give up ownership of the allocation, returning its pointer and capacity.
    #[inline]
    pub fn into_raw_parts(self) -> (NonNull<T>, usize) {
        let me = ManuallyDrop::new(self);
        (me.ptr, me.capacity)
    }

    /// The number of slots in this block.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check whether this is the empty block.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// A pointer to the first slot. Dangling for the empty block.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// A mutable pointer to the first slot. Dangling for the empty block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// The address of the slot at `offset`.
    ///
    /// # Safety
    /// `offset` must not exceed the capacity. The one-past-end address is a
    /// valid result but must not be dereferenced.
    #[inline]
    pub unsafe fn slot(&self, offset: usize) -> *const T {
        debug_assert!(offset <= self.capacity, "slot offset out of range");
        self.ptr.as_ptr().add(offset)
    }

    /// The mutable address of the slot at `offset`.
    ///
    /// # Safety
    /// `offset` must not exceed the capacity. The one-past-end address is a
    /// valid result but must not be dereferenced.
    #[inline]
    pub unsafe fn slot_mut(&mut self, offset: usize) -> *mut T {
        debug_assert!(offset <= self.capacity, "slot offset out of range");
        self.ptr.as_ptr().add(offset)
    }

    /// Access the slot at `index` as possibly-uninitialized memory.
    ///
    /// # Safety
    /// `index` must be less than the capacity.
    #[inline]
    pub unsafe fn uninit_slot(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(index < self.capacity, "slot index out of range");
        &mut *self.ptr.as_ptr().add(index).cast()
    }

    /// Access every slot as possibly-uninitialized memory.
    #[inline]
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: the block holds `capacity` slots, and `MaybeUninit`
        // places no requirement on their contents
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), self.capacity) }
    }

    /// Swap the allocations held by two blocks.
    #[inline]
    pub fn exchange(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Take the allocation out of this block, leaving it empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Release the allocation held by this block, leaving it empty.
    ///
    /// Any values still living in the slots are leaked, not dropped.
    #[inline]
    pub fn release(&mut self) {
        drop(self.take());
    }

    /// Release this block's own allocation, then take over the allocation
    /// held by `source`, which is left empty.
    #[inline]
    pub fn replace_with(&mut self, source: &mut Self) {
        self.release();
        self.exchange(source);
    }
}

impl<T> ConstDefault for RawMemory<T> {
    const DEFAULT: Self = Self::new();
}

impl<T> Default for RawMemory<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RawMemory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawMemory")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> Drop for RawMemory<T> {
    fn drop(&mut self) {
        if self.capacity != 0 && !is_zst::<T>() {
            unsafe {
                // SAFETY: the same layout was accepted by `try_allocate`
                let layout = array_layout_unchecked::<T>(self.capacity);
                raw_dealloc(self.ptr.as_ptr().cast(), layout);
            }
        }
    }
}

// The block owns its slots exclusively, like a `Box<[MaybeUninit<T>]>`.
unsafe impl<T: Send> Send for RawMemory<T> {}

unsafe impl<T: Sync> Sync for RawMemory<T> {}
