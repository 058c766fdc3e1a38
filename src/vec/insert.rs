use core::mem::MaybeUninit;
use core::ptr;

use crate::storage::RawMemory;

/// Writes values into consecutive vacant slots of a block.
///
/// Values written so far are dropped if the inserter is dropped without
/// being completed, so a panicking constructor never leaves a partially
/// built run of live values behind.
pub(crate) struct Inserter<'a, T> {
    buf: &'a mut [MaybeUninit<T>],
    start: usize,
    end: usize,
}

impl<'a, T> Inserter<'a, T> {
    /// Begin writing at slot `len`, the first vacant slot of `buf`.
    #[inline]
    pub fn for_spare(buf: &'a mut RawMemory<T>, len: usize) -> Self {
        let buf = buf.as_uninit_slice_mut();
        assert!(len <= buf.len());
        Self {
            buf,
            start: len,
            end: len,
        }
    }

    #[inline]
    pub fn push(&mut self, val: T) {
        self.buf[self.end].write(val);
        self.end += 1;
    }

    #[inline]
    pub fn push_clone(&mut self, val: &T)
    where
        T: Clone,
    {
        self.buf[self.end].write(val.clone());
        self.end += 1;
    }

    #[inline]
    pub fn extend_from_slice(&mut self, data: &[T])
    where
        T: Clone,
    {
        for item in data {
            self.push_clone(item);
        }
    }

    /// Keep the written values, returning the index one past the last of them.
    #[inline]
    pub fn complete(mut self) -> usize {
        self.start = self.end;
        self.end
    }
}

impl<T> Drop for Inserter<'_, T> {
    #[inline]
    fn drop(&mut self) {
        if self.start != self.end {
            unsafe {
                ptr::drop_in_place(
                    &mut self.buf[self.start..self.end] as *mut [MaybeUninit<T>] as *mut [T],
                )
            };
        }
    }
}
