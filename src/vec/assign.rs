use core::mem;

use crate::capacity::Grow;
use crate::error::StorageError;

use super::insert::Inserter;
use super::Vector;

impl<T: Clone, G: Grow> Vector<T, G> {
    /// Clone this vector into new storage of exactly `len` slots.
    pub fn try_clone(&self) -> Result<Self, StorageError> {
        Self::try_from_slice(self.as_slice())
    }

    /// Overwrite this vector with clones of the elements of `source`.
    ///
    /// When `source` does not fit in the current capacity, a copy is
    /// built in fresh storage and only then swapped in, so a panicking
    /// `clone` leaves this vector untouched. Otherwise the storage is
    /// reused: the overlapping prefix is assigned in place, then surplus
    /// elements are dropped or missing ones cloned onto the end. A panic
    /// on that path leaves a valid vector holding some mix of old and
    /// new elements.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), StorageError> {
        let src_len = source.len();
        if src_len > self.capacity() {
            let mut copy = source.try_clone()?;
            self.swap(&mut copy);
            return Ok(());
        }
        let shared = src_len.min(self.len);
        self.as_mut_slice()[..shared].clone_from_slice(&source.as_slice()[..shared]);
        if src_len < self.len {
            self.truncate(src_len);
        } else {
            let len = self.len;
            let mut insert = Inserter::for_spare(&mut self.buf, len);
            insert.extend_from_slice(&source.as_slice()[shared..]);
            self.len = insert.complete();
        }
        Ok(())
    }
}

impl<T, G: Grow> Vector<T, G> {
    /// Move the contents out of this vector, leaving it empty with no storage.
    ///
    /// No element is touched: only the storage changes hands.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Drop the contents of this vector and release its storage, then take
    /// over the storage and elements of `source`, which is left empty.
    pub fn replace_with(&mut self, source: &mut Self) {
        self.clear();
        self.buf.release();
        self.buf.exchange(&mut source.buf);
        self.len = mem::replace(&mut source.len, 0);
    }

    /// Exchange the contents of two vectors.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.exchange(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T: Clone, G: Grow> Clone for Vector<T, G> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(error) = self.try_clone_from(source) {
            error.panic();
        }
    }
}
