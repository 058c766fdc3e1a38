//! A contiguous growable vector backed by a [`RawMemory`] block.

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;

use const_default::ConstDefault;

use crate::capacity::{Grow, GrowDoubling};
use crate::error::{InsertionError, StorageError};
use crate::storage::RawMemory;

use self::insert::Inserter;

pub use self::into_iter::IntoIter;

#[macro_use]
mod macros;

mod assign;
pub(crate) mod insert;
mod into_iter;

#[cold]
#[inline(never)]
fn index_panic() -> ! {
    panic!("Invalid element index");
}

/// Create a `Vector<T>` holding `count` clones of `elem`.
#[inline]
pub fn from_elem<T: Clone>(elem: T, count: usize) -> Vector<T> {
    Vector::with_len_with(count, || elem.clone())
}

/// A contiguous growable vector.
///
/// Live elements occupy the slots `[0, len)` of a single [`RawMemory`]
/// block; the slots `[len, capacity)` are vacant. When an append or insert
/// finds no vacant slot, a larger block is sized by the growth policy `G`,
/// the new element is constructed in it first, and only then are the
/// existing elements moved over and the blocks exchanged. A panic while
/// constructing the new element therefore leaves the vector untouched.
///
/// Operations which acquire storage come in pairs: `try_*` reports a
/// [`StorageError`], while the plain form panics with it.
///
/// Without a type annotation, name the element type to select the default
/// growth policy:
///
/// ```
/// use advec::Vector;
///
/// let mut vec = Vector::<_>::new();
/// vec.push_back(1u8);
/// assert_eq!(vec.capacity(), 1);
/// ```
pub struct Vector<T, G: Grow = GrowDoubling> {
    buf: RawMemory<T>,
    len: usize,
    _grow: PhantomData<G>,
}

impl<T, G: Grow> Vector<T, G> {
    /// Constructs a new, empty `Vector<T>`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use advec::Vector;
    ///
    /// let mut vec = Vector::<i32>::new();
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            buf: RawMemory::new(),
            len: 0,
            _grow: PhantomData,
        }
    }

    /// # Safety
    /// The first `len` slots of `buf` must hold live values.
    #[inline]
    pub(crate) unsafe fn from_storage(buf: RawMemory<T>, len: usize) -> Self {
        debug_assert!(len <= buf.capacity());
        Self {
            buf,
            len,
            _grow: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        let buf = RawMemory::try_allocate(capacity)?;
        Ok(unsafe { Self::from_storage(buf, 0) })
    }

    /// Constructs a vector of `len` default values, with a capacity of exactly `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use advec::Vector;
    ///
    /// let vec = Vector::<u32>::with_len(5);
    /// assert_eq!(vec, [0, 0, 0, 0, 0]);
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::with_len_with(len, T::default)
    }

    pub fn try_with_len(len: usize) -> Result<Self, StorageError>
    where
        T: Default,
    {
        Self::try_with_len_with(len, T::default)
    }

    pub fn with_len_with<F>(len: usize, f: F) -> Self
    where
        F: FnMut() -> T,
    {
        match Self::try_with_len_with(len, f) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Constructs a vector of `len` values produced by `f`, with a capacity of
    /// exactly `len`.
    ///
    /// If `f` panics, the values already produced are dropped and the storage
    /// released before the panic propagates.
    pub fn try_with_len_with<F>(len: usize, mut f: F) -> Result<Self, StorageError>
    where
        F: FnMut() -> T,
    {
        let mut buf = RawMemory::try_allocate(len)?;
        let mut insert = Inserter::for_spare(&mut buf, 0);
        for _ in 0..len {
            insert.push(f());
        }
        let len = insert.complete();
        Ok(unsafe { Self::from_storage(buf, len) })
    }

    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        match Self::try_from_slice(data) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn try_from_slice(data: &[T]) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        let mut vec = Self::try_with_capacity(data.len())?;
        vec.try_extend_from_slice(data)?;
        Ok(vec)
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// The number of slots in the backing storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Ensure a total capacity of at least `capacity` slots.
    ///
    /// Unlike `std::vec::Vec::reserve`, the argument is the total capacity
    /// rather than a number of additional slots. When growth is needed the
    /// new capacity is exactly `capacity`; the storage never shrinks.
    #[inline]
    pub fn reserve(&mut self, capacity: usize) {
        match self.try_reserve(capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), StorageError> {
        if capacity <= self.buf.capacity() {
            return Ok(());
        }
        log::trace!(
            "reserving {} slots (was {})",
            capacity,
            self.buf.capacity()
        );
        let new_buf = RawMemory::try_allocate(capacity)?;
        self.relocate(new_buf);
        Ok(())
    }

    // Make room for `additional` more elements according to the growth policy.
    fn try_reserve_for(&mut self, additional: usize) -> Result<(), StorageError> {
        if self.buf.capacity() - self.len >= additional {
            return Ok(());
        }
        let new_buf = self.try_grow_storage(additional)?;
        self.relocate(new_buf);
        Ok(())
    }

    fn try_grow_storage(&self, additional: usize) -> Result<RawMemory<T>, StorageError> {
        let Some(required) = self.len.checked_add(additional) else {
            return Err(StorageError::CapacityLimit);
        };
        let capacity = G::next_capacity(self.buf.capacity(), required);
        log::trace!(
            "growing storage from {} to {} slots",
            self.buf.capacity(),
            capacity
        );
        RawMemory::try_allocate(capacity)
    }

    // Move the live elements into `new_buf` and adopt it, releasing the old block.
    fn relocate(&mut self, mut new_buf: RawMemory<T>) {
        debug_assert!(new_buf.capacity() >= self.len);
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }
        self.buf.exchange(&mut new_buf);
    }

    /// Resize to `len` elements, filling any new slots with default values.
    ///
    /// Growth reserves exactly `len` slots when the current capacity is
    /// insufficient. Shrinking drops the trailing elements but keeps the
    /// capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use advec::Vector;
    ///
    /// let mut vec = Vector::<u32>::from([1, 2, 3, 4, 5]);
    /// vec.resize(2);
    /// assert_eq!(vec, [1, 2]);
    /// vec.resize(7);
    /// assert_eq!(vec, [1, 2, 0, 0, 0, 0, 0]);
    /// ```
    #[inline]
    pub fn resize(&mut self, len: usize)
    where
        T: Default,
    {
        self.resize_with(len, T::default)
    }

    #[inline]
    pub fn try_resize(&mut self, len: usize) -> Result<(), StorageError>
    where
        T: Default,
    {
        self.try_resize_with(len, T::default)
    }

    #[inline]
    pub fn resize_with<F>(&mut self, len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        match self.try_resize_with(len, f) {
            Ok(_) => (),
            Err(err) => err.panic(),
        }
    }

    pub fn try_resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), StorageError>
    where
        F: FnMut() -> T,
    {
        match new_len.cmp(&self.len) {
            Ordering::Greater => {
                self.try_reserve(new_len)?;
                let len = self.len;
                let mut insert = Inserter::for_spare(&mut self.buf, len);
                for _ in len..new_len {
                    insert.push(f());
                }
                self.len = insert.complete();
            }
            Ordering::Less => {
                self.truncate(new_len);
            }
            Ordering::Equal => {}
        }
        Ok(())
    }

    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len < old_len {
            self.len = len;
            unsafe {
                let to_drop = ptr::slice_from_raw_parts_mut(self.buf.slot_mut(len), old_len - len);
                ptr::drop_in_place(to_drop);
            }
        }
    }

    #[inline]
    pub fn push_back(&mut self, value: T) {
        if let Err(error) = self.try_push_back(value) {
            error.panic();
        }
    }

    pub fn try_push_back(&mut self, value: T) -> Result<(), InsertionError<T>> {
        if let Err(error) = self.try_reserve_for(1) {
            return Err(InsertionError::new(error, value));
        }
        let len = self.len;
        unsafe { self.buf.uninit_slot(len) }.write(value);
        self.len = len + 1;
        Ok(())
    }

    #[inline]
    pub fn emplace_back_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace_back_with(f) {
            Ok(item) => item,
            Err(error) => error.panic(),
        }
    }

    /// Append the value produced by `f`, returning a reference to it.
    ///
    /// When the storage is full, the replacement block is allocated and the
    /// new value written into it before any existing element is moved, so a
    /// panic in `f` (or an allocation failure) leaves the vector unchanged.
    pub fn try_emplace_back_with<F>(&mut self, f: F) -> Result<&mut T, StorageError>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        if len < self.buf.capacity() {
            unsafe { self.buf.uninit_slot(len) }.write(f());
        } else {
            let mut new_buf = self.try_grow_storage(1)?;
            unsafe { new_buf.uninit_slot(len) }.write(f());
            self.relocate(new_buf);
        }
        self.len = len + 1;
        Ok(unsafe { &mut *self.buf.slot_mut(len) })
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { ptr::read(self.buf.slot(self.len)) })
    }

    /// Insert `value` at `index`, shifting later elements to the right.
    /// Returns `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        match self.try_insert(index, value) {
            Ok(index) => index,
            Err(error) => error.panic(),
        }
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, InsertionError<T>> {
        let len = self.len;
        if index > len {
            index_panic();
        }
        if len < self.buf.capacity() {
            unsafe { self.shift_insert(index, value) };
        } else {
            match self.try_grow_storage(1) {
                Ok(new_buf) => self.insert_relocating(new_buf, index, || value),
                Err(error) => return Err(InsertionError::new(error, value)),
            }
        }
        Ok(index)
    }

    #[inline]
    pub fn emplace_with<F>(&mut self, index: usize, f: F) -> usize
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace_with(index, f) {
            Ok(index) => index,
            Err(error) => error.panic(),
        }
    }

    /// Insert the value produced by `f` at `index`, returning `index`.
    ///
    /// With a vacant slot available, the value is produced before any element
    /// is shifted. Otherwise it is written directly into a larger block, and
    /// the elements before and after `index` are moved around it. Either way
    /// a panic in `f` leaves the vector unchanged.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn try_emplace_with<F>(&mut self, index: usize, f: F) -> Result<usize, StorageError>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        if index > len {
            index_panic();
        }
        if index == len {
            self.try_emplace_back_with(f)?;
        } else if len < self.buf.capacity() {
            let value = f();
            unsafe { self.shift_insert(index, value) };
        } else {
            let new_buf = self.try_grow_storage(1)?;
            self.insert_relocating(new_buf, index, f);
        }
        Ok(index)
    }

    /// # Safety
    /// `index` must not exceed the length, and a vacant slot must be available.
    unsafe fn shift_insert(&mut self, index: usize, value: T) {
        let len = self.len;
        debug_assert!(index <= len && len < self.buf.capacity());
        let head = self.buf.slot_mut(index);
        ptr::copy(head, head.add(1), len - index);
        head.write(value);
        self.len = len + 1;
    }

    fn insert_relocating<F>(&mut self, mut new_buf: RawMemory<T>, index: usize, f: F)
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        debug_assert!(index <= len && len < new_buf.capacity());
        unsafe { new_buf.uninit_slot(index) }.write(f());
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), index);
            ptr::copy_nonoverlapping(
                self.buf.slot(index),
                new_buf.slot_mut(index + 1),
                len - index,
            );
        }
        self.buf.exchange(&mut new_buf);
        self.len = len + 1;
    }

    /// Drop the element at `index`, shifting later elements to the left.
    /// Returns `index`, which now refers to the following element, if any.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            index_panic();
        }
        unsafe {
            let head = self.buf.slot_mut(index);
            let result = ptr::read(head);
            ptr::copy(head.add(1), head, len - index - 1);
            self.len = len - 1;
            result
        }
    }

    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        match self.try_extend_from_slice(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), StorageError>
    where
        T: Clone,
    {
        self.try_reserve_for(items.len())?;
        let len = self.len;
        let mut insert = Inserter::for_spare(&mut self.buf, len);
        insert.extend_from_slice(items);
        self.len = insert.complete();
        Ok(())
    }
}

impl<T, G: Grow> AsRef<[T]> for Vector<T, G> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, G: Grow> AsMut<[T]> for Vector<T, G> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, G: Grow> Borrow<[T]> for Vector<T, G> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, G: Grow> BorrowMut<[T]> for Vector<T, G> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, G: Grow> fmt::Debug for Vector<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T, G: Grow> ConstDefault for Vector<T, G> {
    const DEFAULT: Self = Self::new();
}

impl<T, G: Grow> Default for Vector<T, G> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G: Grow> Deref for Vector<T, G> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, G: Grow> DerefMut for Vector<T, G> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, G: Grow> Drop for Vector<T, G> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

impl<T, G: Grow> Extend<T> for Vector<T, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (min_len, _) = iter.size_hint();
        if let Err(error) = self.try_reserve_for(min_len) {
            error.panic();
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Clone + 'a, G: Grow> Extend<&'a T> for Vector<T, G> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned())
    }
}

impl<T, G: Grow> FromIterator<T> for Vector<T, G> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T, G: Grow> From<alloc::vec::Vec<T>> for Vector<T, G> {
    fn from(vec: alloc::vec::Vec<T>) -> Self {
        let mut vec = ManuallyDrop::new(vec);
        let length = vec.len();
        let capacity = vec.capacity();
        let data = unsafe { NonNull::new_unchecked(vec.as_mut_ptr()) };
        unsafe { Self::from_storage(RawMemory::from_raw_parts(data, capacity), length) }
    }
}

impl<T, G: Grow> From<Vector<T, G>> for alloc::vec::Vec<T> {
    fn from(mut vec: Vector<T, G>) -> Self {
        let length = mem::replace(&mut vec.len, 0);
        let (data, capacity) = vec.buf.take().into_raw_parts();
        unsafe { alloc::vec::Vec::from_raw_parts(data.as_ptr(), length, capacity) }
    }
}

#[cfg(feature = "allocator-api2")]
impl<T, G: Grow> From<allocator_api2::vec::Vec<T>> for Vector<T, G> {
    fn from(vec: allocator_api2::vec::Vec<T>) -> Self {
        let (data, length, capacity, _alloc) = vec.into_raw_parts_with_alloc();
        unsafe {
            Self::from_storage(
                RawMemory::from_raw_parts(NonNull::new_unchecked(data), capacity),
                length,
            )
        }
    }
}

#[cfg(feature = "allocator-api2")]
impl<T, G: Grow> From<Vector<T, G>> for allocator_api2::vec::Vec<T> {
    fn from(mut vec: Vector<T, G>) -> Self {
        let length = mem::replace(&mut vec.len, 0);
        let (data, capacity) = vec.buf.take().into_raw_parts();
        unsafe { allocator_api2::vec::Vec::from_raw_parts(data.as_ptr(), length, capacity) }
    }
}

impl<T: Clone, G: Grow> From<&[T]> for Vector<T, G> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, G: Grow, const N: usize> From<&[T; N]> for Vector<T, G> {
    #[inline]
    fn from(data: &[T; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<T, G: Grow, const N: usize> From<[T; N]> for Vector<T, G> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_iter(data)
    }
}

impl<T, G: Grow> IntoIterator for Vector<T, G> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        let length = mem::replace(&mut self.len, 0);
        IntoIter::new(self.buf.take(), length)
    }
}

impl<'a, T, G: Grow> IntoIterator for &'a Vector<T, G> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, G: Grow> IntoIterator for &'a mut Vector<T, G> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T1, G1, T2, G2> PartialEq<Vector<T2, G2>> for Vector<T1, G1>
where
    G1: Grow,
    G2: Grow,
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &Vector<T2, G2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq, G: Grow> Eq for Vector<T, G> {}

impl<T1, G1, T2> PartialEq<&[T2]> for Vector<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, G1, T2> PartialEq<[T2]> for Vector<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, G1, T2, const N: usize> PartialEq<&[T2; N]> for Vector<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, G1, T2, const N: usize> PartialEq<[T2; N]> for Vector<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, G1, T2> PartialEq<alloc::vec::Vec<T2>> for Vector<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &alloc::vec::Vec<T2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

#[cfg(feature = "zeroize")]
impl<T: zeroize::Zeroize, G: Grow> zeroize::Zeroize for Vector<T, G> {
    fn zeroize(&mut self) {
        for item in self.as_mut_slice() {
            item.zeroize();
        }
        self.clear();
        self.buf.zeroize_slots();
    }
}
