//! Failures while acquiring storage for a vector.

use core::alloc::LayoutError;
use core::fmt;

/// The reason a storage block could not be obtained
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The global allocator refused the request
    AllocError,
    /// Adding the requested slots to the current length overflowed `usize`
    CapacityLimit,
    /// The block size in bytes exceeds `isize::MAX`
    LayoutError(LayoutError),
}

impl StorageError {
    /// A short message naming the failure
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllocError => "Allocator refused storage request",
            Self::CapacityLimit => "Vector length overflow",
            Self::LayoutError(_) => "Storage size overflow",
        }
    }

    /// Panic with this error's message.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self.as_str());
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LayoutError> for StorageError {
    fn from(err: LayoutError) -> Self {
        Self::LayoutError(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}

/// Returned by `try_push_back` and `try_insert` when no slot could be
/// obtained. The value is handed back unchanged.
#[derive(Clone)]
pub struct InsertionError<T> {
    error: StorageError,
    value: T,
}

impl<T> InsertionError<T> {
    pub(crate) fn new(error: StorageError, value: T) -> Self {
        Self { error, value }
    }

    /// The storage failure behind this error
    pub fn error(&self) -> &StorageError {
        &self.error
    }

    /// Recover the value that was not inserted
    pub fn into_value(self) -> T {
        self.value
    }

    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("Insertion failed: {}", self.error.as_str());
    }
}

impl<T> fmt::Debug for InsertionError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertionError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertionError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Insertion failed: {}", self.error)
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for InsertionError<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_error_returns_value() {
        let err = InsertionError::new(StorageError::CapacityLimit, 7u32);
        assert_eq!(err.error(), &StorageError::CapacityLimit);
        assert_eq!(format!("{}", err), "Insertion failed: Vector length overflow");
        assert_eq!(err.into_value(), 7);
    }
}
