/// Create a [`Vector`](crate::vec::Vector) containing the arguments.
///
/// ```
/// use advec::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let z = vector![0u8; 4];
/// assert_eq!(z, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! vector {
    () => (
        $crate::vec::Vector::<_>::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vec::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::vec::Vector::<_>::from([$($x),+])
    );
}
