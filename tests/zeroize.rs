#![cfg(feature = "zeroize")]

use core::slice;

use zeroize::Zeroize;

use advec::{RawMemory, Vector};

#[test]
fn vec_zeroize_clears() {
    let mut v = Vector::<u32>::from([1, 2, 3]);
    let cap = v.capacity();
    v.zeroize();
    assert!(v.is_empty());
    assert_eq!(v.capacity(), cap);
    let spare = unsafe { slice::from_raw_parts(v.as_ptr(), cap) };
    assert_eq!(spare, &[0, 0, 0]);
}

#[test]
fn vec_zeroize_spare_slots() {
    let mut v = Vector::<u64>::from([7, 8]);
    v.pop_back();
    v.zeroize();
    let spare = unsafe { slice::from_raw_parts(v.as_ptr(), 2) };
    assert_eq!(spare, &[0, 0]);
}

#[test]
fn raw_zeroize_empty() {
    let mut buf = RawMemory::<u8>::new();
    buf.zeroize_slots();
    assert!(buf.is_empty());
}
