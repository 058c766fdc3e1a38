use core::mem::{size_of, MaybeUninit};
use core::slice;

use zeroize::Zeroize;

use super::RawMemory;

impl<T> RawMemory<T> {
    /// Overwrite every byte of every slot with zero.
    ///
    /// Any values still living in the slots are clobbered without being
    /// dropped, so this should only be applied to vacant slots.
    pub fn zeroize_slots(&mut self) {
        let bytes = self.capacity() * size_of::<T>();
        if bytes > 0 {
            let mem: &mut [MaybeUninit<u8>] =
                unsafe { slice::from_raw_parts_mut(self.as_mut_ptr().cast(), bytes) };
            mem.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroize_all_slots() {
        let mut buf = RawMemory::<u32>::allocate(4);
        for slot in buf.as_uninit_slice_mut() {
            slot.write(0xdead_beef);
        }
        buf.zeroize_slots();
        let data = unsafe { slice::from_raw_parts(buf.as_ptr(), buf.capacity()) };
        assert_eq!(data, &[0, 0, 0, 0]);
    }
}
