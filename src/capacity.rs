//! Growth policies applied when a vector runs out of capacity.

use core::fmt::Debug;

/// Growth behavior for collections which have exceeded their available storage
pub trait Grow: Debug {
    /// Calculate the next capacity to request from the allocator, given the
    /// current capacity and the minimum number of slots required
    fn next_capacity(prev: usize, minimum: usize) -> usize;
}

/// Growth behavior which never requests extra capacity
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowExact;

impl Grow for GrowExact {
    #[inline]
    fn next_capacity(_prev: usize, minimum: usize) -> usize {
        minimum
    }
}

/// Growth behavior which consistently doubles in size, starting from a
/// single slot
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowDoubling;

impl Grow for GrowDoubling {
    #[inline]
    fn next_capacity(prev: usize, minimum: usize) -> usize {
        let preferred = if prev == 0 {
            1
        } else {
            prev.saturating_mul(2)
        };
        preferred.max(minimum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_sequence() {
        let mut cap = 0;
        let mut seen = [0usize; 6];
        let mut grown = 0;
        for len in 0..32 {
            if len == cap {
                cap = GrowDoubling::next_capacity(cap, len + 1);
                seen[grown] = cap;
                grown += 1;
            }
        }
        assert_eq!(seen, [1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn doubling_respects_minimum() {
        assert_eq!(GrowDoubling::next_capacity(4, 11), 11);
        assert_eq!(GrowDoubling::next_capacity(usize::MAX / 2 + 1, 3), usize::MAX);
    }

    #[test]
    fn exact_growth() {
        assert_eq!(GrowExact::next_capacity(8, 9), 9);
        assert_eq!(GrowExact::next_capacity(0, 1), 1);
    }
}
