//! Checksum value type and the shared accumulation core.
//!
//! - [`Checksum`] - Packed `(sum2 << 16) | sum1` Adler-32 value
//! - [`BASE`], [`NMAX`], [`INIT`] - Algorithm constants

mod accumulator;
mod value;

pub(crate) use accumulator::Accumulator;
pub use value::Checksum;

/// Modulus for both component sums (largest prime below 65536).
pub const BASE: u32 = 65521;

/// Largest `n` such that `255n(n+1)/2 + (n+1)(BASE-1) <= 2^32-1`.
///
/// This many bytes can be summed between modular reductions without a
/// 32-bit accumulator overflowing. It is a multiple of 16.
pub const NMAX: usize = 5552;

/// Adler-32 of the empty sequence; the seed for a fresh computation.
pub const INIT: u32 = 1;

/// Splits a packed checksum into `(sum1, sum2)`.
#[inline]
pub(crate) const fn split(adler: u32) -> (u32, u32) {
    (adler & 0xffff, (adler >> 16) & 0xffff)
}

/// Packs reduced component sums into a checksum.
#[inline]
pub(crate) const fn pack(sum1: u32, sum2: u32) -> u32 {
    sum1 | (sum2 << 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nmax_bound() {
        let n = NMAX as u64;
        let base = BASE as u64;
        let bound = |n: u64| 255 * n * (n + 1) / 2 + (n + 1) * (base - 1);

        assert!(bound(n) <= u32::MAX as u64);
        assert!(bound(n + 1) > u32::MAX as u64);
        assert_eq!(NMAX % 16, 0);
    }

    #[test]
    fn test_split_pack() {
        assert_eq!(split(0x11E6_0398), (0x0398, 0x11E6));
        assert_eq!(pack(0x0398, 0x11E6), 0x11E6_0398);
        assert_eq!(split(INIT), (1, 0));
    }
}
