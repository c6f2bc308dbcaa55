//! Merging checksums of adjacent byte ranges.
//!
//! Given `adler(A)`, `adler(B)` and `len(B)`, [`combine`] returns
//! `adler(A ‖ B)` without reading either range. Checksums of independently
//! processed chunks can be folded left to right into a whole-object checksum.
//!
//! # Example
//!
//! ```
//! use adlerrs::{INIT, block, combine};
//!
//! let a = block::checksum(INIT, b"Wiki");
//! let b = block::checksum(INIT, b"pedia");
//!
//! assert_eq!(combine::combine(a, b, 5), block::checksum(INIT, b"Wikipedia"));
//! ```

use crate::checksum::{BASE, pack, split};

/// Returns the checksum of `A ‖ B`.
///
/// `adler_a` is the checksum of A (however it was seeded), `adler_b` is the
/// checksum of B seeded with [`crate::INIT`], and `len_b` is B's exact
/// length. Both inputs must be reduced, as every checksum this crate
/// produces is.
pub fn combine(adler_a: u32, adler_b: u32, len_b: u64) -> u32 {
    let (s1_a, s2_a) = split(adler_a);
    let (s1_b, s2_b) = split(adler_b);
    let rem = (len_b % u64::from(BASE)) as u32;

    // sum1 < 3 * BASE before reduction, sum2 < 4 * BASE.
    let mut sum1 = s1_a + s1_b + BASE - 1;
    let mut sum2 = ((u64::from(rem) * u64::from(s1_a)) % u64::from(BASE)) as u32;
    sum2 += s2_a + s2_b + BASE - rem;

    if sum1 >= BASE {
        sum1 -= BASE;
    }
    if sum1 >= BASE {
        sum1 -= BASE;
    }
    if sum2 >= BASE << 1 {
        sum2 -= BASE << 1;
    }
    if sum2 >= BASE {
        sum2 -= BASE;
    }

    pack(sum1, sum2)
}

/// Folds `(checksum, len)` pairs of consecutive ranges into one checksum.
///
/// Each checksum must be seeded with [`crate::INIT`]. An empty iterator
/// yields [`crate::INIT`].
pub fn combine_all<I>(parts: I) -> u32
where
    I: IntoIterator<Item = (u32, u64)>,
{
    parts
        .into_iter()
        .fold(crate::INIT, |acc, (adler, len)| combine(acc, adler, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block;
    use crate::checksum::{INIT, NMAX};

    fn data(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 131 + 7) as u8).collect()
    }

    #[test]
    fn test_combine_wikipedia() {
        let a = block::checksum(INIT, b"Wiki");
        let b = block::checksum(INIT, b"pedia");
        assert_eq!(combine(a, b, 5), 0x11E6_0398);
    }

    #[test]
    fn test_combine_with_empty() {
        let a = block::checksum(INIT, b"hello");
        assert_eq!(combine(a, INIT, 0), a);
        assert_eq!(combine(INIT, a, 5), a);
        assert_eq!(combine(INIT, INIT, 0), INIT);
    }

    #[test]
    fn test_combine_every_split() {
        let data = data(NMAX + 40);
        let whole = block::checksum(INIT, &data);
        for split in [0, 1, 15, 16, 17, 100, NMAX - 1, NMAX, NMAX + 1, data.len()] {
            let (head, tail) = data.split_at(split);
            let a = block::checksum(INIT, head);
            let b = block::checksum(INIT, tail);
            assert_eq!(combine(a, b, tail.len() as u64), whole, "split={split}");
        }
    }

    #[test]
    fn test_combine_reduction_edges() {
        // Drive every field to the extremes the reductions have to absorb.
        let fields = [0, 1, 2, BASE / 2, BASE - 2, BASE - 1];
        let lens = [0u64, 1, 2, u64::from(BASE) - 1, u64::from(BASE), u64::from(BASE) + 1];
        for &s1_a in &fields {
            for &s2_a in &fields {
                for &s1_b in &fields {
                    for &s2_b in &fields {
                        for &len in &lens {
                            let got = combine(pack(s1_a, s2_a), pack(s1_b, s2_b), len);
                            let (s1, s2) = split(got);
                            assert!(s1 < BASE && s2 < BASE);
                            assert_eq!(got, reference(pack(s1_a, s2_a), pack(s1_b, s2_b), len));
                        }
                    }
                }
            }
        }
    }

    /// Direct modular form of the combine identity.
    fn reference(a: u32, b: u32, len_b: u64) -> u32 {
        let base = u64::from(BASE);
        let (s1_a, s2_a) = split(a);
        let (s1_b, s2_b) = split(b);
        let (s1_a, s2_a, s1_b, s2_b) = (
            u64::from(s1_a),
            u64::from(s2_a),
            u64::from(s1_b),
            u64::from(s2_b),
        );
        let n = len_b % base;
        let sum1 = (s1_a + s1_b + base - 1) % base;
        let sum2 = (s2_a + s2_b + n * s1_a + base - n) % base;
        pack(sum1 as u32, sum2 as u32)
    }

    #[test]
    fn test_combine_large_length() {
        // Length only matters modulo BASE.
        let a = block::checksum(INIT, b"prefix");
        let b = block::checksum(INIT, &[0u8; 0]);
        let len = u64::from(BASE) * 1_000_000;
        assert_eq!(combine(a, b, len), combine(a, b, 0));
    }

    #[test]
    fn test_combine_all() {
        let data = data(3 * NMAX + 5);
        let parts = data
            .chunks(1000)
            .map(|c| (block::checksum(INIT, c), c.len() as u64));
        assert_eq!(combine_all(parts), block::checksum(INIT, &data));
        assert_eq!(combine_all(std::iter::empty()), INIT);
    }
}
