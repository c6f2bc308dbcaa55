//! Running Adler-32 state shared by every front-end.

use super::{BASE, NMAX, pack, split};

/// Bytes summed per unrolled group.
const GROUP: usize = 16;

/// Wide running sums with deferred modular reduction.
///
/// Reductions happen after every [`NMAX`] bytes and once in [`finish`].
/// The count of bytes since the last reduction survives across `update`
/// calls, so feeding discontiguous runs reduces at the same byte offsets
/// as feeding one flat slice.
///
/// [`finish`]: Accumulator::finish
#[derive(Debug, Clone, Copy)]
pub(crate) struct Accumulator {
    sum1: u64,
    sum2: u64,
    pending: usize,
}

impl Accumulator {
    /// Creates an accumulator seeded with a previous checksum.
    pub(crate) fn new(previous: u32) -> Self {
        let (sum1, sum2) = split(previous);
        Self {
            sum1: u64::from(sum1),
            sum2: u64::from(sum2),
            pending: 0,
        }
    }

    /// Feeds bytes, in order, into the running sums.
    pub(crate) fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (NMAX - self.pending).min(data.len());
            let (block, rest) = data.split_at(take);

            self.absorb(block);
            self.pending += take;
            if self.pending == NMAX {
                self.reduce();
            }

            data = rest;
        }
    }

    /// Reduces and packs the sums.
    pub(crate) fn finish(mut self) -> u32 {
        self.reduce();
        pack(self.sum1 as u32, self.sum2 as u32)
    }

    /// Returns the checksum so far without consuming the state.
    pub(crate) fn value(&self) -> u32 {
        (*self).finish()
    }

    fn absorb(&mut self, block: &[u8]) {
        let mut sum1 = self.sum1;
        let mut sum2 = self.sum2;

        let mut groups = block.chunks_exact(GROUP);
        for group in &mut groups {
            for &byte in group {
                sum1 += u64::from(byte);
                sum2 += sum1;
            }
        }
        for &byte in groups.remainder() {
            sum1 += u64::from(byte);
            sum2 += sum1;
        }

        self.sum1 = sum1;
        self.sum2 = sum2;
    }

    fn reduce(&mut self) {
        self.sum1 %= u64::from(BASE);
        self.sum2 %= u64::from(BASE);
        self.pending = 0;
    }
}
