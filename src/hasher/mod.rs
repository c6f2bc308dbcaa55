//! Incremental Adler-32 state.
//!
//! - [`Adler32`] - `update`/`finalize`/`reset` hasher, also a [`std::hash::Hasher`]

use std::hash::Hasher;

use bytes::Buf;

use crate::checksum::{Accumulator, Checksum, INIT};

/// An incremental Adler-32 calculator.
///
/// Feeding data through any sequence of `update` calls gives the same
/// result as one [`crate::block::checksum`] over the concatenation.
///
/// # Example
///
/// ```
/// use adlerrs::{Adler32, Checksum};
///
/// let mut hasher = Adler32::new();
/// hasher.update(b"Wiki");
/// hasher.update(b"pedia");
///
/// assert_eq!(hasher.finalize(), Checksum::new(0x11E6_0398));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Adler32 {
    state: Accumulator,
    len: u64,
}

impl Adler32 {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self::from_checksum(Checksum::INIT)
    }

    /// Creates a hasher that resumes from a previously computed checksum.
    ///
    /// The byte count starts at zero, so [`len`](Adler32::len) only covers
    /// data fed after this call.
    pub fn from_checksum(checksum: Checksum) -> Self {
        Self {
            state: Accumulator::new(checksum.value()),
            len: 0,
        }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
        self.len += data.len() as u64;
    }

    /// Updates the hasher with every remaining byte of a [`Buf`].
    ///
    /// Chained and segmented buffers are walked chunk by chunk without
    /// copying.
    pub fn update_buf<B: Buf>(&mut self, mut buf: B) {
        while buf.has_remaining() {
            let chunk = buf.chunk();
            let n = chunk.len();
            self.update(chunk);
            buf.advance(n);
        }
    }

    /// Appends a range checksummed elsewhere, as if its bytes had been fed.
    ///
    /// `other` must be the checksum of `other_len` bytes seeded with
    /// [`Checksum::INIT`].
    pub fn combine(&mut self, other: Checksum, other_len: u64) {
        let joined = self.finalize().combine(other, other_len);
        self.state = Accumulator::new(joined.value());
        self.len += other_len;
    }

    /// Returns the checksum of everything fed so far.
    pub fn finalize(&self) -> Checksum {
        Checksum::new(self.state.value())
    }

    /// Returns the number of bytes fed since creation or the last reset.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns true if no bytes have been fed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resets the hasher to its initial state.
    pub fn reset(&mut self) {
        self.state = Accumulator::new(INIT);
        self.len = 0;
    }

    /// Convenience method to checksum data in one shot.
    pub fn hash(data: &[u8]) -> Checksum {
        Checksum::of(data)
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Adler32 {
    fn finish(&self) -> u64 {
        u64::from(self.finalize().value())
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}
