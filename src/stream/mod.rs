//! Adler-32 over bytes held in a segmented readable buffer.
//!
//! - [`ReadableBuffer`] - The read-cursor interface a buffer must expose
//! - [`checksum`] - Non-destructive checksum of the next `len` unread bytes
//! - [`try_checksum`] - Same, reporting precondition failures as errors
//!
//! The buffer's contents are never copied into a flat array. Each contiguous
//! run is fed straight into the accumulator, and the read cursor is put back
//! where it was before returning.
//!
//! # Example
//!
//! ```
//! use adlerrs::{INIT, SegmentedBuffer, block, stream};
//! use bytes::Bytes;
//!
//! let mut buffer = SegmentedBuffer::new();
//! buffer.push(Bytes::from_static(b"Wiki"));
//! buffer.push(Bytes::from_static(b"pedia"));
//!
//! let adler = stream::checksum(INIT, &mut buffer, 9);
//! assert_eq!(adler, block::checksum(INIT, b"Wikipedia"));
//!
//! // Still unread
//! assert_eq!(buffer.unread_len(), 9);
//! ```

use tracing::trace;

use crate::checksum::{Accumulator, Checksum};
use crate::error::ChecksumError;

/// A buffer whose unread bytes can be visited as contiguous runs.
///
/// This is the only view of a buffer the stream checksum needs. The buffer
/// keeps its own write side and segment layout; checksumming only moves the
/// read cursor and restores it.
pub trait ReadableBuffer {
    /// Returns the number of unread bytes.
    fn unread_len(&self) -> usize;

    /// Returns the contiguous run starting at the read cursor.
    ///
    /// Returns `None` when no run can be produced. An empty slice is treated
    /// the same way.
    fn next_readable(&self) -> Option<&[u8]>;

    /// Moves the read cursor forward by `n` bytes.
    fn advance(&mut self, n: usize);

    /// Returns the absolute read cursor position.
    fn read_cursor(&self) -> usize;

    /// Moves the read cursor back to a position previously returned by
    /// [`read_cursor`](ReadableBuffer::read_cursor).
    fn reset_read_cursor(&mut self, offset: usize);
}

impl<B: ReadableBuffer + ?Sized> ReadableBuffer for &mut B {
    fn unread_len(&self) -> usize {
        (**self).unread_len()
    }

    fn next_readable(&self) -> Option<&[u8]> {
        (**self).next_readable()
    }

    fn advance(&mut self, n: usize) {
        (**self).advance(n)
    }

    fn read_cursor(&self) -> usize {
        (**self).read_cursor()
    }

    fn reset_read_cursor(&mut self, offset: usize) {
        (**self).reset_read_cursor(offset)
    }
}

/// Computes the Adler-32 of the next `len` unread bytes, continuing from
/// `previous`.
///
/// Returns the same value as [`crate::block::checksum`] over those bytes laid
/// out flat. The read cursor is unchanged afterwards.
///
/// # Panics
///
/// Panics if the buffer holds fewer than `len` unread bytes, or stops
/// yielding runs before `len` bytes were visited. Both mean the caller's
/// bookkeeping is wrong; use [`try_checksum`] to get an error instead.
pub fn checksum<B: ReadableBuffer + ?Sized>(previous: u32, buffer: &mut B, len: usize) -> u32 {
    match try_checksum(previous, buffer, len) {
        Ok(adler) => adler,
        Err(e) => panic!("buffer checksum precondition violated: {}", e),
    }
}

/// Fallible form of [`checksum`].
///
/// # Errors
///
/// - [`ChecksumError::InsufficientData`] if fewer than `len` bytes are unread
/// - [`ChecksumError::NoReadableRun`] if the buffer runs dry early
///
/// The read cursor is restored on both error paths.
pub fn try_checksum<B: ReadableBuffer + ?Sized>(
    previous: u32,
    buffer: &mut B,
    len: usize,
) -> Result<u32, ChecksumError> {
    let available = buffer.unread_len();
    if available < len {
        return Err(ChecksumError::InsufficientData {
            requested: len,
            available,
        });
    }

    let start = buffer.read_cursor();
    let result = accumulate(previous, buffer, len);
    buffer.reset_read_cursor(start);

    if let Ok(adler) = result {
        trace!(len, start, adler = %Checksum::new(adler), "buffer checksum");
    }
    result
}

fn accumulate<B: ReadableBuffer + ?Sized>(
    previous: u32,
    buffer: &mut B,
    len: usize,
) -> Result<u32, ChecksumError> {
    let mut acc = Accumulator::new(previous);
    let mut remaining = len;

    while remaining > 0 {
        let consumed = match buffer.next_readable() {
            Some(run) if !run.is_empty() => {
                let take = run.len().min(remaining);
                acc.update(&run[..take]);
                take
            }
            _ => return Err(ChecksumError::NoReadableRun { remaining }),
        };

        buffer.advance(consumed);
        remaining -= consumed;
    }

    Ok(acc.finish())
}
