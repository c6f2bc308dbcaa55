//! adlerrs
//!
//! Adler-32 checksums for Rust.
//!
//! `adlerrs` computes the zlib Adler-32 checksum: a 32-bit integrity digest
//! made of two sums modulo 65521. It is designed as a small, composable
//! primitive for:
//!
//! - transfer validation
//! - zlib stream trailers
//! - rsync-style weak block checksums
//! - incremental checksums of data that arrives in pieces
//!
//! Three operations make up the core:
//!
//! - [`block_checksum`] - checksum a contiguous slice
//! - [`stream_checksum`] - checksum the unread bytes of a segmented buffer
//!   without copying them or moving its read cursor
//! - [`combine()`] - join the checksums of two adjacent ranges in O(1)
//!
//! The crate intentionally:
//! - does NOT offer collision resistance (Adler-32 is not a MAC)
//! - does NOT own a ring buffer design (any [`ReadableBuffer`] works)
//! - does NOT spawn threads unless asked to ([`checksum_parallel`])
//!
//! # Slices
//!
//! ```
//! use adlerrs::{INIT, block_checksum, combine};
//!
//! let whole = block_checksum(INIT, b"Wikipedia");
//! assert_eq!(whole, 0x11E6_0398);
//!
//! // Checksum the halves separately and join them.
//! let head = block_checksum(INIT, b"Wiki");
//! let tail = block_checksum(INIT, b"pedia");
//! assert_eq!(combine(head, tail, 5), whole);
//! ```
//!
//! # Segmented buffers
//!
//! ```
//! use adlerrs::{INIT, SegmentedBuffer, block_checksum, stream_checksum};
//! use bytes::Bytes;
//!
//! let mut buffer = SegmentedBuffer::new();
//! buffer.push(Bytes::from_static(b"Wiki"));
//! buffer.push(Bytes::from_static(b"pedia"));
//!
//! assert_eq!(
//!     stream_checksum(INIT, &mut buffer, 9),
//!     block_checksum(INIT, b"Wikipedia"),
//! );
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use adlerrs::{checksum_async, ChecksumConfig};
//! use tokio_util::compat::TokioAsyncReadCompatExt;
//!
//! async fn demo(file: tokio::fs::File) -> Result<(), adlerrs::ChecksumError> {
//!     let checksum = checksum_async(file.compat(), ChecksumConfig::default()).await?;
//!     println!("adler32 {}", checksum);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod block;
pub mod combine;
pub mod stream;

mod buffer;
mod checksum;
mod config;
mod error;
mod hasher;
mod reader;

#[cfg(feature = "parallel")]
mod parallel;

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use buffer::{SegmentedBuffer, SegmentedReader};
pub use checksum::{BASE, Checksum, INIT, NMAX};
pub use combine::{combine, combine_all};
pub use config::{ChecksumConfig, DEFAULT_READ_BUFFER_SIZE, DEFAULT_SEGMENT_SIZE};
pub use error::ChecksumError;
pub use hasher::Adler32;
pub use reader::{ChecksumReader, checksum_reader};
pub use stream::ReadableBuffer;

#[cfg(feature = "parallel")]
pub use parallel::checksum_parallel;

#[cfg(feature = "async-io")]
pub use async_stream::{ChecksumFuture, checksum_async};

/// Computes the Adler-32 of `data`, continuing from `previous`.
///
/// Pass [`INIT`] as `previous` for a fresh checksum. See [`block::checksum`].
pub fn block_checksum(previous: u32, data: &[u8]) -> u32 {
    block::checksum(previous, data)
}

/// Computes the Adler-32 of the next `len` unread bytes of `buffer`,
/// leaving its read cursor where it was. See [`stream::checksum`].
///
/// # Panics
///
/// Panics if `buffer` holds fewer than `len` unread bytes.
pub fn stream_checksum<B: ReadableBuffer + ?Sized>(previous: u32, buffer: &mut B, len: usize) -> u32 {
    stream::checksum(previous, buffer, len)
}
