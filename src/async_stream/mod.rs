//! Async checksumming support.
//!
//! This module checksums data from any `futures-io::AsyncRead`, which keeps
//! it runtime-agnostic and compatible with tokio, async-std, smol, and other
//! async runtimes.
//!
//! - [`checksum_async`] - Creates a future resolving to a reader's checksum
//!
//! This module requires the `async-io` feature to be enabled.

mod future;

pub use future::{ChecksumFuture, checksum_async};
