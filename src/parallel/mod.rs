//! Parallel checksumming of large slices.
//!
//! The slice is cut into pieces of `config.segment_size()` rounded up to a
//! multiple of [`NMAX`](crate::NMAX). Each piece is checksummed on the rayon
//! pool from the identity seed, and the results are folded left to right
//! with [`crate::combine::combine_all`].
//!
//! This module requires the `parallel` feature to be enabled.

use rayon::prelude::*;
use tracing::debug;

use crate::block;
use crate::checksum::{Checksum, INIT};
use crate::combine::combine_all;
use crate::config::ChecksumConfig;
use crate::error::ChecksumError;

/// Computes the checksum of `data` across the rayon thread pool.
///
/// Returns the same value as [`Checksum::of`]. Inputs no larger than one
/// segment are checksummed on the calling thread.
///
/// # Errors
///
/// Returns [`ChecksumError::InvalidConfig`] for an invalid `config`.
///
/// # Example
///
/// ```
/// use adlerrs::{Checksum, ChecksumConfig, checksum_parallel};
///
/// let data = vec![0xA5u8; 3 * 1024 * 1024 + 17];
/// let checksum = checksum_parallel(&data, &ChecksumConfig::default())?;
///
/// assert_eq!(checksum, Checksum::of(&data));
/// # Ok::<(), adlerrs::ChecksumError>(())
/// ```
pub fn checksum_parallel(data: &[u8], config: &ChecksumConfig) -> Result<Checksum, ChecksumError> {
    config.validate()?;

    let segment_size = config.block_aligned_segment_size();
    if data.len() <= segment_size {
        return Ok(Checksum::of(data));
    }

    let parts: Vec<(u32, u64)> = data
        .par_chunks(segment_size)
        .map(|segment| (block::checksum(INIT, segment), segment.len() as u64))
        .collect();

    debug!(
        len = data.len(),
        segments = parts.len(),
        segment_size,
        "parallel checksum"
    );

    Ok(Checksum::new(combine_all(parts)))
}
