//! Configuration for the reader and parallel front-ends.
//!
//! The core checksum functions take no configuration. [`ChecksumConfig`]
//! only tunes how input is read and split:
//!
//! - segment size - bytes per independently checksummed piece when a slice
//!   is split across threads
//! - read buffer size - bytes requested per read from an I/O source
//!
//! # Example
//!
//! ```
//! use adlerrs::ChecksumConfig;
//!
//! // Custom sizes
//! let config = ChecksumConfig::new(256 * 1024, 16 * 1024)?;
//!
//! // Builder pattern
//! let config = ChecksumConfig::default().with_read_buffer_size(8192);
//!
//! # Ok::<(), adlerrs::ChecksumError>(())
//! ```

use crate::checksum::NMAX;
use crate::error::ChecksumError;

/// Default bytes per parallel segment (1 MiB).
pub const DEFAULT_SEGMENT_SIZE: usize = 1024 * 1024;

/// Default bytes per read from an I/O source (64 KiB).
pub const DEFAULT_READ_BUFFER_SIZE: usize = 64 * 1024;

/// Configuration for reading and splitting checksum input.
///
/// # Size Constraints
///
/// - `segment_size` must be non-zero. The parallel front-end rounds it up
///   to a whole number of [`NMAX`] blocks.
/// - `read_buffer_size` must be non-zero.
///
/// # Example
///
/// ```
/// use adlerrs::ChecksumConfig;
///
/// let config = ChecksumConfig::default();
/// assert_eq!(config.segment_size(), 1024 * 1024);
///
/// assert!(ChecksumConfig::new(0, 4096).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChecksumConfig {
    /// Bytes per independently checksummed segment.
    segment_size: usize,

    /// Bytes requested per read call.
    read_buffer_size: usize,
}

impl ChecksumConfig {
    /// Creates a new configuration.
    ///
    /// # Arguments
    ///
    /// * `segment_size` - Bytes per parallel segment
    /// * `read_buffer_size` - Bytes per read from an I/O source
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::InvalidConfig`] if either size is zero.
    pub fn new(segment_size: usize, read_buffer_size: usize) -> Result<Self, ChecksumError> {
        let config = Self {
            segment_size,
            read_buffer_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the size constraints.
    ///
    /// Builders do not validate, so call this after chaining `with_*`.
    pub fn validate(&self) -> Result<(), ChecksumError> {
        if self.segment_size == 0 {
            return Err(ChecksumError::InvalidConfig {
                message: "segment_size must be non-zero",
            });
        }

        if self.read_buffer_size == 0 {
            return Err(ChecksumError::InvalidConfig {
                message: "read_buffer_size must be non-zero",
            });
        }

        Ok(())
    }

    /// Sets the segment size.
    pub fn with_segment_size(mut self, size: usize) -> Self {
        self.segment_size = size;
        self
    }

    /// Sets the read buffer size.
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }

    /// Returns the segment size.
    pub fn segment_size(&self) -> usize {
        self.segment_size
    }

    /// Returns the read buffer size.
    pub fn read_buffer_size(&self) -> usize {
        self.read_buffer_size
    }

    /// Returns the segment size rounded up to a multiple of [`NMAX`].
    ///
    /// Segments of this size reduce at the same offsets a single pass would.
    /// Sizes too large to round are returned unchanged.
    pub fn block_aligned_segment_size(&self) -> usize {
        self.segment_size
            .checked_next_multiple_of(NMAX)
            .unwrap_or(self.segment_size)
    }
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            segment_size: DEFAULT_SEGMENT_SIZE,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}
