//! Checksumming data from [`std::io::Read`] sources.
//!
//! - [`checksum_reader`] - Drains a reader and returns its checksum
//! - [`ChecksumReader`] - Pass-through reader that checksums what it yields
//!
//! # Example
//!
//! ```
//! use adlerrs::{Checksum, ChecksumConfig, checksum_reader};
//! use std::io::Cursor;
//!
//! let checksum = checksum_reader(Cursor::new(b"Wikipedia"), &ChecksumConfig::default())?;
//! assert_eq!(checksum, Checksum::new(0x11E6_0398));
//! # Ok::<(), adlerrs::ChecksumError>(())
//! ```

use std::io::{self, Read};

use tracing::debug;

use crate::buffer::ScratchBuffer;
use crate::checksum::Checksum;
use crate::config::ChecksumConfig;
use crate::error::ChecksumError;
use crate::hasher::Adler32;

/// Reads `reader` to the end and returns the checksum of everything read.
///
/// Reads are issued in `config.read_buffer_size()` pieces into a pooled
/// scratch buffer. Interrupted reads are retried.
///
/// # Errors
///
/// Returns [`ChecksumError::InvalidConfig`] for an invalid `config` and
/// [`ChecksumError::Io`] if a read fails.
pub fn checksum_reader<R: Read>(
    mut reader: R,
    config: &ChecksumConfig,
) -> Result<Checksum, ChecksumError> {
    config.validate()?;

    let mut scratch = ScratchBuffer::take();
    let buf = scratch.window(config.read_buffer_size());
    let mut hasher = Adler32::new();

    loop {
        match reader.read(buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    let checksum = hasher.finalize();
    debug!(len = hasher.len(), checksum = %checksum, "reader checksum");
    Ok(checksum)
}

/// A reader adapter that checksums every byte it passes through.
///
/// Useful in transfer pipelines: wrap the source, copy it wherever it
/// goes, then compare [`checksum`](ChecksumReader::checksum) with the
/// expected value.
///
/// # Example
///
/// ```
/// use adlerrs::{Checksum, ChecksumReader};
/// use std::io::{self, Cursor};
///
/// let mut reader = ChecksumReader::new(Cursor::new(b"Wikipedia"));
/// let mut sink = Vec::new();
/// io::copy(&mut reader, &mut sink)?;
///
/// assert_eq!(sink, b"Wikipedia");
/// assert_eq!(reader.checksum(), Checksum::new(0x11E6_0398));
/// # Ok::<(), io::Error>(())
/// ```
#[derive(Debug)]
pub struct ChecksumReader<R> {
    inner: R,
    hasher: Adler32,
}

impl<R: Read> ChecksumReader<R> {
    /// Wraps a reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            hasher: Adler32::new(),
        }
    }

    /// Wraps a reader, continuing from a checksum of earlier data.
    pub fn resume(inner: R, previous: Checksum) -> Self {
        Self {
            inner,
            hasher: Adler32::from_checksum(previous),
        }
    }

    /// Returns the checksum of all bytes read so far.
    pub fn checksum(&self) -> Checksum {
        self.hasher.finalize()
    }

    /// Returns the number of bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.hasher.len()
    }

    /// Returns a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consumes the adapter, returning the wrapped reader and the checksum.
    pub fn into_parts(self) -> (R, Checksum) {
        let checksum = self.checksum();
        (self.inner, checksum)
    }
}

impl<R: Read> Read for ChecksumReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }
}
