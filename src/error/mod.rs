//! Error types for adlerrs.

use std::fmt;

/// Errors that can occur while computing checksums.
///
/// The slice and combine operations are infallible. Errors only come from
/// I/O sources, invalid configuration, or the fallible buffer checksum
/// ([`crate::stream::try_checksum`]).
#[derive(Debug)]
pub enum ChecksumError {
    /// An I/O error occurred while reading input data.
    Io(std::io::Error),

    /// More bytes were requested than the buffer holds unread.
    InsufficientData {
        /// The number of bytes requested.
        requested: usize,
        /// The number of unread bytes in the buffer.
        available: usize,
    },

    /// The buffer reported unread bytes but yielded no readable run.
    NoReadableRun {
        /// Bytes still left to checksum when the buffer ran dry.
        remaining: usize,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumError::Io(e) => write!(f, "io error: {}", e),
            ChecksumError::InsufficientData {
                requested,
                available,
            } => {
                write!(
                    f,
                    "insufficient data: requested {} bytes, {} unread",
                    requested, available
                )
            }
            ChecksumError::NoReadableRun { remaining } => {
                write!(f, "no readable run with {} bytes remaining", remaining)
            }
            ChecksumError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for ChecksumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChecksumError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChecksumError {
    fn from(e: std::io::Error) -> Self {
        ChecksumError::Io(e)
    }
}
