//! Async reader checksum future.
//!
//! # Example
//!
//! ```ignore
//! use adlerrs::{checksum_async, ChecksumConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), adlerrs::ChecksumError> {
//!     let checksum = checksum_async(reader, ChecksumConfig::default()).await?;
//!     println!("adler32 {}", checksum);
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::FusedFuture;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;
use tracing::debug;

use crate::checksum::Checksum;
use crate::config::ChecksumConfig;
use crate::error::ChecksumError;
use crate::hasher::Adler32;

pin_project! {
    /// A future that reads an async reader to the end and resolves to its
    /// checksum.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// Works with tokio, async-std, smol, or any futures-compatible runtime.
    pub struct ChecksumFuture<R> {
        #[pin]
        reader: R,
        hasher: Adler32,
        buffer: Vec<u8>,
        error: Option<ChecksumError>,
        finished: bool,
    }
}

impl<R> ChecksumFuture<R> {
    /// Creates a new checksum future from an async reader.
    ///
    /// An invalid `config` is reported when the future is first polled.
    pub fn new(reader: R, config: ChecksumConfig) -> Self {
        let error = config.validate().err();
        let buffer = if error.is_none() {
            vec![0u8; config.read_buffer_size()]
        } else {
            Vec::new()
        };
        Self {
            reader,
            hasher: Adler32::new(),
            buffer,
            error,
            finished: false,
        }
    }

    /// Returns the number of bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.hasher.len()
    }
}

impl<R: AsyncRead> Future for ChecksumFuture<R> {
    type Output = Result<Checksum, ChecksumError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        assert!(!*this.finished, "ChecksumFuture polled after completion");

        if let Some(e) = this.error.take() {
            *this.finished = true;
            return Poll::Ready(Err(e));
        }

        loop {
            match this.reader.as_mut().poll_read(cx, this.buffer) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Err(ChecksumError::Io(e)));
                }
                Poll::Ready(Ok(0)) => {
                    *this.finished = true;
                    let checksum = this.hasher.finalize();
                    debug!(len = this.hasher.len(), checksum = %checksum, "async reader checksum");
                    return Poll::Ready(Ok(checksum));
                }
                Poll::Ready(Ok(n)) => this.hasher.update(&this.buffer[..n]),
            }
        }
    }
}

impl<R: AsyncRead> FusedFuture for ChecksumFuture<R> {
    fn is_terminated(&self) -> bool {
        self.finished
    }
}

/// Creates a future that checksums everything an async reader yields.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use adlerrs::{checksum_async, ChecksumConfig};
///
/// let tokio_reader = tokio::fs::File::open("file").await?;
/// let checksum = checksum_async(tokio_reader.compat(), ChecksumConfig::default()).await?;
/// ```
///
/// # Arguments
///
/// * `reader` - An async reader implementing `AsyncRead`
/// * `config` - Read buffer sizing
pub fn checksum_async<R: AsyncRead>(reader: R, config: ChecksumConfig) -> ChecksumFuture<R> {
    ChecksumFuture::new(reader, config)
}
