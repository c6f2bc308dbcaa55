//! Buffers feeding the checksum.
//!
//! - [`SegmentedBuffer`] - Ring-style buffer of `Bytes` segments with a
//!   resettable read cursor; implements [`crate::ReadableBuffer`]
//! - `ScratchBuffer` - Thread-local read buffer reuse (internal)

mod pool;
mod segmented;

pub(crate) use pool::ScratchBuffer;
pub use segmented::{SegmentedBuffer, SegmentedReader};
