//! Ring-style buffer of zero-copy `Bytes` segments.

use std::collections::VecDeque;

use bytes::{Buf, Bytes};

use crate::stream::ReadableBuffer;

/// A readable buffer made of [`Bytes`] segments.
///
/// Writers append whole segments; readers move an absolute read cursor
/// across them. Segments before the cursor are kept until
/// [`compact`](SegmentedBuffer::compact) drops them, so the cursor can be
/// reset to any earlier position still held.
///
/// Positions are absolute stream offsets: they keep growing across
/// compactions and never wrap.
///
/// # Example
///
/// ```
/// use adlerrs::{INIT, SegmentedBuffer, stream};
/// use bytes::Bytes;
///
/// let mut buffer = SegmentedBuffer::new();
/// buffer.push(Bytes::from_static(b"hello "));
/// buffer.push(Bytes::from_static(b"world"));
///
/// let before = buffer.read_cursor();
/// let adler = stream::checksum(INIT, &mut buffer, 11);
///
/// assert_eq!(adler, adlerrs::block_checksum(INIT, b"hello world"));
/// assert_eq!(buffer.read_cursor(), before);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SegmentedBuffer {
    segments: VecDeque<Bytes>,
    /// Absolute offset of the first retained segment.
    base: usize,
    /// Absolute offset one past the last written byte.
    write_pos: usize,
    /// Absolute read cursor.
    read_pos: usize,
    /// Index into `segments` of the segment holding `read_pos`.
    seg: usize,
    /// Absolute offset where `segments[seg]` starts.
    seg_start: usize,
}

impl SegmentedBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment. Empty segments are ignored.
    pub fn push(&mut self, segment: impl Into<Bytes>) {
        let segment = segment.into();
        if segment.is_empty() {
            return;
        }
        self.write_pos += segment.len();
        self.segments.push_back(segment);
    }

    /// Returns the number of unread bytes.
    pub fn unread_len(&self) -> usize {
        self.write_pos - self.read_pos
    }

    /// Returns the absolute read cursor.
    pub fn read_cursor(&self) -> usize {
        self.read_pos
    }

    /// Returns the absolute write position.
    pub fn write_cursor(&self) -> usize {
        self.write_pos
    }

    /// Returns the number of retained segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Drops every segment that lies entirely before the read cursor.
    ///
    /// After compaction the cursor can no longer be reset below the start
    /// of the segment that holds it.
    pub fn compact(&mut self) {
        while self.seg > 0 {
            if let Some(front) = self.segments.pop_front() {
                self.base += front.len();
            }
            self.seg -= 1;
        }
        if self.read_pos == self.write_pos {
            self.segments.clear();
            self.base = self.write_pos;
            self.seg_start = self.write_pos;
        }
    }

    /// Drops all data and moves both cursors to the write position.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.base = self.write_pos;
        self.read_pos = self.write_pos;
        self.seg = 0;
        self.seg_start = self.write_pos;
    }

    /// Returns a [`Buf`] over the unread bytes that shares the segments.
    ///
    /// Consuming the returned value does not move this buffer's cursor.
    pub fn reader(&self) -> SegmentedReader {
        let mut segments: VecDeque<Bytes> = self.segments.iter().skip(self.seg).cloned().collect();
        if let Some(front) = segments.front_mut() {
            front.advance(self.read_pos - self.seg_start);
        }
        SegmentedReader {
            segments,
            remaining: self.unread_len(),
        }
    }

    fn seek(&mut self, offset: usize) {
        assert!(
            offset >= self.base && offset <= self.write_pos,
            "read cursor {} outside retained range {}..={}",
            offset,
            self.base,
            self.write_pos
        );

        if offset < self.seg_start {
            self.seg = 0;
            self.seg_start = self.base;
        }
        while let Some(segment) = self.segments.get(self.seg) {
            if offset < self.seg_start + segment.len() {
                break;
            }
            self.seg_start += segment.len();
            self.seg += 1;
        }
        self.read_pos = offset;
    }
}

impl ReadableBuffer for SegmentedBuffer {
    fn unread_len(&self) -> usize {
        SegmentedBuffer::unread_len(self)
    }

    fn next_readable(&self) -> Option<&[u8]> {
        let segment = self.segments.get(self.seg)?;
        Some(&segment[self.read_pos - self.seg_start..])
    }

    fn advance(&mut self, n: usize) {
        assert!(
            n <= self.unread_len(),
            "advance of {} past {} unread bytes",
            n,
            self.unread_len()
        );
        self.seek(self.read_pos + n);
    }

    fn read_cursor(&self) -> usize {
        self.read_pos
    }

    fn reset_read_cursor(&mut self, offset: usize) {
        self.seek(offset);
    }
}

/// A [`Buf`] over a snapshot of a [`SegmentedBuffer`]'s unread bytes.
#[derive(Debug, Clone)]
pub struct SegmentedReader {
    segments: VecDeque<Bytes>,
    remaining: usize,
}

impl Buf for SegmentedReader {
    fn remaining(&self) -> usize {
        self.remaining
    }

    fn chunk(&self) -> &[u8] {
        self.segments.front().map(|s| s.as_ref()).unwrap_or(&[])
    }

    fn advance(&mut self, mut cnt: usize) {
        assert!(cnt <= self.remaining, "advance past end of reader");
        self.remaining -= cnt;
        while cnt > 0 {
            let Some(front) = self.segments.front_mut() else {
                break;
            };
            if cnt < front.len() {
                front.advance(cnt);
                break;
            }
            cnt -= front.len();
            self.segments.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(parts: &[&'static [u8]]) -> SegmentedBuffer {
        let mut buffer = SegmentedBuffer::new();
        for part in parts {
            buffer.push(Bytes::from_static(part));
        }
        buffer
    }

    #[test]
    fn test_push_and_lengths() {
        let buffer = filled(&[b"abc", b"", b"defg"]);
        assert_eq!(buffer.unread_len(), 7);
        assert_eq!(buffer.segment_count(), 2);
        assert_eq!(buffer.write_cursor(), 7);
    }

    #[test]
    fn test_runs_follow_segments() {
        let mut buffer = filled(&[b"abc", b"defg"]);
        assert_eq!(buffer.next_readable(), Some(&b"abc"[..]));

        ReadableBuffer::advance(&mut buffer, 2);
        assert_eq!(buffer.next_readable(), Some(&b"c"[..]));

        ReadableBuffer::advance(&mut buffer, 1);
        assert_eq!(buffer.next_readable(), Some(&b"defg"[..]));

        ReadableBuffer::advance(&mut buffer, 4);
        assert_eq!(buffer.next_readable(), None);
        assert_eq!(buffer.unread_len(), 0);
    }

    #[test]
    fn test_reset_read_cursor() {
        let mut buffer = filled(&[b"abc", b"defg", b"hi"]);
        ReadableBuffer::advance(&mut buffer, 8);
        assert_eq!(buffer.next_readable(), Some(&b"i"[..]));

        buffer.reset_read_cursor(1);
        assert_eq!(buffer.next_readable(), Some(&b"bc"[..]));
        assert_eq!(buffer.unread_len(), 8);
    }

    #[test]
    fn test_compact_keeps_positions_absolute() {
        let mut buffer = filled(&[b"abc", b"defg"]);
        ReadableBuffer::advance(&mut buffer, 4);
        buffer.compact();

        assert_eq!(buffer.segment_count(), 1);
        assert_eq!(buffer.read_cursor(), 4);
        assert_eq!(buffer.next_readable(), Some(&b"efg"[..]));

        buffer.reset_read_cursor(3);
        assert_eq!(buffer.next_readable(), Some(&b"defg"[..]));

        buffer.push(Bytes::from_static(b"xy"));
        assert_eq!(buffer.write_cursor(), 9);
        assert_eq!(buffer.unread_len(), 6);
    }

    #[test]
    fn test_compact_when_drained() {
        let mut buffer = filled(&[b"abc"]);
        ReadableBuffer::advance(&mut buffer, 3);
        buffer.compact();
        assert_eq!(buffer.segment_count(), 0);

        buffer.push(Bytes::from_static(b"next"));
        assert_eq!(buffer.next_readable(), Some(&b"next"[..]));
    }

    #[test]
    #[should_panic(expected = "outside retained range")]
    fn test_reset_before_compacted_data() {
        let mut buffer = filled(&[b"abc", b"defg"]);
        ReadableBuffer::advance(&mut buffer, 4);
        buffer.compact();
        buffer.reset_read_cursor(0);
    }

    #[test]
    fn test_clear() {
        let mut buffer = filled(&[b"abc", b"defg"]);
        buffer.clear();
        assert_eq!(buffer.unread_len(), 0);
        assert_eq!(buffer.read_cursor(), 7);
        assert_eq!(buffer.segment_count(), 0);
    }

    #[test]
    fn test_reader_snapshot() {
        let mut buffer = filled(&[b"abc", b"defg"]);
        ReadableBuffer::advance(&mut buffer, 1);

        let mut reader = buffer.reader();
        assert_eq!(reader.remaining(), 6);
        assert_eq!(reader.chunk(), b"bc");

        let bytes = reader.copy_to_bytes(4);
        assert_eq!(&bytes[..], b"bcde");
        assert_eq!(reader.chunk(), b"fg");

        // The buffer itself did not move.
        assert_eq!(buffer.read_cursor(), 1);
    }
}
