#![no_main]

use libfuzzer_sys::fuzz_target;
use bytes::Bytes;
use adlerrs::{INIT, SegmentedBuffer, block_checksum, stream_checksum};

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (sizes, data) = input;

    // Split data into segments whose lengths come from the fuzzer
    let mut buffer = SegmentedBuffer::new();
    let mut rest = &data[..];
    for &size in sizes.iter().chain(std::iter::once(&u8::MAX)).cycle() {
        if rest.is_empty() {
            break;
        }
        let take = (size as usize + 1).min(rest.len());
        buffer.push(Bytes::copy_from_slice(&rest[..take]));
        rest = &rest[take..];
    }

    // Verify: prefixes match the flat checksum
    for len in [0, 1, data.len() / 2, data.len()] {
        let len = len.min(data.len());
        let before = buffer.read_cursor();
        assert_eq!(
            stream_checksum(INIT, &mut buffer, len),
            block_checksum(INIT, &data[..len])
        );

        // Verify: the read cursor did not move
        assert_eq!(buffer.read_cursor(), before);
    }
});
