#![no_main]

use libfuzzer_sys::fuzz_target;
use adlerrs::{Adler32, BASE, INIT, block, block_checksum, combine};

fuzz_target!(|input: (u16, Vec<u8>)| {
    let (split, data) = input;
    let split = split as usize % (data.len() + 1);
    let whole = block_checksum(INIT, &data);

    // Verify: fields are reduced
    assert!(whole & 0xffff < BASE);
    assert!(whole >> 16 < BASE);

    // Verify: combining any split gives the whole
    let (a, b) = data.split_at(split);
    let joined = combine(block_checksum(INIT, a), block_checksum(INIT, b), b.len() as u64);
    assert_eq!(joined, whole);

    // Verify: resuming from the head gives the whole
    assert_eq!(block_checksum(block_checksum(INIT, a), b), whole);

    // Verify: the short paths agree with the blocked path
    assert_eq!(block::checksum_general(INIT, &data), whole);

    // Verify: incremental hasher agrees
    let mut hasher = Adler32::new();
    hasher.update(a);
    hasher.update(b);
    assert_eq!(hasher.finalize().value(), whole);
});
