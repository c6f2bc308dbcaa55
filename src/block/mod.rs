//! Adler-32 over a contiguous byte span.
//!
//! [`checksum`] picks one of three paths by input length:
//!
//! - 1 byte: add and conditionally subtract [`BASE`], no division
//! - fewer than 16 bytes: sum everything, then reduce by subtraction
//! - otherwise: [`NMAX`]-byte blocks with one modulo per block
//!
//! All paths return the same value as summing byte by byte with a modulo
//! after every step.
//!
//! # Example
//!
//! ```
//! use adlerrs::{INIT, block};
//!
//! assert_eq!(block::checksum(INIT, b"Wikipedia"), 0x11E6_0398);
//! assert_eq!(block::checksum(INIT, b""), INIT);
//! ```
//!
//! [`BASE`]: crate::BASE
//! [`NMAX`]: crate::NMAX

use crate::checksum::{Accumulator, BASE, INIT, pack, split};

/// Inputs shorter than this skip block reduction.
const SHORT_LEN: usize = 16;

/// Computes the Adler-32 of `data`, continuing from `previous`.
///
/// Use [`INIT`] as `previous` for a fresh checksum. An empty slice returns
/// `previous` with both fields reduced.
///
/// Fields of `previous` at or above [`BASE`] are reduced before any byte is
/// added, so every path agrees for any 32-bit seed.
pub fn checksum(previous: u32, data: &[u8]) -> u32 {
    if let [byte] = data {
        return single_byte(previous, *byte);
    }
    if data.len() < SHORT_LEN {
        return short(previous, data);
    }
    checksum_general(previous, data)
}

/// Like [`checksum`], but an absent span yields the identity checksum.
///
/// `None` returns [`INIT`] whatever `previous` is. This is the "no buffer"
/// query zlib-style callers use to obtain the initial value.
pub fn checksum_opt(previous: u32, data: Option<&[u8]>) -> u32 {
    match data {
        Some(data) => checksum(previous, data),
        None => INIT,
    }
}

/// Computes the checksum through the blocked path only, for any length.
///
/// [`checksum`] gives the same result; this entry point exists so the short
/// paths can be checked against it.
pub fn checksum_general(previous: u32, data: &[u8]) -> u32 {
    let mut acc = Accumulator::new(previous);
    acc.update(data);
    acc.finish()
}

fn single_byte(previous: u32, byte: u8) -> u32 {
    let (mut sum1, mut sum2) = split(previous);

    // 16-bit fields exceed BASE by at most 14
    if sum1 >= BASE {
        sum1 -= BASE;
    }
    if sum2 >= BASE {
        sum2 -= BASE;
    }

    sum1 += u32::from(byte);
    if sum1 >= BASE {
        sum1 -= BASE;
    }
    sum2 += sum1;
    if sum2 >= BASE {
        sum2 -= BASE;
    }

    pack(sum1, sum2)
}

fn short(previous: u32, data: &[u8]) -> u32 {
    let (sum1, sum2) = split(previous);
    let mut sum1 = u64::from(sum1);
    let mut sum2 = u64::from(sum2);

    for &byte in data {
        sum1 += u64::from(byte);
        sum2 += sum1;
    }

    if sum1 >= u64::from(BASE) {
        sum1 -= u64::from(BASE);
    }
    pack(sum1 as u32, reduce_short(sum2) as u32)
}

/// Reduces `value` modulo [`BASE`] by descending power-of-two multiples.
///
/// Exact for every `value < BASE << 5`. The short path stays below that:
/// at most 15 additions of a `sum1` under `2 * BASE` on top of a 16-bit seed.
fn reduce_short(mut value: u64) -> u64 {
    let base = u64::from(BASE);
    for shift in (0..=4).rev() {
        if value >= base << shift {
            value -= base << shift;
        }
    }
    value
}
