//! The packed Adler-32 checksum value.

use std::fmt;

use super::{BASE, INIT, pack, split};

/// An Adler-32 checksum.
///
/// This is a thin wrapper around the packed `u32` layout
/// `(sum2 << 16) | sum1`. The free functions in [`crate::block`],
/// [`crate::stream`] and [`crate::combine`] work on the raw `u32`; this type
/// adds accessors and formatting on top.
///
/// # Example
///
/// ```
/// use adlerrs::Checksum;
///
/// let head = Checksum::of(b"Wiki");
/// let tail = Checksum::of(b"pedia");
///
/// assert_eq!(head.combine(tail, 5), Checksum::of(b"Wikipedia"));
/// assert_eq!(Checksum::of(b"Wikipedia").to_hex(), "11e60398");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checksum(u32);

impl Checksum {
    /// The size of the checksum in bytes.
    pub const SIZE: usize = 4;

    /// The checksum of the empty sequence.
    pub const INIT: Checksum = Checksum(INIT);

    /// Creates a checksum from its packed value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates a checksum from its component sums.
    pub const fn from_parts(sum1: u16, sum2: u16) -> Self {
        Self(pack(sum1 as u32, sum2 as u32))
    }

    /// Computes the checksum of `data` from the identity seed.
    pub fn of(data: &[u8]) -> Self {
        Self(crate::block::checksum(INIT, data))
    }

    /// Extends this checksum with more data.
    pub fn update(self, data: &[u8]) -> Self {
        Self(crate::block::checksum(self.0, data))
    }

    /// Returns the checksum of the concatenation `self ‖ other`, where
    /// `other` was computed fresh over `other_len` bytes.
    pub fn combine(self, other: Checksum, other_len: u64) -> Self {
        Self(crate::combine::combine(self.0, other.0, other_len))
    }

    /// Returns the packed value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the low field: byte sum plus one.
    pub const fn sum1(self) -> u16 {
        split(self.0).0 as u16
    }

    /// Returns the high field: sum of the running `sum1` values.
    pub const fn sum2(self) -> u16 {
        split(self.0).1 as u16
    }

    /// Returns true if both fields lie in `[0, BASE)`.
    ///
    /// Every checksum produced by this crate is reduced. Values parsed from
    /// untrusted input may not be.
    pub const fn is_reduced(self) -> bool {
        (self.sum1() as u32) < BASE && (self.sum2() as u32) < BASE
    }

    /// Returns the big-endian encoding, as stored in a zlib stream trailer.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Creates a checksum from its big-endian encoding.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Creates a checksum from a big-endian slice.
    ///
    /// Returns `None` if the slice is not exactly 4 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 4] = slice.try_into().ok()?;
        Some(Self::from_be_bytes(bytes))
    }

    /// Returns the checksum as an 8-digit lowercase hex string.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut result = String::with_capacity(2 * Self::SIZE);
        for byte in self.to_be_bytes() {
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0xf) as usize] as char);
        }
        result
    }

    /// Creates a checksum from a hex string.
    ///
    /// Returns `None` if the string is not valid hex or not exactly 8 characters.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() != 2 * Self::SIZE || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex_str, 16).ok().map(Self)
    }
}

impl Default for Checksum {
    fn default() -> Self {
        Self::INIT
    }
}

impl From<u32> for Checksum {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Checksum> for u32 {
    fn from(checksum: Checksum) -> Self {
        checksum.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl fmt::LowerHex for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
