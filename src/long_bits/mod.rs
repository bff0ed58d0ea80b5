//! Contains [`LongBits`], a 64-bit two's complement integer held as two
//! unsigned 32-bit words.
#[cfg(feature = "serde_types")]
use serde_derive::{Deserialize, Serialize};

mod convert;
mod varint;
mod zigzag;

pub use varint::MAX_VARINT_LEN;

/// A 64-bit integer stored as its low and high 32-bit words.
///
/// The words always hold the unsigned bit pattern `(high << 32) | low`,
/// whatever the signedness of the value they represent. Signed or unsigned
/// interpretation is chosen when converting out, e.g. [`LongBits::to_big_int`].
///
/// Every operation returns a new value; none mutates `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_types", derive(Serialize, Deserialize))]
pub struct LongBits {
    low: u32,
    high: u32,
}

impl LongBits {
    /// The value `0`.
    pub const ZERO: Self = Self { low: 0, high: 0 };

    /// Creates a new [`LongBits`] from its two words.
    #[inline]
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// The least significant 32 bits.
    #[inline]
    pub const fn low(&self) -> u32 {
        self.low
    }

    /// The most significant 32 bits.
    #[inline]
    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Whether bit 63, the sign bit of the signed interpretation, is set.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.high >> 31 != 0
    }

    /// Whether both words are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.low == 0 && self.high == 0
    }

    /// The 8 bytes of the value, least significant first.
    pub fn to_le_bytes(&self) -> [u8; 8] {
        let low = self.low.to_le_bytes();
        let high = self.high.to_le_bytes();
        [
            low[0], low[1], low[2], low[3], high[0], high[1], high[2], high[3],
        ]
    }

    /// Creates a [`LongBits`] from 8 bytes, least significant first.
    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self {
            low: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            high: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }
}

impl From<u64> for LongBits {
    #[inline]
    fn from(value: u64) -> Self {
        Self {
            low: value as u32,
            high: (value >> 32) as u32,
        }
    }
}

impl From<i64> for LongBits {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from(value as u64)
    }
}

impl From<LongBits> for u64 {
    #[inline]
    fn from(bits: LongBits) -> Self {
        ((bits.high as u64) << 32) | bits.low as u64
    }
}

impl From<LongBits> for i64 {
    #[inline]
    fn from(bits: LongBits) -> Self {
        u64::from(bits) as i64
    }
}
