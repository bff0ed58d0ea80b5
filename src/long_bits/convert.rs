use num::bigint::Sign;
use num::{BigInt, Integer, One};

use super::LongBits;

/// `2^32`, the weight of the high word.
const WORD: f64 = 4_294_967_296.0;

/// `2^64`
fn modulus() -> BigInt {
    BigInt::one() << 64usize
}

impl LongBits {
    /// Creates a [`LongBits`] from an arbitrary-precision integer.
    ///
    /// The value is reduced modulo `2^64` with two's complement rules: negative
    /// values wrap to `2^64 + value` and larger magnitudes are truncated to
    /// their 64 least significant bits, as fixed width integers do.
    pub fn from_big_int(value: &BigInt) -> Self {
        let (_, words) = value.mod_floor(&modulus()).to_u32_digits();
        Self {
            low: words.first().copied().unwrap_or(0),
            high: words.get(1).copied().unwrap_or(0),
        }
    }

    /// Returns `(high << 32) | low` as an arbitrary-precision integer.
    ///
    /// When `unsigned` is false, bit 63 is the sign bit and values at or
    /// above `2^63` are returned as `value - 2^64`.
    pub fn to_big_int(&self, unsigned: bool) -> BigInt {
        let value = BigInt::from_slice(Sign::Plus, &[self.low, self.high]);
        if !unsigned && self.is_negative() {
            value - modulus()
        } else {
            value
        }
    }

    /// Creates a [`LongBits`] from an integer-valued `f64`.
    ///
    /// Only values within `-(2^53 - 1)..=2^53 - 1` are represented exactly;
    /// use [`LongBits::from_big_int`] or `From<i64>` for full 64-bit values.
    /// The fraction is discarded and `NaN`/infinities map to zero.
    pub fn from_number(value: f64) -> Self {
        if value == 0.0 || !value.is_finite() {
            return Self::ZERO;
        }
        let negative = value < 0.0;
        let magnitude = value.abs().trunc();
        let low = magnitude % WORD;
        let high = ((magnitude - low) / WORD) % WORD;
        let bits = Self {
            low: low as u32,
            high: high as u32,
        };
        if negative {
            bits.wrapping_neg()
        } else {
            bits
        }
    }

    /// Returns the value as an `f64`.
    ///
    /// When `unsigned` is false, bit 63 is the sign bit. Values whose magnitude
    /// exceeds `2^53` lose precision.
    pub fn to_number(&self, unsigned: bool) -> f64 {
        if !unsigned && self.is_negative() {
            let magnitude = self.wrapping_neg();
            -(magnitude.low as f64 + magnitude.high as f64 * WORD)
        } else {
            self.low as f64 + self.high as f64 * WORD
        }
    }

    /// Two's complement negation: the complement of both words plus one,
    /// carrying from the low word into the high word.
    pub fn wrapping_neg(&self) -> Self {
        let low = (!self.low).wrapping_add(1);
        let high = if low == 0 {
            (!self.high).wrapping_add(1)
        } else {
            !self.high
        };
        Self { low, high }
    }
}

impl From<&BigInt> for LongBits {
    #[inline]
    fn from(value: &BigInt) -> Self {
        Self::from_big_int(value)
    }
}

impl From<BigInt> for LongBits {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self::from_big_int(&value)
    }
}

impl From<LongBits> for BigInt {
    /// The signed interpretation, see [`LongBits::to_big_int`].
    #[inline]
    fn from(bits: LongBits) -> Self {
        bits.to_big_int(false)
    }
}
