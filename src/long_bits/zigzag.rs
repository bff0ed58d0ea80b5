use super::LongBits;

impl LongBits {
    /// Zigzag encodes the signed interpretation of `self`: `n >= 0` maps to
    /// `2n` and `n < 0` to `-2n - 1`, so that values of small magnitude become
    /// small unsigned values.
    #[inline]
    pub fn zz_encode(&self) -> Self {
        // all ones iff negative
        let mask = ((self.high as i32) >> 31) as u32;
        Self {
            high: ((self.high << 1) | (self.low >> 31)) ^ mask,
            low: (self.low << 1) ^ mask,
        }
    }

    /// The inverse of [`LongBits::zz_encode`].
    #[inline]
    pub fn zz_decode(&self) -> Self {
        let mask = (self.low & 1).wrapping_neg();
        Self {
            low: ((self.low >> 1) | (self.high << 31)) ^ mask,
            high: (self.high >> 1) ^ mask,
        }
    }
}
