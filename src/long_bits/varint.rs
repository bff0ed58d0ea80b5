use std::io::{Read, Write};

use crate::bytes::{ByteSink, ByteSource};
use crate::error::{Error, Result};

use super::LongBits;

/// The maximum number of bytes of the variable-length encoding of a 64-bit value.
pub const MAX_VARINT_LEN: usize = 10;

const CONTINUATION: u8 = 0x80;
const GROUP: u32 = 0x7F;

impl LongBits {
    /// The number of bytes [`LongBits::to_bytes`] writes for this value, between 1 and
    /// [`MAX_VARINT_LEN`].
    pub fn encoded_len(&self) -> usize {
        let part0 = self.low;
        let part1 = (self.low >> 28) | (self.high << 4);
        let part2 = self.high >> 24;
        if part2 != 0 {
            if part2 < 1 << 7 {
                9
            } else {
                10
            }
        } else if part1 != 0 {
            group_len(part1) + 4
        } else {
            group_len(part0)
        }
    }

    /// Writes the variable-length encoding of this value into `sink`, starting at
    /// `offset`, and returns the number of bytes written.
    ///
    /// Each byte carries 7 bits of the value, least significant group first, with
    /// the most significant bit set on every byte but the last. Nothing beyond the
    /// last byte is touched.
    /// # Error
    /// Errors with [`Error::OutOfRange`] iff `sink` has fewer than
    /// [`LongBits::encoded_len`] bytes after `offset`, in which case `sink` is
    /// left unchanged.
    pub fn to_bytes<S: ByteSink + ?Sized>(&self, sink: &mut S, offset: usize) -> Result<usize> {
        let required = self.encoded_len();
        let available = sink.len().saturating_sub(offset);
        if available < required {
            tracing::debug!(offset, required, available, "varint sink too small");
            return Err(Error::oor(format!(
                "encoding requires {} bytes but the sink has {} bytes after offset {}",
                required, available, offset
            )));
        }

        let mut low = self.low;
        let mut high = self.high;
        let mut position = offset;
        while high != 0 {
            sink.set(position, (low & GROUP) as u8 | CONTINUATION);
            position += 1;
            low = (low >> 7) | (high << 25);
            high >>= 7;
        }
        while low > GROUP {
            sink.set(position, (low & GROUP) as u8 | CONTINUATION);
            position += 1;
            low >>= 7;
        }
        sink.set(position, low as u8);
        position += 1;
        debug_assert_eq!(position - offset, required);
        Ok(position - offset)
    }

    /// Reads a variable-length encoding from `source`, starting at `offset`.
    ///
    /// Reading stops at the first byte without continuation bit; any byte after
    /// it is ignored.
    /// # Error
    /// Errors with [`Error::OutOfRange`] iff `source` ends while the last byte read
    /// still had its continuation bit set, and with [`Error::Overflow`] iff
    /// [`MAX_VARINT_LEN`] bytes were read without reaching the end of the encoding.
    pub fn from_bytes<S: ByteSource + ?Sized>(source: &S, offset: usize) -> Result<Self> {
        Self::read_bytes(source, offset).map(|(bits, _)| bits)
    }

    /// Like [`LongBits::from_bytes`], also returning the number of bytes the
    /// encoding occupies.
    pub fn read_bytes<S: ByteSource + ?Sized>(source: &S, offset: usize) -> Result<(Self, usize)> {
        let mut bits = Self::ZERO;
        for group in 0..MAX_VARINT_LEN {
            let position = offset + group;
            let byte = source.get(position).ok_or_else(|| {
                tracing::debug!(offset, position, "varint truncated");
                Error::oor(format!(
                    "varint starting at {} is truncated: no byte at position {}",
                    offset, position
                ))
            })?;
            bits = bits.with_group(group, byte);
            if byte & CONTINUATION == 0 {
                return Ok((bits, group + 1));
            }
        }
        tracing::debug!(offset, "varint longer than {} bytes", MAX_VARINT_LEN);
        Err(Error::Overflow)
    }

    /// Returns the variable-length encoding of this value.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut buffer = [0u8; MAX_VARINT_LEN];
        let mut position = 0;
        let mut value = *self;
        loop {
            let (rest, byte, last) = value.split_group();
            buffer[position] = byte;
            position += 1;
            if last {
                break;
            }
            value = rest;
        }
        buffer[..position].to_vec()
    }

    /// Writes the variable-length encoding of this value to `writer`, returning the
    /// number of bytes written.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<usize> {
        let bytes = self.to_vec();
        writer.write_all(&bytes)?;
        Ok(bytes.len())
    }

    /// Reads a variable-length encoding from `reader`, one byte at a time.
    ///
    /// Bytes after the encoding are not consumed.
    /// # Error
    /// Errors with [`Error::OutOfRange`] if `reader` reaches its end inside the
    /// encoding, [`Error::Overflow`] as [`LongBits::from_bytes`] does, and
    /// [`Error::Io`] on any other read error.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut bits = Self::ZERO;
        let mut byte = [0u8; 1];
        for group in 0..MAX_VARINT_LEN {
            reader.read_exact(&mut byte).map_err(|error| {
                if error.kind() == std::io::ErrorKind::UnexpectedEof {
                    tracing::debug!(read = group, "varint truncated");
                    Error::oor(format!("reader ended after {} bytes of a varint", group))
                } else {
                    Error::from(error)
                }
            })?;
            bits = bits.with_group(group, byte[0]);
            if byte[0] & CONTINUATION == 0 {
                return Ok(bits);
            }
        }
        tracing::debug!("varint longer than {} bytes", MAX_VARINT_LEN);
        Err(Error::Overflow)
    }

    /// Adds the 7 data bits of `byte` as the `group`th group of the value.
    #[inline]
    fn with_group(self, group: usize, byte: u8) -> Self {
        let bits = byte as u32 & GROUP;
        let Self { mut low, mut high } = self;
        match group {
            0..=3 => low |= bits << (group * 7),
            // straddles both words: 4 bits into `low`, 3 into `high`
            4 => {
                low |= bits << 28;
                high |= bits >> 4;
            }
            // bits of the 10th group above bit 63 are dropped
            _ => high |= bits << (group * 7 - 32),
        }
        Self { low, high }
    }

    /// Splits off the least significant group: the remaining value, the byte to
    /// emit and whether it is the last one.
    #[inline]
    fn split_group(&self) -> (Self, u8, bool) {
        let rest = Self {
            low: (self.low >> 7) | (self.high << 25),
            high: self.high >> 7,
        };
        let group = (self.low & GROUP) as u8;
        if rest.is_zero() {
            (rest, group, true)
        } else {
            (rest, group | CONTINUATION, false)
        }
    }
}

/// Number of 7-bit groups needed for the 28 bits of `part`.
#[inline]
fn group_len(part: u32) -> usize {
    if part < 1 << 14 {
        if part < 1 << 7 {
            1
        } else {
            2
        }
    } else if part < 1 << 21 {
        3
    } else {
        4
    }
}
