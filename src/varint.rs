//! Variable-length encoding of native 64-bit integers.
//!
//! Thin wrappers over [`LongBits`] for callers that hold `u64`/`i64` values,
//! e.g. a protocol buffer field encoder. Signed values are zigzag encoded so
//! that small negative values stay short.
use crate::bytes::{ByteSink, ByteSource};
use crate::error::Result;
use crate::LongBits;

/// Returns the zigzag encoding of `n`.
#[inline]
pub fn zigzag_encode(n: i64) -> u64 {
    LongBits::from(n).zz_encode().into()
}

/// Returns the value whose zigzag encoding is `z`.
#[inline]
pub fn zigzag_decode(z: u64) -> i64 {
    LongBits::from(z).zz_decode().into()
}

/// The number of bytes of the encoding of `value`.
#[inline]
pub fn encoding_length(value: u64) -> usize {
    LongBits::from(value).encoded_len()
}

/// Writes `value` to `sink` at `offset`, returning the number of bytes written.
/// # Error
/// Errors iff `sink` is too small; see [`LongBits::to_bytes`].
#[inline]
pub fn encode<S: ByteSink + ?Sized>(value: u64, sink: &mut S, offset: usize) -> Result<usize> {
    LongBits::from(value).to_bytes(sink, offset)
}

/// Reads a value from `source` at `offset`.
/// # Error
/// Errors iff the encoding is truncated or longer than 10 bytes; see
/// [`LongBits::from_bytes`].
#[inline]
pub fn decode<S: ByteSource + ?Sized>(source: &S, offset: usize) -> Result<u64> {
    LongBits::from_bytes(source, offset).map(u64::from)
}

/// Writes the zigzag encoding of `value` to `sink` at `offset`.
#[inline]
pub fn encode_signed<S: ByteSink + ?Sized>(
    value: i64,
    sink: &mut S,
    offset: usize,
) -> Result<usize> {
    LongBits::from(value).zz_encode().to_bytes(sink, offset)
}

/// Reads a zigzag encoded value from `source` at `offset`.
#[inline]
pub fn decode_signed<S: ByteSource + ?Sized>(source: &S, offset: usize) -> Result<i64> {
    LongBits::from_bytes(source, offset).map(|bits| bits.zz_decode().into())
}
