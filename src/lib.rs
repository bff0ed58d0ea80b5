#![doc = include_str!("doc/lib.md")]
#![forbid(unsafe_code)]

pub mod bytes;
pub mod error;
mod long_bits;
pub mod varint;

pub use long_bits::{LongBits, MAX_VARINT_LEN};

// so that documentation gets test
#[cfg(any(test, doctest))]
mod docs;
