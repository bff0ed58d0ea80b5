//! Positional byte access used by the variable-length codec.
//!
//! The codec reads and writes one logical byte at a time through
//! [`ByteSource`] and [`ByteSink`], so that a single contiguous allocation
//! (`[u8]`, `[u8; N]`, `Vec<u8>`) and a concatenation of non-contiguous chunks
//! ([`ChunkedBytes`], `VecDeque<u8>`) are handled identically.
use std::collections::VecDeque;

mod chunked;
pub use chunked::ChunkedBytes;

/// Something bytes can be read from by position.
pub trait ByteSource {
    /// The number of addressable bytes.
    fn len(&self) -> usize;

    /// Whether there are no addressable bytes.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte at `index`, or `None` if `index >= self.len()`.
    fn get(&self, index: usize) -> Option<u8>;
}

/// Something bytes can be written to by position.
///
/// The length of a sink is fixed: writing never grows it.
pub trait ByteSink: ByteSource {
    /// Sets the byte at `index`.
    /// # Panics
    /// Panics iff `index >= self.len()`.
    fn set(&mut self, index: usize, byte: u8);
}

impl ByteSource for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<u8> {
        <[u8]>::get(self, index).copied()
    }
}

impl ByteSink for [u8] {
    #[inline]
    fn set(&mut self, index: usize, byte: u8) {
        self[index] = byte;
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<u8> {
        <[u8]>::get(&self[..], index).copied()
    }
}

impl<const N: usize> ByteSink for [u8; N] {
    #[inline]
    fn set(&mut self, index: usize, byte: u8) {
        self[index] = byte;
    }
}

impl ByteSource for Vec<u8> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<u8> {
        self.as_slice().get(index).copied()
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn set(&mut self, index: usize, byte: u8) {
        self.as_mut_slice()[index] = byte;
    }
}

impl ByteSource for VecDeque<u8> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<u8> {
        VecDeque::get(self, index).copied()
    }
}

impl ByteSink for VecDeque<u8> {
    #[inline]
    fn set(&mut self, index: usize, byte: u8) {
        self[index] = byte;
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<u8> {
        (**self).get(index)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<u8> {
        (**self).get(index)
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn set(&mut self, index: usize, byte: u8) {
        (**self).set(index, byte)
    }
}
