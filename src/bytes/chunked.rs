use std::iter::FromIterator;

use super::{ByteSink, ByteSource};

/// A list of bytes stored as a sequence of non-contiguous chunks.
///
/// Positions are logical: index `0` is the first byte of the first chunk and
/// `len() - 1` the last byte of the last chunk, regardless of how the bytes
/// are split. Empty chunks are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkedBytes {
    chunks: Vec<Vec<u8>>,
    // logical position of the first byte of each chunk
    offsets: Vec<usize>,
    length: usize,
}

impl ChunkedBytes {
    /// Initializes an empty [`ChunkedBytes`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `chunk` to the end of the list.
    pub fn push<C: Into<Vec<u8>>>(&mut self, chunk: C) {
        let chunk = chunk.into();
        if chunk.is_empty() {
            return;
        }
        self.offsets.push(self.length);
        self.length += chunk.len();
        self.chunks.push(chunk);
    }

    /// The total number of bytes over all chunks.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the list holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The chunks of this list, in order.
    #[inline]
    pub fn chunks(&self) -> &[Vec<u8>] {
        &self.chunks
    }

    /// Returns the chunk holding logical position `index` and the position
    /// within that chunk.
    fn locate(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.length {
            return None;
        }
        let chunk = self.offsets.partition_point(|start| *start <= index) - 1;
        Some((chunk, index - self.offsets[chunk]))
    }

    /// Returns an iterator over all bytes, in logical order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.chunks.iter().flat_map(|chunk| chunk.iter().copied())
    }

    /// Copies all bytes into a single contiguous [`Vec`].
    pub fn to_vec(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.length);
        self.chunks
            .iter()
            .for_each(|chunk| bytes.extend_from_slice(chunk));
        bytes
    }

    /// Returns a new [`ChunkedBytes`] with the `length` bytes starting at
    /// `offset`, preserving chunk boundaries.
    /// # Panics
    /// Panics iff `offset + length > self.len()`.
    pub fn sliced(&self, offset: usize, length: usize) -> Self {
        assert!(
            offset + length <= self.length,
            "the offset of the new list cannot exceed the existing length"
        );
        let end = offset + length;
        self.chunks
            .iter()
            .zip(self.offsets.iter())
            .filter_map(|(chunk, start)| {
                let chunk_end = start + chunk.len();
                if chunk_end <= offset || *start >= end {
                    return None;
                }
                let from = offset.saturating_sub(*start);
                let to = chunk.len() - chunk_end.saturating_sub(end);
                Some(chunk[from..to].to_vec())
            })
            .collect()
    }
}

impl ByteSource for ChunkedBytes {
    #[inline]
    fn len(&self) -> usize {
        self.length
    }

    #[inline]
    fn get(&self, index: usize) -> Option<u8> {
        self.locate(index)
            .map(|(chunk, position)| self.chunks[chunk][position])
    }
}

impl ByteSink for ChunkedBytes {
    fn set(&mut self, index: usize, byte: u8) {
        let (chunk, position) = self.locate(index).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.length, index
            )
        });
        self.chunks[chunk][position] = byte;
    }
}

impl From<Vec<Vec<u8>>> for ChunkedBytes {
    fn from(chunks: Vec<Vec<u8>>) -> Self {
        chunks.into_iter().collect()
    }
}

impl From<Vec<u8>> for ChunkedBytes {
    fn from(chunk: Vec<u8>) -> Self {
        let mut list = Self::new();
        list.push(chunk);
        list
    }
}

impl FromIterator<Vec<u8>> for ChunkedBytes {
    fn from_iter<I: IntoIterator<Item = Vec<u8>>>(iter: I) -> Self {
        let mut list = Self::new();
        iter.into_iter().for_each(|chunk| list.push(chunk));
        list
    }
}
