//! Block-at-a-time reads over a [`ByteSource`].
//!
//! Every scanner reads through a `ChunkedReader`: one seek followed by one
//! bounded read per block. Scans that need more than one block keep calling
//! [`next_block`](ChunkedReader::next_block), which continues where the
//! previous read ended, so no scan ever needs the whole resource in memory.

use tracing::trace;

use crate::error::{ScanError, ScanResult};
use crate::source::ByteSource;

/// Sequential, bounded block reads from arbitrary offsets.
///
/// Holds the source exclusively for its lifetime. The reader remembers where
/// the source cursor was left and skips the seek when the next request starts
/// exactly there.
pub struct ChunkedReader<'s, S: ?Sized> {
    source: &'s mut S,
    block_size: usize,
    /// Absolute offset of the source cursor, if known.
    position: Option<u64>,
}

impl<'s, S: ByteSource + ?Sized> ChunkedReader<'s, S> {
    /// Create a reader. The first read always seeks.
    pub fn new(source: &'s mut S, block_size: usize) -> Self {
        Self {
            source,
            block_size,
            position: None,
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Offset the next [`next_block`](Self::next_block) call reads from.
    pub fn position(&self) -> Option<u64> {
        self.position
    }

    /// Read up to `max_len` bytes starting at `offset`.
    ///
    /// Returns fewer than `max_len` bytes only at end-of-resource.
    pub fn read_block(&mut self, offset: u64, max_len: usize) -> ScanResult<Vec<u8>> {
        if self.position != Some(offset) {
            self.position = None;
            self.source
                .seek_to(offset)
                .map_err(|source| ScanError::Seek { offset, source })?;
        }
        let mut buf = vec![0; max_len];
        let n = self
            .source
            .read_up_to(&mut buf)
            .map_err(|source| ScanError::Read { offset, source })?;
        buf.truncate(n);
        self.position = Some(offset + widen(n));
        trace!(offset, requested = max_len, read = n, "block read");
        Ok(buf)
    }

    /// Read one block at `offset`.
    pub fn block_at(&mut self, offset: u64) -> ScanResult<Vec<u8>> {
        self.read_block(offset, self.block_size)
    }

    /// Read the block that follows the previous read.
    ///
    /// Before any read has happened this reads from offset 0.
    pub fn next_block(&mut self) -> ScanResult<Vec<u8>> {
        self.block_at(self.position.unwrap_or(0))
    }
}

/// Widen a buffer length to an absolute offset delta.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "usize is at most 64 bits on every supported target"
)]
pub(crate) fn widen(n: usize) -> u64 {
    n as u64
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
