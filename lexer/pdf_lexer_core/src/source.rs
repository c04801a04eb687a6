//! Seekable byte sources.
//!
//! The scanner needs only two operations from the resource it tokenizes:
//! reposition to an absolute offset, and read a bounded number of bytes.
//! Every `Read + Seek` type qualifies, so files, buffered readers, and
//! `std::io::Cursor` over an in-memory buffer all work unchanged.
//!
//! # Concurrency
//!
//! A source has one read cursor. Two token streams over the same document
//! each need their own handle: a separate `File`, or a separate
//! `Cursor<&[u8]>` over the same immutable bytes.

use std::io::{self, ErrorKind, Read, Seek, SeekFrom};

/// A seekable, readable byte-addressable resource.
pub trait ByteSource {
    /// Move the read cursor to `offset` bytes from the start.
    fn seek_to(&mut self, offset: u64) -> io::Result<()>;

    /// Fill `buf` from the read cursor.
    ///
    /// Returns the number of bytes read. A count below `buf.len()` means the
    /// end of the resource was reached; it is never a transient short read.
    fn read_up_to(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<T: Read + Seek + ?Sized> ByteSource for T {
    fn seek_to(&mut self, offset: u64) -> io::Result<()> {
        self.seek(SeekFrom::Start(offset)).map(|_| ())
    }

    fn read_up_to(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
