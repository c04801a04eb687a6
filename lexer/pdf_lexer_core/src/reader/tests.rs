use super::*;
use pretty_assertions::assert_eq;
use std::io::{self, Cursor, Read, Seek, SeekFrom};

/// Cursor wrapper that counts seeks.
struct CountingSeeks {
    inner: Cursor<Vec<u8>>,
    seeks: usize,
}

impl Read for CountingSeeks {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for CountingSeeks {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.seeks += 1;
        self.inner.seek(pos)
    }
}

fn source(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn read_block_is_bounded() {
    let bytes = source(3000);
    let mut cursor = Cursor::new(&bytes[..]);
    let mut reader = ChunkedReader::new(&mut cursor, 1024);
    let block = reader.block_at(100).unwrap();
    assert_eq!(block.len(), 1024);
    assert_eq!(&block[..], &bytes[100..1124]);
    assert_eq!(reader.position(), Some(1124));
}

#[test]
fn sequential_blocks_concatenate_to_source() {
    let bytes = source(2500);
    let mut cursor = Cursor::new(&bytes[..]);
    let mut reader = ChunkedReader::new(&mut cursor, 1024);
    let mut all = reader.block_at(0).unwrap();
    loop {
        let block = reader.next_block().unwrap();
        if block.is_empty() {
            break;
        }
        all.extend_from_slice(&block);
    }
    assert_eq!(all, bytes);
}

#[test]
fn short_block_at_end_of_resource() {
    let bytes = source(10);
    let mut cursor = Cursor::new(&bytes[..]);
    let mut reader = ChunkedReader::new(&mut cursor, 1024);
    assert_eq!(reader.block_at(4).unwrap().len(), 6);
    assert!(reader.next_block().unwrap().is_empty());
    assert!(reader.block_at(50).unwrap().is_empty());
}

#[test]
fn contiguous_reads_skip_seek() {
    let mut counting = CountingSeeks {
        inner: Cursor::new(source(4096)),
        seeks: 0,
    };
    let mut reader = ChunkedReader::new(&mut counting, 1024);
    reader.block_at(0).unwrap();
    reader.next_block().unwrap();
    reader.read_block(2048, 16).unwrap();
    reader.block_at(10).unwrap();
    assert_eq!(counting.seeks, 2);
}

#[test]
fn failing_source_reports_offset() {
    struct Broken;
    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "unreadable"))
        }
    }
    impl Seek for Broken {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            match pos {
                SeekFrom::Start(n) => Ok(n),
                _ => Ok(0),
            }
        }
    }

    let mut broken = Broken;
    let mut reader = ChunkedReader::new(&mut broken, 1024);
    match reader.block_at(77) {
        Err(ScanError::Read { offset, .. }) => assert_eq!(offset, 77),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn widen_is_lossless() {
    assert_eq!(widen(1024), 1024);
    assert_eq!(widen(usize::MAX), usize::MAX as u64);
}
