//! Fixed-size block iterator over a reader.

use std::io::{self, Read};

use crate::block::Block;
use crate::config::DigestAlgorithm;

/// An iterator that yields hashed blocks from a reader.
///
/// Each call to `next` fills the scanner's buffer completely (short reads
/// are retried) unless end of stream is reached first, so every block but
/// the last is exactly one block size long. Empty input yields no blocks.
/// After an I/O error the iterator yields `None`.
///
/// Created by [`BlockScanner::blocks`](super::BlockScanner::blocks).
pub struct BlockIter<'a, R> {
    reader: R,
    buffer: &'a mut [u8],
    digest: DigestAlgorithm,
    offset: u64,
    finished: bool,
}

impl<'a, R: Read> BlockIter<'a, R> {
    pub(super) fn new(reader: R, buffer: &'a mut [u8], digest: DigestAlgorithm) -> Self {
        Self {
            reader,
            buffer,
            digest,
            offset: 0,
            finished: false,
        }
    }

    /// Returns the offset of the next block to be produced.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Reads until the buffer is full or the stream ends.
    fn fill(&mut self) -> io::Result<usize> {
        let mut filled = 0;
        while filled < self.buffer.len() {
            match self.reader.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for BlockIter<'_, R> {
    type Item = io::Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let len = match self.fill() {
            Ok(0) => {
                self.finished = true;
                return None;
            }
            Ok(n) => n,
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        };

        // A short block can only be the last one.
        if len < self.buffer.len() {
            self.finished = true;
        }

        let block = Block::new(
            self.offset,
            len as u64,
            self.digest.digest(&self.buffer[..len]),
        );
        self.offset += len as u64;
        Some(Ok(block))
    }
}

impl<R: Read> std::iter::FusedIterator for BlockIter<'_, R> {}
