//! The Block type - one fixed-size slice of a file.

use std::fmt;

use super::BlockHash;

/// A hashed block of a file.
///
/// `offset` is the position of the block's first byte in the file and `len`
/// the number of bytes actually read, so only the last block of a file can
/// be shorter than the configured block size. Blocks produced by the scanner
/// are never empty.
///
/// # Example
///
/// ```
/// use blockdump::{Block, DigestAlgorithm};
///
/// let block = Block::new(4096, 1808, DigestAlgorithm::Md5.digest(b"tail"));
/// assert_eq!(block.end(), 5904);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Byte offset of the block within its file.
    pub offset: u64,

    /// Number of bytes in the block.
    pub len: u64,

    /// Digest of the block content.
    pub hash: BlockHash,
}

impl Block {
    /// Creates a new block.
    pub fn new(offset: u64, len: u64, hash: BlockHash) -> Self {
        Self { offset, len, hash }
    }

    /// Returns the start offset.
    pub fn start(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.len
    }

    /// Returns the block as a range.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.start()..self.end()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({} bytes @ {}, hash={})", self.len, self.offset, self.hash)
    }
}
