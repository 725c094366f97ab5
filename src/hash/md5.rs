//! MD5 block hashing.

use crate::block::BlockHash;

/// Hashes one block with MD5.
pub(crate) fn md5_digest(data: &[u8]) -> BlockHash {
    BlockHash::Md5(::md5::compute(data).0)
}
