//! Block digest implementations.
//!
//! The digest primitives themselves come from the `md5` and `blake3` crates;
//! this module only adapts them to [`BlockHash`].
//!
//! - [`md5_digest`] - MD5, the default report digest
//! - [`blake3_digest`] - BLAKE3 (requires `hash-blake3` feature)

mod md5;

#[cfg(feature = "hash-blake3")]
mod blake3;

#[cfg(feature = "hash-blake3")]
pub(crate) use self::blake3::blake3_digest;
pub(crate) use self::md5::md5_digest;

use crate::block::BlockHash;
use crate::config::DigestAlgorithm;

impl DigestAlgorithm {
    /// Hashes `data` with this algorithm.
    ///
    /// Deterministic: identical input always yields an identical hash.
    pub fn digest(&self, data: &[u8]) -> BlockHash {
        match self {
            DigestAlgorithm::Md5 => md5_digest(data),
            #[cfg(feature = "hash-blake3")]
            DigestAlgorithm::Blake3 => blake3_digest(data),
        }
    }
}
