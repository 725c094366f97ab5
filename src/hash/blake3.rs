//! BLAKE3 block hashing.

use crate::block::BlockHash;

/// Hashes one block with BLAKE3.
pub(crate) fn blake3_digest(data: &[u8]) -> BlockHash {
    BlockHash::Blake3(::blake3::hash(data).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vector() {
        assert_eq!(
            blake3_digest(b"").to_hex(),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }

    #[test]
    fn test_hash() {
        let hash = blake3_digest(b"hello world");
        assert_eq!(hash.as_bytes().len(), 32);

        // Hash should be deterministic
        let hash2 = blake3_digest(b"hello world");
        assert_eq!(hash, hash2);

        // Different data should give different hash
        let hash3 = blake3_digest(b"hello world!");
        assert_ne!(hash, hash3);
    }
}
