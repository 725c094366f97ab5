//! Block hash types.

use std::fmt;

use crate::config::{DigestAlgorithm, HexCase};

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// A fixed-size digest of one block's content.
///
/// The variant records which algorithm produced it, so the width is always
/// known: 16 bytes for MD5, 32 for BLAKE3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockHash {
    /// MD5 digest.
    Md5([u8; 16]),

    /// BLAKE3 digest (requires `hash-blake3` feature).
    #[cfg(feature = "hash-blake3")]
    Blake3([u8; 32]),
}

impl BlockHash {
    /// Returns the algorithm that produced this hash.
    pub fn algorithm(&self) -> DigestAlgorithm {
        match self {
            BlockHash::Md5(_) => DigestAlgorithm::Md5,
            #[cfg(feature = "hash-blake3")]
            BlockHash::Blake3(_) => DigestAlgorithm::Blake3,
        }
    }

    /// Returns the hash as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            BlockHash::Md5(bytes) => bytes,
            #[cfg(feature = "hash-blake3")]
            BlockHash::Blake3(bytes) => bytes,
        }
    }

    /// Returns the hash as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.to_hex_with(HexCase::Lower)
    }

    /// Returns the hash as a hex string in the given case.
    ///
    /// The result is always twice the digest length.
    pub fn to_hex_with(&self, case: HexCase) -> String {
        let table = match case {
            HexCase::Lower => HEX_LOWER,
            HexCase::Upper => HEX_UPPER,
        };
        let bytes = self.as_bytes();
        let mut result = String::with_capacity(bytes.len() * 2);
        for byte in bytes {
            result.push(table[(byte >> 4) as usize] as char);
            result.push(table[(byte & 0xf) as usize] as char);
        }
        result
    }
}

impl AsRef<[u8]> for BlockHash {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
