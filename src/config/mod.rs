//! Configuration for a block dump run.
//!
//! - [`ScanConfig`] - Block size, digest, hex rendering and entry order
//! - [`DigestAlgorithm`] - Which digest identifies a block
//! - [`HexCase`] - How digests are rendered in the report
//!
//! # Example
//!
//! ```
//! use blockdump::{DigestAlgorithm, HexCase, ScanConfig};
//!
//! let config = ScanConfig::new(8192)?
//!     .with_digest(DigestAlgorithm::Md5)
//!     .with_hex_case(HexCase::Upper);
//! assert_eq!(config.min_file_size(), 8192);
//! # Ok::<(), blockdump::DumpError>(())
//! ```

use std::fmt;

use crate::error::DumpError;

/// Default block size (4 KiB).
pub const DEFAULT_BLOCK_SIZE: usize = 4 * 1024;

/// Largest accepted block size (1 GiB).
///
/// The scanner allocates one buffer of this many bytes up front.
pub const MAX_BLOCK_SIZE: usize = 1024 * 1024 * 1024;

/// Default report file name.
pub const DEFAULT_REPORT_FILE: &str = "dedup_dump.csv";

/// Configuration for scanning a directory into a block report.
///
/// The block size doubles as the eligibility threshold: a file smaller than
/// one block is never scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    block_size: usize,
    digest: DigestAlgorithm,
    hex_case: HexCase,
    sort_entries: bool,
}

impl ScanConfig {
    /// Creates a new configuration with the given block size.
    ///
    /// Returns error if `block_size` is zero or above [`MAX_BLOCK_SIZE`].
    pub fn new(block_size: usize) -> Result<Self, DumpError> {
        if block_size == 0 {
            return Err(DumpError::InvalidConfig {
                message: "block size must be non-zero",
            });
        }
        if block_size > MAX_BLOCK_SIZE {
            return Err(DumpError::InvalidConfig {
                message: "block size must not exceed 1 GiB",
            });
        }

        Ok(Self {
            block_size,
            ..Self::default()
        })
    }

    /// Sets the block size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ScanConfig::validate`] to check it.
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    /// Sets the digest algorithm.
    pub fn with_digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    /// Sets the hex case used when rendering digests.
    pub fn with_hex_case(mut self, case: HexCase) -> Self {
        self.hex_case = case;
        self
    }

    /// Visits directory entries in file-name order instead of listing order.
    pub fn with_sorted_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Returns the block size in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the smallest file size eligible for scanning.
    pub fn min_file_size(&self) -> u64 {
        self.block_size as u64
    }

    /// Returns the digest algorithm.
    pub fn digest(&self) -> DigestAlgorithm {
        self.digest
    }

    /// Returns the hex case.
    pub fn hex_case(&self) -> HexCase {
        self.hex_case
    }

    /// Returns true if entries are visited in file-name order.
    pub fn sort_entries(&self) -> bool {
        self.sort_entries
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), DumpError> {
        Self::new(self.block_size).map(|_| ())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            digest: DigestAlgorithm::default(),
            hex_case: HexCase::default(),
            sort_entries: false,
        }
    }
}

/// Digest used to identify block content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigestAlgorithm {
    /// MD5, 16 bytes. Matches the `md5` report column.
    #[default]
    Md5,

    /// BLAKE3, 32 bytes (requires `hash-blake3` feature).
    #[cfg(feature = "hash-blake3")]
    Blake3,
}

impl DigestAlgorithm {
    /// Name used as the digest column of the report header.
    pub const fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            #[cfg(feature = "hash-blake3")]
            DigestAlgorithm::Blake3 => "blake3",
        }
    }

    /// Digest length in bytes.
    pub const fn output_len(&self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            #[cfg(feature = "hash-blake3")]
            DigestAlgorithm::Blake3 => 32,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Letter case for hex-rendered digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HexCase {
    /// `0-9a-f`
    #[default]
    Lower,
    /// `0-9A-F`
    Upper,
}
