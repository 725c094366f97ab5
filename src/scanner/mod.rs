//! Block scanner.
//!
//! - [`BlockScanner`] - Reads files in fixed-size blocks and hashes each one
//! - [`BlockIter`] - Iterator that yields blocks from a [`std::io::Read`] source
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use blockdump::{BlockScanner, ScanConfig};
//!
//! let mut scanner = BlockScanner::new(ScanConfig::new(4)?);
//! let blocks = scanner
//!     .blocks(Cursor::new(b"0123456789"))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let lens: Vec<u64> = blocks.iter().map(|b| b.len).collect();
//! assert_eq!(lens, vec![4, 4, 2]);
//! # Ok::<(), blockdump::DumpError>(())
//! ```

mod iter;

pub use iter::BlockIter;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::config::ScanConfig;
use crate::error::DumpError;
use crate::report::ReportWriter;

/// Blocks and bytes emitted for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileScan {
    /// Number of blocks written to the report.
    pub blocks: u64,
    /// Total bytes hashed.
    pub bytes: u64,
}

/// Reads files in consecutive fixed-size blocks.
///
/// The scanner owns one buffer of exactly `block_size` bytes, reused for
/// every block of every file it scans.
#[derive(Debug)]
pub struct BlockScanner {
    config: ScanConfig,
    buffer: Vec<u8>,
}

impl BlockScanner {
    /// Creates a new scanner with the given configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self {
            buffer: vec![0u8; config.block_size()],
            config,
        }
    }

    /// Returns the configuration used by this scanner.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Creates a block iterator over `reader`, starting at offset 0.
    pub fn blocks<R: Read>(&mut self, reader: R) -> BlockIter<'_, R> {
        BlockIter::new(reader, &mut self.buffer, self.config.digest())
    }

    /// Scans the file at `path`, appending one report line per block.
    ///
    /// Blocks are written as soon as they are hashed. If reading fails part
    /// way through, the blocks already written stay in the report and
    /// [`DumpError::ReadFile`] reports the offset of the failed block. The
    /// file handle is released before this returns, on every path.
    pub fn scan_file<W: Write>(
        &mut self,
        path: &Path,
        report: &mut ReportWriter<W>,
    ) -> Result<FileScan, DumpError> {
        let file = File::open(path).map_err(|source| DumpError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.scan_reader(path, file, report)
    }

    /// Scans an already opened source, reporting its blocks under `path`.
    pub fn scan_reader<R: Read, W: Write>(
        &mut self,
        path: &Path,
        reader: R,
        report: &mut ReportWriter<W>,
    ) -> Result<FileScan, DumpError> {
        let mut scan = FileScan::default();
        let mut blocks = self.blocks(reader);
        while let Some(block) = blocks.next() {
            let block = block.map_err(|source| DumpError::ReadFile {
                path: path.to_path_buf(),
                offset: blocks.offset(),
                source,
            })?;
            report.write_block(path, &block)?;
            scan.blocks += 1;
            scan.bytes += block.len;
        }

        debug!(
            path = %path.display(),
            blocks = scan.blocks,
            bytes = scan.bytes,
            "scanned file"
        );
        Ok(scan)
    }
}
