//! blockdump
//!
//! Fixed-size block hashing dump for deduplication analysis.
//!
//! `blockdump` walks one directory, splits every eligible file into
//! fixed-size blocks, hashes each block and writes one CSV record per block:
//!
//! ```text
//! File Name,md5,offset,size
//! data/alpha.bin,<hex>,0,4096
//! data/alpha.bin,<hex>,4096,4096
//! data/alpha.bin,<hex>,8192,1808
//! ```
//!
//! The report is raw input for a later analysis stage that looks for
//! duplicate blocks across files. The crate intentionally:
//! - does NOT deduplicate or store blocks
//! - does NOT recurse into subdirectories
//! - does NOT scan concurrently
//! - does NOT resume interrupted scans
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use blockdump::{DirectoryWalker, DumpError, ScanConfig};
//!
//! fn main() -> Result<(), DumpError> {
//!     let walker = DirectoryWalker::new(ScanConfig::default());
//!     let summary = walker.run(Path::new("data"), Path::new("dedup_dump.csv"))?;
//!     println!("{} blocks", summary.blocks);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod config;
mod error;
mod filter;
mod hash;
mod report;
mod scanner;
mod walker;

pub use block::{Block, BlockHash};
pub use config::{
    DEFAULT_BLOCK_SIZE, DEFAULT_REPORT_FILE, DigestAlgorithm, HexCase, MAX_BLOCK_SIZE, ScanConfig,
};
pub use error::DumpError;
pub use filter::{Eligibility, EntryKind, check_eligibility};
pub use report::ReportWriter;
pub use scanner::{BlockIter, BlockScanner, FileScan};
pub use walker::{DirectoryWalker, ScanSummary};
