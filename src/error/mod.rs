//! Error types for blockdump.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing a block dump.
///
/// Variants split into two classes, see [`DumpError::is_fatal`]:
/// failures that abort the whole run, and failures scoped to a single file
/// which the walker logs before moving on to the next entry.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The source directory could not be opened for listing.
    #[error("failed to open source directory {}: {source}", .path.display())]
    OpenDirectory {
        /// The directory that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The report destination could not be created.
    #[error("failed to open report {}: {source}", .path.display())]
    OpenReport {
        /// The report path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A line could not be written to the report.
    #[error("failed to write report: {0}")]
    ReportWrite(#[from] csv::Error),

    /// The report could not be flushed at the end of the run.
    #[error("failed to finalize report: {0}")]
    FinalizeReport(#[source] io::Error),

    /// `write_header` was called on a report that already has one.
    #[error("report header already written")]
    HeaderAlreadyWritten,

    /// `write_block` was called before `write_header`.
    #[error("report header must be written before any block")]
    HeaderNotWritten,

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// An eligible file could not be opened for reading.
    #[error("failed to open file {}: {source}", .path.display())]
    OpenFile {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Reading a file failed part way through.
    #[error("failed to read {} at offset {offset}: {source}", .path.display())]
    ReadFile {
        /// The file being scanned.
        path: PathBuf,
        /// Offset of the block that could not be read.
        offset: u64,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl DumpError {
    /// Returns true if the error must abort the run.
    ///
    /// Per-file failures (`OpenFile`, `ReadFile`) are recoverable: the
    /// walker logs them and continues with the next directory entry.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, DumpError::OpenFile { .. } | DumpError::ReadFile { .. })
    }
}
