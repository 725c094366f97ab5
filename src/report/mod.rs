//! Report writer.
//!
//! The report is a single CSV artifact per run: one header line, then one
//! line per block in the order blocks are produced.
//!
//! ```text
//! File Name,md5,offset,size
//! data/alpha.bin,6a8b...,0,4096
//! ```
//!
//! Fields are quoted only when they contain the delimiter, a quote or a
//! newline, so ordinary paths produce exactly four comma-separated fields.

use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use tracing::warn;

use crate::block::Block;
use crate::config::{DigestAlgorithm, HexCase, ScanConfig};
use crate::error::DumpError;

/// Column name of the source path.
pub const FILE_COLUMN: &str = "File Name";

/// Column name of the block offset.
pub const OFFSET_COLUMN: &str = "offset";

/// Column name of the block length.
pub const SIZE_COLUMN: &str = "size";

/// Append-only sink for block records.
///
/// `write_header` must be called exactly once before any `write_block`.
/// Data is guaranteed to reach the underlying writer only after
/// [`ReportWriter::finish`].
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use blockdump::{Block, DigestAlgorithm, ReportWriter, ScanConfig};
///
/// let mut report = ReportWriter::new(Vec::new(), &ScanConfig::default());
/// report.write_header()?;
/// let hash = DigestAlgorithm::Md5.digest(b"abc");
/// report.write_block(Path::new("a.bin"), &Block::new(0, 3, hash))?;
///
/// let out = String::from_utf8(report.finish()?).unwrap();
/// assert_eq!(
///     out,
///     "File Name,md5,offset,size\na.bin,900150983cd24fb0d6963f7d28e17f72,0,3\n"
/// );
/// # Ok::<(), blockdump::DumpError>(())
/// ```
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    digest: DigestAlgorithm,
    hex_case: HexCase,
    header_written: bool,
    blocks_written: u64,
}

impl ReportWriter<File> {
    /// Creates (or truncates) the report file at `path`.
    pub fn create(path: &Path, config: &ScanConfig) -> Result<Self, DumpError> {
        let file = File::create(path).map_err(|source| DumpError::OpenReport {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file, config))
    }
}

impl<W: Write> ReportWriter<W> {
    /// Wraps an existing sink.
    pub fn new(writer: W, config: &ScanConfig) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .delimiter(b',')
            .quote_style(QuoteStyle::Necessary)
            .from_writer(writer);

        Self {
            writer,
            digest: config.digest(),
            hex_case: config.hex_case(),
            header_written: false,
            blocks_written: 0,
        }
    }

    /// Writes the header line.
    pub fn write_header(&mut self) -> Result<(), DumpError> {
        if self.header_written {
            return Err(DumpError::HeaderAlreadyWritten);
        }
        self.writer.write_record([
            FILE_COLUMN,
            self.digest.name(),
            OFFSET_COLUMN,
            SIZE_COLUMN,
        ])?;
        self.header_written = true;
        Ok(())
    }

    /// Appends one block record for the file at `path`.
    ///
    /// Paths that are not valid UTF-8 are written lossily, with each invalid
    /// sequence replaced by U+FFFD, and a warning is logged. Two such paths
    /// can end up with the same name in the report.
    pub fn write_block(&mut self, path: &Path, block: &Block) -> Result<(), DumpError> {
        if !self.header_written {
            return Err(DumpError::HeaderNotWritten);
        }

        let path = match path.to_string_lossy() {
            Cow::Owned(lossy) => {
                warn!(path = %lossy, "file name is not valid UTF-8, reported lossily");
                Cow::Owned(lossy)
            }
            exact => exact,
        };
        let hex = block.hash.to_hex_with(self.hex_case);
        let offset = block.offset.to_string();
        let len = block.len.to_string();
        self.writer
            .write_record([&*path, hex.as_str(), offset.as_str(), len.as_str()])?;

        self.blocks_written += 1;
        Ok(())
    }

    /// Returns the number of block lines written so far.
    pub fn blocks_written(&self) -> u64 {
        self.blocks_written
    }

    /// Returns true once the header has been written.
    pub fn header_written(&self) -> bool {
        self.header_written
    }

    /// Flushes all pending lines and returns the underlying sink.
    pub fn finish(mut self) -> Result<W, DumpError> {
        self.writer.flush().map_err(DumpError::FinalizeReport)?;
        self.writer
            .into_inner()
            .map_err(|e| DumpError::FinalizeReport(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(offset: u64, len: u64) -> Block {
        Block::new(offset, len, DigestAlgorithm::Md5.digest(b"abc"))
    }

    #[test]
    fn test_header_only() {
        let mut report = ReportWriter::new(Vec::new(), &ScanConfig::default());
        assert!(!report.header_written());
        report.write_header().unwrap();
        assert!(report.header_written());
        let out = report.finish().unwrap();
        assert_eq!(out, b"File Name,md5,offset,size\n");
    }

    #[test]
    fn test_block_line() {
        let mut report = ReportWriter::new(Vec::new(), &ScanConfig::default());
        report.write_header().unwrap();
        report.write_block(Path::new("dir/a.bin"), &block(4096, 10)).unwrap();
        assert_eq!(report.blocks_written(), 1);

        let out = String::from_utf8(report.finish().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "dir/a.bin,900150983cd24fb0d6963f7d28e17f72,4096,10"
        );
    }

    #[test]
    fn test_uppercase_hex() {
        let config = ScanConfig::default().with_hex_case(HexCase::Upper);
        let mut report = ReportWriter::new(Vec::new(), &config);
        report.write_header().unwrap();
        report.write_block(Path::new("a.bin"), &block(0, 3)).unwrap();

        let out = String::from_utf8(report.finish().unwrap()).unwrap();
        assert!(out.contains("a.bin,900150983CD24FB0D6963F7D28E17F72,0,3"));
    }

    #[test]
    fn test_block_before_header_is_rejected() {
        let mut report = ReportWriter::new(Vec::new(), &ScanConfig::default());
        let err = report.write_block(Path::new("a.bin"), &block(0, 3)).unwrap_err();
        assert!(matches!(err, DumpError::HeaderNotWritten));
        assert_eq!(report.blocks_written(), 0);
    }

    #[test]
    fn test_second_header_is_rejected() {
        let mut report = ReportWriter::new(Vec::new(), &ScanConfig::default());
        report.write_header().unwrap();
        let err = report.write_header().unwrap_err();
        assert!(matches!(err, DumpError::HeaderAlreadyWritten));

        let out = report.finish().unwrap();
        assert_eq!(out, b"File Name,md5,offset,size\n");
    }

    #[test]
    fn test_path_with_delimiter_is_quoted() {
        let mut report = ReportWriter::new(Vec::new(), &ScanConfig::default());
        report.write_header().unwrap();
        report.write_block(Path::new("a,b.bin"), &block(0, 3)).unwrap();

        let out = report.finish().unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(out.as_slice());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "a,b.bin");
        assert_eq!(records[0].len(), 4);
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.csv");
        let err = ReportWriter::create(&path, &ScanConfig::default()).err().unwrap();
        assert!(matches!(err, DumpError::OpenReport { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    #[cfg(feature = "hash-blake3")]
    fn test_blake3_header() {
        let config = ScanConfig::default().with_digest(DigestAlgorithm::Blake3);
        let mut report = ReportWriter::new(Vec::new(), &config);
        report.write_header().unwrap();
        let out = report.finish().unwrap();
        assert_eq!(out, b"File Name,blake3,offset,size\n");
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_path_is_written_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut report = ReportWriter::new(Vec::new(), &ScanConfig::default());
        report.write_header().unwrap();
        let path = Path::new(OsStr::from_bytes(b"bad\xFFname.bin"));
        report.write_block(path, &block(0, 3)).unwrap();
        assert_eq!(report.blocks_written(), 1);

        let out = String::from_utf8(report.finish().unwrap()).unwrap();
        assert!(out.contains("bad\u{FFFD}name.bin,900150983cd24fb0d6963f7d28e17f72,0,3"));
    }
}
