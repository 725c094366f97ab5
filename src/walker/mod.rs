//! Directory walker.
//!
//! Drives one dump run: opens the source directory, then the report, and
//! feeds every immediate entry of the directory through the eligibility
//! filter and the block scanner. Subdirectories are never entered.
//!
//! Failures to open the directory or the report abort the run. Failures
//! scoped to one entry are logged and counted, and the walk moves on.

use std::fs::{self, ReadDir};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::ScanConfig;
use crate::error::DumpError;
use crate::filter::{Eligibility, check_eligibility};
use crate::report::ReportWriter;
use crate::scanner::{BlockScanner, FileScan};

/// Totals for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Directory entries visited.
    pub entries: u64,
    /// Files scanned to completion.
    pub scanned: u64,
    /// Entries skipped as ineligible.
    pub skipped: u64,
    /// Entries that failed to list, open or read.
    pub failed: u64,
    /// Block lines written.
    pub blocks: u64,
    /// Bytes hashed.
    pub bytes: u64,
}

/// Walks one directory into a block report.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use blockdump::{DirectoryWalker, ScanConfig};
///
/// let walker = DirectoryWalker::new(ScanConfig::default());
/// let summary = walker.run(Path::new("/var/data"), Path::new("dedup_dump.csv"))?;
/// println!("{} blocks from {} files", summary.blocks, summary.scanned);
/// # Ok::<(), blockdump::DumpError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryWalker {
    config: ScanConfig,
}

impl DirectoryWalker {
    /// Creates a new walker with the given configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this walker.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scans `source` and writes the report to the file at `destination`.
    ///
    /// The report file is only created once the source directory has been
    /// opened, so a missing source leaves `destination` untouched.
    pub fn run(&self, source: &Path, destination: &Path) -> Result<ScanSummary, DumpError> {
        self.config.validate()?;
        let entries = open_directory(source)?;
        let scanner = BlockScanner::new(self.config);
        let report = ReportWriter::create(destination, &self.config)?;

        info!(
            source = %source.display(),
            report = %destination.display(),
            block_size = self.config.block_size(),
            digest = %self.config.digest(),
            "starting block dump"
        );
        // The report may live inside the scanned directory.
        let own_report = fs::canonicalize(destination).ok();
        let (summary, _file) =
            self.dump(source, entries, scanner, report, own_report.as_deref())?;
        Ok(summary)
    }

    /// Scans `source` and writes the report into `writer`.
    ///
    /// Returns the summary together with the flushed writer.
    pub fn run_to_writer<W: Write>(
        &self,
        source: &Path,
        writer: W,
    ) -> Result<(ScanSummary, W), DumpError> {
        self.config.validate()?;
        let entries = open_directory(source)?;
        let scanner = BlockScanner::new(self.config);
        let report = ReportWriter::new(writer, &self.config);
        self.dump(source, entries, scanner, report, None)
    }

    fn dump<W: Write>(
        &self,
        source: &Path,
        entries: ReadDir,
        mut scanner: BlockScanner,
        mut report: ReportWriter<W>,
        own_report: Option<&Path>,
    ) -> Result<(ScanSummary, W), DumpError> {
        report.write_header()?;

        let mut summary = ScanSummary::default();

        for path in self.child_paths(entries, &mut summary) {
            summary.entries += 1;
            if is_same_file(&path, own_report) {
                debug!(path = %path.display(), "skipping report file");
                summary.skipped += 1;
                continue;
            }
            self.visit(&path, &mut scanner, &mut report, &mut summary)?;
        }

        let writer = report.finish()?;
        info!(
            source = %source.display(),
            entries = summary.entries,
            scanned = summary.scanned,
            skipped = summary.skipped,
            failed = summary.failed,
            blocks = summary.blocks,
            bytes = summary.bytes,
            "block dump complete"
        );
        Ok((summary, writer))
    }

    /// Collects the full paths of the directory's entries.
    ///
    /// `read_dir` never yields `.` or `..`. Entries that cannot be read are
    /// logged and counted as failed.
    fn child_paths(&self, entries: ReadDir, summary: &mut ScanSummary) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => paths.push(entry.path()),
                Err(e) => {
                    warn!(error = %e, "failed to read directory entry");
                    summary.entries += 1;
                    summary.failed += 1;
                }
            }
        }

        if self.config.sort_entries() {
            paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        paths
    }

    /// Filters and scans one entry. Only fatal errors are returned.
    fn visit<W: Write>(
        &self,
        path: &Path,
        scanner: &mut BlockScanner,
        report: &mut ReportWriter<W>,
        summary: &mut ScanSummary,
    ) -> Result<(), DumpError> {
        match check_eligibility(path, self.config.min_file_size()) {
            Eligibility::Eligible { .. } => {}
            verdict @ Eligibility::Unavailable(_) => {
                warn!(path = %path.display(), reason = %verdict, "skipping entry");
                summary.skipped += 1;
                return Ok(());
            }
            verdict => {
                debug!(path = %path.display(), reason = %verdict, "skipping entry");
                summary.skipped += 1;
                return Ok(());
            }
        }

        let written_before = report.blocks_written();
        let result = scanner.scan_file(path, report);
        record_scan(path, result, report.blocks_written() - written_before, summary)
    }
}

/// Folds one file's scan result into `summary`.
///
/// Per-file errors are logged and counted, keeping the `written` blocks that
/// reached the report before the failure. Fatal errors are passed through.
fn record_scan(
    path: &Path,
    result: Result<FileScan, DumpError>,
    written: u64,
    summary: &mut ScanSummary,
) -> Result<(), DumpError> {
    match result {
        Ok(scan) => {
            summary.scanned += 1;
            summary.blocks += scan.blocks;
            summary.bytes += scan.bytes;
            Ok(())
        }
        Err(e) if !e.is_fatal() => {
            warn!(path = %path.display(), error = %e, "failed to scan file");
            summary.failed += 1;
            summary.blocks += written;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn open_directory(path: &Path) -> Result<ReadDir, DumpError> {
    fs::read_dir(path).map_err(|source| DumpError::OpenDirectory {
        path: path.to_path_buf(),
        source,
    })
}

fn is_same_file(path: &Path, own_report: Option<&Path>) -> bool {
    let Some(report) = own_report else {
        return false;
    };
    if path.file_name() != report.file_name() {
        return false;
    }
    fs::canonicalize(path).is_ok_and(|p| p == report)
}
