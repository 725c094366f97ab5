//! Eligibility filter.
//!
//! Decides from metadata alone whether a directory entry is worth scanning.
//! Only regular files at least one block long qualify; everything else
//! (directories, symlinks, devices, pipes, sockets, short files) is skipped.
//! Metadata is read without following symlinks, so a link to a regular file
//! is still excluded.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Kind of a non-regular directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory. Never recursed into.
    Directory,
    /// A symbolic link. Never followed.
    Symlink,
    /// Device, pipe, socket or anything else that is not a regular file.
    Special,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Directory => f.write_str("directory"),
            EntryKind::Symlink => f.write_str("symlink"),
            EntryKind::Special => f.write_str("special file"),
        }
    }
}

/// Verdict of the eligibility check, with the reason when negative.
#[derive(Debug)]
pub enum Eligibility {
    /// A regular file large enough to scan.
    Eligible {
        /// File size at inspection time.
        size: u64,
    },

    /// Not a regular file.
    NotRegularFile(EntryKind),

    /// A regular file shorter than one block.
    TooSmall {
        /// File size at inspection time.
        size: u64,
        /// Smallest eligible size.
        min: u64,
    },

    /// Metadata could not be read (permissions, file vanished).
    Unavailable(io::Error),
}

impl Eligibility {
    /// Returns true if the file should be scanned.
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible { .. })
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eligibility::Eligible { size } => write!(f, "eligible ({} bytes)", size),
            Eligibility::NotRegularFile(kind) => write!(f, "not a regular file ({})", kind),
            Eligibility::TooSmall { size, min } => {
                write!(f, "too small: {} bytes (min {})", size, min)
            }
            Eligibility::Unavailable(e) => write!(f, "metadata unavailable: {}", e),
        }
    }
}

/// Checks whether `path` is a regular file of at least `min_size` bytes.
///
/// Never fails: a metadata error is reported as
/// [`Eligibility::Unavailable`].
pub fn check_eligibility(path: &Path, min_size: u64) -> Eligibility {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => return Eligibility::Unavailable(e),
    };

    let file_type = metadata.file_type();
    if !file_type.is_file() {
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Special
        };
        return Eligibility::NotRegularFile(kind);
    }

    let size = metadata.len();
    if size < min_size {
        return Eligibility::TooSmall {
            size,
            min: min_size,
        };
    }

    Eligibility::Eligible { size }
}
