//! blockdump command line.
//!
//! Run with:
//!     blockdump /path/to/dir -o dedup_dump.csv

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use blockdump::{
    DEFAULT_BLOCK_SIZE, DEFAULT_REPORT_FILE, DigestAlgorithm, DirectoryWalker, HexCase, ScanConfig,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DigestArg {
    /// MD5 (16-byte digest)
    Md5,
    /// BLAKE3 (32-byte digest)
    Blake3,
}

impl DigestArg {
    fn algorithm(self) -> Result<DigestAlgorithm> {
        match self {
            DigestArg::Md5 => Ok(DigestAlgorithm::Md5),
            #[cfg(feature = "hash-blake3")]
            DigestArg::Blake3 => Ok(DigestAlgorithm::Blake3),
            #[cfg(not(feature = "hash-blake3"))]
            DigestArg::Blake3 => {
                anyhow::bail!("blake3 digest requires the `hash-blake3` feature")
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "blockdump", version)]
#[command(about = "Hash every fixed-size block of the files in a directory into a CSV report")]
struct Args {
    /// Directory to scan (not recursive)
    source: PathBuf,

    /// Report file to write
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,

    /// Block size in bytes; smaller files are skipped
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Block digest
    #[arg(long, value_enum, default_value = "md5")]
    digest: DigestArg,

    /// Render digests in uppercase hex
    #[arg(long)]
    uppercase: bool,

    /// Visit entries in file-name order
    #[arg(long)]
    sorted: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let hex_case = if args.uppercase {
        HexCase::Upper
    } else {
        HexCase::Lower
    };
    let config = ScanConfig::new(args.block_size)?
        .with_digest(args.digest.algorithm()?)
        .with_hex_case(hex_case)
        .with_sorted_entries(args.sorted);

    let summary = DirectoryWalker::new(config)
        .run(&args.source, &args.output)
        .with_context(|| format!("block dump of {} failed", args.source.display()))?;

    println!(
        "{} blocks ({} bytes) from {} of {} entries written to {}",
        summary.blocks,
        summary.bytes,
        summary.scanned,
        summary.entries,
        args.output.display()
    );
    Ok(())
}
