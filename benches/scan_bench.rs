//! Benchmarks for blockdump.
//!
//! Run with:
//!     cargo bench

use std::hint::black_box;
use std::io::Cursor;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use blockdump::{BlockScanner, DigestAlgorithm, ScanConfig};

fn bench_digests(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("md5", |b| {
        let mut scanner = BlockScanner::new(ScanConfig::default());
        b.iter(|| {
            let count = scanner.blocks(Cursor::new(black_box(&data))).count();
            black_box(count)
        });
    });

    #[cfg(feature = "hash-blake3")]
    group.bench_function("blake3", |b| {
        let config = ScanConfig::default().with_digest(DigestAlgorithm::Blake3);
        let mut scanner = BlockScanner::new(config);
        b.iter(|| {
            let count = scanner.blocks(Cursor::new(black_box(&data))).count();
            black_box(count)
        });
    });

    group.finish();
}

fn bench_block_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_size");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    for block_size in [512, 4 * 1024, 64 * 1024] {
        group.bench_function(format!("{}b", block_size), |b| {
            let mut scanner = BlockScanner::new(ScanConfig::new(block_size).unwrap());
            b.iter(|| {
                let count = scanner.blocks(Cursor::new(black_box(&data))).count();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_single_block(c: &mut Criterion) {
    let block = vec![0x5Au8; 4096];
    c.bench_function("md5_4k_block", |b| {
        b.iter(|| black_box(DigestAlgorithm::Md5.digest(black_box(&block))))
    });
}

criterion_group!(benches, bench_digests, bench_block_sizes, bench_single_block);
criterion_main!(benches);
