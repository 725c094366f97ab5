#![no_main]

use std::io::{self, Read};

use blockdump::{BlockScanner, DigestAlgorithm, ScanConfig};
use libfuzzer_sys::fuzz_target;

/// Reader that returns the input in uneven pieces.
struct Jagged<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Jagged<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        self.step = self.step % 7 + 1;
        Ok(n)
    }
}

fuzz_target!(|input: (u16, Vec<u8>)| {
    let (size, data) = input;
    let block_size = (size as usize % 8192) + 1;

    for digest in [DigestAlgorithm::Md5, DigestAlgorithm::Blake3] {
        let config = ScanConfig::new(block_size).unwrap().with_digest(digest);
        let mut scanner = BlockScanner::new(config);

        let reader = Jagged { data: &data, step: 1 };
        let blocks = scanner
            .blocks(reader)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        // Verify: blocks partition the input
        let mut expected_offset = 0u64;
        for (i, block) in blocks.iter().enumerate() {
            assert_eq!(block.offset, expected_offset);
            assert!(block.len > 0);
            if i + 1 < blocks.len() {
                assert_eq!(block.len, block_size as u64);
            }
            expected_offset += block.len;
        }
        assert_eq!(expected_offset, data.len() as u64);

        // Verify: each hash matches the bytes it covers
        for block in &blocks {
            let range = block.offset as usize..block.end() as usize;
            assert_eq!(block.hash, digest.digest(&data[range]));
        }
    }
});
