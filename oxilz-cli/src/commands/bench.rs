//! Bench command implementation.

use super::CompressionLevel;
use crate::utils::{read_input, throughput_mbps};
use oxilz_fastlz::{Level, compress, decompress, max_compressed_size};
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

pub fn cmd_bench(
    input: &Path,
    level: Option<CompressionLevel>,
    iterations: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    if iterations == 0 {
        return Err("iterations must be at least 1".into());
    }

    let data = read_input(input)?;
    let levels: Vec<Level> = match level {
        Some(level) => vec![level.into()],
        None => vec![Level::Fast, Level::High],
    };

    println!(
        "Benchmarking {} ({} bytes, {} iterations)",
        input.display(),
        data.len(),
        iterations
    );

    let mut compressed = vec![0u8; max_compressed_size(data.len())];
    let mut restored = vec![0u8; data.len()];

    for level in levels {
        let start = Instant::now();
        let mut written = 0;
        for _ in 0..iterations {
            written = compress(level, black_box(&data), &mut compressed)?;
        }
        let compress_secs = start.elapsed().as_secs_f64();

        let start = Instant::now();
        for _ in 0..iterations {
            let n = decompress(black_box(&compressed[..written]), &mut restored)?;
            black_box(n);
        }
        let decompress_secs = start.elapsed().as_secs_f64();

        if restored != data {
            return Err(format!("{}: round trip produced different data", level).into());
        }

        println!(
            "  {}: {} bytes, compress {:.1} MB/s, decompress {:.1} MB/s",
            level,
            written,
            throughput_mbps(data.len(), iterations, compress_secs),
            throughput_mbps(data.len(), iterations, decompress_secs)
        );
    }

    Ok(())
}
