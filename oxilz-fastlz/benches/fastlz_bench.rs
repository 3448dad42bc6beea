//! Performance benchmarks for oxilz-fastlz
//!
//! This benchmark suite evaluates:
//! - Compression speed at level 1 and level 2
//! - Decompression speed for streams of both levels
//! - Performance across various data patterns

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxilz_fastlz::{Level, compress, compress_to_vec, decompress, max_compressed_size};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

const LEVELS: [Level; 2] = [Level::Fast, Level::High];

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - all bytes are the same
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no patterns
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! \
                     Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
        text.iter().copied().cycle().take(size).collect()
    }

    /// JSON-like data - structured text
    pub fn json_like(size: usize) -> Vec<u8> {
        let json = br#"{"name":"John Doe","age":30,"email":"john@example.com","active":true,"tags":["rust","compression","fastlz"]}"#;
        json.iter().copied().cycle().take(size).collect()
    }

    /// Blocks that repeat beyond the level-1 window
    pub fn far_repeats(size: usize) -> Vec<u8> {
        let block = random(20 * 1024);
        block.iter().copied().cycle().take(size).collect()
    }
}

/// Standard data sizes for benchmarking
mod data_sizes {
    pub const TINY: usize = 1024; // 1 KB
    pub const SMALL: usize = 10 * 1024; // 10 KB
    pub const MEDIUM: usize = 100 * 1024; // 100 KB
    pub const LARGE: usize = 1024 * 1024; // 1 MB
}

/// Benchmark compression across input sizes
fn bench_compression_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_sizes");

    for size in [
        data_sizes::TINY,
        data_sizes::SMALL,
        data_sizes::MEDIUM,
        data_sizes::LARGE,
    ] {
        let data = test_data::text_like(size);
        let mut output = vec![0u8; max_compressed_size(size)];

        for level in LEVELS {
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("level{}", level.number()), size),
                &data,
                |b, data| {
                    b.iter(|| {
                        let written = compress(level, black_box(data), &mut output).unwrap();
                        black_box(written);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark compression speed for different data types
fn bench_compression_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_data_types");

    let patterns: [(&str, PatternGenerator); 5] = [
        ("uniform", test_data::uniform as PatternGenerator),
        ("random", test_data::random as PatternGenerator),
        ("text", test_data::text_like as PatternGenerator),
        ("json", test_data::json_like as PatternGenerator),
        ("far_repeats", test_data::far_repeats as PatternGenerator),
    ];

    let size = data_sizes::MEDIUM;
    let mut output = vec![0u8; max_compressed_size(size)];

    for (pattern_name, generator) in patterns {
        let data = generator(size);
        for level in LEVELS {
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(pattern_name, format!("level{}", level.number())),
                &data,
                |b, data| {
                    b.iter(|| {
                        let written = compress(level, black_box(data), &mut output).unwrap();
                        black_box(written);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark decompression speed for different data types
fn bench_decompression_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_data_types");

    let patterns: [(&str, PatternGenerator); 4] = [
        ("uniform", test_data::uniform as PatternGenerator),
        ("random", test_data::random as PatternGenerator),
        ("text", test_data::text_like as PatternGenerator),
        ("far_repeats", test_data::far_repeats as PatternGenerator),
    ];

    let size = data_sizes::MEDIUM;
    let mut output = vec![0u8; size];

    for (pattern_name, generator) in patterns {
        let data = generator(size);
        for level in LEVELS {
            let compressed = compress_to_vec(level, &data).unwrap();
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(pattern_name, format!("level{}", level.number())),
                &compressed,
                |b, compressed| {
                    b.iter(|| {
                        let written = decompress(black_box(compressed), &mut output).unwrap();
                        black_box(written);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_sizes,
    bench_compression_data_types,
    bench_decompression_data_types,
);
criterion_main!(benches);
