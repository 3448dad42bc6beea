//! Compress command implementation.

use crate::utils::{read_input, space_savings, write_output};
use clap::ValueEnum;
use oxilz_fastlz::{Level, MIN_INPUT_LEN, compress_to_vec, store_to_vec};
use std::path::Path;

/// Compression level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum CompressionLevel {
    /// Level 1: fastest, 8 KiB window (default)
    #[default]
    Fast,
    /// Level 2: better ratio, far references up to 72 KiB
    High,
}

/// Parse `--level`: a level name (`fast`, `high`) or number (`1`, `2`).
pub fn parse_level(value: &str) -> Result<CompressionLevel, String> {
    if let Ok(level) = CompressionLevel::from_str(value, true) {
        return Ok(level);
    }
    let number: u8 = value
        .parse()
        .map_err(|_| format!("invalid level '{}' (expected fast, high, 1 or 2)", value))?;
    let level = Level::try_from(number).map_err(|e| e.to_string())?;
    Ok(CompressionLevel::from(level))
}

impl From<Level> for CompressionLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Fast => CompressionLevel::Fast,
            Level::High => CompressionLevel::High,
        }
    }
}

impl From<CompressionLevel> for Level {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::Fast => Level::Fast,
            CompressionLevel::High => Level::High,
        }
    }
}

/// Compress a whole file, storing inputs too short for the match finder as literals.
pub fn encode_file(level: Level, data: &[u8]) -> oxilz_core::Result<Vec<u8>> {
    if data.len() < MIN_INPUT_LEN {
        tracing::debug!(size = data.len(), "input below {} bytes, storing literals", MIN_INPUT_LEN);
        return store_to_vec(level, data);
    }
    compress_to_vec(level, data)
}

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    level: CompressionLevel,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let level = Level::from(level);

    let compressed = encode_file(level, &data)?;
    write_output(output, &compressed, force)?;

    println!(
        "{} -> {}: {} -> {} bytes ({:.1}% saved, {})",
        input.display(),
        output.display(),
        data.len(),
        compressed.len(),
        space_savings(data.len(), compressed.len()),
        level
    );

    Ok(())
}
