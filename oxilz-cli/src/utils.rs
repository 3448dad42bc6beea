//! Utility functions for the CLI.

use oxilz_core::OxiLzError;
use oxilz_fastlz::max_decompressed_size;
use std::fs;
use std::path::Path;

/// Read a whole input file.
pub fn read_input(path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let data = fs::read(path).map_err(|e| {
        tracing::warn!(path = %path.display(), "cannot read input");
        OxiLzError::from(e)
    })?;
    tracing::debug!(path = %path.display(), size = data.len(), "read input");
    Ok(data)
}

/// Write `data` to `path`, refusing to replace an existing file unless `force`.
pub fn write_output(
    path: &Path,
    data: &[u8],
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    fs::write(path, data).map_err(|e| {
        tracing::warn!(path = %path.display(), "cannot write output");
        OxiLzError::from(e)
    })?;
    tracing::debug!(path = %path.display(), size = data.len(), "wrote output");
    Ok(())
}

/// Output buffer for decoding a `compressed_len`-byte stream under `max_size`.
///
/// Never larger than the stream can expand to, so tiny inputs do not
/// allocate the full `--max-size`.
pub fn decode_capacity(compressed_len: usize, max_size: usize) -> usize {
    max_size.min(max_decompressed_size(compressed_len))
}

/// Percentage of the original size saved by compression (negative on expansion).
pub fn space_savings(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

/// Throughput in MB/s for `bytes` processed `iterations` times in `secs`.
pub fn throughput_mbps(bytes: usize, iterations: u32, secs: f64) -> f64 {
    if secs <= 0.0 {
        return 0.0;
    }
    (bytes as f64 * f64::from(iterations)) / secs / (1024.0 * 1024.0)
}
