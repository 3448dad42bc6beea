//! Decompress command implementation.

use crate::utils::{decode_capacity, read_input, write_output};
use oxilz_fastlz::{decompress_to_vec, stream_level};
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    max_size: usize,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let level = stream_level(&data)?;

    let decompressed = decompress_to_vec(&data, decode_capacity(data.len(), max_size))?;
    write_output(output, &decompressed, force)?;

    println!(
        "{} -> {}: {} -> {} bytes ({})",
        input.display(),
        output.display(),
        data.len(),
        decompressed.len(),
        level
    );

    Ok(())
}
