//! Info command implementation.

use crate::utils::{decode_capacity, read_input, space_savings};
use oxilz_fastlz::{decompress_to_vec, stream_level};
use std::path::Path;

pub fn cmd_info(input: &Path, max_size: usize) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let level = stream_level(&data)?;

    println!("Block Information");
    println!("=================");
    println!("File: {}", input.display());
    println!("Size: {} bytes", data.len());
    println!("Level: {}", level.number());
    // The first token is always a literal run; its control byte carries the marker
    println!("First token: literal run of {} bytes", (data[0] & 31) + 1);

    match decompress_to_vec(&data, decode_capacity(data.len(), max_size)) {
        Ok(decompressed) => {
            println!("Decompressed size: {} bytes", decompressed.len());
            if !decompressed.is_empty() {
                println!(
                    "Space savings: {:.1}%",
                    space_savings(decompressed.len(), data.len())
                );
            }
        }
        Err(e) => {
            println!("Decompressed size: not decodable within {} bytes", max_size);
            println!("  {}", e);
        }
    }

    Ok(())
}
