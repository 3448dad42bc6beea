//! Pure Rust FastLZ-compatible block compression.
//!
//! FastLZ is a byte-aligned LZ77 format built for speed. A compressed block
//! is a flat sequence of literal-run and back-reference tokens with no
//! header, no checksum and no framing. Two levels share the token stream:
//!
//! - **Level 1** ([`Level::Fast`]): back-references up to 8192 bytes, match
//!   lengths capped at 264 per token.
//! - **Level 2** ([`Level::High`]): near references up to 8191 bytes plus a
//!   16-bit far extension reaching 73725 bytes, and unbounded match lengths.
//!
//! The level is stored in the top three bits of the first byte, so
//! [`decompress`] needs nothing but the stream and an output capacity.
//! Streams are bit-compatible with upstream FastLZ.
//!
//! # Example
//!
//! ```
//! use oxilz_fastlz::{Level, compress_to_vec, decompress_to_vec};
//!
//! let data = b"Hello, World! Hello, World! Hello, World!";
//! let compressed = compress_to_vec(Level::High, data).unwrap();
//! let decompressed = decompress_to_vec(&compressed, data.len()).unwrap();
//! assert_eq!(decompressed, data);
//! ```
//!
//! # Buffers
//!
//! Compression needs at least [`MIN_INPUT_LEN`] bytes of input and an output
//! buffer of [`max_compressed_size`] bytes; incompressible data grows by up to
//! 5%. Shorter inputs can still be written as a valid stream with [`store`].
//! Decompression never writes past the end of the output slice and
//! reports malformed input as [`OxiLzError::CorruptedData`]; a stream never
//! decodes to more than [`max_decompressed_size`] bytes.

mod compress;
mod decompress;
mod encode;
mod level;
mod primitives;
mod trace;

pub use level::{Level, MAX_COPY, MAX_FARDISTANCE, MAX_L1_DISTANCE, MAX_L2_DISTANCE, MAX_LEN};
pub use primitives::{HASH_LOG, HASH_SIZE};

use oxilz_core::error::{OxiLzError, Result};

/// Smallest input [`compress`] accepts.
pub const MIN_INPUT_LEN: usize = 16;

/// Smallest output buffer [`compress`] accepts, whatever the input length.
pub const MIN_OUTPUT_LEN: usize = 66;

/// Output capacity [`compress`] requires for `input_len` bytes:
/// `max(66, ceil(1.05 * input_len))`.
pub fn max_compressed_size(input_len: usize) -> usize {
    (input_len + input_len.div_ceil(20)).max(MIN_OUTPUT_LEN)
}

/// Most output bytes a single input byte of a stream can produce.
///
/// Reached by level-2 length continuation bytes, each adding 255 to a match.
pub const MAX_EXPANSION: usize = 255;

/// Upper bound on the decompressed size of a `compressed_len`-byte stream.
pub fn max_decompressed_size(compressed_len: usize) -> usize {
    compressed_len.saturating_mul(MAX_EXPANSION)
}

/// Size of the literal-only stream [`store`] writes for `input_len` bytes.
pub fn stored_size(input_len: usize) -> usize {
    input_len + input_len.div_ceil(MAX_COPY)
}

/// Write `input` as a literal-only stream marked with `level`.
///
/// Accepts any non-empty input, including inputs shorter than
/// [`MIN_INPUT_LEN`]. Returns the number of bytes written.
///
/// # Errors
///
/// - [`OxiLzError::InvalidInput`] if `input` is empty.
/// - [`OxiLzError::BufferTooSmall`] if `output` is shorter than
///   [`stored_size`]`(input.len())`.
pub fn store(level: Level, input: &[u8], output: &mut [u8]) -> Result<usize> {
    if input.is_empty() {
        return Err(OxiLzError::invalid_input("cannot store an empty input"));
    }

    let needed = stored_size(input.len());
    if output.len() < needed {
        return Err(OxiLzError::buffer_too_small(needed, output.len()));
    }

    let mut writer = encode::TokenWriter::new(output);
    encode::encode_literals(&mut writer, input);
    writer.mark_first(level.marker());
    let written = writer.position();
    trace::trace_compressed(level, input.len(), written);
    Ok(written)
}

/// Store `input` as literals into a newly allocated buffer.
pub fn store_to_vec(level: Level, input: &[u8]) -> Result<Vec<u8>> {
    let mut output = vec![0u8; stored_size(input.len())];
    let written = store(level, input, &mut output)?;
    output.truncate(written);
    Ok(output)
}

/// Compress `input` into `output`, returning the compressed length.
///
/// # Errors
///
/// - [`OxiLzError::InvalidInput`] if `input` is shorter than [`MIN_INPUT_LEN`].
/// - [`OxiLzError::BufferTooSmall`] if `output` is shorter than
///   [`max_compressed_size`]`(input.len())`.
pub fn compress(level: Level, input: &[u8], output: &mut [u8]) -> Result<usize> {
    if input.len() < MIN_INPUT_LEN {
        return Err(OxiLzError::invalid_input(format!(
            "input is {} bytes, at least {} required",
            input.len(),
            MIN_INPUT_LEN
        )));
    }

    let needed = max_compressed_size(input.len());
    if output.len() < needed {
        return Err(OxiLzError::buffer_too_small(needed, output.len()));
    }

    let written = compress::compress_block(level.params(), input, output);
    trace::trace_compressed(level, input.len(), written);
    Ok(written)
}

/// Decompress a level-1 or level-2 stream into `output`.
///
/// `output.len()` is the maximum decompressed size; it is never exceeded.
/// Returns the number of bytes written. On error the contents of `output`
/// are unspecified.
///
/// # Errors
///
/// [`OxiLzError::CorruptedData`] if the stream is empty, names an unknown
/// level, is truncated, references data before the start of the output, or
/// would decode to more than `output.len()` bytes.
pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize> {
    let level = stream_level(input)?;
    let written = decompress::decompress_block(level.params(), input, output)?;
    trace::trace_decompressed(level, input.len(), written);
    Ok(written)
}

/// Compress `input` into a newly allocated buffer.
pub fn compress_to_vec(level: Level, input: &[u8]) -> Result<Vec<u8>> {
    let mut output = vec![0u8; max_compressed_size(input.len())];
    let written = compress(level, input, &mut output)?;
    output.truncate(written);
    Ok(output)
}

/// Decompress `input` into a newly allocated buffer of at most `max_output` bytes.
pub fn decompress_to_vec(input: &[u8], max_output: usize) -> Result<Vec<u8>> {
    let mut output = vec![0u8; max_output];
    let written = decompress(input, &mut output)?;
    output.truncate(written);
    Ok(output)
}

/// Read the level marker of a compressed stream.
///
/// # Errors
///
/// [`OxiLzError::CorruptedData`] if `input` is empty or the marker is not 0 or 1.
pub fn stream_level(input: &[u8]) -> Result<Level> {
    let Some(&first) = input.first() else {
        trace::trace_bad_header("empty input");
        return Err(OxiLzError::corrupted(0, "empty input"));
    };
    Level::from_marker(first).ok_or_else(|| {
        trace::trace_bad_header("unknown level marker");
        OxiLzError::corrupted(0, format!("unknown level marker {}", first >> 5))
    })
}
