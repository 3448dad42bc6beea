//! Tracing hooks.
//!
//! Compiled to no-ops unless the `tracing` feature is enabled.

use crate::level::Level;

/// Target for all codec events.
#[cfg(feature = "tracing")]
const FASTLZ_TARGET: &str = "oxilz::fastlz";

/// Traces a finished compression call.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_compressed(level: Level, input_len: usize, output_len: usize) {
    tracing::trace!(
        target: FASTLZ_TARGET,
        level = level.number(),
        input_len = input_len,
        output_len = output_len,
        "compress: block done"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_compressed(_level: Level, _input_len: usize, _output_len: usize) {}

/// Traces a finished decompression call.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_decompressed(level: Level, input_len: usize, output_len: usize) {
    tracing::trace!(
        target: FASTLZ_TARGET,
        level = level.number(),
        input_len = input_len,
        output_len = output_len,
        "decompress: block done"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_decompressed(_level: Level, _input_len: usize, _output_len: usize) {}

/// Traces a stream rejected by the decoder.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_rejected(level: Level, offset: usize, reason: &str) {
    tracing::debug!(
        target: FASTLZ_TARGET,
        level = level.number(),
        offset = offset,
        reason = reason,
        "decompress: stream rejected"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_rejected(_level: Level, _offset: usize, _reason: &str) {}

/// Traces a stream whose first byte does not name a level.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_bad_header(reason: &str) {
    tracing::debug!(
        target: FASTLZ_TARGET,
        reason = reason,
        "decompress: stream rejected"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_bad_header(_reason: &str) {}
