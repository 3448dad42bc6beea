//! Error types for OxiLZ operations.
//!
//! Compression only fails on caller contract violations (short input,
//! undersized output). Decompression treats its input as untrusted and
//! reports every malformed or truncated stream as [`OxiLzError::CorruptedData`].

use std::io;
use thiserror::Error;

/// The main error type for OxiLZ operations.
#[derive(Debug, Error)]
pub enum OxiLzError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input rejected before any work was done.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the violated precondition.
        message: String,
    },

    /// Buffer too small for operation.
    #[error("Buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall {
        /// Number of bytes needed.
        needed: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// Compression level outside the supported set.
    #[error("Unsupported compression level: {level}")]
    UnsupportedLevel {
        /// The requested level.
        level: u8,
    },

    /// Corrupted or truncated compressed stream.
    #[error("Corrupted data at offset {offset}: {message}")]
    CorruptedData {
        /// Input offset where corruption was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// Checksum mismatch after a round trip.
    #[error("Checksum mismatch: expected {expected:#010x}, computed {computed:#010x}")]
    ChecksumMismatch {
        /// Checksum of the original data.
        expected: u32,
        /// Checksum of the reconstructed data.
        computed: u32,
    },

    /// Reconstructed length differs from the original.
    #[error("Size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
}

/// Result type alias for OxiLZ operations.
pub type Result<T> = std::result::Result<T, OxiLzError>;

impl OxiLzError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(needed: usize, available: usize) -> Self {
        Self::BufferTooSmall { needed, available }
    }

    /// Create an unsupported level error.
    pub fn unsupported_level(level: u8) -> Self {
        Self::UnsupportedLevel { level }
    }

    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }

    /// Create a checksum mismatch error.
    pub fn checksum_mismatch(expected: u32, computed: u32) -> Self {
        Self::ChecksumMismatch { expected, computed }
    }

    /// Create a size mismatch error.
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Whether this error describes a malformed compressed stream.
    pub fn is_corrupted(&self) -> bool {
        matches!(self, Self::CorruptedData { .. })
    }
}
