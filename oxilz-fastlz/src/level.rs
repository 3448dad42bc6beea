//! Compression levels and the per-level constants that drive the shared
//! match finder and token interpreter.
//!
//! Level 1 and level 2 run the same scan and the same decode loop. What
//! differs is captured in [`LevelParams`]: how far back the finder may look,
//! whether far candidates need a longer confirmed prefix, how a match token
//! is laid out on the wire, and when the decoder stops reading.

use crate::encode::{self, TokenWriter};
use oxilz_core::error::{OxiLzError, Result};
use std::fmt;

/// Maximum number of literal bytes carried by one literal token.
pub const MAX_COPY: usize = 32;

/// Longest match a single level-1 token can describe (256 + 8).
pub const MAX_LEN: usize = 264;

/// Level-1 back-reference reach.
pub const MAX_L1_DISTANCE: usize = 8192;

/// Level-2 near-distance reach; anything further uses the 16-bit extension.
pub const MAX_L2_DISTANCE: usize = 8191;

/// Level-2 far-distance reach.
pub const MAX_FARDISTANCE: usize = 65535 + MAX_L2_DISTANCE - 1;

/// FastLZ compression level.
///
/// The level is recorded in the top three bits of the first byte of every
/// compressed stream, so decompression never needs to be told which level
/// produced its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Level 1: fastest, back-references up to 8192 bytes.
    #[default]
    Fast,
    /// Level 2: better ratio, far back-references and unbounded match lengths.
    High,
}

impl Level {
    /// Numeric FastLZ level (`1` or `2`).
    pub const fn number(self) -> u8 {
        match self {
            Self::Fast => 1,
            Self::High => 2,
        }
    }

    /// Bits OR-ed into the first output byte to mark the level.
    pub const fn marker(self) -> u8 {
        (self.number() - 1) << 5
    }

    /// Identify the level from the first byte of a compressed stream.
    pub const fn from_marker(first_byte: u8) -> Option<Self> {
        match first_byte >> 5 {
            0 => Some(Self::Fast),
            1 => Some(Self::High),
            _ => None,
        }
    }

    pub(crate) fn params(self) -> &'static LevelParams {
        match self {
            Self::Fast => &LEVEL1,
            Self::High => &LEVEL2,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = OxiLzError;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(Self::Fast),
            2 => Ok(Self::High),
            other => Err(OxiLzError::unsupported_level(other)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.number())
    }
}

/// Wire layout of match tokens past the 3-bit length code and 13-bit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchFormat {
    /// One length byte; longer matches are split into several tokens.
    /// Distances never exceed 13 bits.
    Compact,
    /// Lengths continue through `0xFF` bytes until a byte below `0xFF`.
    /// A distance byte of `0xFF` after a high part of 31 introduces a
    /// 16-bit far distance.
    Extended,
}

/// Level-specific constants consumed by the finder and the interpreter.
pub(crate) struct LevelParams {
    pub level: Level,
    /// Candidates at this distance or beyond are never compared.
    pub max_distance: usize,
    /// Candidates at this distance or beyond need 5 confirmed bytes.
    pub far_min_distance: Option<usize>,
    pub match_format: MatchFormat,
    /// The decoder stops once fewer input bytes than this remain.
    pub min_token_len: usize,
    pub encode_match: fn(&mut TokenWriter<'_>, usize, usize),
}

static LEVEL1: LevelParams = LevelParams {
    level: Level::Fast,
    max_distance: MAX_L1_DISTANCE,
    far_min_distance: None,
    match_format: MatchFormat::Compact,
    min_token_len: 2,
    encode_match: encode::encode_match_level1,
};

static LEVEL2: LevelParams = LevelParams {
    level: Level::High,
    max_distance: MAX_FARDISTANCE,
    far_min_distance: Some(MAX_L2_DISTANCE),
    match_format: MatchFormat::Extended,
    min_token_len: 1,
    encode_match: encode::encode_match_level2,
};
