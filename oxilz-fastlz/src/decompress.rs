//! Token interpreter for level-1 and level-2 streams.
//!
//! The compressed stream is untrusted. Every byte read, every output extent
//! and every back-reference start is checked before memory is touched, and
//! any violation is reported as [`OxiLzError::CorruptedData`] carrying the
//! input offset of the offending token.

use crate::level::{LevelParams, MAX_L2_DISTANCE, MatchFormat};
use crate::primitives::forward_copy;
use crate::trace;
use oxilz_core::error::{OxiLzError, Result};

/// Decode `input` into `output`, never writing past `output.len()`.
///
/// Returns the number of bytes produced.
pub(crate) fn decompress_block(
    params: &LevelParams,
    input: &[u8],
    output: &mut [u8],
) -> Result<usize> {
    let mut decoder = BlockDecoder::new(input, params);
    decoder.decode(output)
}

/// Read cursor plus the level rules for one stream.
struct BlockDecoder<'a> {
    input: &'a [u8],
    pos: usize,
    params: &'a LevelParams,
}

impl<'a> BlockDecoder<'a> {
    fn new(input: &'a [u8], params: &'a LevelParams) -> Self {
        Self {
            input,
            pos: 0,
            params,
        }
    }

    fn decode(&mut self, output: &mut [u8]) -> Result<usize> {
        let op_limit = output.len();
        let mut op = 0;

        // The level marker shares the first control byte
        let mut ctrl = self.read_byte()? & 31;

        loop {
            let token_start = self.pos - 1;

            if ctrl >= 32 {
                let (len, distance) = self.read_match(ctrl, token_start)?;

                if op + len > op_limit {
                    return Err(self.corrupt(token_start, "match exceeds output capacity"));
                }
                let Some(src) = op.checked_sub(distance) else {
                    return Err(self.corrupt(token_start, "back-reference before output start"));
                };

                forward_copy(output, src, op, len);
                op += len;
            } else {
                let run = usize::from(ctrl) + 1;

                if op + run > op_limit {
                    return Err(self.corrupt(token_start, "literal run exceeds output capacity"));
                }
                if self.pos + run > self.input.len() {
                    return Err(self.corrupt(token_start, "truncated literal run"));
                }

                output[op..op + run].copy_from_slice(&self.input[self.pos..self.pos + run]);
                self.pos += run;
                op += run;
            }

            if self.remaining() < self.params.min_token_len {
                break;
            }
            ctrl = self.read_byte()?;
        }

        Ok(op)
    }

    /// Decode the rest of a match token, returning `(length, distance)`.
    fn read_match(&mut self, ctrl: u8, token_start: usize) -> Result<(usize, usize)> {
        let mut len = usize::from(ctrl >> 5) - 1;
        let high = usize::from(ctrl & 31) << 8;

        if len == 7 - 1 {
            match self.params.match_format {
                MatchFormat::Compact => {
                    self.require(2, token_start, "truncated match length")?;
                    len += usize::from(self.read_byte()?);
                }
                MatchFormat::Extended => loop {
                    self.require(2, token_start, "truncated match length")?;
                    let code = self.read_byte()?;
                    len += usize::from(code);
                    if code != 255 {
                        break;
                    }
                },
            }
        }

        let code = self.read_byte()?;
        let mut distance = high + usize::from(code) + 1;
        len += 3;

        let far_marker = code == 255 && high == 31 << 8;
        if far_marker && self.params.match_format == MatchFormat::Extended {
            self.require(3, token_start, "truncated far distance")?;
            let far = (usize::from(self.read_byte()?) << 8) | usize::from(self.read_byte()?);
            distance = far + MAX_L2_DISTANCE + 1;
        }

        Ok((len, distance))
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Fail unless at least `count` input bytes remain.
    #[inline]
    fn require(&self, count: usize, token_start: usize, message: &str) -> Result<()> {
        if self.remaining() < count {
            return Err(self.corrupt(token_start, message));
        }
        Ok(())
    }

    #[inline]
    fn read_byte(&mut self) -> Result<u8> {
        let Some(&byte) = self.input.get(self.pos) else {
            return Err(self.corrupt(self.pos, "unexpected end of input"));
        };
        self.pos += 1;
        Ok(byte)
    }

    fn corrupt(&self, offset: usize, message: &str) -> OxiLzError {
        trace::trace_rejected(self.params.level, offset, message);
        OxiLzError::corrupted(offset as u64, message)
    }
}
