//! Token encoders.
//!
//! Token layout (`d` = distance - 1, `L` = match length - 2):
//!
//! ```text
//! literal run   000nnnnn  <n+1 raw bytes>                  n+1 in 1..=32
//! short match   LLLddddd  dddddddd                         L in 1..=6
//! long match    111ddddd  <L-7>  dddddddd                  level 1, L <= 262
//! long match    111ddddd  FF.. <rem>  dddddddd             level 2, any L
//! far match     LLL11111 [FF.. <rem>]  FF  hhhhhhhh llllllll
//!                                                          level 2, d >= 8191
//! ```

use crate::level::{MAX_COPY, MAX_L2_DISTANCE, MAX_LEN};

/// Length field of a chained level-1 token carrying `MAX_LEN - 2` bytes.
const MAX_LEN_EXTENSION: u8 = (MAX_LEN - 2 - 7 - 2) as u8;

/// Write cursor over the caller's output buffer.
///
/// The public entry points check the output capacity against the worst-case
/// expansion before compression starts, so the writer indexes directly.
pub(crate) struct TokenWriter<'a> {
    output: &'a mut [u8],
    pos: usize,
}

impl<'a> TokenWriter<'a> {
    pub(crate) fn new(output: &'a mut [u8]) -> Self {
        Self { output, pos: 0 }
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, byte: u8) {
        self.output[self.pos] = byte;
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn extend(&mut self, bytes: &[u8]) {
        self.output[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Set bits in the first written byte. No-op before anything is written.
    pub(crate) fn mark_first(&mut self, bits: u8) {
        if self.pos > 0 {
            self.output[0] |= bits;
        }
    }
}

/// Emit `literals` as a sequence of literal tokens of at most 32 bytes.
pub(crate) fn encode_literals(writer: &mut TokenWriter<'_>, literals: &[u8]) {
    for chunk in literals.chunks(MAX_COPY) {
        writer.push((chunk.len() - 1) as u8);
        writer.extend(chunk);
    }
}

/// Emit a level-1 match. `len` is the biased length (actual - 2).
pub(crate) fn encode_match_level1(writer: &mut TokenWriter<'_>, mut len: usize, distance: usize) {
    let d = distance - 1;
    let high = (d >> 8) as u8;
    let low = (d & 0xFF) as u8;

    while len > MAX_LEN - 2 {
        writer.push((7 << 5) + high);
        writer.push(MAX_LEN_EXTENSION);
        writer.push(low);
        len -= MAX_LEN - 2;
    }

    if len < 7 {
        writer.push(((len as u8) << 5) + high);
        writer.push(low);
    } else {
        writer.push((7 << 5) + high);
        writer.push((len - 7) as u8);
        writer.push(low);
    }
}

/// Emit a level-2 match. `len` is the biased length (actual - 2).
pub(crate) fn encode_match_level2(writer: &mut TokenWriter<'_>, len: usize, distance: usize) {
    let mut d = distance - 1;

    if d < MAX_L2_DISTANCE {
        let high = (d >> 8) as u8;
        push_level2_length(writer, len, high);
        writer.push((d & 0xFF) as u8);
    } else {
        d -= MAX_L2_DISTANCE;
        push_level2_length(writer, len, 31);
        writer.push(255);
        writer.push((d >> 8) as u8);
        writer.push((d & 0xFF) as u8);
    }
}

/// Control byte plus the `0xFF`-continued length bytes.
fn push_level2_length(writer: &mut TokenWriter<'_>, len: usize, distance_bits: u8) {
    if len < 7 {
        writer.push(((len as u8) << 5) + distance_bits);
        return;
    }

    writer.push((7 << 5) + distance_bits);
    let mut rest = len - 7;
    while rest >= 255 {
        writer.push(255);
        rest -= 255;
    }
    writer.push(rest as u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_with(f: impl FnOnce(&mut TokenWriter<'_>)) -> Vec<u8> {
        let mut buf = vec![0u8; 128];
        let mut writer = TokenWriter::new(&mut buf);
        f(&mut writer);
        let len = writer.position();
        buf.truncate(len);
        buf
    }

    #[test]
    fn test_literals_empty() {
        assert!(encode_with(|w| encode_literals(w, &[])).is_empty());
    }

    #[test]
    fn test_literals_split_at_32() {
        let data: Vec<u8> = (0..33).collect();
        let out = encode_with(|w| encode_literals(w, &data));
        assert_eq!(out.len(), 35);
        assert_eq!(out[0], 31);
        assert_eq!(&out[1..33], &data[..32]);
        assert_eq!(out[33], 0);
        assert_eq!(out[34], 32);
    }

    #[test]
    fn test_level1_short_match() {
        assert_eq!(encode_with(|w| encode_match_level1(w, 1, 1)), [0x20, 0x00]);
        assert_eq!(
            encode_with(|w| encode_match_level1(w, 6, 0x1FFF + 1)),
            [0xDF, 0xFF]
        );
    }

    #[test]
    fn test_level1_long_match() {
        assert_eq!(
            encode_with(|w| encode_match_level1(w, 7, 0x1234 + 1)),
            [0xF2, 0x00, 0x34]
        );
        assert_eq!(
            encode_with(|w| encode_match_level1(w, 262, 1)),
            [0xE0, 255, 0x00]
        );
    }

    #[test]
    fn test_level1_chains_overlong_match() {
        let out = encode_with(|w| encode_match_level1(w, 263, 2));
        assert_eq!(out, [0xE0, 253, 0x01, 0x20, 0x01]);
    }

    #[test]
    fn test_level2_near_match() {
        assert_eq!(encode_with(|w| encode_match_level2(w, 3, 1)), [0x60, 0x00]);
        assert_eq!(
            encode_with(|w| encode_match_level2(w, 7 + 254, 1)),
            [0xE0, 254, 0x00]
        );
        assert_eq!(
            encode_with(|w| encode_match_level2(w, 7 + 255, 1)),
            [0xE0, 255, 0, 0x00]
        );
        assert_eq!(
            encode_with(|w| encode_match_level2(w, 7 + 255 + 3, 8191)),
            [0xFF, 255, 3, 0xFE]
        );
    }

    #[test]
    fn test_level2_far_match() {
        // d = 9999, minus 8191 = 1808 = 0x0710
        assert_eq!(
            encode_with(|w| encode_match_level2(w, 3, 10_000)),
            [0x7F, 0xFF, 0x07, 0x10]
        );
        assert_eq!(
            encode_with(|w| encode_match_level2(w, 10, 8192)),
            [0xFF, 3, 0xFF, 0x00, 0x00]
        );
    }

    #[test]
    fn test_mark_first() {
        let mut buf = vec![0u8; 4];
        let mut writer = TokenWriter::new(&mut buf);
        writer.mark_first(0x20);
        assert_eq!(writer.position(), 0);
        writer.push(0x05);
        writer.mark_first(0x20);
        assert_eq!(buf[0], 0x25);
    }
}
