//! Single-pass hashing match finder.
//!
//! The finder keeps one hash table slot per 3-byte prefix holding the most
//! recent position that produced it. Each position is looked up and then
//! immediately recorded, so a slot always points at the latest producer.
//! There is no chaining: a candidate either confirms its 3-byte prefix or
//! the scan moves on by one byte.

use crate::encode::{TokenWriter, encode_literals};
use crate::level::LevelParams;
use crate::primitives::{HASH_SIZE, compare, hash, read_u32_le};

/// Compared against masked 24-bit sequences; never equal to any of them.
const NO_MATCH: u32 = 0x100_0000;

/// Trailing bytes never used as a match start (12 plus one for the 4-byte reads).
const SCAN_MARGIN: usize = 12 + 1;

/// Compress `input` into `output` with the given level parameters.
///
/// Requires `input.len() >= 16` and an output sized for the worst case;
/// both are checked by the public API. Returns the number of bytes written.
pub(crate) fn compress_block(params: &LevelParams, input: &[u8], output: &mut [u8]) -> usize {
    let mut writer = TokenWriter::new(output);
    let mut finder = MatchFinder::new(input, params);
    finder.encode(&mut writer);
    writer.mark_first(params.level.marker());
    writer.position()
}

/// Hashing match finder for one compression call.
struct MatchFinder<'a> {
    input: &'a [u8],
    params: &'a LevelParams,
    hash_table: Vec<usize>,
}

impl<'a> MatchFinder<'a> {
    fn new(input: &'a [u8], params: &'a LevelParams) -> Self {
        Self {
            input,
            params,
            hash_table: vec![0; HASH_SIZE],
        }
    }

    /// Record `pos` for `sequence`, returning the previous occupant.
    #[inline(always)]
    fn insert(&mut self, sequence: u32, pos: usize) -> usize {
        let slot = hash(sequence & 0xFF_FFFF);
        std::mem::replace(&mut self.hash_table[slot], pos)
    }

    /// Run the scan, emitting literal and match tokens.
    fn encode(&mut self, writer: &mut TokenWriter<'_>) {
        let input = self.input;
        let len = input.len();
        let ip_bound = len - 4;
        let ip_limit = len - SCAN_MARGIN;

        let mut ip = 2;
        let mut anchor = 0;

        'scan: while ip < ip_limit {
            // Find a candidate whose first 3 bytes match
            let (reference, distance) = loop {
                let sequence = read_u32_le(input, ip) & 0xFF_FFFF;
                let reference = self.insert(sequence, ip);
                let distance = ip - reference;
                let candidate = if distance < self.params.max_distance {
                    read_u32_le(input, reference) & 0xFF_FFFF
                } else {
                    NO_MATCH
                };

                if ip >= ip_limit {
                    break 'scan;
                }
                ip += 1;
                if sequence == candidate {
                    break (reference, distance);
                }
            };

            if ip >= ip_limit {
                break;
            }
            ip -= 1;

            // Far candidates must confirm 5 bytes, otherwise move on
            if let Some(far) = self.params.far_min_distance {
                if distance >= far
                    && (input[reference + 3] != input[ip + 3]
                        || input[reference + 4] != input[ip + 4])
                {
                    ip += 1;
                    continue;
                }
            }

            encode_literals(writer, &input[anchor..ip]);

            let match_len = compare(input, reference + 3, ip + 3, ip_bound);
            (self.params.encode_match)(writer, match_len, distance);

            // Refresh the table at the match boundary
            ip += match_len;
            let sequence = read_u32_le(input, ip);
            self.insert(sequence, ip);
            ip += 1;
            self.insert(sequence >> 8, ip);
            ip += 1;

            anchor = ip;
        }

        encode_literals(writer, &input[anchor..]);
    }
}
