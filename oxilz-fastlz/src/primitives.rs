//! Byte-buffer primitives shared by the compressor and the decompressor.

/// Number of bits in a hash table index.
pub const HASH_LOG: u32 = 13;

/// Number of slots in the position hash table.
pub const HASH_SIZE: usize = 1 << HASH_LOG;

const HASH_MASK: u32 = (HASH_SIZE - 1) as u32;

/// Knuth's multiplicative constant (2^32 / golden ratio).
const HASH_MULTIPLIER: u32 = 2_654_435_769;

/// Read 4 bytes at `pos` as a little-endian `u32`.
///
/// Callers guarantee `pos + 4 <= data.len()`; the finder's scan limits
/// reserve that room.
#[inline(always)]
pub(crate) fn read_u32_le(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

/// Map a 24-bit byte sequence to a hash table slot in `[0, HASH_SIZE)`.
///
/// Only bits 19..31 of the product are kept, so wrapping 32-bit arithmetic
/// gives the same slot as the widened multiply.
#[inline(always)]
pub(crate) fn hash(sequence: u32) -> usize {
    ((sequence.wrapping_mul(HASH_MULTIPLIER) >> (32 - HASH_LOG)) & HASH_MASK) as usize
}

/// Scan forward from `earlier` and `later` until a mismatch or until
/// `later` reaches `bound`, returning the number of positions advanced.
///
/// The mismatching byte is counted, so the result is one more than the
/// number of equal bytes whenever the scan stops on a mismatch. Match
/// lengths on the wire are biased by 2 to compensate.
#[inline]
pub(crate) fn compare(data: &[u8], earlier: usize, later: usize, bound: usize) -> usize {
    let mut p = earlier;
    let mut q = later;

    if read_u32_le(data, p) == read_u32_le(data, q) {
        p += 4;
        q += 4;
    }

    while q < bound {
        let equal = data[p] == data[q];
        p += 1;
        q += 1;
        if !equal {
            break;
        }
    }

    p - earlier
}

/// Copy `len` bytes from `src` to `dst` within `buf`, one byte at a time,
/// lowest address first.
///
/// When `dst - src < len` the ranges overlap and later bytes of the copy
/// read bytes written earlier by the same copy; that is how a short pattern
/// is repeated into a long run. `copy_within` (memmove semantics) would copy
/// the original source bytes instead and produce the wrong output.
///
/// Callers validate `src < dst` and `dst + len <= buf.len()`.
#[inline]
pub(crate) fn forward_copy(buf: &mut [u8], src: usize, dst: usize, len: usize) {
    for i in 0..len {
        buf[dst + i] = buf[src + i];
    }
}
