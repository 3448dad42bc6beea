//! Adler-32 checksum (RFC 1950, section 8.2).
//!
//! Adler-32 is the checksum block-oriented FastLZ tooling uses to verify each
//! chunk. It is two running sums modulo 65521:
//!
//! - `s1` = 1 + sum of all bytes
//! - `s2` = sum of every intermediate `s1`
//!
//! ## Performance Optimization
//!
//! The modulo is deferred: `NMAX` (5552) is the largest number of bytes that
//! can be summed before `s2` may overflow a `u32`, so the reduction happens
//! once per `NMAX` block. Inside a block, bytes are consumed 8 at a time.

/// Largest prime smaller than 65536.
const ADLER32_BASE: u32 = 65521;

/// Bytes that can be accumulated before a modulo reduction is required.
const NMAX: usize = 5552;

/// Adler-32 calculator.
///
/// # Example
///
/// ```
/// use oxilz_core::checksum::Adler32;
///
/// let mut adler = Adler32::new();
/// adler.update(b"Wiki");
/// adler.update(b"pedia");
/// assert_eq!(adler.finalize(), 0x11E6_0398);
/// ```
#[derive(Debug, Clone)]
pub struct Adler32 {
    s1: u32,
    s2: u32,
}

impl Adler32 {
    /// Create a new Adler-32 calculator (initial value 1).
    pub fn new() -> Self {
        Self { s1: 1, s2: 0 }
    }

    /// Resume from a previously computed checksum value.
    pub fn from_value(value: u32) -> Self {
        Self {
            s1: value & 0xFFFF,
            s2: value >> 16,
        }
    }

    /// Reset the checksum to its initial state.
    pub fn reset(&mut self) {
        self.s1 = 1;
        self.s2 = 0;
    }

    /// Update the checksum with more data.
    pub fn update(&mut self, data: &[u8]) {
        let mut s1 = self.s1;
        let mut s2 = self.s2;

        for block in data.chunks(NMAX) {
            let mut octets = block.chunks_exact(8);
            for octet in &mut octets {
                for &byte in octet {
                    s1 += u32::from(byte);
                    s2 += s1;
                }
            }
            for &byte in octets.remainder() {
                s1 += u32::from(byte);
                s2 += s1;
            }
            s1 %= ADLER32_BASE;
            s2 %= ADLER32_BASE;
        }

        self.s1 = s1;
        self.s2 = s2;
    }

    /// Get the current checksum value.
    #[inline(always)]
    pub fn value(&self) -> u32 {
        (self.s2 << 16) | self.s1
    }

    /// Finalize and return the checksum value.
    #[inline(always)]
    pub fn finalize(self) -> u32 {
        self.value()
    }

    /// Compute Adler-32 for a slice in one call.
    #[inline]
    pub fn compute(data: &[u8]) -> u32 {
        let mut adler = Self::new();
        adler.update(data);
        adler.finalize()
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}
