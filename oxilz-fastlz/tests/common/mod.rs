//! Shared helpers for the integration tests.

#![allow(dead_code)]

/// Pseudo-random bytes from a 64-bit LCG (reproducible, no RNG crate).
pub fn random_bytes(size: usize, mut seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

/// Pseudo-random lowercase letters from a 32-bit LCG.
pub fn random_lowercase(size: usize, mut seed: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
        data.push(b'a' + ((seed >> 16) % 26) as u8);
    }
    data
}

/// Repeated English text.
pub fn text_like(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. \
                 Pack my box with five dozen liquor jugs. \
                 How vexingly quick daft zebras jump! ";
    text.iter().copied().cycle().take(size).collect()
}

/// Counting bytes (wraps every 256).
pub fn sequential(size: usize) -> Vec<u8> {
    (0..size).map(|i| i as u8).collect()
}

/// A decoded token, for inspecting encoder output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(Vec<u8>),
    Match { len: usize, distance: usize, far: bool },
}

/// Split a well-formed stream into tokens. Panics on malformed input.
pub fn tokens(stream: &[u8]) -> Vec<Token> {
    let level2 = stream[0] >> 5 == 1;
    let mut out = Vec::new();
    let mut ip = 1;
    let mut ctrl = stream[0] & 31;

    loop {
        if ctrl >= 32 {
            let mut len = usize::from(ctrl >> 5) - 1;
            let high = usize::from(ctrl & 31) << 8;
            if len == 6 {
                loop {
                    let code = stream[ip];
                    ip += 1;
                    len += usize::from(code);
                    if !level2 || code != 255 {
                        break;
                    }
                }
            }
            let code = stream[ip];
            ip += 1;
            let mut distance = high + usize::from(code) + 1;
            let mut far = false;
            if level2 && code == 255 && high == 31 << 8 {
                distance = ((usize::from(stream[ip]) << 8) | usize::from(stream[ip + 1])) + 8192;
                ip += 2;
                far = true;
            }
            out.push(Token::Match {
                len: len + 3,
                distance,
                far,
            });
        } else {
            let run = usize::from(ctrl) + 1;
            out.push(Token::Literal(stream[ip..ip + run].to_vec()));
            ip += run;
        }

        let min_remaining = if level2 { 1 } else { 2 };
        if stream.len() - ip < min_remaining {
            break;
        }
        ctrl = stream[ip];
        ip += 1;
    }

    out
}

/// Number of match tokens in a stream.
pub fn match_count(stream: &[u8]) -> usize {
    tokens(stream)
        .iter()
        .filter(|t| matches!(t, Token::Match { .. }))
        .count()
}
