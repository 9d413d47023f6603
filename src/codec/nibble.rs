//! Byte <-> nibble decomposition
//!
//! A byte decomposes into its high and low 4-bit halves, high first. The
//! cipher maps each nibble to one tile, so a text of `n` bytes always
//! occupies exactly `2n` grid cells.

use crate::io::error::{CodecError, Result};

/// Split a byte into its (high, low) nibble pair
pub const fn split(byte: u8) -> (u8, u8) {
    (byte >> 4, byte & 0x0F)
}

/// Recombine a (high, low) nibble pair into a byte
pub const fn combine(high: u8, low: u8) -> u8 {
    (high << 4) | (low & 0x0F)
}

/// Expand bytes into their nibble sequence, high nibble first
///
/// Preserves byte order; the result is exactly twice as long as the input.
pub fn to_nibbles(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&byte| {
            let (high, low) = split(byte);
            [high, low]
        })
        .collect()
}

/// Recombine consecutive (high, low) nibble pairs into bytes
///
/// # Errors
///
/// Returns `TruncatedSequence` when the nibble count is odd
pub fn to_bytes(nibbles: &[u8]) -> Result<Vec<u8>> {
    if nibbles.len() % 2 != 0 {
        return Err(CodecError::TruncatedSequence {
            nibbles: nibbles.len(),
        });
    }

    let mut bytes = Vec::with_capacity(nibbles.len() / 2);
    for pair in nibbles.chunks_exact(2) {
        if let [high, low] = *pair {
            bytes.push(combine(high, low));
        }
    }
    Ok(bytes)
}
