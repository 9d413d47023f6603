//! Grid geometry for square tile layouts
//!
//! Cells are addressed in row-major order with the column varying fastest,
//! so cell `i` of a grid with side `s` sits at pixel offset
//! `((i % s) * T, (i / s) * T)`. Encoder and decoder share these functions,
//! which is what makes the cipher reversible.

use crate::io::configuration::TILE_SIZE;

/// Smallest grid side `s` such that `s * s >= sequence_len`
///
/// Equivalent to `ceil(sqrt(sequence_len))`. The float estimate is corrected
/// in integer arithmetic so the minimality property holds exactly for every
/// length. A zero-length sequence yields a zero-sided grid.
pub fn grid_side(sequence_len: usize) -> u32 {
    let estimate = (sequence_len as f64).sqrt() as u32;
    let mut side = estimate.saturating_sub(1);
    while (side as usize).saturating_mul(side as usize) < sequence_len {
        side += 1;
    }
    side
}

/// Pixel offset of the cell at `index` in a grid with the given side
///
/// # Panics
///
/// Panics if `side` is zero; callers derive it from a non-empty sequence.
pub const fn cell_offset(index: usize, side: u32) -> (u32, u32) {
    let index = index as u32;
    ((index % side) * TILE_SIZE, (index / side) * TILE_SIZE)
}
