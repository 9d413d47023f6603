//! Reversible text-to-image cipher built on a catalog of sixteen reference tiles
//!
//! Each input byte splits into two nibbles, each nibble selects one of sixteen
//! 32x32 reference tiles, and the tiles are laid out on a square canvas.
//! Deciphering slices the canvas back into cells and matches every cell
//! pixel-for-pixel against the catalog.

#![forbid(unsafe_code)]

/// Tile catalog loading, validation, and exact-match lookup
pub mod catalog;
/// Byte/nibble decomposition, grid layout, and the encoder/decoder pair
pub mod codec;
/// Input/output operations, CLI, and error handling
pub mod io;

pub use io::error::{CodecError, Result};
