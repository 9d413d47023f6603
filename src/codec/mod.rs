//! Byte <-> tile-grid codec
//!
//! This module contains the cipher core:
//! - Byte/nibble decomposition and recombination
//! - Square grid geometry shared by both directions
//! - The encoder (text to canvas) and decoder (canvas to text)

/// Canvas-to-text decoding via exact tile matching
pub mod decoder;
/// Text-to-canvas encoding
pub mod encoder;
/// Grid geometry for square tile layouts
pub mod layout;
/// Byte <-> nibble decomposition
pub mod nibble;

pub use decoder::{decode, decode_file};
pub use encoder::{encode, encode_to_file};
