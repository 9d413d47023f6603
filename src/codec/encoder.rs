//! Text-to-canvas encoding
//!
//! Maps the UTF-8 bytes of a text to a nibble sequence, then blits the
//! corresponding reference tile into each cell of a square transparent
//! canvas. Cells past the end of the sequence stay fully transparent and
//! act as the padding sentinel the decoder strips.

use image::{RgbaImage, imageops};
use std::fs;
use std::path::Path;

use crate::catalog::TileCatalog;
use crate::codec::{layout, nibble};
use crate::io::configuration::TILE_SIZE;
use crate::io::error::{CodecError, Result};

/// Encipher a text into a square tile-grid canvas
///
/// The canvas side is the smallest whole number of tiles that holds the
/// nibble sequence. Tiles are copied into their cells exactly, with no
/// blending, so the output is deterministic down to the pixel. An empty
/// text yields a 0x0 canvas.
pub fn encode(catalog: &TileCatalog, text: &str) -> RgbaImage {
    let nibbles = nibble::to_nibbles(text.as_bytes());
    let side = layout::grid_side(nibbles.len());

    // ImageBuffer::new zero-fills, giving a fully transparent background
    let mut canvas = RgbaImage::new(side * TILE_SIZE, side * TILE_SIZE);

    for (index, &value) in nibbles.iter().enumerate() {
        let (x, y) = layout::cell_offset(index, side);
        imageops::replace(&mut canvas, catalog.tile(value), i64::from(x), i64::from(y));
    }

    canvas
}

/// Encipher a text and persist the canvas as a PNG file
///
/// The parent directory is created if missing.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created (`FileSystem`)
/// - The canvas cannot be saved (`ImageExport`); this includes the 0x0
///   canvas of an empty text, which PNG cannot represent
pub fn encode_to_file<P: AsRef<Path>>(catalog: &TileCatalog, text: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let canvas = encode(catalog, text);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| CodecError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    canvas.save(path).map_err(|source| CodecError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
