//! Canvas-to-text decoding via exact tile matching
//!
//! Slices the canvas into tile-sized cells in the encoder's layout order and
//! identifies each cell by exact pixel equality against the catalog. Fully
//! transparent cells are the padding sentinel: valid only as a trailing run,
//! which is stripped before nibbles recombine into bytes.

use image::{RgbaImage, imageops};
use std::path::Path;

use crate::catalog::{TileCatalog, is_fully_transparent};
use crate::codec::{layout, nibble};
use crate::io::configuration::TILE_SIZE;
use crate::io::error::{CodecError, Result};

/// Decipher a tile-grid canvas back into its text
///
/// A 0x0 image decodes to the empty string.
///
/// # Errors
///
/// Returns an error if:
/// - The image is not a square whole-cell grid (`MalformedImage`)
/// - A cell matches no catalog tile, or a blank cell appears before a
///   tile cell (`UnrecognizedTile`)
/// - The recovered nibble count is odd (`TruncatedSequence`)
/// - The recombined bytes are not valid UTF-8 (`InvalidEncoding`)
pub fn decode(catalog: &TileCatalog, image: &RgbaImage) -> Result<String> {
    let (width, height) = image.dimensions();
    if width != height || width % TILE_SIZE != 0 {
        return Err(CodecError::MalformedImage { width, height });
    }

    let side = width / TILE_SIZE;
    let cell_count = (side * side) as usize;
    let mut nibbles = Vec::with_capacity(cell_count);
    let mut blank_start: Option<u32> = None;

    for index in 0..cell_count {
        let (x, y) = layout::cell_offset(index, side);
        let cell = imageops::crop_imm(image, x, y, TILE_SIZE, TILE_SIZE).to_image();

        if is_fully_transparent(&cell) {
            blank_start.get_or_insert(index as u32);
            continue;
        }

        // An interior blank is indistinguishable from a corrupted tile
        if let Some(cell_index) = blank_start {
            return Err(CodecError::UnrecognizedTile {
                cell: cell_index,
                side,
            });
        }

        match catalog.match_cell(&cell) {
            Some(value) => nibbles.push(value),
            None => {
                return Err(CodecError::UnrecognizedTile {
                    cell: index as u32,
                    side,
                });
            }
        }
    }

    let bytes = nibble::to_bytes(&nibbles)?;
    String::from_utf8(bytes).map_err(|source| CodecError::InvalidEncoding { source })
}

/// Load an image from disk and decipher it
///
/// # Errors
///
/// Returns `ImageLoad` when the file cannot be opened or decoded, plus any
/// error [`decode`] reports.
pub fn decode_file<P: AsRef<Path>>(catalog: &TileCatalog, path: P) -> Result<String> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| CodecError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    decode(catalog, &img.to_rgba8())
}
