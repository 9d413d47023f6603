//! Tile catalog loading, validation, and exact-match lookup
//!
//! The catalog is the shared reference for both directions of the cipher:
//! sixteen 32x32 images, one per nibble value. It is an explicit value passed
//! into the encoder and decoder rather than an ambient resource lookup.

use image::{Rgba, RgbaImage};
use std::collections::HashMap;
use std::path::Path;

use crate::io::configuration::{CATALOG_SIZE, TILE_SIZE, tile_file_name};
use crate::io::error::{CodecError, Result};

/// Complete, immutable set of sixteen reference tile images
///
/// Loading establishes the catalog invariants once: all sixteen tiles
/// present, each exactly 32x32, pairwise distinct, and none fully
/// transparent. Lookups after that are infallible or total.
#[derive(Debug)]
pub struct TileCatalog {
    tiles: Vec<RgbaImage>,
    index_by_pixels: HashMap<Vec<u8>, u8>,
}

impl TileCatalog {
    /// Load the catalog from a directory of `i0.png` .. `i15.png` files
    ///
    /// Tiles are read in ascending index order and decoded to RGBA. The
    /// decoded images are cached for the lifetime of the value; the catalog
    /// is immutable for the duration of a run, so caching cannot change
    /// output.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A tile file for any index is absent (`TileNotFound`)
    /// - A tile file exists but cannot be decoded (`ImageLoad`)
    /// - A tile violates a catalog invariant (`MalformedTile`,
    ///   `DuplicateTile`, `BlankTile`)
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut images = Vec::with_capacity(CATALOG_SIZE);

        for index in 0..CATALOG_SIZE {
            let path = dir.join(tile_file_name(index));
            if !path.exists() {
                return Err(CodecError::TileNotFound {
                    index: index as u8,
                    path,
                });
            }
            let img = image::open(&path).map_err(|source| CodecError::ImageLoad {
                path: path.clone(),
                source,
            })?;
            images.push(img.to_rgba8());
        }

        Self::from_images(images)
    }

    /// Build a catalog from in-memory images, index order matching nibble order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image count differs from sixteen (`InvalidParameter`)
    /// - Any image is not exactly 32x32 (`MalformedTile`)
    /// - Two images are pixel-identical (`DuplicateTile`)
    /// - Any image is fully transparent (`BlankTile`)
    pub fn from_images(images: Vec<RgbaImage>) -> Result<Self> {
        if images.len() != CATALOG_SIZE {
            return Err(crate::io::error::invalid_parameter(
                "tiles",
                &images.len(),
                &format!("catalog requires exactly {CATALOG_SIZE} tiles"),
            ));
        }

        let mut index_by_pixels: HashMap<Vec<u8>, u8> = HashMap::with_capacity(CATALOG_SIZE);
        for (position, img) in images.iter().enumerate() {
            let index = position as u8;
            let (width, height) = img.dimensions();
            if width != TILE_SIZE || height != TILE_SIZE {
                return Err(CodecError::MalformedTile {
                    index,
                    width,
                    height,
                });
            }
            if is_fully_transparent(img) {
                return Err(CodecError::BlankTile { index });
            }
            // The key is the full RGBA buffer, so map equality is exact
            // pixel equality across all four channels
            if let Some(first) = index_by_pixels.insert(img.as_raw().clone(), index) {
                return Err(CodecError::DuplicateTile {
                    first,
                    second: index,
                });
            }
        }

        Ok(Self {
            tiles: images,
            index_by_pixels,
        })
    }

    /// Reference tile for a nibble value
    ///
    /// The value is masked to its low four bits, so every `u8` maps to a tile.
    // Completeness is established at construction
    #[allow(clippy::indexing_slicing)]
    pub fn tile(&self, nibble: u8) -> &RgbaImage {
        &self.tiles[usize::from(nibble & 0x0F)]
    }

    /// Match a cell against the catalog by exact pixel equality
    ///
    /// Returns the nibble value of the matching tile, or `None` when no tile
    /// matches. There is no tolerance for noise or recompression artifacts.
    pub fn match_cell(&self, cell: &RgbaImage) -> Option<u8> {
        self.index_by_pixels.get(cell.as_raw().as_slice()).copied()
    }
}

/// Check whether every pixel of an image is fully transparent
///
/// Full transparency is the blank-cell sentinel: the encoder leaves trailing
/// canvas cells transparent and the decoder strips them.
pub fn is_fully_transparent(image: &RgbaImage) -> bool {
    image.pixels().all(|&Rgba([_, _, _, alpha])| alpha == 0)
}
