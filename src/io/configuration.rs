//! Codec constants and file-naming conventions

/// Side length of one reference tile in pixels
pub const TILE_SIZE: u32 = 32;

/// Number of reference tiles, one per nibble value
pub const CATALOG_SIZE: usize = 16;

/// Prefix of catalog tile filenames (`i0.png` through `i15.png`)
pub const TILE_FILE_PREFIX: &str = "i";

/// File extension used for catalog tiles and enciphered output
pub const OUTPUT_EXTENSION: &str = "png";

/// Default directory holding the tile catalog
pub const DEFAULT_TILE_DIR: &str = "tiles";

/// Rows in a catalog source sheet
pub const SHEET_ROWS: u32 = 4;

/// Columns in a catalog source sheet
pub const SHEET_COLS: u32 = 4;

/// Filename of the catalog tile for the given index
pub fn tile_file_name(index: usize) -> String {
    format!("{TILE_FILE_PREFIX}{index}.{OUTPUT_EXTENSION}")
}
