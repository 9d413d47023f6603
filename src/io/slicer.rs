//! Tile-sheet slicing for one-time catalog setup
//!
//! Cuts a source sheet image into an evenly sized grid of sub-images and
//! writes them out as indexed catalog files, top-left to bottom-right. A 4x4
//! sheet of 32x32 cells produces the complete sixteen-tile catalog.

use image::imageops;
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::configuration::tile_file_name;
use crate::io::error::{CodecError, Result, invalid_parameter};

/// Slice a sheet image into `rows x cols` tiles and write them as
/// `i0.png` .. `i<rows*cols-1>.png` in the output directory
///
/// The sheet dimensions must divide evenly: silent truncation would drop
/// edge pixels and produce tiles that can never exactly match their sheet
/// regions. The output directory is created if absent. Returns the written
/// paths in index order.
///
/// # Errors
///
/// Returns an error if:
/// - `rows` or `cols` is zero (`InvalidParameter`)
/// - The sheet cannot be loaded (`ImageLoad`)
/// - The sheet dimensions are not divisible by the grid (`MalformedImage`)
/// - The output directory cannot be created (`FileSystem`)
/// - A tile cannot be saved (`ImageExport`)
pub fn slice_sheet<P: AsRef<Path>, Q: AsRef<Path>>(
    sheet_path: P,
    output_dir: Q,
    rows: u32,
    cols: u32,
) -> Result<Vec<PathBuf>> {
    let sheet_path = sheet_path.as_ref();
    let output_dir = output_dir.as_ref();

    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{rows}x{cols}"),
            &"sheet grid must have at least one row and column",
        ));
    }

    let sheet = image::open(sheet_path)
        .map_err(|source| CodecError::ImageLoad {
            path: sheet_path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = sheet.dimensions();
    if width % cols != 0 || height % rows != 0 {
        return Err(CodecError::MalformedImage { width, height });
    }
    let tile_width = width / cols;
    let tile_height = height / rows;

    fs::create_dir_all(output_dir).map_err(|source| CodecError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source,
    })?;

    let mut paths = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let tile = imageops::crop_imm(
                &sheet,
                col * tile_width,
                row * tile_height,
                tile_width,
                tile_height,
            )
            .to_image();

            let path = output_dir.join(tile_file_name(paths.len()));
            tile.save(&path).map_err(|source| CodecError::ImageExport {
                path: path.clone(),
                source,
            })?;
            paths.push(path);
        }
    }

    Ok(paths)
}
