//! Validates catalog invariants, sheet slicing, and file-backed round trips

use image::{Rgba, RgbaImage, imageops};
use stretchr::CodecError;
use stretchr::catalog::TileCatalog;
use stretchr::codec::{decode_file, encode_to_file};
use stretchr::io::configuration::{CATALOG_SIZE, TILE_SIZE, tile_file_name};
use stretchr::io::slicer::slice_sheet;

// Sixteen solid-color tile images, pairwise distinct in the red channel
fn solid_tiles() -> Vec<RgbaImage> {
    (0..16u8)
        .map(|i| {
            RgbaImage::from_pixel(
                TILE_SIZE,
                TILE_SIZE,
                Rgba([i * 17, 255 - i * 17, i * 9, 255]),
            )
        })
        .collect()
}

// A 4x4 sheet whose cells are the solid tiles in index order
fn solid_sheet() -> RgbaImage {
    let mut sheet = RgbaImage::new(4 * TILE_SIZE, 4 * TILE_SIZE);
    for (index, tile) in solid_tiles().iter().enumerate() {
        let x = (index as u32 % 4) * TILE_SIZE;
        let y = (index as u32 / 4) * TILE_SIZE;
        imageops::replace(&mut sheet, tile, i64::from(x), i64::from(y));
    }
    sheet
}

#[test]
fn test_slice_load_and_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let sheet_path = dir.path().join("sheet.png");
    solid_sheet().save(&sheet_path).unwrap();

    let tiles_dir = dir.path().join("tiles");
    let paths = slice_sheet(&sheet_path, &tiles_dir, 4, 4).unwrap();

    assert_eq!(paths.len(), CATALOG_SIZE);
    for (index, path) in paths.iter().enumerate() {
        assert!(path.exists());
        assert!(path.ends_with(tile_file_name(index)));
    }

    let catalog = TileCatalog::load(&tiles_dir).unwrap();
    let text = "Tile cipher!";
    let output = dir.path().join("ciphered.png");
    encode_to_file(&catalog, text, &output).unwrap();
    assert_eq!(decode_file(&catalog, &output).unwrap(), text);
}

#[test]
fn test_sliced_tiles_match_sheet_regions() {
    let dir = tempfile::tempdir().unwrap();
    let sheet_path = dir.path().join("sheet.png");
    solid_sheet().save(&sheet_path).unwrap();

    let tiles_dir = dir.path().join("tiles");
    let paths = slice_sheet(&sheet_path, &tiles_dir, 4, 4).unwrap();

    for (tile, path) in solid_tiles().iter().zip(&paths) {
        let written = image::open(path).unwrap().to_rgba8();
        assert_eq!(written.as_raw(), tile.as_raw());
    }
}

#[test]
fn test_non_divisible_sheet_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let sheet_path = dir.path().join("sheet.png");
    RgbaImage::from_pixel(130, 130, Rgba([9, 9, 9, 255]))
        .save(&sheet_path)
        .unwrap();

    let err = slice_sheet(&sheet_path, dir.path().join("tiles"), 4, 4).unwrap_err();
    assert!(matches!(
        err,
        CodecError::MalformedImage {
            width: 130,
            height: 130
        }
    ));
}

#[test]
fn test_missing_tile_file_is_tile_not_found() {
    let dir = tempfile::tempdir().unwrap();
    // Write all but the last tile
    for (index, tile) in solid_tiles().iter().enumerate().take(CATALOG_SIZE - 1) {
        tile.save(dir.path().join(tile_file_name(index))).unwrap();
    }

    let err = TileCatalog::load(dir.path()).unwrap_err();
    assert!(matches!(err, CodecError::TileNotFound { index: 15, .. }));
}

#[test]
fn test_wrong_tile_dimensions_are_rejected() {
    let mut images = solid_tiles();
    images[3] = RgbaImage::from_pixel(16, 16, Rgba([51, 204, 27, 255]));

    let err = TileCatalog::from_images(images).unwrap_err();
    assert!(matches!(
        err,
        CodecError::MalformedTile {
            index: 3,
            width: 16,
            height: 16
        }
    ));
}

#[test]
fn test_duplicate_tiles_are_rejected() {
    let mut images = solid_tiles();
    images[9] = images[2].clone();

    let err = TileCatalog::from_images(images).unwrap_err();
    assert!(matches!(
        err,
        CodecError::DuplicateTile {
            first: 2,
            second: 9
        }
    ));
}

#[test]
fn test_fully_transparent_tile_is_rejected() {
    let mut images = solid_tiles();
    images[0] = RgbaImage::new(TILE_SIZE, TILE_SIZE);

    let err = TileCatalog::from_images(images).unwrap_err();
    assert!(matches!(err, CodecError::BlankTile { index: 0 }));
}

#[test]
fn test_incomplete_catalog_is_rejected() {
    let mut images = solid_tiles();
    images.truncate(12);

    let err = TileCatalog::from_images(images).unwrap_err();
    assert!(matches!(err, CodecError::InvalidParameter { .. }));
}

#[test]
fn test_encode_to_file_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = TileCatalog::from_images(solid_tiles()).unwrap();

    let output = dir.path().join("nested").join("deep").join("out.png");
    encode_to_file(&catalog, "nested", &output).unwrap();
    assert!(output.exists());
}
