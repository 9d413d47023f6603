//! Performance measurement for the encipher/decipher round trip

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use std::hint::black_box;
use stretchr::catalog::TileCatalog;
use stretchr::codec::{decode, encode};
use stretchr::io::configuration::TILE_SIZE;

/// Measures enciphering and deciphering a pangram against a solid-color catalog
fn bench_round_trip(c: &mut Criterion) {
    let images = (0..16u8)
        .map(|i| {
            RgbaImage::from_pixel(
                TILE_SIZE,
                TILE_SIZE,
                Rgba([i * 17, 255 - i * 17, i * 9, 255]),
            )
        })
        .collect();
    let Ok(catalog) = TileCatalog::from_images(images) else {
        return;
    };

    let text = "The quick brown fox jumps over the lazy dog";
    c.bench_function("encode_decode_pangram", |b| {
        b.iter(|| {
            let canvas = encode(&catalog, black_box(text));
            black_box(decode(&catalog, &canvas)).ok();
        });
    });
}

criterion_group!(benches, bench_round_trip);
criterion_main!(benches);
