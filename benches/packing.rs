//! Criterion benchmarks for the packing hot paths
//!
//! The estimator's feasibility scan is quadratic in the canvas size, so it
//! dominates; the shelf placer and full pack driver are benched alongside
//! it for comparison.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::RgbaImage;
use texstitch::pack::{estimate, pack, place, sort_for_packing};
use texstitch::sprite::Sprite;
use texstitch::telemetry::NullObserver;

/// Generate a mixed-size sprite set
fn make_sprites(count: u32) -> Vec<Sprite> {
    (0..count)
        .map(|i| {
            let width = 8 + (i * 7) % 24;
            let height = 8 + (i * 5) % 24;
            Sprite::new(format!("sprite_{:03}", i), RgbaImage::new(width, height))
        })
        .collect()
}

fn bench_estimate(c: &mut Criterion) {
    let sprites = make_sprites(24);
    let sorted = sort_for_packing(&sprites);
    c.bench_function("estimate_24_sprites", |b| {
        b.iter(|| estimate(black_box(&sorted), 2, &NullObserver).unwrap())
    });
}

fn bench_place(c: &mut Criterion) {
    let sprites = make_sprites(24);
    let sorted = sort_for_packing(&sprites);
    let size = estimate(&sorted, 2, &NullObserver).unwrap();
    c.bench_function("place_24_sprites", |b| {
        b.iter(|| place(black_box(&sorted), size * 2, 2, &NullObserver).unwrap())
    });
}

fn bench_pack(c: &mut Criterion) {
    let sprites = make_sprites(24);
    c.bench_function("pack_24_sprites", |b| {
        b.iter(|| pack(black_box(&sprites), 2, &NullObserver).unwrap())
    });
}

criterion_group!(benches, bench_estimate, bench_place, bench_pack);
criterion_main!(benches);
