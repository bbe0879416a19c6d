//! Benchmarks for token generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tailords::{
    assemble, create_typography_scale, generate_color_palette, Accessibility,
    ColorPaletteOptions, TypographyScaleOptions,
};

// -- Palette benchmarks --

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");

    let nine = ColorPaletteOptions::new("#3b82f6", 9, Accessibility::Aa);
    group.bench_function("blue_9_aa", |b| {
        b.iter(|| generate_color_palette(black_box(&nine)).unwrap())
    });

    let large = ColorPaletteOptions::new("#3b82f6", 32, Accessibility::Aaa);
    group.bench_function("blue_32_aaa", |b| {
        b.iter(|| generate_color_palette(black_box(&large)).unwrap())
    });

    // Black walks every anchor before settling on the last one.
    let black = ColorPaletteOptions::new("black", 9, Accessibility::Aa);
    group.bench_function("black_9_anchor_search", |b| {
        b.iter(|| generate_color_palette(black_box(&black)).unwrap())
    });

    let single = ColorPaletteOptions::new("#777777", 1, Accessibility::Aaa);
    group.bench_function("single_shade_search", |b| {
        b.iter(|| generate_color_palette(black_box(&single)).unwrap())
    });

    group.finish();
}

// -- Scale and assembly benchmarks --

fn bench_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokens");

    let options = TypographyScaleOptions::new(16.0, 1.25, 8);
    group.bench_function("scale_8", |b| {
        b.iter(|| create_typography_scale(black_box(&options)).unwrap())
    });

    let palette =
        generate_color_palette(&ColorPaletteOptions::new("#3b82f6", 9, Accessibility::Aa))
            .unwrap();
    let scale = create_typography_scale(&options).unwrap();
    group.bench_function("assemble_17", |b| {
        b.iter(|| assemble(black_box(&palette), black_box(&scale)))
    });

    group.finish();
}

criterion_group!(benches, bench_palette, bench_tokens);
criterion_main!(benches);
