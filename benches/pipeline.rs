//! Benchmarks for the iconfont pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use iconfont::font::{extract_balanced_block, rescale_pixels, scale, RescaleMode};
use iconfont::{parse_symbol_document, ComponentGenerator, Configuration, TemplateStore};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A symbol document with `count` copies of the fixture icons.
fn large_document(count: usize) -> String {
    let symbols: String = (0..count)
        .map(|i| {
            format!(
                r##"<symbol id="icon-shape-{i}" viewBox="0 0 1024 1024"><path d="M128 128h768v768H128z" fill="#2C2C2C"></path><path d="M256 256h512v512H256z"></path></symbol>"##
            )
        })
        .collect();
    format!("window._iconfont_svg_string='<svg>{}</svg>';", symbols)
}

// -- Stylesheet benchmarks --

fn bench_stylesheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("stylesheet");

    let css = load_fixture("font_4001.css");
    let start = css.find('{').unwrap_or(0);

    group.bench_function("scale_decimal", |b| {
        b.iter(|| scale(black_box("12.345"), black_box("2")).unwrap())
    });

    group.bench_function("extract_font_face", |b| {
        b.iter(|| extract_balanced_block(black_box(&css), start))
    });

    group.bench_function("rescale_first", |b| {
        b.iter(|| rescale_pixels(black_box(&css), RescaleMode::First))
    });

    let padded = css.repeat(50);
    group.bench_function("rescale_all_large", |b| {
        b.iter(|| rescale_pixels(black_box(&padded), RescaleMode::All))
    });

    group.finish();
}

// -- Component benchmarks --

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");

    let document = load_fixture("font_4001.js");
    let large = large_document(200);

    group.bench_function("parse_document", |b| {
        b.iter(|| parse_symbol_document(black_box(&document)).unwrap())
    });

    group.bench_function("parse_document_large", |b| {
        b.iter(|| parse_symbol_document(black_box(&large)).unwrap())
    });

    let config = Configuration::with_source("//at.alicdn.com/t/font_4001.js").unwrap();
    let templates = TemplateStore::embedded();
    let generator = ComponentGenerator::new(&config, &templates);
    let symbols = parse_symbol_document(&large).unwrap();

    group.bench_function("generate_large", |b| {
        b.iter(|| {
            for symbol in &symbols {
                black_box(generator.generate(symbol).unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_stylesheet, bench_components);
criterion_main!(benches);
