//! Criterion benchmarks for catalog parsing and view derivation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shop_catalog::config::CatalogConfig;
use shop_catalog::parsers::NameParser;
use shop_catalog::services::{CatalogLoader, CatalogView, Sorter};
use shop_catalog::types::{CategoryKey, ServiceRecord, ViewState};
use std::hint::black_box;
use std::path::PathBuf;

const SIZES: [&str; 5] = ["Coupe", "Sedan/Four Door Truck", "SUV", "XL SUV", "Compact"];
const AREAS: [&str; 5] = [
    "Full Vehicle Front+Back",
    "Windshield",
    "Front Doors",
    "Sun Strip",
    "Full Coverage Package",
];

/// Catalog shaped like a real shop menu, repeated to `count` records
fn synthetic_catalog(count: usize) -> Vec<ServiceRecord> {
    (0..count)
        .map(|i| {
            let (name, category) = match i % 4 {
                0 => (
                    format!(
                        "Detail - Interior Level {} - {}",
                        i % 3 + 1,
                        SIZES[i % SIZES.len()]
                    ),
                    "Detail",
                ),
                1 => (
                    format!(
                        "Window Tint - {} - {}",
                        AREAS[i % AREAS.len()],
                        if i % 2 == 0 { "Carbon" } else { "Ceramic" }
                    ),
                    "Window Tint",
                ),
                2 => (format!("Bedliner - Spray-In {}", i), "Bedliner"),
                _ => (format!("Alignment - Four Wheel {}", i), "Alignment"),
            };
            ServiceRecord {
                id: format!("svc-{:05}", i),
                name,
                category: Some(category.to_string()),
                total_cents: Some(10_000 + i as i64),
                labor_hours: Some(1.5),
            }
        })
        .collect()
}

fn fixture_bytes() -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("catalog.json");
    std::fs::read(&path).unwrap_or_default()
}

fn bench_decode(c: &mut Criterion) {
    let bytes = fixture_bytes();
    if bytes.is_empty() {
        eprintln!("Skipping decode: fixture not found");
        return;
    }

    let mut group = c.benchmark_group("loader");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("decode_records", |b| {
        b.iter(|| {
            let mut copy = bytes.clone();
            let _ = CatalogLoader::decode_records(black_box(&mut copy));
        });
    });
    group.finish();
}

fn bench_parse_catalog(c: &mut Criterion) {
    let parser = NameParser::new();
    let mut group = c.benchmark_group("parser");

    for count in [100, 1_000, 10_000] {
        let records = synthetic_catalog(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("parse_catalog", count),
            &records,
            |b, records| {
                b.iter(|| parser.parse_catalog(black_box(records)));
            },
        );
    }

    group.finish();
}

fn bench_view(c: &mut Criterion) {
    let catalog = NameParser::new().parse_catalog(&synthetic_catalog(1_000));
    let config = CatalogConfig::default();

    let mut group = c.benchmark_group("view");
    group.bench_function("sort_detail", |b| {
        b.iter(|| Sorter::sort_category(black_box(&catalog), CategoryKey::Detail));
    });

    let tint = ViewState::default().with_category(CategoryKey::WindowTint);
    group.bench_function("build_tint_tab", |b| {
        b.iter(|| CatalogView::build(black_box(&catalog), &tint, &config));
    });

    let search = ViewState::default().with_search("ceramic");
    group.bench_function("build_search", |b| {
        b.iter(|| CatalogView::build(black_box(&catalog), &search, &config));
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_parse_catalog, bench_view);
criterion_main!(benches);
