//! Benchmarks for import extraction and package-name normalization.
//!
//! Large generated sources keep the line-oriented extractor honest about
//! scanning cost on real project trees.

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reqscan::parser::collect_package_names;
use reqscan::scan::extract_source;

/// Builds a synthetic source file mixing imports with ordinary code.
fn synthetic_source(lines: usize) -> String {
    let mut source = String::new();
    for i in 0..lines {
        match i % 5 {
            0 => source.push_str(&format!("import pkg{}\n", i % 40)),
            1 => source.push_str(&format!("from pkg{}.sub import thing as t\n", i % 40)),
            2 => source.push_str("x = compute(1, 2)\n"),
            3 => source.push_str(&format!("import a{}, b{} as c, _private\n", i % 40, i % 17)),
            _ => source.push_str("def handler(event):\n"),
        }
    }
    source
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_source");

    for size in [1_000, 10_000, 50_000].iter() {
        let source = synthetic_source(*size);

        group.bench_with_input(BenchmarkId::new("lines", size), size, |b, _| {
            b.iter(|| black_box(extract_source(Path::new("bench.py"), &source)));
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let source = synthetic_source(10_000);
    let imports = extract_source(Path::new("bench.py"), &source);
    let statements: Vec<&str> = imports.iter().map(|i| i.text.as_str()).collect();

    c.bench_function("collect_package_names_10k", |b| {
        b.iter(|| black_box(collect_package_names(statements.iter().copied())))
    });
}

criterion_group!(benches, bench_extract, bench_normalize);
criterion_main!(benches);
