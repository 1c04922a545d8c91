//! Benchmarks for docubridge conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks flatten and render synthetic JSON documents and extract
//! text back out of the generated PDFs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Map, Value};

use docubridge::flatten::{flatten, release};
use docubridge::model::rows_from_entries;
use docubridge::parser::PdfTextExtractor;
use docubridge::writer::TableWriter;

/// Creates a JSON document with `record_count` nested records.
fn create_test_json(record_count: usize) -> Value {
    let records: Vec<Value> = (0..record_count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("Record {}", i),
                "active": i % 2 == 0,
                "tags": ["alpha", "beta", "gamma"],
                "address": {
                    "street": format!("{} Benchmark Avenue", i),
                    "city": "Springfield",
                    "zip": null
                }
            })
        })
        .collect();
    json!({ "records": records })
}

/// Creates a JSON document nested `depth` levels deep.
fn create_deep_json(depth: usize) -> Value {
    let mut value = Value::String("leaf".to_string());
    for i in 0..depth {
        value = Value::Object(Map::from_iter([(format!("level{}", i), value)]));
    }
    value
}

fn benchmark_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for record_count in [10, 100, 1000] {
        let value = create_test_json(record_count);
        group.bench_with_input(
            BenchmarkId::new("records", record_count),
            &value,
            |b, value| b.iter(|| flatten(black_box(value))),
        );
    }

    let deep = create_deep_json(5000);
    group.bench_function("deep_5000", |b| b.iter(|| flatten(black_box(&deep))));

    group.finish();
    release(deep);
}

fn benchmark_render_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_table");
    group.sample_size(20);

    let writer = TableWriter::new();
    for record_count in [10, 100] {
        let rows = rows_from_entries(flatten(&create_test_json(record_count)));
        group.bench_with_input(
            BenchmarkId::new("records", record_count),
            &rows,
            |b, rows| b.iter(|| writer.render(black_box(rows))),
        );
    }

    group.finish();
}

fn benchmark_extract(c: &mut Criterion) {
    let rows = rows_from_entries(flatten(&create_test_json(100)));
    let pdf = match TableWriter::new().render(&rows) {
        Ok(bytes) => bytes,
        Err(e) => panic!("failed to render benchmark PDF: {}", e),
    };
    let extractor = PdfTextExtractor::new();

    c.bench_function("extract_generated_table", |b| {
        b.iter(|| extractor.extract_bytes(black_box(&pdf), "bench.pdf"))
    });
}

criterion_group!(
    benches,
    benchmark_flatten,
    benchmark_render_table,
    benchmark_extract
);
criterion_main!(benches);
