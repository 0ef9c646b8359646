//! Conversion throughput benchmarks
//!
//! Run with: cargo bench --bench conversion_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use slovar_engine::{ChunkPolicy, DocumentConverter, ExecutionMode, Input, Variant};

/// Generate Cyrillic test text of specified size
fn generate_text(size: usize) -> String {
    let base_sentence = "Отац пије кафу, мајка слуша музику, а ја једем хлеб. ";
    let repeat_count = size / base_sentence.len() + 1;

    let mut text = base_sentence.repeat(repeat_count);
    let mut cut = size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

/// Benchmark sequential vs parallel conversion
fn bench_execution_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution_modes");

    let converter = DocumentConverter::builder()
        .chunk_policy(ChunkPolicy::Fixed { size: 16 * 1024 })
        .build()
        .unwrap();

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            group.bench_with_input(
                BenchmarkId::new(mode.to_string(), size),
                &text,
                |b, text| {
                    b.iter(|| {
                        converter
                            .convert_with_mode(
                                Input::from_text(black_box(text.as_str())),
                                Variant::SrLatinica,
                                mode,
                            )
                            .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark each target variant on the same input
fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("variants");
    let text = generate_text(102_400);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for variant in Variant::ALL {
        let converter = DocumentConverter::new(variant).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(variant), &text, |b, text| {
            b.iter(|| converter.convert_text(black_box(text)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_execution_modes, bench_variants);
criterion_main!(benches);
