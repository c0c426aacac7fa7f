//! Formatting benchmarks.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use numparse_core::BUFFER_SIZE;

fn bench_write_u64(c: &mut Criterion) {
    let values: &[u64] = &[7, 8837492, u64::MAX];
    let mut group = c.benchmark_group("write_u64");

    for &value in values {
        group.bench_with_input(BenchmarkId::from_parameter(value), &value, |b, &v| {
            let mut buffer = [0u8; BUFFER_SIZE];
            b.iter(|| {
                let out = numparse_core::write(black_box(v), &mut buffer);
                black_box(out.len());
            });
        });
    }
    group.finish();
}

fn bench_write_f64(c: &mut Criterion) {
    let values: &[(&str, f64)] = &[
        ("small", 10.5),
        ("third", 1.0 / 3.0),
        ("large", 1.7976931348623157e308),
        ("subnormal", 5e-324),
    ];
    let mut group = c.benchmark_group("write_f64");

    for &(name, value) in values {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, &v| {
            let mut buffer = [0u8; BUFFER_SIZE];
            b.iter(|| {
                let out = numparse_core::write(black_box(v), &mut buffer);
                black_box(out.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_write_u64, bench_write_f64);
criterion_main!(benches);
