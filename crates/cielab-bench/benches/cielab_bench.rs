//! Benchmarks for cielab conversions.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cielab_color::buffer::{lab_to_xyz_buffer, xyz_to_lab_buffer};
use cielab_color::{from_lab, get_lab, lab_to_xyz, xyz_to_lab};
use cielab_core::Color;

/// Benchmark single-color conversions.
fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");

    group.bench_function("lab_to_xyz", |b| {
        b.iter(|| lab_to_xyz(black_box([53.24, 80.09, 67.2])))
    });

    group.bench_function("xyz_to_lab", |b| {
        b.iter(|| xyz_to_lab(black_box([41.24, 21.26, 1.93])))
    });

    group.bench_function("from_lab_get_lab", |b| {
        b.iter(|| {
            let c: Color = from_lab(black_box(53.24), black_box(80.09), black_box(67.2), None);
            get_lab(&c)
        })
    });

    group.finish();
}

/// Benchmark interleaved buffer conversions.
fn bench_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer");

    for size in [1000, 10000, 100000].iter() {
        let data: Vec<f64> = (0..*size)
            .flat_map(|i| {
                let t = i as f64 / *size as f64;
                [t * 100.0, t * 255.0 - 128.0, 127.0 - t * 255.0, 1.0]
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("lab_to_xyz", size), &data, |b, d| {
            b.iter(|| {
                let mut buf = d.clone();
                lab_to_xyz_buffer(black_box(&mut buf)).unwrap();
                buf
            })
        });

        group.bench_with_input(BenchmarkId::new("xyz_to_lab", size), &data, |b, d| {
            b.iter(|| {
                let mut buf = d.clone();
                xyz_to_lab_buffer(black_box(&mut buf)).unwrap();
                buf
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scalar, bench_buffer);
criterion_main!(benches);
