//! Criterion benchmarks for the transform engine and blur metric.
//!
//! Run with: cargo bench
//! Run specific: cargo bench -- transform_1d

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array2;
use num_complex::Complex;
use rand::prelude::*;

use blurfft::{blur_score, grid_from_real, transform_1d, transform_2d, BlurConfig, Direction};

// =============================================================================
// Helper Functions for Test Data Generation
// =============================================================================

fn random_signal(n: usize, seed: u64) -> Vec<Complex<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| Complex::new(rng.gen(), rng.gen())).collect()
}

fn random_matrix(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((rows, cols), |_| rng.gen())
}

// =============================================================================
// 1D Kernel Benchmarks
// =============================================================================

fn bench_transform_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_1d");

    // Power-of-two sizes hit the radix-2 path; the others hit Bluestein,
    // whose padded length makes the same logical size noticeably pricier.
    for &n in &[256usize, 1024, 4096, 255, 1000, 4093] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("forward", n), &n, |b, &n| {
            let signal = random_signal(n, n as u64);
            b.iter(|| {
                let mut buf = signal.clone();
                transform_1d(black_box(&mut buf), Direction::Forward);
                buf
            });
        });
    }

    group.finish();
}

// =============================================================================
// 2D Transform Benchmarks
// =============================================================================

fn bench_transform_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_2d");

    for &(rows, cols) in &[(64usize, 64usize), (128, 128), (100, 100)] {
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::new("roundtrip", format!("{}x{}", rows, cols)),
            &(rows, cols),
            |b, &(rows, cols)| {
                let image = random_matrix(rows, cols, (rows + cols) as u64);
                let grid = grid_from_real(image.view());
                b.iter(|| {
                    let mut buf = grid.clone();
                    transform_2d(black_box(&mut buf), Direction::Forward);
                    transform_2d(black_box(&mut buf), Direction::Inverse);
                    buf
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Blur Metric Benchmarks
// =============================================================================

fn bench_blur_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("blur_score");

    for &size in &[128usize, 512] {
        let image = random_matrix(size, size, size as u64);
        let mut spectrum = grid_from_real(image.view());
        transform_2d(&mut spectrum, Direction::Forward);
        let config = BlurConfig::default();

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| blur_score(black_box(&spectrum), &config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_transform_1d,
    bench_transform_2d,
    bench_blur_score
);
criterion_main!(benches);
