//! Benchmarks for the darkroom color kernel.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use darkroom_core::ImageBuf;
use darkroom_locus::{illuminant_rgb, temperature_to_chromaticity};
use darkroom_ops::grading::GradingKernel;
use darkroom_ops::{parallel, GradingParams, Pipeline, WhiteBalanceParams};

fn gradient_image(width: u32, height: u32) -> ImageBuf {
    let mut img = ImageBuf::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let t = (y * width + x) as f32 / (width * height) as f32;
            img.set_pixel(x, y, [t, t * 0.8, t * 0.6]);
        }
    }
    img
}

fn grading_params() -> GradingParams {
    GradingParams {
        shadows: [0.03, 0.0, -0.02],
        midtones: [0.0, 0.01, 0.0],
        highlights: [-0.02, 0.0, 0.03],
        blending: 0.9,
        balance: -0.2,
    }
}

/// Benchmark blackbody-locus conversions.
fn bench_locus(c: &mut Criterion) {
    let mut group = c.benchmark_group("locus");

    let temps: Vec<f32> = (0..10000).map(|i| 1000.0 + i as f32 * 9.9).collect();
    group.throughput(Throughput::Elements(temps.len() as u64));

    group.bench_function("temperature_to_chromaticity", |b| {
        b.iter(|| {
            temps
                .iter()
                .map(|&t| temperature_to_chromaticity(black_box(t)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("illuminant_rgb", |b| {
        b.iter(|| {
            temps
                .iter()
                .map(|&t| illuminant_rgb(black_box(t)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark per-pixel kernels in isolation.
fn bench_pixel_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel");

    let pixels: Vec<[f32; 3]> = (0..100000)
        .map(|i| {
            let t = i as f32 / 100000.0;
            [t, t * 0.8, t * 0.6]
        })
        .collect();
    group.throughput(Throughput::Elements(pixels.len() as u64));

    let scale = WhiteBalanceParams { temperature: -50.0, tint: 10.0 }.scale();
    group.bench_function("white_balance", |b| {
        b.iter(|| {
            pixels
                .iter()
                .map(|&px| darkroom_ops::white_balance::apply_pixel(black_box(px), scale))
                .collect::<Vec<_>>()
        })
    });

    let kernel = GradingKernel::new(&grading_params());
    group.bench_function("grading", |b| {
        b.iter(|| {
            pixels
                .iter()
                .map(|&px| kernel.apply_pixel(black_box(px)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark full-buffer pipeline runs, sequential vs parallel.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let pipeline = Pipeline {
        white_balance: WhiteBalanceParams { temperature: -50.0, tint: 10.0 },
        grading: grading_params(),
    };

    for size in [256u32, 1024, 2048] {
        let base = gradient_image(size, size);
        group.throughput(Throughput::Elements((size as u64) * (size as u64)));

        group.bench_with_input(BenchmarkId::new("sequential", size), &base, |b, img| {
            b.iter(|| {
                let mut work = img.clone();
                pipeline.apply(black_box(&mut work));
                work
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &base, |b, img| {
            b.iter(|| {
                let mut work = img.clone();
                parallel::process(black_box(&mut work), &pipeline);
                work
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_locus, bench_pixel_kernels, bench_pipeline);
criterion_main!(benches);
