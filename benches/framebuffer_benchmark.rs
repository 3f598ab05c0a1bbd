//! Benchmark for framebuffer operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use raster_lab::color::Rgba;
use raster_lab::framebuffer::Framebuffer;
use raster_lab::geometry::{Point, Span};

fn framebuffer_clear_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_clear");

    for (width, height) in [(900, 600), (1920, 1080), (3840, 2160)] {
        let mut fb = Framebuffer::new(width, height).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    fb.clear(black_box(Rgba::RED));
                });
            },
        );
    }

    group.finish();
}

fn framebuffer_plot_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_plot");

    let mut fb = Framebuffer::new(900, 600).unwrap();
    fb.clear(Rgba::BLACK);

    group.bench_function("plot_900x600", |b| {
        b.iter(|| {
            for y in 0..600 {
                for x in 0..900 {
                    fb.plot(black_box(Point::new(x, y)), Rgba::WHITE);
                }
            }
        });
    });

    group.bench_function("fill_span_900x600", |b| {
        b.iter(|| {
            for y in 0..600 {
                fb.fill_span(black_box(Span::new(y, -10, 910)), Rgba::WHITE);
            }
        });
    });

    group.finish();
}

fn framebuffer_stats_benchmark(c: &mut Criterion) {
    let mut fb = Framebuffer::new(900, 600).unwrap();
    fb.clear(Rgba::rgb(30, 60, 90));

    fb.fill_span(Span::new(300, 100, 800), Rgba::WHITE);

    c.bench_function("frame_stats_900x600", |b| {
        b.iter(|| black_box(fb.stats(black_box(Rgba::rgb(30, 60, 90)))));
    });
}

criterion_group!(
    benches,
    framebuffer_clear_benchmark,
    framebuffer_plot_benchmark,
    framebuffer_stats_benchmark
);
criterion_main!(benches);
