//! Benchmarks for ear clipping, Delaunay triangulation and convex hulls.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use polyshape::config::SubdivideConfig;
use polyshape::hull::convex_hull;
use polyshape::triangulation::delaunay_triangulation;
use polyshape::{Point2, Polygon};

/// Star-shaped outline with `count` vertices.
fn generate_star(count: usize, seed: u64) -> Polygon<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Polygon::generate(Point2::new(0.0, 0.0), count, 20.0, 50.0, &mut rng)
}

/// Uniform point cloud in a 100 x 100 box.
fn generate_cloud(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect()
}

fn bench_ear_clipping(c: &mut Criterion) {
    let mut group = c.benchmark_group("ear_clipping");

    for size in [16, 64, 256, 1024] {
        let poly = generate_star(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("star", size), &poly, |b, poly| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(7);
                poly.triangulate_with_rng(black_box(&mut rng))
            })
        });
    }

    group.finish();
}

fn bench_delaunay(c: &mut Criterion) {
    let mut group = c.benchmark_group("delaunay");
    group.sample_size(20);

    for size in [50, 200, 800] {
        let points = generate_cloud(size, 12345);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("cloud", size), &points, |b, pts| {
            b.iter(|| delaunay_triangulation(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_convex_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull");

    for size in [100, 1000, 10000] {
        let points = generate_cloud(size, 99);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("cloud", size), &points, |b, pts| {
            b.iter(|| convex_hull(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_subdivide(c: &mut Criterion) {
    let mut group = c.benchmark_group("subdivide");
    group.sample_size(20);

    let terrain = generate_star(32, 3).triangulate_with_rng(&mut StdRng::seed_from_u64(3));
    for min_area in [50.0, 20.0, 5.0] {
        let config = SubdivideConfig::default().min_area(min_area).max_area(min_area * 10.0);

        group.bench_with_input(BenchmarkId::new("star32", min_area), &config, |b, config| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(11);
                terrain.subdivide(black_box(config), &mut rng)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_ear_clipping,
    bench_delaunay,
    bench_convex_hull,
    bench_subdivide
);
criterion_main!(benches);
