//! Benchmarks for containment, overlap, closest-point and clipping queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use polyshape::config::FractureConfig;
use polyshape::{Circle2, Point2, Polygon, Segment2};

fn generate_star(count: usize, seed: u64) -> Polygon<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Polygon::generate(Point2::new(0.0, 0.0), count, 20.0, 50.0, &mut rng)
}

fn generate_queries(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point2::new(rng.gen_range(-60.0..60.0), rng.gen_range(-60.0..60.0)))
        .collect()
}

fn bench_contains_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_point");
    let queries = generate_queries(1000, 1);

    for size in [16, 128, 1024] {
        let poly = generate_star(size, 42);
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_with_input(BenchmarkId::new("star", size), &poly, |b, poly| {
            b.iter(|| queries.iter().filter(|&&p| poly.contains_point(black_box(p))).count())
        });
    }

    group.finish();
}

fn bench_closest_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_point");
    let queries = generate_queries(1000, 2);

    for size in [16, 128, 1024] {
        let poly = generate_star(size, 42);
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_with_input(BenchmarkId::new("star", size), &poly, |b, poly| {
            b.iter(|| {
                queries
                    .iter()
                    .filter_map(|&p| poly.closest_point(black_box(p)))
                    .count()
            })
        });
    }

    group.finish();
}

fn bench_shape_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_queries");
    let poly = generate_star(128, 42);
    let other = generate_star(64, 43);
    let circle = Circle2::new(Point2::new(10.0, 5.0), 15.0);
    let segment = Segment2::from_coords(-60.0, -3.0, 60.0, 4.0);

    group.bench_function("overlaps_circle", |b| b.iter(|| poly.overlaps(black_box(&circle))));
    group.bench_function("overlaps_polygon", |b| b.iter(|| poly.overlaps(black_box(&other))));
    group.bench_function("intersect_segment", |b| b.iter(|| poly.intersect(black_box(&segment))));
    group.bench_function("closest_to_polygon", |b| {
        b.iter(|| poly.closest_point_to_shape(black_box(&other)))
    });

    group.finish();
}

fn bench_clipping(c: &mut Criterion) {
    let mut group = c.benchmark_group("clipping");
    group.sample_size(30);

    for size in [16, 128, 512] {
        let a = generate_star(size, 5);
        let b_poly = generate_star(size, 6);

        group.bench_with_input(BenchmarkId::new("union", size), &(&a, &b_poly), |b, (a, o)| {
            b.iter(|| a.union(black_box(o)))
        });
        group.bench_with_input(BenchmarkId::new("difference", size), &(&a, &b_poly), |b, (a, o)| {
            b.iter(|| a.difference(black_box(o)))
        });
        group.bench_with_input(BenchmarkId::new("fracture_split", size), &a, |b, a| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(8);
                a.fracture_split(black_box(&FractureConfig::default()), &mut rng)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_contains_point,
    bench_closest_point,
    bench_shape_queries,
    bench_clipping
);
criterion_main!(benches);
