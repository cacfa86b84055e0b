//! Criterion benchmarks for the divide-and-conquer hull.
//! Focus sizes: n in {16, 128, 1024, 8192}; uniform clouds (few hull
//! vertices) versus circle clouds (every point on the hull).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullring::api::{convex_hull, draw_cloud, draw_cloud_on_circle, CloudCfg, PointCount, ReplayToken};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull");
    for &n in &[16usize, 128, 1024, 8192] {
        group.bench_with_input(BenchmarkId::new("uniform", n), &n, |b, &n| {
            let cfg = CloudCfg {
                point_count: PointCount::Fixed(n),
                half_extent: 1.0,
                snap_step: None,
            };
            b.iter_batched(
                || draw_cloud(cfg, ReplayToken { seed: 43, index: n as u64 }),
                |pts| {
                    let _hull = convex_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("circle", n), &n, |b, &n| {
            b.iter_batched(
                || draw_cloud_on_circle(n, 1.0, ReplayToken { seed: 44, index: n as u64 }),
                |pts| {
                    let _hull = convex_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
