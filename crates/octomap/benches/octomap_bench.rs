//! Benchmark of observation fusion and occupancy queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use octomap::OccupancyOctoMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random points inside a map of the given radius around the origin.
fn random_points(count: usize, radius: f64, seed: u64) -> Vec<DVec3> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..count)
    .map(|_| {
      DVec3::new(
        rng.random_range(-radius..radius),
        rng.random_range(-radius..radius),
        rng.random_range(-radius..radius),
      )
    })
    .collect()
}

/// Map of the given depth with `count` observations already fused.
fn populated_map(max_depth: u32, count: usize) -> OccupancyOctoMap {
  let mut map = OccupancyOctoMap::new(DVec3::ZERO, 2.0, max_depth).unwrap();
  for point in random_points(count, map.radius(), 7) {
    map.update(&point, 0.7).unwrap();
  }
  map
}

/// Benchmark update throughput at increasing depths (1000 observations).
fn bench_update(c: &mut Criterion) {
  let mut group = c.benchmark_group("update");

  for max_depth in [4u32, 8, 12, 16] {
    let points = random_points(1_000, 2f64.powi(max_depth as i32 - 1), 1);

    group.bench_with_input(BenchmarkId::from_parameter(max_depth), &points, |b, points| {
      b.iter(|| {
        let mut map = OccupancyOctoMap::new(DVec3::ZERO, 2.0, max_depth).unwrap();
        for point in points {
          map.update(black_box(point), 0.7).unwrap();
        }
        black_box(map)
      })
    });
  }

  group.finish();
}

/// Benchmark queries against a populated map.
fn bench_probability(c: &mut Criterion) {
  let mut group = c.benchmark_group("probability");

  for max_depth in [8u32, 16] {
    let map = populated_map(max_depth, 10_000);
    let queries = random_points(1_000, map.radius(), 3);

    group.bench_with_input(BenchmarkId::from_parameter(max_depth), &queries, |b, queries| {
      b.iter(|| {
        let mut sum = 0.0;
        for point in queries {
          sum += map.probability(black_box(point)).unwrap();
        }
        black_box(sum)
      })
    });
  }

  group.finish();
}

/// Benchmark the read-only leaf walk.
fn bench_leaves(c: &mut Criterion) {
  let map = populated_map(10, 10_000);

  c.bench_function("leaves (depth 10, 10k observations)", |b| {
    b.iter(|| black_box(map.leaves().filter(|leaf| leaf.probability > 0.5).count()))
  });
}

criterion_group!(benches, bench_update, bench_probability, bench_leaves);
criterion_main!(benches);
