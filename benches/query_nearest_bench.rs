//! Benchmark for nearest-neighbor query performance
//!
//! This benchmark measures `query_nearest` and `query_nearest_k` on a tree
//! of 1M randomly distributed points, for several values of k.

use kdtree2d::{KdTree, Point};
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

const NUM_POINTS: usize = 1_000_000;
const NUM_QUERIES: usize = 1_000;

/// Generate random points in a 100x100 coordinate space
fn random_points<R: Rng>(rng: &mut R, count: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        points.push(Point::new(
            rng.random_range(0.0..100.0),
            rng.random_range(0.0..100.0),
        ));
    }
    points
}

/// Benchmark single-nearest queries
fn bench_nearest(tree: &KdTree, queries: &[Point]) {
    let start = Instant::now();
    let mut found = 0usize;

    for q in queries {
        if tree.query_nearest(q.x, q.y).is_some() {
            found += 1;
        }
    }

    let elapsed = start.elapsed();
    println!(
        "{} queries k=1: {:.3}µs/query ({} found)",
        queries.len(),
        elapsed.as_secs_f64() * 1e6 / queries.len() as f64,
        found
    );
}

/// Benchmark K-nearest queries
fn bench_nearest_k(tree: &KdTree, queries: &[Point], k: usize) {
    let mut results = Vec::new();
    let start = Instant::now();

    for q in queries {
        results.clear();
        tree.query_nearest_k(q.x, q.y, k, &mut results)
            .expect("k is nonzero");
    }

    let elapsed = start.elapsed();
    println!(
        "{} queries k={}: {:.3}µs/query",
        queries.len(),
        k,
        elapsed.as_secs_f64() * 1e6 / queries.len() as f64
    );
}

fn main() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let points = random_points(&mut rng, NUM_POINTS);
    let queries = random_points(&mut rng, NUM_QUERIES);

    let start = Instant::now();
    let tree = KdTree::build(&points).expect("coordinates are finite");
    println!(
        "build {} points: {}ms",
        NUM_POINTS,
        start.elapsed().as_millis()
    );

    bench_nearest(&tree, &queries);
    for k in [10, 100] {
        bench_nearest_k(&tree, &queries, k);
    }
}
