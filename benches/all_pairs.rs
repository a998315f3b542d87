use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fast_apsp::algorithm::{AllPairsShortestPath, floyd_warshall::FloydWarshall};
use fast_apsp::graph::{generators::gnm_random_graph, AttributedGraph, DEFAULT_WEIGHT_KEY};

fn all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("floyd_warshall");
    group.sample_size(10);

    for &n in &[64usize, 128, 256] {
        let graph: AttributedGraph<usize, f64> = gnm_random_graph(n, n * 4, true, 1.0..10.0, 7);
        let sequential = FloydWarshall::new().sequential();
        let parallel = FloydWarshall::new().with_parallel_threshold(0);

        group.bench_with_input(BenchmarkId::new("sequential", n), &graph, |b, g| {
            b.iter(|| sequential.compute_distances_and_predecessors(black_box(g), DEFAULT_WEIGHT_KEY))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &graph, |b, g| {
            b.iter(|| parallel.compute_distances_and_predecessors(black_box(g), DEFAULT_WEIGHT_KEY))
        });
        group.bench_with_input(BenchmarkId::new("dense", n), &graph, |b, g| {
            b.iter(|| sequential.compute_distance_matrix(black_box(g), None, DEFAULT_WEIGHT_KEY))
        });
    }

    group.finish();
}

criterion_group!(benches, all_pairs);
criterion_main!(benches);
