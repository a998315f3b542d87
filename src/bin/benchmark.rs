use std::time::{Duration, Instant};
use log::info;
use ordered_float::OrderedFloat;
use fast_apsp::algorithm::{AllPairsShortestPath, floyd_warshall::FloydWarshall};
use fast_apsp::graph::{generators::gnm_random_graph, AttributedGraph, Graph, DEFAULT_WEIGHT_KEY};

type BenchGraph = AttributedGraph<usize, OrderedFloat<f64>>;

// Time the keyed-table engine on a graph
fn benchmark_tables(name: &str, engine: &FloydWarshall, graph: &BenchGraph) -> Duration {
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let distances = match engine.compute_distances(graph, DEFAULT_WEIGHT_KEY) {
        Ok(distances) => distances,
        Err(e) => {
            println!("  - Failed: {}", e);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    // Count reachable pairs
    let reachable = distances.iter().count();
    println!("  - Found {} reachable pairs in {:?}", reachable, duration);

    duration
}

// Time the dense matrix engine on a graph
fn benchmark_matrix(engine: &FloydWarshall, graph: &BenchGraph) -> Duration {
    println!("Running dense matrix on graph with {} vertices...", graph.vertex_count());

    let start = Instant::now();
    if let Err(e) = engine.compute_distance_matrix(graph, None, DEFAULT_WEIGHT_KEY) {
        println!("  - Failed: {}", e);
        return Duration::ZERO;
    }
    let duration = start.elapsed();
    println!("  - Finished in {:?}", duration);

    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![
        // Small graphs
        50,
        100,
        // Medium graphs - parallel passes start to pay off
        250,
        500,
        // Large graphs
        1_000,
    ];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;

    println!("=====================================================");
    println!("Benchmark: Floyd-Warshall sequential vs parallel vs dense");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let sequential = FloydWarshall::new().sequential();
    let parallel = FloydWarshall::new().with_parallel_threshold(0);

    let mut results = Vec::new();

    for (seed, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph: BenchGraph = gnm_random_graph(size, size * edge_factor, true, 1.0..100.0, seed as u64);
        info!("Generated graph with {} edges", graph.edge_count());

        let sequential_time = benchmark_tables("Floyd-Warshall (sequential)", &sequential, &graph);
        let parallel_time = benchmark_tables("Floyd-Warshall (parallel)", &parallel, &graph);
        let dense_time = benchmark_matrix(&sequential, &graph);

        results.push((size, sequential_time, parallel_time, dense_time));

        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);
        println!("Speedup - parallel vs sequential: {:.2}x", speedup);
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<15} | {:<10}",
             "Vertices", "Sequential (ms)", "Parallel (ms)", "Dense (ms)", "SpeedUp");
    println!("-----------------------------------------------------");

    for (size, sequential_time, parallel_time, dense_time) in &results {
        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);

        println!("{:<10} | {:<15} | {:<15} | {:<15} | {:<10.2}",
                 size,
                 sequential_time.as_millis(),
                 parallel_time.as_millis(),
                 dense_time.as_millis(),
                 speedup);
    }
}
