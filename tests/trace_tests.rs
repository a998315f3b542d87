use fast_apsp::algorithm::floyd_warshall::FloydWarshall;
use fast_apsp::algorithm::AllPairsShortestPath;
use fast_apsp::graph::generators::gnm_random_graph;
use fast_apsp::graph::AttributedGraph;
use fast_apsp::Error;

fn triangle() -> AttributedGraph<u32, f64> {
    AttributedGraph::from_edges(false, vec![(1, 2, 5.0), (2, 3, 3.0), (1, 3, 10.0)])
}

#[test]
fn test_one_snapshot_per_pivot_in_order() {
    let graph = triangle();
    let trace = FloydWarshall::new().compute_with_trace(&graph, "weight").unwrap();
    assert_eq!(trace.len(), 3);

    let snapshots: Vec<_> = trace.collect();
    let pivots: Vec<u32> = snapshots.iter().map(|s| s.pivot).collect();
    let iterations: Vec<usize> = snapshots.iter().map(|s| s.iteration).collect();
    assert_eq!(pivots, vec![1, 2, 3]);
    assert_eq!(iterations, vec![1, 2, 3]);

    // Pivot 1 cannot improve 1 -> 3, pivot 2 can
    assert_eq!(snapshots[0].distances.get(&1, &3), 10.0);
    assert_eq!(snapshots[0].predecessors.get(&1, &3), Some(&1));
    assert_eq!(snapshots[1].distances.get(&1, &3), 8.0);
    assert_eq!(snapshots[1].predecessors.get(&1, &3), Some(&2));
    assert_eq!(snapshots[2].distances.get(&1, &3), 8.0);
}

#[test]
fn test_last_snapshot_matches_final_tables() {
    let graph: AttributedGraph<usize, f64> = gnm_random_graph(12, 30, true, 1.0..5.0, 3);
    let engine = FloydWarshall::new();

    let last = engine.compute_with_trace(&graph, "weight").unwrap().last().unwrap();
    let (predecessors, distances) = engine.compute_distances_and_predecessors(&graph, "weight").unwrap();

    assert_eq!(last.iteration, 12);
    assert_eq!(last.distances.to_nested_map(), distances.to_nested_map());
    assert_eq!(last.predecessors.to_nested_map(), predecessors.to_nested_map());
}

#[test]
fn test_finish_after_partial_consumption() {
    let graph = triangle();
    let mut trace = FloydWarshall::new().compute_with_trace(&graph, "weight").unwrap();

    let first = trace.next().unwrap();
    assert_eq!(first.pivot, 1);
    assert_eq!(trace.remaining(), 2);
    assert_eq!(trace.vertices(), &[1, 2, 3]);

    let (predecessors, distances) = trace.finish().unwrap();
    assert_eq!(distances.get(&1, &3), 8.0);
    assert_eq!(predecessors.get(&1, &3), Some(&2));

    // Earlier snapshots are independent copies
    assert_eq!(first.distances.get(&1, &3), 10.0);
}

#[test]
fn test_trace_is_one_shot() {
    let graph = triangle();
    let mut trace = FloydWarshall::new().compute_with_trace(&graph, "weight").unwrap();

    assert_eq!(trace.by_ref().count(), 3);
    assert!(trace.next().is_none());
    assert_eq!(trace.remaining(), 0);
    assert!(trace.finish().is_ok());
}

#[test]
fn test_negative_cycle_visible_in_snapshots_but_finish_fails() {
    let graph = AttributedGraph::from_edges(true, vec![(1, 2, 1.0), (2, 1, -2.0)]);
    let mut trace = FloydWarshall::new().compute_with_trace(&graph, "weight").unwrap();

    let snapshot = trace.next().unwrap();
    assert!(snapshot.distances.get(&2, &2) < 0.0);

    assert!(matches!(trace.finish(), Err(Error::NegativeCycleDetected { .. })));
}

#[test]
fn test_invalid_weight_fails_before_tracing() {
    let graph = AttributedGraph::from_edges(true, vec![(1, 2, f64::NAN)]);
    let result = FloydWarshall::new().compute_with_trace(&graph, "weight");

    assert!(matches!(result, Err(Error::InvalidWeight { .. })));
}

#[test]
fn test_snapshot_serializes_for_export() {
    let graph = AttributedGraph::from_edges(true, vec![(1u32, 2u32, 2.0_f64)]);
    let snapshot = FloydWarshall::new()
        .compute_with_trace(&graph, "weight")
        .unwrap()
        .next()
        .unwrap();

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["iteration"], 1);
    assert_eq!(value["pivot"], 1);
    assert_eq!(value["distances"]["1"]["2"], 2.0);
    assert_eq!(value["predecessors"]["1"]["2"], 1);
}
