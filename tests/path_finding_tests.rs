use fast_apsp::algorithm::floyd_warshall::FloydWarshall;
use fast_apsp::algorithm::{reconstruct_path, AllPairsShortestPath};
use fast_apsp::graph::AttributedGraph;
use fast_apsp::graph::{Graph, MutableGraph};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

type Grid = AttributedGraph<(usize, usize), OrderedFloat<f64>>;

// Test helper function to create a grid graph keyed by (x, y) cells, skipping blocked cells
fn create_test_grid(width: usize, height: usize, blocked: &[(usize, usize)]) -> Grid {
    let mut graph = AttributedGraph::new_directed();

    // Add vertices for all open positions in the grid
    for y in 0..height {
        for x in 0..width {
            if !blocked.contains(&(x, y)) {
                graph.add_vertex((x, y));
            }
        }
    }

    // Connect adjacent vertices (including diagonals)
    for y in 0..height {
        for x in 0..width {
            if blocked.contains(&(x, y)) {
                continue;
            }

            // Define possible moves (8 directions)
            let directions = [
                // Cardinal directions (N, E, S, W)
                (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
                // Diagonal directions (NE, SE, SW, NW)
                (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = (nx as usize, ny as usize);
                    if !blocked.contains(&neighbor) {
                        graph.add_edge((x, y), neighbor, OrderedFloat(cost));
                    }
                }
            }
        }
    }

    graph
}

fn path_cost(graph: &Grid, path: &[(usize, usize)]) -> f64 {
    path.windows(2)
        .map(|step| graph.get_edge_weight(&step[0], &step[1], "weight").unwrap().0)
        .sum()
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(6, 6, &[]);
    let source = (0, 0);
    let target = (5, 5);

    let engine = FloydWarshall::new();
    let (predecessors, distances) = engine.compute_distances_and_predecessors(&graph, "weight").unwrap();

    // Five diagonal steps
    assert!((distances.get(&source, &target).0 - 7.0).abs() < 1e-9);

    let path = reconstruct_path(&predecessors, &source, &target);
    assert!(path.is_some(), "Floyd-Warshall should construct a path");

    let path = path.unwrap();
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    assert_eq!(path.len(), 6);
    assert!((path_cost(&graph, &path) - distances.get(&source, &target).0).abs() < 1e-9);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    // A wall in column 3 with a single gap at the bottom
    let wall: Vec<(usize, usize)> = (0..5).map(|y| (3, y)).collect();
    let graph = create_test_grid(6, 6, &wall);
    let source = (0, 0);
    let target = (5, 0);

    let engine = FloydWarshall::new();
    let (predecessors, distances) = engine.compute_distances_and_predecessors(&graph, "weight").unwrap();

    assert!(distances.is_reachable(&source, &target), "Should find a path around obstacles");

    let path = reconstruct_path(&predecessors, &source, &target).unwrap();
    assert!(path.contains(&(3, 5)), "Path should go through the gap");
    assert!(path.iter().all(|cell| !wall.contains(cell)), "Path should avoid the wall");
    assert!((path_cost(&graph, &path) - distances.get(&source, &target).0).abs() < 1e-9);
}

// Test path finding when the wall closes the gap
#[test]
fn test_path_finding_sealed_off() {
    let wall: Vec<(usize, usize)> = (0..6).map(|y| (3, y)).collect();
    let graph = create_test_grid(6, 6, &wall);

    let engine = FloydWarshall::new();
    let (predecessors, distances) = engine.compute_distances_and_predecessors(&graph, "weight").unwrap();

    assert_eq!(distances.get(&(0, 0), &(5, 0)).0, f64::INFINITY);
    assert_eq!(predecessors.get(&(0, 0), &(5, 0)), None);
    assert_eq!(reconstruct_path(&predecessors, &(0, 0), &(5, 0)), None);
}

// Test the city pathfinding scenario
#[test]
fn test_city_pathfinding() {
    let width = 12;
    let height = 9;

    // Add some buildings as obstacles
    let buildings = [
        (3, 3), (4, 3), (5, 3),
        (3, 4), (4, 4), (5, 4),
        (8, 5), (9, 5),
        (8, 6), (9, 6),
    ];
    let graph = create_test_grid(width, height, &buildings);

    // Define some key locations
    let locations = HashMap::from([
        ("home".to_string(), (0, 0)),
        ("work".to_string(), (11, 8)),
        ("gym".to_string(), (6, 4)),
        ("park".to_string(), (4, 7)),
    ]);

    // One all-pairs run answers every query
    let engine = FloydWarshall::new();
    let (predecessors, distances) = engine.compute_distances_and_predecessors(&graph, "weight").unwrap();

    for (from_name, from) in &locations {
        for (to_name, to) in &locations {
            if from_name != to_name {
                assert!(distances.is_reachable(from, to),
                       "Should find a path from {} to {}", from_name, to_name);

                let path = reconstruct_path(&predecessors, from, to);
                assert!(path.is_some(),
                       "Should construct a path from {} to {}", from_name, to_name);

                let path = path.unwrap();
                assert_eq!(path[0], *from, "Path should start at source");
                assert_eq!(path[path.len() - 1], *to, "Path should end at target");

                // Verify path continuity
                for i in 1..path.len() {
                    assert!(graph.has_edge(&path[i-1], &path[i]),
                           "Path should only use existing edges");
                }
                assert!((path_cost(&graph, &path) - distances.get(from, to).0).abs() < 1e-9);
            }
        }
    }
}
