//! Integration tests for the shortest-path engines.
//!
//! These exercise the weighted (Dijkstra) and unit-weight (BFS) engines on
//! fixed topologies, including the bidirectional distance lookup and the
//! disconnected-graph error contract.

use pathweave::{Graph, GraphError, WeightModel};

// ============================================================================
// Fixtures
// ============================================================================

/// Seven-node weighted digraph with one tied detour and a back edge.
fn weighted_fixture() -> Graph<usize> {
    let mut graph = Graph::weighted();
    for i in 0..7 {
        graph.add_node(i);
    }
    let edges: &[(usize, usize, f64)] = &[
        (0, 1, 5.0),
        (0, 2, 3.0),
        (1, 2, 2.0),
        (1, 4, 3.0),
        (1, 6, 1.0),
        (2, 3, 7.0),
        (2, 4, 7.0),
        (3, 0, 2.0),
        (3, 5, 6.0),
        (4, 3, 2.0),
        (4, 5, 1.0),
        (6, 4, 1.0),
    ];
    for &(u, v, w) in edges {
        graph.connect(u, v, w, false).unwrap();
    }
    graph
}

/// Fourteen-node unit-weight lattice: two branches of different widths
/// between 0 and 10, then a final diamond into 13. All edges mutual.
///
/// With `linked` unset the 8-10 and 9-10 edges are left out, splitting the
/// graph into two components.
fn lattice_fixture(linked: bool) -> Graph<usize> {
    let mut graph = Graph::unit_weight();
    for i in 0..14 {
        graph.add_node(i);
    }
    let mut edges: Vec<(usize, usize)> = vec![
        (0, 1),
        (0, 2),
        (1, 3),
        (1, 4),
        (2, 5),
        (2, 6),
        (2, 7),
        (3, 8),
        (4, 8),
        (5, 9),
        (6, 9),
        (7, 9),
        (10, 11),
        (10, 12),
        (11, 13),
        (12, 13),
    ];
    if linked {
        edges.push((8, 10));
        edges.push((9, 10));
    }
    for (u, v) in edges {
        graph.connect(u, v, 1.0, true).unwrap();
    }
    graph
}

// ============================================================================
// Weighted engine
// ============================================================================

#[test]
fn weighted_distances_from_source_zero() {
    let mut graph = weighted_fixture();
    graph.compute_shortest_paths(0).unwrap();

    let expected = [0.0, 5.0, 3.0, 9.0, 7.0, 8.0, 6.0];
    for (v, &d) in expected.iter().enumerate() {
        assert_eq!(graph.distance_between(0, v).unwrap(), d, "distance to {v}");
    }
}

#[test]
fn weighted_route_follows_the_cheap_detour() {
    let mut graph = weighted_fixture();
    graph.compute_shortest_paths(0).unwrap();

    assert_eq!(graph.shortest_path(0, 5).unwrap(), vec![0, 1, 6, 4, 5]);
    assert!(graph.enumerate_paths(0, 5).unwrap().contains(&vec![0, 1, 6, 4, 5]));
}

#[test]
fn triangle_inequality_over_every_edge() {
    let mut graph = weighted_fixture();
    graph.compute_shortest_paths(0).unwrap();
    let tree = graph.shortest_path_tree(0).unwrap();

    for u in graph.nodes() {
        let Some(du) = tree.distance(u) else { continue };
        for (&v, &w) in graph.adjacency(u).unwrap() {
            let dv = tree.distance(v).expect("neighbor of a reachable node is reachable");
            assert!(dv <= du + w, "edge ({u}, {v}, {w}) violates the triangle inequality");
        }
    }
}

#[test]
fn source_distance_is_zero_and_has_no_predecessors() {
    let mut graph = weighted_fixture();
    graph.compute_all_shortest_paths().unwrap();

    for s in graph.nodes() {
        let tree = graph.shortest_path_tree(s).unwrap();
        assert_eq!(tree.distance(s), Some(0.0));
        assert!(tree.predecessors(s).is_empty());
    }
}

// ============================================================================
// Unit-weight engine
// ============================================================================

#[test]
fn lattice_distances_count_hops() {
    let mut graph = lattice_fixture(true);
    assert_eq!(graph.weight_model(), WeightModel::Unit);
    graph.compute_shortest_paths(0).unwrap();

    assert_eq!(graph.distance_between(0, 10).unwrap(), 4.0);
    assert_eq!(graph.distance_between(0, 13).unwrap(), 6.0);
}

#[test]
fn tied_layers_collect_all_predecessors() {
    let mut graph = lattice_fixture(true);
    graph.compute_shortest_paths(0).unwrap();
    let tree = graph.shortest_path_tree(0).unwrap();

    // 10 is reached at distance 4 through both branch heads.
    assert_eq!(tree.predecessors(10), &[8, 9]);
    // 9 collects the full wide branch.
    assert_eq!(tree.predecessors(9), &[5, 6, 7]);
}

// ============================================================================
// Lookup semantics
// ============================================================================

#[test]
fn reversed_pair_fallback_is_attempted_once() {
    let mut graph = lattice_fixture(true);
    graph.compute_shortest_paths(13).unwrap();

    // Mirrored graph: the (0, 13) query answers from 13's result.
    assert_eq!(graph.distance_between(0, 13).unwrap(), 6.0);
    // Neither 1 nor 2 is computed.
    assert_eq!(
        graph.distance_between(1, 2).unwrap_err(),
        GraphError::NotComputed { origin: 1 }
    );
}

#[test]
fn disconnected_components_fail_with_path_not_found() {
    let mut graph = lattice_fixture(false);
    graph.compute_all_shortest_paths().unwrap();

    assert_eq!(
        graph.distance_between(0, 13).unwrap_err(),
        GraphError::PathNotFound { from: 0, to: 13 }
    );
    assert_eq!(
        graph.distance_between(12, 4).unwrap_err(),
        GraphError::PathNotFound { from: 12, to: 4 }
    );

    // Distances inside each component stay correct.
    assert_eq!(graph.distance_between(0, 9).unwrap(), 3.0);
    assert_eq!(graph.distance_between(10, 13).unwrap(), 2.0);
}
