//! Layered breadth-first shortest paths for unit-weight graphs.
//!
//! Nodes are processed in strict distance layers through a FIFO queue, so
//! every node is reached first at its minimum hop count. A neighbor seen
//! again at exactly its layer distance gains an extra predecessor, which is
//! how tied shortest paths enter the DAG.

use std::collections::VecDeque;

use super::insert_sorted;
use crate::store::Graph;

/// Single-source BFS; every edge counts as distance 1 regardless of its
/// stored weight. O(V+E).
pub(crate) fn compute<P>(graph: &Graph<P>, source: usize) -> (Vec<Option<f64>>, Vec<Vec<usize>>) {
    let n = graph.node_count();
    let mut distance: Vec<Option<f64>> = vec![None; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

    let mut queue = VecDeque::new();
    distance[source] = Some(0.0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let Some(dv) = distance[v] else { continue };

        for &w in graph.neighbors_unchecked(v).keys() {
            // Layer discovery.
            if distance[w].is_none() {
                distance[w] = Some(dv + 1.0);
                queue.push_back(w);
            }
            // Tie handling: any edge landing exactly on the layer below
            // contributes a predecessor.
            if w != source && distance[w] == Some(dv + 1.0) {
                insert_sorted(&mut predecessors[w], v);
            }
        }
    }

    (distance, predecessors)
}
