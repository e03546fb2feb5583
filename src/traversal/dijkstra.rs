//! Priority-queue shortest paths for general non-negative weights.
//!
//! Classic Dijkstra with a binary heap and lazy deletion: a node is
//! re-pushed whenever a strictly shorter tentative distance is found, and
//! stale heap entries are skipped on pop via the settled set. Negative
//! weights never reach this module; they are rejected at edge insertion.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::insert_sorted;
use crate::store::Graph;

/// Entry in the priority queue, ordered by tentative distance.
///
/// Lower distance compares greater so `BinaryHeap` behaves as a min-heap.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    node: usize,
    distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.node == other.node
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Single-source Dijkstra. O(E log V).
pub(crate) fn compute<P>(graph: &Graph<P>, source: usize) -> (Vec<Option<f64>>, Vec<Vec<usize>>) {
    let n = graph.node_count();
    let mut distance: Vec<Option<f64>> = vec![None; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut settled = vec![false; n];

    let mut heap = BinaryHeap::new();
    distance[source] = Some(0.0);
    heap.push(HeapEntry { node: source, distance: 0.0 });

    while let Some(HeapEntry { node: v, distance: dv }) = heap.pop() {
        if settled[v] {
            continue;
        }
        settled[v] = true;

        for (&w, &weight) in graph.neighbors_unchecked(v) {
            if settled[w] {
                continue;
            }
            let candidate = dv + weight;
            match distance[w] {
                Some(dw) if candidate > dw => {}
                Some(dw) if candidate == dw => {
                    // Tie: another minimum-cost way to reach w.
                    insert_sorted(&mut predecessors[w], v);
                }
                _ => {
                    distance[w] = Some(candidate);
                    predecessors[w] = vec![v];
                    heap.push(HeapEntry { node: w, distance: candidate });
                }
            }
        }
    }

    (distance, predecessors)
}
