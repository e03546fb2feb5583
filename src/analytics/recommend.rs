//! Common-neighbor recommendations.
//!
//! A candidate for node `u` is any node that is not `u`, not already a
//! neighbor of `u` (checked by sorted-adjacency binary search), and shares
//! at least one neighbor with it. Overlap is counted by a linear merge of
//! the two sorted adjacency lists. Every candidate tied at the maximum
//! observed overlap is returned; no further tie-break is applied.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::store::{Graph, GraphResult};

/// A single recommendation: a candidate node and its shared-neighbor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The recommended node.
    pub candidate: usize,
    /// Number of neighbors shared with the query node.
    pub shared_neighbors: usize,
}

/// Result of a whole-graph recommendation sweep.
///
/// Each entry is `(source, candidate, shared_neighbors)`; a source appears
/// once per candidate tied at its maximum overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSweep {
    /// All `(source, candidate, shared_neighbors)` entries.
    pub entries: Vec<(usize, usize, usize)>,
}

impl RecommendationSweep {
    /// The entries recommended for one source node.
    pub fn for_source(&self, source: usize) -> Vec<(usize, usize)> {
        self.entries
            .iter()
            .filter(|(s, _, _)| *s == source)
            .map(|&(_, candidate, shared)| (candidate, shared))
            .collect()
    }

    /// Whether the sweep produced no recommendations at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Heap entry ordered by overlap so the best candidate pops first;
/// equal overlaps pop in ascending node order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CandidateEntry {
    node: usize,
    shared: usize,
}

impl PartialOrd for CandidateEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CandidateEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.shared.cmp(&other.shared).then_with(|| other.node.cmp(&self.node))
    }
}

/// Common-neighbor recommendation engine.
///
/// Reads the graph store directly; independent of the shortest-path
/// results.
pub struct Recommender;

impl Recommender {
    /// Recommend nodes for `u`: all candidates tied at the maximum
    /// shared-neighbor count. Empty when no candidate shares a neighbor.
    ///
    /// O(d_u · V) worst case for the merges plus O(V log V) heap traffic.
    pub fn recommend<P>(graph: &Graph<P>, u: usize) -> GraphResult<Vec<Recommendation>> {
        let own = graph.sorted_neighbors(u)?;

        let mut heap = BinaryHeap::new();
        for v in graph.nodes() {
            if v == u || graph.are_connected(u, v)? {
                continue;
            }
            let shared = shared_count(own, graph.sorted_neighbors(v)?);
            if shared == 0 {
                continue;
            }
            heap.push(CandidateEntry { node: v, shared });
        }

        let mut best = Vec::new();
        let mut max_shared = None;
        while let Some(entry) = heap.pop() {
            match max_shared {
                None => max_shared = Some(entry.shared),
                Some(max) if entry.shared < max => break,
                Some(_) => {}
            }
            best.push(Recommendation { candidate: entry.node, shared_neighbors: entry.shared });
        }
        Ok(best)
    }

    /// Run the recommendation query for every node in the graph.
    pub fn compute<P>(graph: &Graph<P>) -> GraphResult<RecommendationSweep> {
        let mut entries = Vec::new();
        for u in graph.nodes() {
            for rec in Self::recommend(graph, u)? {
                entries.push((u, rec.candidate, rec.shared_neighbors));
            }
        }
        tracing::debug!(nodes = graph.node_count(), entries = entries.len(), "recommendation sweep");
        Ok(RecommendationSweep { entries })
    }
}

/// Size of the intersection of two sorted index slices, by linear merge.
fn shared_count(a: &[usize], b: &[usize]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}
