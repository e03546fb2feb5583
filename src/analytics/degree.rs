//! Degree profile: node indices bucketed by out-degree.
//!
//! Feeds popularity-style reports; a pure read over the store.

use serde::{Deserialize, Serialize};

use crate::store::Graph;

/// Node indices grouped by out-degree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeProfile {
    buckets: Vec<Vec<usize>>,
}

impl DegreeProfile {
    /// Bucket every node of the graph by its out-degree.
    pub fn compute<P>(graph: &Graph<P>) -> Self {
        let n = graph.node_count();
        let mut buckets = vec![Vec::new(); n + 1];
        for u in graph.nodes() {
            // Degree is at most n; index validity is by construction.
            if let Ok(degree) = graph.out_degree(u) {
                buckets[degree].push(u);
            }
        }
        Self { buckets }
    }

    /// Nodes with exactly the given out-degree, ascending by index.
    pub fn nodes_with_degree(&self, degree: usize) -> &[usize] {
        self.buckets.get(degree).map_or(&[], Vec::as_slice)
    }

    /// The highest out-degree present, or `None` for an empty graph.
    pub fn max_degree(&self) -> Option<usize> {
        self.buckets.iter().rposition(|bucket| !bucket.is_empty())
    }
}
