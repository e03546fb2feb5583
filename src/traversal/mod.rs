//! Shortest-path computation.
//!
//! Two interchangeable engines fill a per-source [`ShortestPathTree`]:
//!
//! - [`bfs`]: layered breadth-first search for unit-weight graphs, O(V+E)
//! - [`dijkstra`]: binary-heap relaxation for general non-negative
//!   weights, O(E log V)
//!
//! The engine is selected by the [`WeightModel`] the graph was constructed
//! with. Both apply the same relaxation rule for an edge `(v, w, weight)`:
//! a strictly shorter tentative distance replaces `predecessors[w]` with
//! `{v}`, an exactly equal one adds `v` to the set. The resulting
//! predecessor sets form the shortest-path DAG the analytics in
//! [`crate::analytics`] are built on.

mod bfs;
mod dijkstra;

use crate::store::{Graph, GraphError, GraphResult};

/// The weight model of a graph, fixed at construction time.
///
/// Selects the shortest-path engine; negative weights are rejected at
/// edge insertion under either model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightModel {
    /// Every edge counts as distance 1; stored weights are ignored by the
    /// traversal.
    Unit,
    /// Edges carry arbitrary non-negative weights.
    General,
}

/// Per-source shortest-path result: the distance vector and the
/// predecessor-set DAG, plus the lazily filled path-count and
/// route-enumeration memos that derive from them.
///
/// Owned by the [`Graph`] that computed it and coherent only while that
/// graph is unmutated; recompute after mutation.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    pub(crate) source: usize,
    pub(crate) distance: Vec<Option<f64>>,
    pub(crate) predecessors: Vec<Vec<usize>>,
    pub(crate) path_counts: Vec<Option<u64>>,
    pub(crate) routes: Vec<Option<Vec<Vec<usize>>>>,
}

impl ShortestPathTree {
    fn new(source: usize, distance: Vec<Option<f64>>, predecessors: Vec<Vec<usize>>) -> Self {
        let n = distance.len();
        Self { source, distance, predecessors, path_counts: vec![None; n], routes: vec![None; n] }
    }

    /// The source this tree was computed for.
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Distance from the source to `v`, or `None` when unreachable.
    pub fn distance(&self, v: usize) -> Option<f64> {
        self.distance.get(v).copied().flatten()
    }

    /// All predecessors of `v` on minimum-cost paths from the source,
    /// as a sorted slice of node indices. Empty for the source itself
    /// and for unreachable nodes.
    pub fn predecessors(&self, v: usize) -> &[usize] {
        self.predecessors.get(v).map_or(&[], Vec::as_slice)
    }

    /// Whether `v` is reachable from the source.
    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    /// All reachable nodes, every predecessor listed before the nodes it
    /// leads to. A valid dependency order even when zero-weight edges put
    /// whole predecessor chains at the same distance.
    pub(crate) fn topological_order(&self) -> Vec<usize> {
        let n = self.distance.len();
        let mut visited = vec![false; n];
        let mut order = Vec::new();
        let mut stack = Vec::new();

        for v in 0..n {
            if self.distance[v].is_none() || visited[v] {
                continue;
            }
            stack.push((v, false));
            while let Some((w, expanded)) = stack.pop() {
                if expanded {
                    order.push(w);
                    continue;
                }
                if visited[w] {
                    continue;
                }
                visited[w] = true;
                stack.push((w, true));
                for &p in &self.predecessors[w] {
                    if !visited[p] {
                        stack.push((p, false));
                    }
                }
            }
        }
        order
    }
}

/// Ordered insert into a small sorted predecessor vector; duplicates are
/// dropped.
pub(crate) fn insert_sorted(values: &mut Vec<usize>, value: usize) {
    if let Err(pos) = values.binary_search(&value) {
        values.insert(pos, value);
    }
}

impl<P> Graph<P> {
    /// Compute shortest distances and the predecessor DAG for `source`,
    /// replacing any previous result for that source along with its
    /// path-count and enumeration caches.
    pub fn compute_shortest_paths(&mut self, source: usize) -> GraphResult<()> {
        self.check_node(source)?;
        let (distance, predecessors) = match self.weight_model() {
            WeightModel::Unit => bfs::compute(self, source),
            WeightModel::General => dijkstra::compute(self, source),
        };
        let reached = distance.iter().filter(|d| d.is_some()).count();
        tracing::debug!(source, reached, model = ?self.weight_model(), "shortest paths computed");
        self.trees.insert(source, ShortestPathTree::new(source, distance, predecessors));
        Ok(())
    }

    /// Compute shortest paths from every node, O(V·(V+E)) under the unit
    /// model and O(V·E log V) under the general one.
    pub fn compute_all_shortest_paths(&mut self) -> GraphResult<()> {
        for source in 0..self.node_count() {
            self.compute_shortest_paths(source)?;
        }
        Ok(())
    }

    /// Whether [`compute_shortest_paths`](Self::compute_shortest_paths)
    /// has run for `source`.
    pub fn has_computed(&self, source: usize) -> bool {
        self.trees.contains_key(&source)
    }

    /// The computed shortest-path tree for `source`, if any.
    pub fn shortest_path_tree(&self, source: usize) -> Option<&ShortestPathTree> {
        self.trees.get(&source)
    }

    /// Shortest distance between `u` and `v`.
    ///
    /// Reads the result computed for `u`; when `u` has none, the reversed
    /// pair is tried exactly once before failing.
    ///
    /// # Errors
    ///
    /// [`GraphError::PathNotFound`] when the consulted result marks the
    /// pair unreachable, [`GraphError::NotComputed`] when neither
    /// orientation has a computed result.
    pub fn distance_between(&self, u: usize, v: usize) -> GraphResult<f64> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.distance_oriented(u, v, false)
    }

    fn distance_oriented(&self, u: usize, v: usize, already_reversed: bool) -> GraphResult<f64> {
        if let Some(tree) = self.trees.get(&u) {
            return tree.distance(v).ok_or(GraphError::PathNotFound { from: u, to: v });
        }
        if already_reversed {
            // `v` is the source of the unreversed query.
            return Err(GraphError::NotComputed { origin: v });
        }
        self.distance_oriented(v, u, true)
    }

    /// One representative minimum-cost route from `u` to `v`, as a node
    /// index sequence starting at `u`.
    ///
    /// Walks the lowest-index predecessor chain back from `v` in the
    /// result computed for `u`; the reversed pair is tried exactly once,
    /// with the route flipped back into `u -> v` order.
    ///
    /// # Errors
    ///
    /// Same contract as [`distance_between`](Self::distance_between).
    pub fn shortest_path(&self, u: usize, v: usize) -> GraphResult<Vec<usize>> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.route_oriented(u, v, false)
    }

    fn route_oriented(&self, u: usize, v: usize, already_reversed: bool) -> GraphResult<Vec<usize>> {
        if let Some(tree) = self.trees.get(&u) {
            if tree.distance(v).is_none() {
                return Err(GraphError::PathNotFound { from: u, to: v });
            }
            let mut route = vec![v];
            let mut current = v;
            while current != u {
                match tree.predecessors(current).first() {
                    Some(&parent) => {
                        route.push(parent);
                        current = parent;
                    }
                    None => return Err(GraphError::PathNotFound { from: u, to: v }),
                }
            }
            route.reverse();
            return Ok(route);
        }
        if already_reversed {
            return Err(GraphError::NotComputed { origin: v });
        }
        let mut route = self.route_oriented(v, u, true)?;
        route.reverse();
        Ok(route)
    }
}
