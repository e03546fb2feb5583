//! In-memory graph storage.
//!
//! This module provides [`Graph`], the owning store for nodes, weighted
//! directed edges, and the two adjacency views the analytics build on:
//!
//! - an adjacency map per node (neighbor index -> weight), used by the
//!   traversal engines;
//! - a sorted adjacency list per node (distinct neighbor indices, ordered),
//!   used for membership and intersection queries.
//!
//! Nodes carry a caller-supplied payload that is opaque to the engine.
//! Indices are dense: `add_node` returns consecutive `usize` values starting
//! at zero, and every other operation addresses nodes by that index.
//!
//! Per-source shortest-path results are owned by the graph and keyed by
//! source index (see [`crate::traversal`]). Mutating the graph does **not**
//! invalidate them; callers that mutate after computing must recompute.

mod error;

pub use error::{GraphError, GraphResult};

use std::collections::HashMap;
use std::ops::Range;

use crate::traversal::{ShortestPathTree, WeightModel};

/// An in-memory directed graph with non-negative edge weights.
///
/// The type parameter `P` is the node payload; the engine never inspects it.
///
/// # Example
///
/// ```
/// use pathweave::Graph;
///
/// let mut graph = Graph::unit_weight();
/// let a = graph.add_node("ada");
/// let b = graph.add_node("bert");
/// graph.connect(a, b, 1.0, true)?;
///
/// assert_eq!(graph.out_degree(a)?, 1);
/// assert!(graph.are_connected(a, b)?);
/// # Ok::<(), pathweave::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<P> {
    model: WeightModel,
    payloads: Vec<P>,
    adjacency: Vec<HashMap<usize, f64>>,
    sorted_neighbors: Vec<Vec<usize>>,
    edge_count: usize,
    pub(crate) trees: HashMap<usize, ShortestPathTree>,
}

impl<P> Graph<P> {
    /// Create an empty graph with the given weight model.
    ///
    /// The model selects the shortest-path strategy at construction time
    /// and cannot be changed afterwards.
    pub fn new(model: WeightModel) -> Self {
        Self {
            model,
            payloads: Vec::new(),
            adjacency: Vec::new(),
            sorted_neighbors: Vec::new(),
            edge_count: 0,
            trees: HashMap::new(),
        }
    }

    /// Create an empty graph whose edges are all treated as weight 1.
    ///
    /// Shortest paths use the layered breadth-first engine, O(V+E).
    pub fn unit_weight() -> Self {
        Self::new(WeightModel::Unit)
    }

    /// Create an empty graph with general non-negative weights.
    ///
    /// Shortest paths use the priority-queue relaxation engine, O(E log V).
    pub fn weighted() -> Self {
        Self::new(WeightModel::General)
    }

    /// The weight model this graph was constructed with.
    pub const fn weight_model(&self) -> WeightModel {
        self.model
    }

    /// Append a node and return its dense index.
    pub fn add_node(&mut self, payload: P) -> usize {
        self.payloads.push(payload);
        self.adjacency.push(HashMap::new());
        self.sorted_neighbors.push(Vec::new());
        self.payloads.len() - 1
    }

    /// Insert the edge `u -> v` with the given weight.
    ///
    /// With `undirected` set, the mirrored edge `v -> u` is inserted with
    /// the same weight; the pair counts as a single logical edge in
    /// [`edge_count`](Self::edge_count).
    ///
    /// # Errors
    ///
    /// [`GraphError::NegativeWeight`] if `weight < 0`, and
    /// [`GraphError::NodeNotFound`] if either index is out of range. In
    /// both cases the graph is left unmodified.
    pub fn connect(&mut self, u: usize, v: usize, weight: f64, undirected: bool) -> GraphResult<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight { from: u, to: v, weight });
        }

        self.insert_directed(u, v, weight);
        if undirected {
            self.insert_directed(v, u, weight);
        }
        self.edge_count += 1;
        Ok(())
    }

    fn insert_directed(&mut self, u: usize, v: usize, weight: f64) {
        self.adjacency[u].insert(v, weight);
        if let Err(pos) = self.sorted_neighbors[u].binary_search(&v) {
            self.sorted_neighbors[u].insert(pos, v);
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.payloads.len()
    }

    /// Number of logical edges inserted via [`connect`](Self::connect).
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate all node indices.
    pub fn nodes(&self) -> Range<usize> {
        0..self.payloads.len()
    }

    /// The payload attached to a node.
    pub fn payload(&self, u: usize) -> GraphResult<&P> {
        self.check_node(u)?;
        Ok(&self.payloads[u])
    }

    /// Out-degree of a node.
    pub fn out_degree(&self, u: usize) -> GraphResult<usize> {
        self.check_node(u)?;
        Ok(self.adjacency[u].len())
    }

    /// The adjacency map of a node: neighbor index -> edge weight.
    ///
    /// Keys are unique; iteration order is not specified.
    pub fn adjacency(&self, u: usize) -> GraphResult<&HashMap<usize, f64>> {
        self.check_node(u)?;
        Ok(&self.adjacency[u])
    }

    /// The sorted, distinct neighbor indices of a node.
    pub fn sorted_neighbors(&self, u: usize) -> GraphResult<&[usize]> {
        self.check_node(u)?;
        Ok(&self.sorted_neighbors[u])
    }

    /// Whether an edge `u -> v` exists, by binary search, O(log d).
    pub fn are_connected(&self, u: usize, v: usize) -> GraphResult<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.sorted_neighbors[u].binary_search(&v).is_ok())
    }

    /// Common neighbors of `u` and `v`, by linear merge of the two sorted
    /// adjacency lists, O(d_u + d_v).
    pub fn common_neighbors(&self, u: usize, v: usize) -> GraphResult<Vec<usize>> {
        self.check_node(u)?;
        self.check_node(v)?;

        let (a, b) = (&self.sorted_neighbors[u], &self.sorted_neighbors[v]);
        let mut shared = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        Ok(shared)
    }

    pub(crate) fn check_node(&self, u: usize) -> GraphResult<()> {
        if u < self.payloads.len() {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound { index: u })
        }
    }

    /// Adjacency access for the traversal engines; index already validated.
    pub(crate) fn neighbors_unchecked(&self, u: usize) -> &HashMap<usize, f64> {
        &self.adjacency[u]
    }
}
