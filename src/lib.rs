//! In-memory graph analytics.
//!
//! This crate computes, per source node of a directed (optionally
//! mirrored) graph with non-negative edge weights:
//!
//! - shortest distances and a shortest-path DAG of tied predecessors,
//! - the number of minimum-cost paths between any two nodes, and the
//!   number passing through a given intermediate node,
//! - the full enumeration of minimum-cost routes,
//! - a per-node influence (betweenness) score aggregated over all pairs.
//!
//! Independently of the shortest-path machinery, it answers common-neighbor
//! queries over sorted adjacency lists and ranks recommendation candidates
//! by shared-neighbor overlap.
//!
//! # Modules
//!
//! - [`store`]: the owning [`Graph`] with adjacency and per-source caches
//! - [`traversal`]: BFS and Dijkstra shortest-path engines
//! - [`analytics`]: path counting, influence, recommendations, degrees
//!
//! # Example
//!
//! ```
//! use pathweave::{Graph, Influence, InfluenceConfig};
//!
//! let mut graph = Graph::unit_weight();
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! let c = graph.add_node("c");
//! graph.connect(a, b, 1.0, true)?;
//! graph.connect(b, c, 1.0, true)?;
//!
//! graph.compute_shortest_paths(a)?;
//! assert_eq!(graph.distance_between(a, c)?, 2.0);
//! assert_eq!(graph.count_paths(a, c)?, 1);
//!
//! let influence = Influence::compute(&mut graph, &InfluenceConfig::default())?;
//! assert_eq!(influence.score(b), Some(1.0));
//! # Ok::<(), pathweave::GraphError>(())
//! ```
//!
//! # Caching model
//!
//! Per-source results are created lazily by
//! [`Graph::compute_shortest_paths`] and retained by the graph. Mutating
//! the graph afterwards does not invalidate them; callers that interleave
//! mutation with queries must recompute the affected sources.

pub mod analytics;
pub mod store;
pub mod traversal;

pub use analytics::{
    DegreeProfile, Influence, InfluenceConfig, InfluenceResult, InfluenceStrategy, Recommendation,
    RecommendationSweep, Recommender,
};
pub use store::{Graph, GraphError, GraphResult};
pub use traversal::{ShortestPathTree, WeightModel};
