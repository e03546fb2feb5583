//! Error types for graph operations.

use thiserror::Error;

/// Errors that can occur in graph construction and analytics queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A node index was out of range.
    #[error("node not found: {index}")]
    NodeNotFound {
        /// The offending node index.
        index: usize,
    },

    /// An edge insertion carried a negative weight.
    ///
    /// The graph is left unmodified; the insertion must be treated as
    /// rejected, not partially applied.
    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        /// Source node of the rejected edge.
        from: usize,
        /// Target node of the rejected edge.
        to: usize,
        /// The rejected weight.
        weight: f64,
    },

    /// No path connects the two nodes.
    ///
    /// This is an expected, non-fatal outcome for queries between nodes in
    /// different components; callers should branch on it rather than treat
    /// it as a defect.
    #[error("no path from {from} to {to}")]
    PathNotFound {
        /// Query source node.
        from: usize,
        /// Query target node.
        to: usize,
    },

    /// A query was issued for a source that has never been computed.
    ///
    /// Raised after the reversed-pair fallback also found no result. Fatal
    /// to the failing call only; cached results for other sources are
    /// unaffected.
    #[error("shortest paths not computed for source {origin}")]
    NotComputed {
        /// The source node missing a computed result.
        origin: usize,
    },
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
