//! Error types surfaced by mutating and querying graph operations.
//!
//! Policy violations (a self-loop where the graph forbids them, a parallel
//! edge where the network forbids them, an edge identifier reused between
//! different endpoints) are reported as [`GraphError`] values and leave the
//! container unmodified. Precondition violations on query entry points
//! (asking for the successors of a node that is not in the graph) are
//! programmer errors and panic instead; see the `# Panics` section of each
//! accessor.

use thiserror::Error;

/// Convenience alias for results of fallible graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// A rejected graph operation.
///
/// Every variant corresponds to an operation that was refused *before* any
/// state changed: the container is left exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A self-loop was supplied to a container built without
    /// `allows_self_loops(true)`.
    #[error("self-loops are not allowed in this graph")]
    SelfLoopsDisallowed,

    /// A second edge between an already-connected node pair was supplied to
    /// a network built without `allows_parallel_edges(true)`.
    #[error("parallel edges are not allowed in this network")]
    ParallelEdgesDisallowed,

    /// An edge identifier already present in the network was re-added
    /// between a different pair of nodes.
    #[error("edge is already present and connects a different pair of nodes")]
    EdgeEndpointsMismatch,

    /// `edge_connecting` was asked for the single edge between two nodes
    /// that are connected by more than one parallel edge.
    #[error("multiple edges connect the given nodes; use edges_connecting")]
    AmbiguousEdge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_descriptive() {
        assert!(GraphError::SelfLoopsDisallowed.to_string().contains("self-loops"));
        assert!(GraphError::ParallelEdgesDisallowed.to_string().contains("parallel"));
        assert!(GraphError::AmbiguousEdge.to_string().contains("edges_connecting"));
    }
}
