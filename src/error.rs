//! Error types for graph construction, mutation, and route evaluation.

use thiserror::Error;

/// Errors reported by [`Graph`](crate::graph::Graph) operations and route
/// cost evaluation.
///
/// Every operation fails fast: an invalid query is never coerced into a
/// default value, and a failed mutation leaves the graph unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A graph must have at least one vertex to be routable.
    #[error("graph must have at least one vertex")]
    NoVertices,

    /// A vertex id outside `0..vertex_count` was passed.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// An edge from a vertex to itself was requested.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The vertex on both ends of the rejected edge.
        vertex: usize,
    },

    /// An explicit weight matrix had the wrong number of cells.
    #[error("expected {expected} weight cells, got {actual}")]
    DimensionMismatch {
        /// `vertex_count * vertex_count`.
        expected: usize,
        /// Length of the supplied cell vector.
        actual: usize,
    },

    /// An explicit weight matrix for an undirected graph was not symmetric.
    #[error("weights for ({v1}, {v2}) and ({v2}, {v1}) differ in an undirected graph")]
    AsymmetricWeights {
        /// First vertex of the mismatched pair.
        v1: usize,
        /// Second vertex of the mismatched pair.
        v2: usize,
    },

    /// A route with fewer than two vertices has no defined tour cost.
    #[error("route must visit at least two vertices, got {len}")]
    RouteTooShort {
        /// Length of the rejected route.
        len: usize,
    },

    /// A route leg (including the closing leg back to the start) crossed a
    /// missing edge. Distinct from a zero-weight edge, which is traversable.
    #[error("no edge between vertices {from} and {to}")]
    NoSuchEdge {
        /// Leg origin.
        from: usize,
        /// Leg destination.
        to: usize,
    },

    /// Summing the route's leg weights overflowed [`Weight`](crate::graph::Weight).
    #[error("route cost exceeds the representable range")]
    CostOverflow,
}
