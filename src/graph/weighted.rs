//! Weighted graph over a fixed vertex set.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use super::matrix::WeightMatrix;
use crate::error::GraphError;

/// Edge weight. Absence of an edge is modeled as `Option<Weight>::None`
/// rather than a reserved sentinel value, so the full range is usable.
pub type Weight = u64;

/// Whether edges are one-way or symmetric.
///
/// Chosen once at creation and fixed for the graph's lifetime; every
/// mutation, count, and query honors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Each ordered pair carries an independent weight.
    Directed,
    /// Adding or removing an edge applies to both directions at once.
    Undirected,
}

/// A dense weighted graph over the fixed vertex set `0..vertex_count`.
///
/// This is the substrate a TSP solver builds once and queries repeatedly:
/// edges are stored in a dense matrix sized at creation, and candidate
/// tours are priced by [`crate::evaluation`]. Vertices are plain `usize`
/// ids; an optional per-vertex payload of type `P` (labels, coordinates)
/// can be attached without the graph interpreting it.
///
/// Once populated, every query takes `&self`, so a graph can be shared
/// read-only across a parallel search phase; mutation requires exclusive
/// access and no internal locking exists.
///
/// # Examples
///
/// ```
/// use tsp_graph::graph::{Graph, Orientation};
///
/// let mut g = Graph::new(4, Orientation::Undirected).expect("non-empty");
/// g.add_edge(0, 1, 10).expect("valid edge");
/// g.add_edge(1, 2, 20).expect("valid edge");
/// assert_eq!(g.vertex_count(), 4);
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.edge_weight(0, 1).expect("in range"), Some(10));
/// assert_eq!(g.edge_weight(1, 0).expect("in range"), Some(10));
/// assert_eq!(g.edge_weight(0, 2).expect("in range"), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph<P = ()> {
    orientation: Orientation,
    weights: WeightMatrix,
    vertex_data: Vec<Option<P>>,
}

impl Graph {
    /// Creates a payload-free graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoVertices`] if `vertex_count` is zero; a graph
    /// with no vertices cannot carry a route.
    pub fn new(vertex_count: usize, orientation: Orientation) -> Result<Self, GraphError> {
        Self::with_vertex_data(vertex_count, orientation)
    }

    /// Creates a graph from an explicit row-major grid of
    /// `vertex_count * vertex_count` cells, `None` meaning "no edge".
    ///
    /// # Errors
    ///
    /// - [`GraphError::NoVertices`] if `vertex_count` is zero.
    /// - [`GraphError::DimensionMismatch`] if the cell count is wrong.
    /// - [`GraphError::SelfLoop`] if any diagonal cell is occupied.
    /// - [`GraphError::AsymmetricWeights`] if the grid is not symmetric and
    ///   `orientation` is [`Orientation::Undirected`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_graph::graph::{Graph, Orientation};
    ///
    /// let g = Graph::from_weights(
    ///     Orientation::Undirected,
    ///     2,
    ///     vec![None, Some(5), Some(5), None],
    /// )
    /// .expect("valid grid");
    /// assert_eq!(g.edge_weight(0, 1).expect("in range"), Some(5));
    /// ```
    pub fn from_weights(
        orientation: Orientation,
        vertex_count: usize,
        cells: Vec<Option<Weight>>,
    ) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }
        let actual = cells.len();
        let weights =
            WeightMatrix::from_cells(vertex_count, cells).ok_or(GraphError::DimensionMismatch {
                expected: vertex_count * vertex_count,
                actual,
            })?;
        for vertex in 0..vertex_count {
            if weights.get(vertex, vertex).is_some() {
                return Err(GraphError::SelfLoop { vertex });
            }
        }
        if orientation == Orientation::Undirected {
            if let Some((v1, v2)) = weights.first_asymmetry() {
                return Err(GraphError::AsymmetricWeights { v1, v2 });
            }
        }
        Ok(Self {
            orientation,
            weights,
            vertex_data: (0..vertex_count).map(|_| None).collect(),
        })
    }
}

impl<P> Graph<P> {
    /// Like [`Graph::new`], with room for per-vertex data of type `P`.
    ///
    /// All payload slots start empty; see [`Graph::set_vertex_data`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoVertices`] if `vertex_count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_graph::graph::{Graph, Orientation};
    ///
    /// let mut g = Graph::with_vertex_data(3, Orientation::Directed).expect("non-empty");
    /// g.set_vertex_data(0, "depot").expect("in range");
    /// assert_eq!(g.vertex_data(0).expect("in range"), Some(&"depot"));
    /// assert_eq!(g.vertex_data(1).expect("in range"), None);
    /// ```
    pub fn with_vertex_data(
        vertex_count: usize,
        orientation: Orientation,
    ) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }
        Ok(Self {
            orientation,
            weights: WeightMatrix::new(vertex_count),
            vertex_data: (0..vertex_count).map(|_| None).collect(),
        })
    }

    /// Number of vertices, fixed at creation.
    pub fn vertex_count(&self) -> usize {
        self.weights.size()
    }

    /// Whether this graph was created directed or undirected.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Sets the weight of the edge from `v1` to `v2`, overwriting any
    /// previous weight for that pair.
    ///
    /// Undirected graphs set both directions; a failed call mutates neither.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexOutOfRange`] if either id is out of range.
    /// - [`GraphError::SelfLoop`] if `v1 == v2`.
    pub fn add_edge(&mut self, v1: usize, v2: usize, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        if v1 == v2 {
            return Err(GraphError::SelfLoop { vertex: v1 });
        }
        self.weights.set(v1, v2, Some(weight));
        if self.orientation == Orientation::Undirected {
            self.weights.set(v2, v1, Some(weight));
        }
        Ok(())
    }

    /// Removes the edge from `v1` to `v2` (both directions when undirected),
    /// returning the weight that was stored, or `None` if no edge existed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either id is out of range.
    pub fn remove_edge(&mut self, v1: usize, v2: usize) -> Result<Option<Weight>, GraphError> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        let removed = self.weights.get(v1, v2);
        self.weights.set(v1, v2, None);
        if self.orientation == Orientation::Undirected {
            self.weights.set(v2, v1, None);
        }
        Ok(removed)
    }

    /// Returns the weight of the edge from `v1` to `v2`, or `None` if the
    /// edge is absent.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either id is out of range.
    pub fn edge_weight(&self, v1: usize, v2: usize) -> Result<Option<Weight>, GraphError> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;
        Ok(self.weights.get(v1, v2))
    }

    /// Returns `true` if an edge from `v1` to `v2` exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either id is out of range.
    pub fn has_edge(&self, v1: usize, v2: usize) -> Result<bool, GraphError> {
        Ok(self.edge_weight(v1, v2)?.is_some())
    }

    /// Number of edges currently present.
    ///
    /// Undirected edges are counted once per unordered pair, not once per
    /// stored direction.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterates over all edges as `(v1, v2, weight)` triples.
    ///
    /// Undirected pairs are yielded once with `v1 < v2`; directed graphs
    /// yield every stored direction.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        let undirected = self.orientation == Orientation::Undirected;
        (0..self.vertex_count()).flat_map(move |v1| {
            self.weights
                .row(v1)
                .filter(move |&(v2, _)| !undirected || v1 < v2)
                .map(move |(v2, w)| (v1, v2, w))
        })
    }

    /// Number of edges leaving `vertex`: the vertex degree for undirected
    /// graphs, the out-degree for directed ones (see [`Graph::in_degree`]).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is out of range.
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.weights.row(vertex).count())
    }

    /// Number of edges entering `vertex`. Equals [`Graph::degree`] for
    /// undirected graphs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is out of range.
    pub fn in_degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.weights.column_len(vertex))
    }

    /// Iterates over the vertices reachable from `vertex` in one hop, as
    /// `(neighbor, weight)` pairs (out-neighbors for directed graphs).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_graph::graph::{Graph, Orientation};
    ///
    /// let mut g = Graph::new(3, Orientation::Undirected).expect("non-empty");
    /// g.add_edge(0, 1, 10).expect("valid edge");
    /// g.add_edge(0, 2, 15).expect("valid edge");
    ///
    /// let neighbors: Vec<_> = g.neighbors(0).expect("in range").collect();
    /// assert_eq!(neighbors, vec![(1, 10), (2, 15)]);
    /// ```
    pub fn neighbors(
        &self,
        vertex: usize,
    ) -> Result<impl Iterator<Item = (usize, Weight)> + '_, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.weights.row(vertex))
    }

    /// Attaches `data` to `vertex`, returning the previous value if any.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is out of range.
    pub fn set_vertex_data(&mut self, vertex: usize, data: P) -> Result<Option<P>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.vertex_data[vertex].replace(data))
    }

    /// Returns the data attached to `vertex`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is out of range.
    pub fn vertex_data(&self, vertex: usize) -> Result<Option<&P>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.vertex_data[vertex].as_ref())
    }

    /// Detaches and returns the data attached to `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is out of range.
    pub fn take_vertex_data(&mut self, vertex: usize) -> Result<Option<P>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.vertex_data[vertex].take())
    }

    /// Writes a human-readable dump of the graph to the given sink.
    ///
    /// Lists the vertex count, orientation, and every edge. The exact format
    /// is a diagnostic aid, not a stability contract.
    pub fn dump<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{self}")
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.weights.size() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.weights.size(),
            });
        }
        Ok(())
    }
}

impl<P> fmt::Display for Graph<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, arrow) = match self.orientation {
            Orientation::Directed => ("directed", "->"),
            Orientation::Undirected => ("undirected", "--"),
        };
        writeln!(
            f,
            "graph with {} vertices ({label}), {} edges",
            self.vertex_count(),
            self.edge_count()
        )?;
        for (v1, v2, w) in self.edges() {
            writeln!(f, "  {v1} {arrow} {v2}  weight {w}")?;
        }
        Ok(())
    }
}
