//! Closed-tour route cost.

use crate::error::GraphError;
use crate::graph::{Graph, Weight};

/// Evaluates candidate routes against a graph, treating each route as a
/// closed tour: the cost of the leg from the last vertex back to the first
/// is always included.
///
/// Borrows the graph once, so a solver can price any number of candidate
/// permutations during search without re-validating the graph.
///
/// # Examples
///
/// ```
/// use tsp_graph::evaluation::TourEvaluator;
/// use tsp_graph::graph::{Graph, Orientation};
///
/// let mut g = Graph::new(4, Orientation::Undirected).expect("non-empty");
/// g.add_edge(0, 1, 10).expect("valid edge");
/// g.add_edge(1, 2, 20).expect("valid edge");
/// g.add_edge(2, 3, 30).expect("valid edge");
/// g.add_edge(3, 0, 40).expect("valid edge");
///
/// let evaluator = TourEvaluator::new(&g);
/// assert_eq!(evaluator.cost(&[0, 1, 2, 3]), Ok(100));
/// assert!(evaluator.cost(&[0, 2, 1, 3]).is_err());
/// ```
pub struct TourEvaluator<'a, P = ()> {
    graph: &'a Graph<P>,
}

impl<'a, P> TourEvaluator<'a, P> {
    /// Creates an evaluator borrowing the given graph.
    pub fn new(graph: &'a Graph<P>) -> Self {
        Self { graph }
    }

    /// Computes the cost of `route` as a closed tour: the sum of each
    /// consecutive leg's weight plus the closing leg from the last vertex
    /// back to the first.
    ///
    /// # Errors
    ///
    /// - [`GraphError::RouteTooShort`] if `route` visits fewer than two
    ///   vertices.
    /// - [`GraphError::VertexOutOfRange`] if any id is out of range.
    /// - [`GraphError::NoSuchEdge`] if any leg (the closing leg included)
    ///   crosses a missing edge. A zero-weight edge is traversable and
    ///   contributes zero; a missing edge is never treated as zero cost.
    /// - [`GraphError::CostOverflow`] if the sum exceeds [`Weight`].
    pub fn cost(&self, route: &[usize]) -> Result<Weight, GraphError> {
        self.check_length(route)?;
        let mut total: Weight = 0;
        for (from, to) in closed_legs(route) {
            let leg = self
                .graph
                .edge_weight(from, to)?
                .ok_or(GraphError::NoSuchEdge { from, to })?;
            total = total.checked_add(leg).ok_or(GraphError::CostOverflow)?;
        }
        Ok(total)
    }

    /// Returns `true` if every leg of the closed tour exists, without
    /// summing weights.
    ///
    /// # Errors
    ///
    /// [`GraphError::RouteTooShort`] and [`GraphError::VertexOutOfRange`] as
    /// for [`TourEvaluator::cost`]; a missing edge is `Ok(false)`, not an
    /// error.
    pub fn is_traversable(&self, route: &[usize]) -> Result<bool, GraphError> {
        self.check_length(route)?;
        for (from, to) in closed_legs(route) {
            if self.graph.edge_weight(from, to)?.is_none() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn check_length(&self, route: &[usize]) -> Result<(), GraphError> {
        if route.len() < 2 {
            return Err(GraphError::RouteTooShort { len: route.len() });
        }
        Ok(())
    }
}

/// Consecutive legs of `route` plus the closing leg back to `route[0]`.
///
/// Callers guarantee `route.len() >= 2`.
fn closed_legs(route: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    route
        .windows(2)
        .map(|leg| (leg[0], leg[1]))
        .chain(std::iter::once((route[route.len() - 1], route[0])))
}

/// Computes the closed-tour cost of `route` over `graph`.
///
/// One-shot convenience for [`TourEvaluator::cost`].
///
/// # Errors
///
/// Same contract as [`TourEvaluator::cost`].
///
/// # Examples
///
/// ```
/// use tsp_graph::evaluation::tour_cost;
/// use tsp_graph::graph::{Graph, Orientation};
///
/// let mut g = Graph::new(3, Orientation::Undirected).expect("non-empty");
/// g.add_edge(0, 1, 5).expect("valid edge");
/// g.add_edge(1, 2, 6).expect("valid edge");
/// g.add_edge(2, 0, 7).expect("valid edge");
/// assert_eq!(tour_cost(&g, &[0, 1, 2]), Ok(18));
/// ```
pub fn tour_cost<P>(graph: &Graph<P>, route: &[usize]) -> Result<Weight, GraphError> {
    TourEvaluator::new(graph).cost(route)
}
