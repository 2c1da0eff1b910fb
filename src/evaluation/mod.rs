//! Route cost evaluation.
//!
//! Prices a candidate route against a graph's edge weights, treating the
//! route as a closed tour that returns to its starting vertex.

mod tour;

pub use tour::{tour_cost, TourEvaluator};
