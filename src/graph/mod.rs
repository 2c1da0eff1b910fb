//! Dense weighted-graph storage and adjacency queries.
//!
//! Provides the substrate a solver builds once and queries repeatedly:
//! a fixed vertex set, a dense edge-weight matrix, per-vertex payloads,
//! and degree/neighbor queries.

mod matrix;
mod weighted;

pub use weighted::{Graph, Orientation, Weight};
