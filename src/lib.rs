//! # tsp-graph
//!
//! Weighted-graph substrate for traveling-salesman solvers: a dense graph
//! over a fixed vertex set, adjacency queries, and closed-tour route cost
//! evaluation.
//!
//! A solver builds a [`graph::Graph`] once, populates its edges, then calls
//! [`evaluation::tour_cost`] on candidate permutations during search. Tour
//! construction and improvement heuristics live outside this crate.
//!
//! ## Modules
//!
//! - [`graph`] — Dense weighted graph (vertices, edges, payloads, adjacency queries)
//! - [`evaluation`] — Closed-tour route cost evaluation
//! - [`error`] — Error taxonomy shared by all operations

pub mod error;
pub mod evaluation;
pub mod graph;
