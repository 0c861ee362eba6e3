//! Wayfarer
//!
//! Graph traversal and shortest-path search over pluggable graph models:
//! - visitor-driven breadth-first / depth-first traversal
//! - Dijkstra and A* over arbitrary ordered-monoid weight domains
//! - predecessor tracking, path reconstruction, and spanning trees

pub mod error;
pub mod graph;
pub mod logging;
pub mod weight;
