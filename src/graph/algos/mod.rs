//! Shortest-path search algorithms
//!
//! Dijkstra for single-source search and A* for goal-directed search,
//! both generic over the graph model and an ordered-monoid weight domain.

pub mod astar;
pub mod dijkstra;
pub mod shared;

pub use astar::astar;
pub use dijkstra::{dijkstra, ShortestPaths};
pub use shared::ShortestDistances;
