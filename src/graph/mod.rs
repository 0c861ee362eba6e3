//! Graph model, traversal, and path-finding operations
//!
//! Provides the building blocks for navigating graphs:
//! - pluggable graph model traits plus mutable adjacency models
//! - visitor-driven BFS/DFS traversal
//! - Dijkstra and A* shortest paths over ordered-monoid weights
//! - predecessor tracking, path reconstruction, spanning trees

pub mod algos;
pub mod model;
pub mod path;
pub mod spanning;
pub mod visit;

pub use algos::{astar, dijkstra, ShortestDistances, ShortestPaths};
pub use model::{
    DirectedGraph, DirectedMutableGraph, Edge, Endpoints, Graph, UndirectedMutableGraph, Weighted,
    WeightedEdge,
};
pub use path::{Path, PredecessorsList, WeightedPath};
pub use spanning::{minimum_spanning_tree, SpanningTree};
pub use visit::{
    breadth_first_search, depth_first_search, VertexSequenceVisitor, VisitControl, Visitor,
};
