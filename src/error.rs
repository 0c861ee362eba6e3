//! Error types for graph operations
//!
//! Two classes of failure are surfaced to callers:
//! - invalid arguments (a vertex handed to an algorithm is not part of the
//!   graph, an edge references an unknown endpoint) fail fast before any
//!   search state is allocated;
//! - an unreachable target is an expected, recoverable outcome reported as
//!   [`GraphError::PathNotFound`], naming source, target, and graph.

use std::fmt;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex handed to an algorithm is not part of the graph
    #[error("vertex not found: {vertex} (in {graph})")]
    VertexNotFound { vertex: String, graph: String },

    /// No connecting path exists between the two vertices
    #[error("path from '{from}' to '{to}' does not exist in {graph}")]
    PathNotFound {
        from: String,
        to: String,
        graph: String,
    },

    /// An edge references an endpoint that was never added to the graph
    #[error("edge endpoint not found: {endpoint} (in {graph})")]
    EdgeEndpointMissing { endpoint: String, graph: String },
}

impl GraphError {
    /// Create an error for a vertex missing from a graph
    pub fn vertex_not_found(vertex: impl fmt::Debug, graph: impl Into<String>) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{vertex:?}"),
            graph: graph.into(),
        }
    }

    /// Create an error for an unreachable target vertex
    pub fn path_not_found(
        from: impl fmt::Debug,
        to: impl fmt::Debug,
        graph: impl Into<String>,
    ) -> Self {
        GraphError::PathNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            graph: graph.into(),
        }
    }

    /// Create an error for an edge whose endpoint is unknown to the graph
    pub fn edge_endpoint_missing(endpoint: impl fmt::Debug, graph: impl Into<String>) -> Self {
        GraphError::EdgeEndpointMissing {
            endpoint: format!("{endpoint:?}"),
            graph: graph.into(),
        }
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
