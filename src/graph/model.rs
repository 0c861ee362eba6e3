//! Graph model traits and concrete adjacency models
//!
//! The traversal and search algorithms only ever see the capability
//! traits defined here: [`Graph`] for vertex/edge sets and incidence
//! queries, [`DirectedGraph`] for orientation-aware queries, and the
//! edge-level [`Endpoints`]/[`Weighted`] views. The mutable models at the
//! bottom of the file are minimal reference implementations with
//! deterministic, insertion-ordered incidence lists.

use crate::error::{GraphError, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// An edge viewed as its two endpoints.
///
/// For directed edges the convention follows the head/tail order of the
/// constructor: the edge is traversed from [`head`](Endpoints::head) to
/// [`tail`](Endpoints::tail). Undirected edges treat the two ends
/// symmetrically.
pub trait Endpoints {
    type Vertex;

    fn head(&self) -> &Self::Vertex;

    fn tail(&self) -> &Self::Vertex;

    /// The endpoint other than `vertex`, or `None` when `vertex` is not
    /// an endpoint of this edge. Self-loops report the same vertex back.
    fn opposite(&self, vertex: &Self::Vertex) -> Option<&Self::Vertex>
    where
        Self::Vertex: PartialEq,
    {
        if vertex == self.head() {
            Some(self.tail())
        } else if vertex == self.tail() {
            Some(self.head())
        } else {
            None
        }
    }
}

/// An edge carrying a weight value
pub trait Weighted: Endpoints {
    type Weight;

    fn weight(&self) -> &Self::Weight;
}

/// Read-only graph capability set: vertex set, edge set, and incidence
/// queries.
///
/// Implementations must report incident edges in a stable order; the
/// traversal engines derive their deterministic visit sequences from it.
pub trait Graph {
    type Vertex: Clone + Eq + Hash + fmt::Debug;
    type Edge: Endpoints<Vertex = Self::Vertex> + Clone;

    fn vertices(&self) -> Vec<Self::Vertex>;

    fn edges(&self) -> Vec<Self::Edge>;

    /// All edges touching `vertex`, in incidence order
    fn incident_edges(&self, vertex: &Self::Vertex) -> Vec<Self::Edge>;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.vertices().iter().any(|v| v == vertex)
    }

    /// Edges to expand from `vertex` during a traversal or search.
    ///
    /// Undirected models report all incident edges; directed models
    /// override this to outbound edges only. Algorithms call this single
    /// accessor instead of inspecting the graph kind in their hot loop.
    fn traversal_edges(&self, vertex: &Self::Vertex) -> Vec<Self::Edge> {
        self.incident_edges(vertex)
    }

    /// Number of vertices
    fn order(&self) -> usize {
        self.vertices().len()
    }

    /// Number of edges
    fn size(&self) -> usize {
        self.edges().len()
    }

    /// Human-readable identifier used in error messages
    fn description(&self) -> String {
        format!("graph (order={}, size={})", self.order(), self.size())
    }
}

/// A graph whose edges are oriented, with outbound and inbound incidence
/// queries per vertex
pub trait DirectedGraph: Graph {
    /// Edges leaving `vertex` (edges whose head is `vertex`)
    fn outbound_edges(&self, vertex: &Self::Vertex) -> Vec<Self::Edge>;

    /// Edges entering `vertex` (edges whose tail is `vertex`)
    fn inbound_edges(&self, vertex: &Self::Vertex) -> Vec<Self::Edge>;
}

/// A plain edge connecting two vertices
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<V> {
    head: V,
    tail: V,
}

impl<V> Edge<V> {
    pub fn new(head: V, tail: V) -> Self {
        Edge { head, tail }
    }
}

impl<V> Endpoints for Edge<V> {
    type Vertex = V;

    fn head(&self) -> &V {
        &self.head
    }

    fn tail(&self) -> &V {
        &self.tail
    }
}

/// An edge plus a weight value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedEdge<V, W> {
    head: V,
    tail: V,
    weight: W,
}

impl<V, W> WeightedEdge<V, W> {
    pub fn new(head: V, tail: V, weight: W) -> Self {
        WeightedEdge { head, tail, weight }
    }
}

impl<V, W> Endpoints for WeightedEdge<V, W> {
    type Vertex = V;

    fn head(&self) -> &V {
        &self.head
    }

    fn tail(&self) -> &V {
        &self.tail
    }
}

impl<V, W> Weighted for WeightedEdge<V, W> {
    type Weight = W;

    fn weight(&self) -> &W {
        &self.weight
    }
}

/// Mutable undirected graph backed by insertion-ordered adjacency lists
#[derive(Debug, Clone)]
pub struct UndirectedMutableGraph<V, E> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    edges: Vec<E>,
    incidence: Vec<Vec<usize>>,
}

impl<V, E> Default for UndirectedMutableGraph<V, E> {
    fn default() -> Self {
        UndirectedMutableGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            incidence: Vec::new(),
        }
    }
}

impl<V, E> UndirectedMutableGraph<V, E>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Endpoints<Vertex = V> + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex; returns false if it was already present
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.incidence.push(Vec::new());
        true
    }

    /// Add an edge; both endpoints must already be vertices of the graph
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        let head = self.vertex_index(edge.head())?;
        let tail = self.vertex_index(edge.tail())?;
        let slot = self.edges.len();
        self.incidence[head].push(slot);
        if tail != head {
            self.incidence[tail].push(slot);
        }
        self.edges.push(edge);
        Ok(())
    }

    fn vertex_index(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::edge_endpoint_missing(vertex, self.description()))
    }
}

impl<V, E> Graph for UndirectedMutableGraph<V, E>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Endpoints<Vertex = V> + Clone,
{
    type Vertex = V;
    type Edge = E;

    fn vertices(&self) -> Vec<V> {
        self.vertices.clone()
    }

    fn edges(&self) -> Vec<E> {
        self.edges.clone()
    }

    fn incident_edges(&self, vertex: &V) -> Vec<E> {
        match self.index.get(vertex) {
            Some(&i) => self.incidence[i]
                .iter()
                .map(|&e| self.edges[e].clone())
                .collect(),
            None => Vec::new(),
        }
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }
}

/// Mutable directed graph; edges run from head to tail
#[derive(Debug, Clone)]
pub struct DirectedMutableGraph<V, E> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    edges: Vec<E>,
    outbound: Vec<Vec<usize>>,
    inbound: Vec<Vec<usize>>,
}

impl<V, E> Default for DirectedMutableGraph<V, E> {
    fn default() -> Self {
        DirectedMutableGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            outbound: Vec::new(),
            inbound: Vec::new(),
        }
    }
}

impl<V, E> DirectedMutableGraph<V, E>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Endpoints<Vertex = V> + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex; returns false if it was already present
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.outbound.push(Vec::new());
        self.inbound.push(Vec::new());
        true
    }

    /// Add an edge from its head to its tail; both endpoints must already
    /// be vertices of the graph
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        let head = self.vertex_index(edge.head())?;
        let tail = self.vertex_index(edge.tail())?;
        let slot = self.edges.len();
        self.outbound[head].push(slot);
        self.inbound[tail].push(slot);
        self.edges.push(edge);
        Ok(())
    }

    fn vertex_index(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::edge_endpoint_missing(vertex, self.description()))
    }

    fn edges_at(&self, lists: &[Vec<usize>], vertex: &V) -> Vec<E> {
        match self.index.get(vertex) {
            Some(&i) => lists[i].iter().map(|&e| self.edges[e].clone()).collect(),
            None => Vec::new(),
        }
    }
}

impl<V, E> Graph for DirectedMutableGraph<V, E>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Endpoints<Vertex = V> + Clone,
{
    type Vertex = V;
    type Edge = E;

    fn vertices(&self) -> Vec<V> {
        self.vertices.clone()
    }

    fn edges(&self) -> Vec<E> {
        self.edges.clone()
    }

    fn incident_edges(&self, vertex: &V) -> Vec<E> {
        let mut edges = self.edges_at(&self.outbound, vertex);
        edges.extend(self.edges_at(&self.inbound, vertex));
        edges
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Directed expansion follows outbound edges only
    fn traversal_edges(&self, vertex: &V) -> Vec<E> {
        self.outbound_edges(vertex)
    }

    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn description(&self) -> String {
        format!("digraph (order={}, size={})", self.order(), self.size())
    }
}

impl<V, E> DirectedGraph for DirectedMutableGraph<V, E>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Endpoints<Vertex = V> + Clone,
{
    fn outbound_edges(&self, vertex: &V) -> Vec<E> {
        self.edges_at(&self.outbound, vertex)
    }

    fn inbound_edges(&self, vertex: &V) -> Vec<E> {
        self.edges_at(&self.inbound, vertex)
    }
}
