//! Path values and predecessor tracking
//!
//! Searches record how each vertex was best reached in a
//! [`PredecessorsList`] (an explicit vertex-to-predecessor map, not an
//! object graph); concrete [`Path`]/[`WeightedPath`] values are
//! materialized from it with a single backward walk and one reversal.

use crate::graph::model::Weighted;
use crate::weight::OrderedMonoid;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// An ordered walk from a source vertex to a target vertex.
///
/// Invariants: the vertex sequence has exactly one more entry than the
/// edge sequence, starts at the source, ends at the target, and edge `i`
/// connects vertices `i` and `i + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<V, E> {
    source: V,
    target: V,
    vertices: Vec<V>,
    edges: Vec<E>,
}

impl<V: Clone, E> Path<V, E> {
    pub(crate) fn new(vertices: Vec<V>, edges: Vec<E>) -> Self {
        debug_assert_eq!(vertices.len(), edges.len() + 1);
        let source = vertices[0].clone();
        let target = vertices[vertices.len() - 1].clone();
        Path {
            source,
            target,
            vertices,
            edges,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    /// Vertices in order from source to target, both included
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Edges in order; one fewer than the vertices
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Number of vertices
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.edges.len()
    }
}

/// A [`Path`] plus its total weight, the monoid-combine of all edge
/// weights in path order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath<V, E, W> {
    path: Path<V, E>,
    weight: W,
}

impl<V: Clone, E, W> WeightedPath<V, E, W> {
    pub(crate) fn new(path: Path<V, E>, weight: W) -> Self {
        WeightedPath { path, weight }
    }

    pub fn path(&self) -> &Path<V, E> {
        &self.path
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }

    pub fn source(&self) -> &V {
        self.path.source()
    }

    pub fn target(&self) -> &V {
        self.path.target()
    }

    pub fn vertices(&self) -> &[V] {
        self.path.vertices()
    }

    pub fn edges(&self) -> &[E] {
        self.path.edges()
    }

    /// Number of vertices
    pub fn order(&self) -> usize {
        self.path.order()
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.path.size()
    }
}

/// Best-known predecessor (and connecting edge) per vertex, populated
/// incrementally during a search.
///
/// Each vertex is recorded at most once per improving relaxation and
/// finalized vertices are never revisited, so the recorded chains are
/// acyclic by construction.
#[derive(Debug, Clone)]
pub struct PredecessorsList<V, E> {
    map: HashMap<V, (V, E)>,
}

impl<V, E> Default for PredecessorsList<V, E> {
    fn default() -> Self {
        PredecessorsList {
            map: HashMap::new(),
        }
    }
}

impl<V, E> PredecessorsList<V, E>
where
    V: Clone + Eq + Hash,
    E: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) how `vertex` was best reached
    pub fn add_predecessor(&mut self, vertex: V, predecessor: V, edge: E) {
        self.map.insert(vertex, (predecessor, edge));
    }

    /// The recorded (predecessor, edge) pair for `vertex`, if any
    pub fn predecessor(&self, vertex: &V) -> Option<&(V, E)> {
        self.map.get(vertex)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Walk the predecessor chain backward from `target` until `source`
    /// and materialize the forward path with one reversal pass.
    ///
    /// Returns `None` when the chain never reaches `source`; callers turn
    /// that into a path-not-found error rather than a partial path.
    pub fn build_path(&self, source: &V, target: &V) -> Option<Path<V, E>> {
        let mut vertices = vec![target.clone()];
        let mut edges = Vec::new();
        let mut current = target.clone();

        while current != *source {
            let (predecessor, edge) = self.map.get(&current)?;
            edges.push(edge.clone());
            vertices.push(predecessor.clone());
            current = predecessor.clone();
        }

        vertices.reverse();
        edges.reverse();
        Some(Path::new(vertices, edges))
    }

    /// Like [`build_path`](Self::build_path), with the total weight
    /// accumulated in forward order after reversal; `combine` is not
    /// assumed commutative.
    pub fn build_weighted_path<W, M>(
        &self,
        source: &V,
        target: &V,
        monoid: &M,
    ) -> Option<WeightedPath<V, E, W>>
    where
        E: Weighted<Weight = W>,
        M: OrderedMonoid<W>,
    {
        let path = self.build_path(source, target)?;
        let mut total = monoid.zero();
        for edge in path.edges() {
            total = monoid.combine(&total, edge.weight());
        }
        Some(WeightedPath::new(path, total))
    }
}
