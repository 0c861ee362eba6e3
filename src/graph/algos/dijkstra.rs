//! Dijkstra single-source shortest paths

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{ShortestDistances, WeightQueue};
use crate::graph::model::{Endpoints, Graph, Weighted};
use crate::graph::path::{PredecessorsList, WeightedPath};
use crate::weight::OrderedMonoid;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Outcome of a single-source shortest-path search.
///
/// Holds the final distance map and predecessor chains; concrete paths
/// are materialized on demand per target.
#[derive(Debug)]
pub struct ShortestPaths<V, E, W> {
    source: V,
    distances: ShortestDistances<V, W>,
    predecessors: PredecessorsList<V, E>,
    graph: String,
}

impl<V, E, W> ShortestPaths<V, E, W>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Endpoints<Vertex = V> + Clone,
    W: Clone,
{
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Best-known distance to `target`; `None` when unreachable
    pub fn distance_to(&self, target: &V) -> Option<&W> {
        self.distances.get(target)
    }

    /// Materialize the shortest path to `target`.
    ///
    /// Fails with [`GraphError::PathNotFound`] when no predecessor chain
    /// connects the source to `target`; a partial path is never returned.
    pub fn path_to(&self, target: &V) -> Result<WeightedPath<V, E, W>> {
        let not_found = || GraphError::path_not_found(&self.source, target, self.graph.clone());
        let path = self
            .predecessors
            .build_path(&self.source, target)
            .ok_or_else(not_found)?;
        let weight = self.distances.get(target).cloned().ok_or_else(not_found)?;
        Ok(WeightedPath::new(path, weight))
    }
}

/// Single-source shortest paths from `source` over an arbitrary
/// ordered-monoid weight domain.
///
/// Directed graphs are expanded along outbound edges only; every other
/// graph kind along all incident edges (resolved once through
/// [`Graph::traversal_edges`]). All weight arithmetic and comparison go
/// through `monoid`.
///
/// Weights must be non-negative with respect to the monoid's order
/// (monotonic under `combine`); violating that precondition leaves the
/// result unspecified, it is not detected.
#[tracing::instrument(skip_all, fields(source = ?source, order = graph.order(), size = graph.size()))]
pub fn dijkstra<G, M, W>(
    graph: &G,
    source: &G::Vertex,
    monoid: &M,
) -> Result<ShortestPaths<G::Vertex, G::Edge, W>>
where
    G: Graph,
    G::Edge: Weighted<Weight = W>,
    M: OrderedMonoid<W>,
    W: Clone,
{
    if !graph.contains_vertex(source) {
        return Err(GraphError::vertex_not_found(source, graph.description()));
    }

    let mut distances = ShortestDistances::new();
    let mut predecessors = PredecessorsList::new();
    let mut settled: HashSet<G::Vertex> = HashSet::new();
    let mut frontier: WeightQueue<G::Vertex, W> = WeightQueue::new();

    distances.set(source.clone(), monoid.zero());
    frontier.push(monoid, source.clone(), monoid.zero());

    while let Some((current, cost)) = frontier.pop(monoid) {
        // lazy deletion: a popped entry that no longer matches the live
        // distance has been superseded by a later improvement
        if !distances.is_current(monoid, &current, &cost) {
            continue;
        }
        if !settled.insert(current.clone()) {
            continue;
        }

        for edge in graph.traversal_edges(&current) {
            let Some(next) = edge.opposite(&current) else {
                continue;
            };
            if settled.contains(next) {
                continue;
            }

            let tentative = monoid.combine(&cost, edge.weight());
            if distances.improves(monoid, next, &tentative) {
                distances.set(next.clone(), tentative.clone());
                predecessors.add_predecessor(next.clone(), current.clone(), edge.clone());
                frontier.push(monoid, next.clone(), tentative);
            }
        }
    }

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
        graph: graph.description(),
    })
}
