//! A* goal-directed shortest path

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{ShortestDistances, WeightQueue};
use crate::graph::model::{Endpoints, Graph, Weighted};
use crate::graph::path::{PredecessorsList, WeightedPath};
use crate::weight::OrderedMonoid;
use std::collections::HashSet;

/// Shortest path from `source` to `target` guided by a heuristic.
///
/// `heuristic(v, target)` estimates the remaining cost from `v` to the
/// target. The first path found is optimal only if the heuristic is
/// admissible and consistent; that is a documented precondition, not
/// verified at runtime. A heuristic that always returns the monoid's
/// zero degenerates into Dijkstra.
///
/// Maintains the usual three score maps: `g` (best known cost from the
/// source), `h` (heuristic estimate), and `f = combine(g, h)` as the
/// frontier priority. The open queue uses lazy deletion; finalized
/// vertices go into a closed set and are never reprocessed. Popping the
/// target is the sole success exit; an exhausted queue fails with
/// [`GraphError::PathNotFound`] naming source, target, and graph.
#[tracing::instrument(skip_all, fields(source = ?source, target = ?target, order = graph.order()))]
pub fn astar<G, M, W, H>(
    graph: &G,
    source: &G::Vertex,
    target: &G::Vertex,
    monoid: &M,
    heuristic: H,
) -> Result<WeightedPath<G::Vertex, G::Edge, W>>
where
    G: Graph,
    G::Edge: Weighted<Weight = W>,
    M: OrderedMonoid<W>,
    W: Clone,
    H: Fn(&G::Vertex, &G::Vertex) -> W,
{
    for vertex in [source, target] {
        if !graph.contains_vertex(vertex) {
            return Err(GraphError::vertex_not_found(vertex, graph.description()));
        }
    }

    let mut g_scores = ShortestDistances::new();
    let mut f_scores = ShortestDistances::new();
    let mut predecessors = PredecessorsList::new();
    let mut closed: HashSet<G::Vertex> = HashSet::new();
    let mut open: WeightQueue<G::Vertex, W> = WeightQueue::new();

    // g(source) is the monoid zero; f(source) comes from the heuristic
    // alone. The two are set separately so there is no ambiguity about
    // which value is live at the first pop.
    g_scores.set(source.clone(), monoid.zero());
    let source_estimate = heuristic(source, target);
    f_scores.set(source.clone(), source_estimate.clone());
    open.push(monoid, source.clone(), source_estimate);

    while let Some((current, f)) = open.pop(monoid) {
        if !f_scores.is_current(monoid, &current, &f) {
            continue;
        }

        if current == *target {
            let path = predecessors
                .build_path(source, target)
                .ok_or_else(|| GraphError::path_not_found(source, target, graph.description()))?;
            let weight = g_scores
                .get(target)
                .cloned()
                .ok_or_else(|| GraphError::path_not_found(source, target, graph.description()))?;
            return Ok(WeightedPath::new(path, weight));
        }

        if !closed.insert(current.clone()) {
            continue;
        }

        let Some(g_current) = g_scores.get(&current).cloned() else {
            continue;
        };

        for edge in graph.traversal_edges(&current) {
            let Some(next) = edge.opposite(&current) else {
                continue;
            };
            if closed.contains(next) {
                continue;
            }

            let tentative = monoid.combine(&g_current, edge.weight());
            if g_scores.improves(monoid, next, &tentative) {
                predecessors.add_predecessor(next.clone(), current.clone(), edge.clone());
                let estimate = heuristic(next, target);
                let f_next = monoid.combine(&tentative, &estimate);
                g_scores.set(next.clone(), tentative);
                f_scores.set(next.clone(), f_next.clone());
                open.push(monoid, next.clone(), f_next);
            }
        }
    }

    Err(GraphError::path_not_found(
        source,
        target,
        graph.description(),
    ))
}

#[cfg(test)]
mod tests;
