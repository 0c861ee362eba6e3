//! Spanning-tree construction over weighted graphs
//!
//! Reuses the shortest-path frontier discipline: the lowest-weight edge
//! connecting a tree vertex to a non-tree vertex is committed, the
//! frontier expands, and stale queue entries are discarded on pop.

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::WeightQueue;
use crate::graph::model::{Endpoints, Graph, Weighted};
use crate::weight::OrderedMonoid;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// A tree of committed edges with an incrementally maintained total
/// weight.
///
/// Covers exactly the vertices reachable from the root it was grown
/// from; implements [`Graph`] so it can itself be traversed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree<V, E, W> {
    root: V,
    vertices: Vec<V>,
    edges: Vec<E>,
    total_weight: W,
}

impl<V, E, W> SpanningTree<V, E, W>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Endpoints<Vertex = V> + Clone,
{
    pub fn root(&self) -> &V {
        &self.root
    }

    /// Monoid-combine of all committed edge weights
    pub fn total_weight(&self) -> &W {
        &self.total_weight
    }
}

impl<V, E, W> Graph for SpanningTree<V, E, W>
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
        self.edges
            .iter()
            .filter(|e| e.head() == vertex || e.tail() == vertex)
            .cloned()
            .collect()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.iter().any(|v| v == vertex)
    }

    fn description(&self) -> String {
        format!(
            "spanning tree (root={:?}, order={}, size={})",
            self.root,
            self.vertices.len(),
            self.edges.len()
        )
    }
}

/// Grow a spanning tree from `root` by repeatedly committing the
/// lowest-weight frontier edge (Prim-style), so the result is a minimum
/// spanning tree of the root's connected component.
///
/// Vertices unreachable from `root` are excluded, not an error; callers
/// wanting a spanning forest invoke this once per component.
#[tracing::instrument(skip_all, fields(root = ?root, order = graph.order(), size = graph.size()))]
pub fn minimum_spanning_tree<G, M, W>(
    graph: &G,
    root: &G::Vertex,
    monoid: &M,
) -> Result<SpanningTree<G::Vertex, G::Edge, W>>
where
    G: Graph,
    G::Edge: Weighted<Weight = W>,
    M: OrderedMonoid<W>,
    W: Clone,
{
    if !graph.contains_vertex(root) {
        return Err(GraphError::vertex_not_found(root, graph.description()));
    }

    let mut in_tree: HashSet<G::Vertex> = HashSet::new();
    let mut vertices = vec![root.clone()];
    let mut edges = Vec::new();
    let mut total_weight = monoid.zero();
    let mut frontier: WeightQueue<G::Edge, W> = WeightQueue::new();

    in_tree.insert(root.clone());
    for edge in graph.traversal_edges(root) {
        let weight = edge.weight().clone();
        frontier.push(monoid, edge, weight);
    }

    while let Some((edge, weight)) = frontier.pop(monoid) {
        // an edge whose far endpoint joined the tree since it was
        // enqueued is stale and gets discarded
        let next = match (in_tree.contains(edge.head()), in_tree.contains(edge.tail())) {
            (true, false) => edge.tail().clone(),
            (false, true) => edge.head().clone(),
            _ => continue,
        };

        in_tree.insert(next.clone());
        vertices.push(next.clone());
        total_weight = monoid.combine(&total_weight, &weight);
        edges.push(edge);

        for candidate in graph.traversal_edges(&next) {
            let leads_outside = candidate
                .opposite(&next)
                .is_some_and(|far| !in_tree.contains(far));
            if leads_outside {
                let weight = candidate.weight().clone();
                frontier.push(monoid, candidate, weight);
            }
        }
    }

    Ok(SpanningTree {
        root: root.clone(),
        vertices,
        edges,
        total_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::{UndirectedMutableGraph, WeightedEdge};
    use crate::weight::Additive;

    type WEdge = WeightedEdge<&'static str, u32>;
    type TestGraph = UndirectedMutableGraph<&'static str, WEdge>;

    fn weighted(
        vertices: &[&'static str],
        edges: &[(&'static str, &'static str, u32)],
    ) -> TestGraph {
        let mut g = TestGraph::new();
        for v in vertices {
            g.add_vertex(*v);
        }
        for (a, b, w) in edges {
            g.add_edge(WeightedEdge::new(*a, *b, *w)).unwrap();
        }
        g
    }

    #[test]
    fn commits_the_lightest_frontier_edges() {
        let g = weighted(
            &["a", "b", "c", "d", "e"],
            &[
                ("a", "b", 1),
                ("a", "c", 3),
                ("b", "c", 1),
                ("b", "d", 4),
                ("c", "d", 2),
                ("d", "e", 5),
            ],
        );
        let tree = minimum_spanning_tree(&g, &"a", &Additive).unwrap();

        assert_eq!(*tree.total_weight(), 9);
        assert_eq!(tree.order(), 5);
        assert_eq!(tree.size(), 4);
        assert_eq!(
            tree.edges(),
            vec![
                WeightedEdge::new("a", "b", 1),
                WeightedEdge::new("b", "c", 1),
                WeightedEdge::new("c", "d", 2),
                WeightedEdge::new("d", "e", 5),
            ]
        );
    }

    #[test]
    fn excludes_unreachable_vertices() {
        let g = weighted(
            &["a", "b", "x", "y"],
            &[("a", "b", 1), ("x", "y", 1)],
        );
        let tree = minimum_spanning_tree(&g, &"a", &Additive).unwrap();

        assert_eq!(tree.order(), 2);
        assert!(!tree.contains_vertex(&"x"));
        assert_eq!(*tree.total_weight(), 1);
    }

    #[test]
    fn single_vertex_tree_has_zero_weight() {
        let g = weighted(&["a"], &[]);
        let tree = minimum_spanning_tree(&g, &"a", &Additive).unwrap();

        assert_eq!(tree.vertices(), vec!["a"]);
        assert!(tree.edges().is_empty());
        assert_eq!(*tree.total_weight(), 0);
    }

    #[test]
    fn unknown_root_fails_fast() {
        let g = weighted(&["a"], &[]);
        let err = minimum_spanning_tree(&g, &"zz", &Additive).unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound { .. }));
    }

    #[test]
    fn the_tree_is_itself_traversable() {
        let g = weighted(
            &["a", "b", "c"],
            &[("a", "b", 1), ("b", "c", 2), ("a", "c", 5)],
        );
        let tree = minimum_spanning_tree(&g, &"a", &Additive).unwrap();

        let mut visitor = crate::graph::visit::VertexSequenceVisitor::new();
        crate::graph::visit::breadth_first_search(&tree, &"a", &mut visitor).unwrap();
        assert_eq!(visitor.vertices(), &["a", "b", "c"]);
    }

    #[test]
    fn unit_costs_count_edges() {
        let g = weighted(&["a", "b", "c"], &[("a", "b", 1), ("a", "c", 1)]);
        let tree = minimum_spanning_tree(&g, &"a", &Additive).unwrap();
        assert_eq!(*tree.total_weight(), 2);
        assert_eq!(tree.size(), 2);
    }
}
