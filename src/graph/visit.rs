//! Visitor-driven breadth-first and depth-first traversal
//!
//! Both engines drive a caller-supplied [`Visitor`] and interpret the
//! [`VisitControl`] signal returned from every callback; there is no
//! exception-style early exit. Both run in O(V+E) and produce a
//! deterministic visit sequence for a fixed graph and incidence order.

use crate::error::{GraphError, Result};
use crate::graph::model::{Endpoints, Graph};
use std::collections::{HashSet, VecDeque};

/// Signal returned by every visitor callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitControl {
    /// Keep traversing
    Continue,
    /// Prune expansion: from `discover_vertex`, skip the vertex's edges;
    /// from `discover_edge`, do not follow that edge
    SkipChildren,
    /// Halt the traversal immediately and return to the caller
    Stop,
}

/// Callbacks invoked as the traversal discovers and finishes vertices and
/// edges. Every method defaults to [`VisitControl::Continue`].
///
/// Edge callbacks fire only for edges whose far endpoint has not been
/// visited at discovery time; edges closing back onto an already-visited
/// vertex are not reported. Under BFS this is exactly the BFS tree.
pub trait Visitor<G: Graph> {
    fn discover_vertex(&mut self, _vertex: &G::Vertex) -> VisitControl {
        VisitControl::Continue
    }

    fn finish_vertex(&mut self, _vertex: &G::Vertex) -> VisitControl {
        VisitControl::Continue
    }

    fn discover_edge(&mut self, _edge: &G::Edge) -> VisitControl {
        VisitControl::Continue
    }

    fn finish_edge(&mut self, _edge: &G::Edge) -> VisitControl {
        VisitControl::Continue
    }
}

/// Records vertices in discovery order
#[derive(Debug)]
pub struct VertexSequenceVisitor<V> {
    vertices: Vec<V>,
}

impl<V> Default for VertexSequenceVisitor<V> {
    fn default() -> Self {
        VertexSequenceVisitor {
            vertices: Vec::new(),
        }
    }
}

impl<V> VertexSequenceVisitor<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

impl<G: Graph> Visitor<G> for VertexSequenceVisitor<G::Vertex> {
    fn discover_vertex(&mut self, vertex: &G::Vertex) -> VisitControl {
        self.vertices.push(vertex.clone());
        VisitControl::Continue
    }
}

/// Breadth-first traversal from `source`.
///
/// Vertices are marked visited at enqueue time, so each vertex enters the
/// FIFO frontier at most once. Edges at each vertex are explored in the
/// incidence order reported by the graph.
#[tracing::instrument(skip_all, fields(source = ?source, order = graph.order()))]
pub fn breadth_first_search<G, T>(graph: &G, source: &G::Vertex, visitor: &mut T) -> Result<()>
where
    G: Graph,
    T: Visitor<G>,
{
    if !graph.contains_vertex(source) {
        return Err(GraphError::vertex_not_found(source, graph.description()));
    }

    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut queue: VecDeque<G::Vertex> = VecDeque::new();
    visited.insert(source.clone());
    queue.push_back(source.clone());

    while let Some(current) = queue.pop_front() {
        let expand = match visitor.discover_vertex(&current) {
            VisitControl::Stop => return Ok(()),
            VisitControl::SkipChildren => false,
            VisitControl::Continue => true,
        };

        if expand {
            for edge in graph.traversal_edges(&current) {
                let Some(next) = edge.opposite(&current) else {
                    continue;
                };
                if visited.contains(next) {
                    continue;
                }

                match visitor.discover_edge(&edge) {
                    VisitControl::Stop => return Ok(()),
                    VisitControl::SkipChildren => continue,
                    VisitControl::Continue => {}
                }

                visited.insert(next.clone());
                queue.push_back(next.clone());

                if visitor.finish_edge(&edge) == VisitControl::Stop {
                    return Ok(());
                }
            }
        }

        if visitor.finish_vertex(&current) == VisitControl::Stop {
            return Ok(());
        }
    }

    Ok(())
}

/// Depth-first traversal from `source`, on an explicit stack rather than
/// the call stack.
///
/// Vertices are marked visited when popped for processing; children are
/// pushed in incidence order, so the stack explores them in reverse
/// incidence order (last discovered, first explored).
#[tracing::instrument(skip_all, fields(source = ?source, order = graph.order()))]
pub fn depth_first_search<G, T>(graph: &G, source: &G::Vertex, visitor: &mut T) -> Result<()>
where
    G: Graph,
    T: Visitor<G>,
{
    if !graph.contains_vertex(source) {
        return Err(GraphError::vertex_not_found(source, graph.description()));
    }

    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut stack: Vec<G::Vertex> = vec![source.clone()];

    while let Some(current) = stack.pop() {
        // a vertex can sit on the stack more than once
        if !visited.insert(current.clone()) {
            continue;
        }

        let expand = match visitor.discover_vertex(&current) {
            VisitControl::Stop => return Ok(()),
            VisitControl::SkipChildren => false,
            VisitControl::Continue => true,
        };

        if expand {
            for edge in graph.traversal_edges(&current) {
                let Some(next) = edge.opposite(&current) else {
                    continue;
                };
                if visited.contains(next) {
                    continue;
                }

                match visitor.discover_edge(&edge) {
                    VisitControl::Stop => return Ok(()),
                    VisitControl::SkipChildren => continue,
                    VisitControl::Continue => {}
                }

                stack.push(next.clone());

                if visitor.finish_edge(&edge) == VisitControl::Stop {
                    return Ok(());
                }
            }
        }

        if visitor.finish_vertex(&current) == VisitControl::Stop {
            return Ok(());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::{Edge, UndirectedMutableGraph};

    type TestGraph = UndirectedMutableGraph<&'static str, Edge<&'static str>>;

    fn graph_with(vertices: &[&'static str], edges: &[(&'static str, &'static str)]) -> TestGraph {
        let mut g = TestGraph::new();
        for v in vertices {
            g.add_vertex(*v);
        }
        for (a, b) in edges {
            g.add_edge(Edge::new(*a, *b)).unwrap();
        }
        g
    }

    /// Collects the edges that discovered new vertices (the BFS/DFS tree)
    struct TreeEdgeVisitor {
        edges: Vec<Edge<&'static str>>,
    }

    impl Visitor<TestGraph> for TreeEdgeVisitor {
        fn discover_edge(&mut self, edge: &Edge<&'static str>) -> VisitControl {
            self.edges.push(edge.clone());
            VisitControl::Continue
        }
    }

    // Classic BFS example: r,s,t,u,v,w,x,y with s as the source.
    fn bfs_example() -> TestGraph {
        graph_with(
            &["r", "s", "t", "u", "v", "w", "x", "y"],
            &[
                ("s", "r"),
                ("s", "w"),
                ("r", "v"),
                ("w", "t"),
                ("w", "x"),
                ("t", "u"),
                ("t", "x"),
                ("y", "u"),
                ("y", "x"),
            ],
        )
    }

    #[test]
    fn bfs_visits_in_level_order() {
        let g = bfs_example();
        let mut visitor = VertexSequenceVisitor::new();
        breadth_first_search(&g, &"s", &mut visitor).unwrap();
        assert_eq!(
            visitor.vertices(),
            &["s", "r", "w", "v", "t", "x", "u", "y"]
        );
    }

    #[test]
    fn bfs_tree_excludes_cross_edges() {
        let g = bfs_example();
        let mut visitor = TreeEdgeVisitor { edges: Vec::new() };
        breadth_first_search(&g, &"s", &mut visitor).unwrap();

        let expected = vec![
            Edge::new("s", "r"),
            Edge::new("s", "w"),
            Edge::new("r", "v"),
            Edge::new("w", "t"),
            Edge::new("w", "x"),
            Edge::new("t", "u"),
            Edge::new("y", "x"),
        ];
        assert_eq!(visitor.edges, expected);
    }

    #[test]
    fn dfs_explores_reverse_incidence_order() {
        let g = graph_with(
            &["a", "b", "c", "d", "e", "f", "g", "h", "s"],
            &[
                ("s", "a"),
                ("s", "b"),
                ("a", "c"),
                ("a", "d"),
                ("b", "e"),
                ("b", "f"),
                ("e", "h"),
                ("e", "g"),
            ],
        );
        let mut visitor = VertexSequenceVisitor::new();
        depth_first_search(&g, &"s", &mut visitor).unwrap();
        assert_eq!(
            visitor.vertices(),
            &["s", "b", "f", "e", "g", "h", "a", "d", "c"]
        );
    }

    struct StopAt {
        at: &'static str,
        seen: Vec<&'static str>,
    }

    impl Visitor<TestGraph> for StopAt {
        fn discover_vertex(&mut self, vertex: &&'static str) -> VisitControl {
            self.seen.push(*vertex);
            if *vertex == self.at {
                VisitControl::Stop
            } else {
                VisitControl::Continue
            }
        }
    }

    #[test]
    fn stop_halts_the_traversal_without_error() {
        let g = bfs_example();
        let mut visitor = StopAt {
            at: "w",
            seen: Vec::new(),
        };
        breadth_first_search(&g, &"s", &mut visitor).unwrap();
        assert_eq!(visitor.seen, vec!["s", "r", "w"]);
    }

    struct SkipChildrenOf {
        at: &'static str,
        seen: Vec<&'static str>,
    }

    impl Visitor<TestGraph> for SkipChildrenOf {
        fn discover_vertex(&mut self, vertex: &&'static str) -> VisitControl {
            self.seen.push(*vertex);
            if *vertex == self.at {
                VisitControl::SkipChildren
            } else {
                VisitControl::Continue
            }
        }
    }

    #[test]
    fn skip_children_prunes_one_vertex_only() {
        let g = bfs_example();
        let mut visitor = SkipChildrenOf {
            at: "w",
            seen: Vec::new(),
        };
        breadth_first_search(&g, &"s", &mut visitor).unwrap();
        // everything behind w (t, x, u, y) is only reachable through w
        assert_eq!(visitor.seen, vec!["s", "r", "w", "v"]);
    }

    struct PruneEdges {
        discovered: Vec<&'static str>,
    }

    impl Visitor<TestGraph> for PruneEdges {
        fn discover_vertex(&mut self, vertex: &&'static str) -> VisitControl {
            self.discovered.push(*vertex);
            VisitControl::Continue
        }

        fn discover_edge(&mut self, _edge: &Edge<&'static str>) -> VisitControl {
            VisitControl::SkipChildren
        }
    }

    #[test]
    fn skip_children_on_edges_stops_all_expansion() {
        let g = bfs_example();
        let mut visitor = PruneEdges {
            discovered: Vec::new(),
        };
        breadth_first_search(&g, &"s", &mut visitor).unwrap();
        assert_eq!(visitor.discovered, vec!["s"]);
    }

    #[test]
    fn unknown_source_fails_fast() {
        let g = bfs_example();
        let mut visitor = VertexSequenceVisitor::new();
        let err = breadth_first_search(&g, &"zz", &mut visitor).unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound { .. }));
        assert!(visitor.vertices().is_empty());
    }

    #[test]
    fn dfs_unknown_source_fails_fast() {
        let g = bfs_example();
        let mut visitor = VertexSequenceVisitor::new();
        assert!(depth_first_search(&g, &"zz", &mut visitor).is_err());
    }
}
