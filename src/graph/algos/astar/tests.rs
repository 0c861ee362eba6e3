use super::*;
use crate::graph::model::{DirectedMutableGraph, UndirectedMutableGraph, WeightedEdge};
use crate::weight::Additive;
use std::collections::HashMap;

type WEdge = WeightedEdge<&'static str, f64>;
type TestGraph = UndirectedMutableGraph<&'static str, WEdge>;

// Two routes from start to goal: the upper one through a, b, c costs
// 10.5; the lower one through d, e costs 7.
fn two_route_graph() -> TestGraph {
    let mut g = TestGraph::new();
    for v in ["start", "a", "b", "c", "d", "e", "goal"] {
        g.add_vertex(v);
    }
    for (from, to, w) in [
        ("start", "a", 1.5),
        ("a", "b", 2.0),
        ("b", "c", 3.0),
        ("c", "goal", 4.0),
        ("start", "d", 2.0),
        ("d", "e", 3.0),
        ("e", "goal", 2.0),
    ] {
        g.add_edge(WeightedEdge::new(from, to, w)).unwrap();
    }
    g
}

// True remaining distances scaled by 0.9: admissible (never
// overestimates) and consistent (scaling preserves the triangle
// inequality against the true distances).
fn estimates() -> HashMap<&'static str, f64> {
    HashMap::from([
        ("start", 6.3),
        ("a", 7.65),
        ("b", 6.3),
        ("c", 3.6),
        ("d", 4.5),
        ("e", 1.8),
        ("goal", 0.0),
    ])
}

#[test]
fn finds_the_cheaper_route() {
    let g = two_route_graph();
    let h = estimates();
    let path = astar(&g, &"start", &"goal", &Additive, |v, _| h[v]).unwrap();

    assert_eq!(path.vertices(), &["start", "d", "e", "goal"]);
    assert_eq!(*path.weight(), 7.0);
    assert_eq!(path.edges().len(), 3);
}

#[test]
fn source_equal_target_returns_immediately() {
    let g = two_route_graph();
    let path = astar(&g, &"start", &"start", &Additive, |_, _| 0.0).unwrap();
    assert_eq!(path.vertices(), &["start"]);
    assert_eq!(*path.weight(), 0.0);
}

#[test]
fn unreachable_target_names_source_target_and_graph() {
    let mut g = TestGraph::new();
    for v in ["a", "b", "island"] {
        g.add_vertex(v);
    }
    g.add_edge(WeightedEdge::new("a", "b", 1.0)).unwrap();

    let err = astar(&g, &"a", &"island", &Additive, |_, _| 0.0).unwrap_err();
    match err {
        GraphError::PathNotFound { from, to, graph } => {
            assert_eq!(from, "\"a\"");
            assert_eq!(to, "\"island\"");
            assert!(graph.contains("order=3"));
        }
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}

#[test]
fn unknown_endpoints_fail_fast() {
    let g = two_route_graph();
    assert!(matches!(
        astar(&g, &"zz", &"goal", &Additive, |_, _| 0.0),
        Err(GraphError::VertexNotFound { .. })
    ));
    assert!(matches!(
        astar(&g, &"start", &"zz", &Additive, |_, _| 0.0),
        Err(GraphError::VertexNotFound { .. })
    ));
}

#[test]
fn directed_graphs_only_expand_outbound_edges() {
    let mut g: DirectedMutableGraph<&str, WEdge> = DirectedMutableGraph::new();
    for v in ["a", "b", "c"] {
        g.add_vertex(v);
    }
    g.add_edge(WeightedEdge::new("a", "b", 1.0)).unwrap();
    g.add_edge(WeightedEdge::new("c", "b", 1.0)).unwrap();

    // b has an inbound edge from c but no outbound route to it
    let err = astar(&g, &"a", &"c", &Additive, |_, _| 0.0).unwrap_err();
    assert!(matches!(err, GraphError::PathNotFound { .. }));
}

#[test]
fn repeated_searches_are_idempotent() {
    let g = two_route_graph();
    let h = estimates();
    let first = astar(&g, &"start", &"goal", &Additive, |v, _| h[v]).unwrap();
    let second = astar(&g, &"start", &"goal", &Additive, |v, _| h[v]).unwrap();
    assert_eq!(first, second);
}
