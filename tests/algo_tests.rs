use trellis::{algo, GraphBuilder, GraphView, NetworkBuilder, ValueGraphBuilder};

#[test]
fn test_cycle_appears_and_disappears_with_closing_edge() {
    let mut graph = GraphBuilder::directed().build();
    graph.add_node("a");
    graph.add_node("b");
    graph.add_node("c");
    graph.put_edge("a", "b").unwrap();
    graph.put_edge("b", "c").unwrap();
    graph.put_edge("c", "a").unwrap();
    assert!(algo::has_cycle(&graph));

    let reachable = algo::reachable_nodes(&graph, &"a");
    assert_eq!(reachable.len(), 3);
    for node in ["a", "b", "c"] {
        assert!(reachable.contains(&node));
    }

    graph.remove_edge(&"c", &"a");
    assert!(!algo::has_cycle(&graph));
    let reachable = algo::reachable_nodes(&graph, &"a");
    assert_eq!(
        reachable.into_iter().collect::<Vec<_>>(),
        vec!["a", "b"]
    );
}

#[test]
fn test_reachable_includes_start_only_for_isolated_node() {
    let mut graph = GraphBuilder::directed().build();
    graph.add_node(1);
    let reachable = algo::reachable_nodes(&graph, &1);
    assert_eq!(reachable.into_iter().collect::<Vec<_>>(), vec![1]);
}

#[test]
#[should_panic(expected = "not an element")]
fn test_reachable_from_missing_node_panics() {
    let graph: trellis::Graph<u8> = GraphBuilder::directed().build();
    let _ = algo::reachable_nodes(&graph, &1);
}

#[test]
fn test_reachability_follows_direction() {
    let mut graph = GraphBuilder::directed().build();
    graph.put_edge("a", "b").unwrap();
    graph.put_edge("c", "b").unwrap();
    let from_a = algo::reachable_nodes(&graph, &"a");
    assert!(from_a.contains(&"b"));
    assert!(!from_a.contains(&"c"));
}

#[test]
fn test_undirected_forest_has_no_cycle() {
    let graph = GraphBuilder::undirected()
        .build_from_edges([(1, 2), (1, 3), (4, 5)])
        .unwrap();
    assert!(!algo::has_cycle(&graph));
}

#[test]
fn test_value_graph_cycle_detection() {
    let mut graph = ValueGraphBuilder::directed().build();
    graph.put_edge_value("x", "y", 1).unwrap();
    graph.put_edge_value("y", "x", 1).unwrap();
    assert!(algo::has_cycle(&graph));
}

#[test]
fn test_directed_transitive_closure() {
    let graph = GraphBuilder::directed()
        .build_from_edges([("a", "b"), ("b", "c")])
        .unwrap();
    let closure = algo::transitive_closure(&graph);
    assert!(closure.has_edge_connecting(&"a", &"c"));
    assert!(closure.has_edge_connecting(&"a", &"a"));
    assert!(!closure.has_edge_connecting(&"c", &"a"));
    // Three self-loops, a->b, b->c, a->c.
    assert_eq!(closure.edge_count(), 6);
}

#[test]
fn test_undirected_transitive_closure_spans_components() {
    let graph = GraphBuilder::undirected()
        .build_from_edges([("a", "b"), ("c", "d")])
        .unwrap();
    let closure = algo::transitive_closure(&graph);
    assert!(closure.has_edge_connecting(&"a", &"b"));
    assert!(closure.has_edge_connecting(&"a", &"a"));
    assert!(!closure.has_edge_connecting(&"a", &"c"));
}

#[test]
fn test_network_cycle_via_parallel_edges() {
    let mut network = NetworkBuilder::undirected()
        .allows_parallel_edges(true)
        .build();
    network.add_edge("a", "b", 1).unwrap();
    assert!(!algo::network_has_cycle(&network));
    network.add_edge("a", "b", 2).unwrap();
    assert!(algo::network_has_cycle(&network));
}

#[test]
fn test_network_cycle_through_distinct_pairs() {
    let network = NetworkBuilder::directed()
        .build_from_edges([("a", "b", 1), ("b", "c", 2), ("c", "a", 3)])
        .unwrap();
    assert!(algo::network_has_cycle(&network));

    let acyclic = NetworkBuilder::directed()
        .build_from_edges([("a", "b", 1), ("b", "c", 2), ("a", "c", 3)])
        .unwrap();
    assert!(!algo::network_has_cycle(&acyclic));
}

#[test]
fn test_directed_parallel_network_edges_alone_are_not_a_cycle() {
    let network = NetworkBuilder::directed()
        .allows_parallel_edges(true)
        .build_from_edges([("a", "b", 1), ("a", "b", 2)])
        .unwrap();
    assert!(!algo::network_has_cycle(&network));
}

#[cfg(feature = "parallel")]
#[test]
fn test_par_transitive_closure_matches_serial() {
    let graph = GraphBuilder::directed()
        .build_from_edges([(0, 1), (1, 2), (2, 3), (1, 4)])
        .unwrap();
    assert_eq!(algo::par_transitive_closure(&graph), algo::transitive_closure(&graph));
}
