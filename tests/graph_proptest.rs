use proptest::prelude::*;
use std::collections::HashSet;
use trellis::{EndpointPair, GraphBuilder, GraphView};

#[derive(Debug, Clone)]
enum Operation {
    PutEdge(u8, u8),
    RemoveEdge(u8, u8),
    RemoveNode(u8),
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            (0u8..16, 0u8..16).prop_map(|(u, v)| Operation::PutEdge(u, v)),
            (0u8..16, 0u8..16).prop_map(|(u, v)| Operation::RemoveEdge(u, v)),
            (0u8..16).prop_map(Operation::RemoveNode),
        ],
        1..120,
    )
}

proptest! {
    #[test]
    fn test_undirected_graph_matches_edge_set_model(ops in operations()) {
        let mut graph = GraphBuilder::undirected().allows_self_loops(true).build();
        let mut model: HashSet<(u8, u8)> = HashSet::new();
        let key = |u: u8, v: u8| if u <= v { (u, v) } else { (v, u) };

        for op in ops {
            match op {
                Operation::PutEdge(u, v) => {
                    let added = graph.put_edge(u, v).unwrap();
                    prop_assert_eq!(added, model.insert(key(u, v)));
                }
                Operation::RemoveEdge(u, v) => {
                    let removed = graph.remove_edge(&u, &v);
                    prop_assert_eq!(removed, model.remove(&key(u, v)));
                }
                Operation::RemoveNode(n) => {
                    let contained = graph.contains_node(&n);
                    prop_assert_eq!(graph.remove_node(&n), contained);
                    model.retain(|&(u, v)| u != n && v != n);
                }
            }
            graph.validate_invariants();
            prop_assert_eq!(graph.edge_count(), model.len());
        }

        // The edge-count ledger agrees with the degree sum.
        let degree_sum: usize = graph.nodes().map(|n| graph.degree(n)).sum();
        prop_assert_eq!(degree_sum, model.len() * 2);

        // Edge enumeration agrees with the model.
        let enumerated: HashSet<(u8, u8)> = graph
            .edges()
            .map(|pair| {
                let (u, v) = pair.into_nodes();
                key(*u, *v)
            })
            .collect();
        prop_assert_eq!(enumerated, model);
    }

    #[test]
    fn test_directed_graph_matches_edge_set_model(ops in operations()) {
        let mut graph = GraphBuilder::directed().allows_self_loops(true).build();
        let mut model: HashSet<(u8, u8)> = HashSet::new();

        for op in ops {
            match op {
                Operation::PutEdge(u, v) => {
                    let added = graph.put_edge(u, v).unwrap();
                    prop_assert_eq!(added, model.insert((u, v)));
                }
                Operation::RemoveEdge(u, v) => {
                    let removed = graph.remove_edge(&u, &v);
                    prop_assert_eq!(removed, model.remove(&(u, v)));
                }
                Operation::RemoveNode(n) => {
                    let contained = graph.contains_node(&n);
                    prop_assert_eq!(graph.remove_node(&n), contained);
                    model.retain(|&(u, v)| u != n && v != n);
                }
            }
            graph.validate_invariants();
            prop_assert_eq!(graph.edge_count(), model.len());
        }

        for &(u, v) in &model {
            prop_assert!(graph.has_edge_connecting(&u, &v));
        }
        let out_sum: usize = graph.nodes().map(|n| graph.out_degree(n)).sum();
        let in_sum: usize = graph.nodes().map(|n| graph.in_degree(n)).sum();
        prop_assert_eq!(out_sum, model.len());
        prop_assert_eq!(in_sum, model.len());
    }

    #[test]
    fn test_unordered_pair_equality_laws(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(EndpointPair::unordered(a, b), EndpointPair::unordered(b, a));
        prop_assert_ne!(EndpointPair::ordered(a, b), EndpointPair::unordered(a, b));
        if a != b {
            prop_assert_ne!(EndpointPair::ordered(a, b), EndpointPair::ordered(b, a));
        }
    }

    #[test]
    fn test_copy_round_trip_preserves_structure(ops in operations()) {
        let mut graph = GraphBuilder::directed().allows_self_loops(true).build();
        for op in ops {
            match op {
                Operation::PutEdge(u, v) => {
                    graph.put_edge(u, v).unwrap();
                }
                Operation::RemoveEdge(u, v) => {
                    graph.remove_edge(&u, &v);
                }
                Operation::RemoveNode(n) => {
                    graph.remove_node(&n);
                }
            }
        }
        let copy = trellis::Graph::copy_of(&graph);
        prop_assert_eq!(&copy, &graph);
        let frozen = trellis::ImmutableGraph::copy_of(&graph);
        prop_assert_eq!(frozen.node_count(), graph.node_count());
        prop_assert_eq!(frozen.edge_count(), graph.edge_count());
    }
}
