//! Graph algorithms over the view traits.
//!
//! Everything here works on any [`GraphView`] or [`NetworkView`]
//! implementation — mutable containers and immutable snapshots alike.
//! Structure-producing operations that depend on a concrete container
//! (transposition, induced subgraphs, copying) live on the containers
//! themselves.

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::IndexSet;

use crate::endpoints::EndpointPair;
use crate::graph::{EdgeId, Graph, GraphBuilder, GraphView, NetworkView, Node};

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// On the current traversal path.
    Pending,
    /// Fully explored.
    Complete,
}

struct Frame<'a, N> {
    node: &'a N,
    previous: Option<&'a N>,
    successors: Box<dyn Iterator<Item = &'a N> + 'a>,
}

/// Cycle detection over an arbitrary successors function; shared by the
/// graph and network entry points.
///
/// Directed: a successor already on the traversal path closes a cycle.
/// Undirected: any revisited neighbor other than the node we just arrived
/// from closes one — with parallel edges excluded, the arrival edge is the
/// only one that may be skipped.
fn detect_cycle<'a, N: Node>(
    nodes: Box<dyn Iterator<Item = &'a N> + 'a>,
    successors: &dyn Fn(&'a N) -> Box<dyn Iterator<Item = &'a N> + 'a>,
    directed: bool,
) -> bool {
    let mut state: HashMap<&'a N, VisitState> = HashMap::new();
    let mut stack: Vec<Frame<'a, N>> = Vec::new();
    for start in nodes {
        if state.contains_key(start) {
            continue;
        }
        state.insert(start, VisitState::Pending);
        stack.push(Frame {
            node: start,
            previous: None,
            successors: successors(start),
        });
        while let Some(frame) = stack.last_mut() {
            let (origin, previous) = (frame.node, frame.previous);
            match frame.successors.next() {
                Some(next) => {
                    if !directed && previous == Some(next) {
                        continue;
                    }
                    match state.get(next).copied() {
                        Some(VisitState::Pending) => return true,
                        Some(VisitState::Complete) => {}
                        None => {
                            state.insert(next, VisitState::Pending);
                            stack.push(Frame {
                                node: next,
                                previous: Some(origin),
                                successors: successors(next),
                            });
                        }
                    }
                }
                None => {
                    state.insert(origin, VisitState::Complete);
                    stack.pop();
                }
            }
        }
    }
    false
}

/// Whether `graph` contains at least one cycle. A self-loop is a cycle.
pub fn has_cycle<N, G>(graph: &G) -> bool
where
    N: Node,
    G: GraphView<N>,
{
    let edge_count = graph.edge_count();
    if edge_count == 0 {
        return false;
    }
    // An undirected graph with at least as many edges as nodes cannot be a
    // forest.
    if !graph.is_directed() && edge_count >= graph.node_count() {
        return true;
    }
    detect_cycle(
        graph.nodes(),
        &|node| graph.successors(node),
        graph.is_directed(),
    )
}

/// Whether `network` contains at least one cycle. Two parallel undirected
/// edges between the same pair form a cycle; otherwise edge identities are
/// irrelevant and the check reduces to the endpoint-pair graph.
pub fn network_has_cycle<N, E, X>(network: &X) -> bool
where
    N: Node,
    E: EdgeId,
    X: NetworkView<N, E>,
{
    if !network.is_directed() && network.allows_parallel_edges() {
        let mut pairs: HashSet<EndpointPair<N>> = HashSet::new();
        for edge in network.edges() {
            if !pairs.insert(network.incident_nodes(edge)) {
                return true;
            }
        }
    }
    detect_cycle(
        network.nodes(),
        &|node| network.successors(node),
        network.is_directed(),
    )
}

/// The nodes reachable from `start` by any directed path, including
/// `start` itself, in breadth-first discovery order.
///
/// # Panics
/// Panics when `start` is not an element of `graph`.
pub fn reachable_nodes<N, G>(graph: &G, start: &N) -> IndexSet<N>
where
    N: Node,
    G: GraphView<N>,
{
    assert!(
        graph.contains_node(start),
        "node is not an element of this graph"
    );
    let mut reached: IndexSet<N> = IndexSet::new();
    reached.insert(start.clone());
    let mut queue: VecDeque<N> = VecDeque::from([start.clone()]);
    while let Some(node) = queue.pop_front() {
        for successor in graph.successors(&node) {
            if !reached.contains(successor) {
                reached.insert(successor.clone());
                queue.push_back(successor.clone());
            }
        }
    }
    reached
}

/// The transitive closure of `graph`: an edge connects `u` to `v` whenever
/// `v` is reachable from `u`. Every node reaches itself, so the result has
/// a self-loop at every node; for an undirected input each connected
/// component becomes a clique.
pub fn transitive_closure<N, G>(graph: &G) -> Graph<N>
where
    N: Node,
    G: GraphView<N>,
{
    let mut closure = GraphBuilder::from_graph(graph)
        .allows_self_loops(true)
        .expected_node_count(graph.node_count())
        .build::<N>();
    for node in graph.nodes() {
        closure.add_node(node.clone());
    }
    if graph.is_directed() {
        for node in graph.nodes() {
            for reached in reachable_nodes(graph, node) {
                closure
                    .put_edge(node.clone(), reached)
                    .expect("closure allows self-loops");
            }
        }
    } else {
        undirected_closure(graph, &mut closure);
    }
    closure
}

/// The transitive closure of a directed graph, computing per-source
/// reachability on the rayon thread pool. Semantically identical to
/// [`transitive_closure`].
#[cfg(feature = "parallel")]
pub fn par_transitive_closure<N, G>(graph: &G) -> Graph<N>
where
    N: Node + Send + Sync,
    G: GraphView<N> + Sync,
{
    use rayon::prelude::*;

    if !graph.is_directed() {
        return transitive_closure(graph);
    }
    let mut closure = GraphBuilder::from_graph(graph)
        .allows_self_loops(true)
        .expected_node_count(graph.node_count())
        .build::<N>();
    for node in graph.nodes() {
        closure.add_node(node.clone());
    }
    let sources: Vec<&N> = graph.nodes().collect();
    let reach: Vec<(N, Vec<N>)> = sources
        .par_iter()
        .map(|source| {
            let reached = reachable_nodes(graph, source).into_iter().collect();
            ((*source).clone(), reached)
        })
        .collect();
    for (source, targets) in reach {
        for target in targets {
            closure
                .put_edge(source.clone(), target)
                .expect("closure allows self-loops");
        }
    }
    closure
}

/// Component-at-a-time closure for undirected graphs: each component's
/// members are pairwise connected (self-loops included).
fn undirected_closure<N, G>(graph: &G, closure: &mut Graph<N>)
where
    N: Node,
    G: GraphView<N>,
{
    let mut assigned: HashSet<N> = HashSet::new();
    for node in graph.nodes() {
        if assigned.contains(node) {
            continue;
        }
        let component: Vec<N> = reachable_nodes(graph, node).into_iter().collect();
        for member in &component {
            assigned.insert(member.clone());
        }
        for (position, member) in component.iter().enumerate() {
            for other in &component[position..] {
                closure
                    .put_edge(member.clone(), other.clone())
                    .expect("closure allows self-loops");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_two_node_undirected_path_has_no_cycle() {
        let graph = GraphBuilder::undirected()
            .build_from_edges([("a", "b"), ("b", "c")])
            .unwrap();
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_undirected_triangle_has_cycle() {
        let graph = GraphBuilder::undirected()
            .build_from_edges([("a", "b"), ("b", "c"), ("c", "a")])
            .unwrap();
        assert!(has_cycle(&graph));
    }

    #[test]
    fn test_directed_two_cycle_is_detected() {
        // a -> b and b -> a is a cycle in a directed graph, unlike the
        // single undirected edge {a, b}.
        let graph = GraphBuilder::directed()
            .build_from_edges([("a", "b"), ("b", "a")])
            .unwrap();
        assert!(has_cycle(&graph));
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let mut graph = GraphBuilder::directed().allows_self_loops(true).build();
        graph.put_edge("a", "a").unwrap();
        assert!(has_cycle(&graph));
    }

    #[test]
    fn test_closure_of_undirected_component_is_a_clique() {
        let graph = GraphBuilder::undirected()
            .build_from_edges([("a", "b"), ("b", "c")])
            .unwrap();
        let closure = transitive_closure(&graph);
        for u in ["a", "b", "c"] {
            for v in ["a", "b", "c"] {
                assert!(closure.has_edge_connecting(&u, &v), "{u} - {v}");
            }
        }
    }
}
