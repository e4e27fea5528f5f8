//! The mutable value-graph container.

use std::fmt;

use tracing::trace;

use super::{GraphView, Node, ValueGraphView};
use crate::connections::NodeConnections;
use crate::error::{GraphError, Result};
use crate::map::CachedMap;
use crate::order::ElementOrder;

/// A mutable graph whose edges each carry one value, built by
/// [`ValueGraphBuilder`](crate::ValueGraphBuilder).
///
/// Nodes are user-supplied values satisfying [`Node`]; an edge is
/// identified by its endpoints, so at most one edge connects any node
/// pair. Directed edges keep their value on the successor side; undirected
/// edges mirror the value into both endpoints' adjacency maps, which is
/// why the edge-writing operations require `V: Clone`.
///
/// Every mutation either fully applies — updating both endpoints'
/// connections and the edge counter together — or is rejected with a
/// [`GraphError`] before any state changes.
#[derive(Clone)]
pub struct ValueGraph<N, V> {
    directed: bool,
    allows_self_loops: bool,
    nodes: CachedMap<N, NodeConnections<N, V>>,
    edge_count: usize,
}

impl<N, V> ValueGraph<N, V>
where
    N: Node,
{
    pub(crate) fn with_config(
        directed: bool,
        allows_self_loops: bool,
        node_order: ElementOrder,
        expected_node_count: usize,
    ) -> Self {
        ValueGraph {
            directed,
            allows_self_loops,
            nodes: CachedMap::with_capacity(node_order, expected_node_count),
            edge_count: 0,
        }
    }

    fn checked_connections(&self, node: &N) -> &NodeConnections<N, V> {
        match self.nodes.get(node) {
            Some(connections) => connections,
            None => panic!("node is not an element of this graph"),
        }
    }

    fn connections_mut(&mut self, node: &N) -> &mut NodeConnections<N, V> {
        self.nodes
            .get_mut(node)
            .expect("connections exist for every graph node")
    }

    /// Adds `node` if not already present. Returns `true` when the graph
    /// was modified.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.nodes.contains_key(&node) {
            return false;
        }
        let connections = NodeConnections::new(self.directed, self.nodes.order());
        self.nodes.insert(node, connections);
        true
    }

    /// Adds the edge `u -> v` (or `{u, v}` when undirected) carrying
    /// `value`, implicitly adding missing endpoints. Returns the value the
    /// edge previously carried, if it already existed.
    ///
    /// Rejected with [`GraphError::SelfLoopsDisallowed`] when `u == v` and
    /// the graph was not built with `allows_self_loops(true)`; the graph is
    /// left unmodified.
    pub fn put_edge_value(&mut self, node_u: N, node_v: N, value: V) -> Result<Option<V>>
    where
        V: Clone,
    {
        if !self.allows_self_loops && node_u == node_v {
            return Err(GraphError::SelfLoopsDisallowed);
        }
        self.add_node(node_u.clone());
        self.add_node(node_v.clone());
        let mirrored = (!self.directed).then(|| value.clone());
        let previous = self
            .connections_mut(&node_u)
            .add_successor(node_v.clone(), value);
        self.connections_mut(&node_v).add_predecessor(node_u, mirrored);
        if previous.is_none() {
            self.edge_count += 1;
            trace!(edge_count = self.edge_count, "edge added");
        }
        Ok(previous)
    }

    /// Removes the edge between `u` and `v`, returning its value.
    pub fn remove_edge(&mut self, node_u: &N, node_v: &N) -> Option<V> {
        let previous = self.nodes.get_mut(node_u)?.remove_successor(node_v);
        if previous.is_some() {
            self.connections_mut(node_v).remove_predecessor(node_u);
            self.edge_count -= 1;
            trace!(edge_count = self.edge_count, "edge removed");
        }
        previous
    }

    /// Removes `node` and every edge incident to it. Returns `true` when
    /// the graph was modified.
    pub fn remove_node(&mut self, node: &N) -> bool {
        if !self.nodes.contains_key(node) {
            return false;
        }
        // The self-loop goes first so the cascade below neither removes it
        // twice nor leaves it behind.
        if self.allows_self_loops {
            let connections = self.connections_mut(node);
            if connections.remove_successor(node).is_some() {
                connections.remove_predecessor(node);
                self.edge_count -= 1;
            }
        }
        let successors: Vec<N> = self
            .checked_connections(node)
            .successors()
            .cloned()
            .collect();
        for successor in &successors {
            self.connections_mut(successor).remove_predecessor(node);
            self.edge_count -= 1;
        }
        if self.directed {
            let predecessors: Vec<N> = self
                .checked_connections(node)
                .predecessors()
                .cloned()
                .collect();
            for predecessor in &predecessors {
                self.connections_mut(predecessor).remove_successor(node);
                self.edge_count -= 1;
            }
        }
        self.nodes.remove(node);
        trace!(edge_count = self.edge_count, "node removed");
        true
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edge_count = 0;
    }

    /// A copy of this graph with every directed edge reversed. For an
    /// undirected graph this is simply a copy. Returns a new graph, not a
    /// view.
    pub fn transposed(&self) -> Self
    where
        V: Clone,
    {
        let mut result = ValueGraph::with_config(
            self.directed,
            self.allows_self_loops,
            self.nodes.order(),
            self.nodes.len(),
        );
        for node in self.nodes.keys() {
            result.add_node(node.clone());
        }
        for (node_u, connections) in self.nodes.iter() {
            for (node_v, value) in connections.successor_entries() {
                let (source, target) = if self.directed {
                    (node_v, node_u)
                } else {
                    (node_u, node_v)
                };
                result
                    .put_edge_value(source.clone(), target.clone(), value.clone())
                    .expect("transposing preserves the self-loop policy");
            }
        }
        result
    }

    /// The subgraph induced by `nodes`: those nodes and every edge of this
    /// graph with both endpoints among them. Returns a new graph, not a
    /// view.
    ///
    /// # Panics
    /// Panics when a requested node is not an element of this graph.
    pub fn induced_subgraph<I>(&self, nodes: I) -> Self
    where
        V: Clone,
        I: IntoIterator<Item = N>,
    {
        let mut subgraph = ValueGraph::with_config(
            self.directed,
            self.allows_self_loops,
            self.nodes.order(),
            0,
        );
        for node in nodes {
            assert!(
                self.nodes.contains_key(&node),
                "node is not an element of this graph"
            );
            subgraph.add_node(node);
        }
        let members: Vec<N> = subgraph.nodes.keys().cloned().collect();
        for node_u in &members {
            for (node_v, value) in self.checked_connections(node_u).successor_entries() {
                if subgraph.nodes.contains_key(node_v) {
                    subgraph
                        .put_edge_value(node_u.clone(), node_v.clone(), value.clone())
                        .expect("subgraph inherits the self-loop policy");
                }
            }
        }
        subgraph
    }

    /// A mutable copy of `source`: same configuration, nodes, edges, and
    /// edge values.
    pub fn copy_of<G>(source: &G) -> Self
    where
        V: Clone,
        G: ValueGraphView<N, V>,
    {
        let mut result = ValueGraph::with_config(
            source.is_directed(),
            source.allows_self_loops(),
            source.node_order(),
            source.node_count(),
        );
        for node in source.nodes() {
            result.add_node(node.clone());
        }
        for pair in source.edges() {
            let (node_u, node_v) = pair.into_nodes();
            let value = source
                .edge_value(node_u, node_v)
                .expect("enumerated edge carries a value")
                .clone();
            result
                .put_edge_value(node_u.clone(), node_v.clone(), value)
                .expect("copy inherits the self-loop policy");
        }
        result
    }

    /// Checks the container's bookkeeping against its actual contents,
    /// panicking on any divergence. Intended for tests.
    pub fn validate_invariants(&self) {
        let mut endpoint_total = 0usize;
        let mut loop_total = 0usize;
        let mut out_total = 0usize;
        for (node, connections) in self.nodes.iter() {
            assert_eq!(
                connections.predecessor_count(),
                connections.predecessors().count(),
                "predecessor bookkeeping diverged from map contents",
            );
            assert_eq!(
                connections.successor_count(),
                connections.successors().count(),
                "successor bookkeeping diverged from map contents",
            );
            for neighbor in connections.adjacent_nodes() {
                assert!(
                    self.nodes.contains_key(neighbor),
                    "adjacency references a node that is not in the graph",
                );
            }
            endpoint_total += connections.successor_count();
            out_total += connections.successor_count();
            if !self.directed && connections.value(node).is_some() {
                loop_total += 1;
            }
        }
        if self.directed {
            assert_eq!(out_total, self.edge_count, "edge counter diverged");
        } else {
            // Each non-loop edge contributes two adjacency entries, each
            // loop exactly one.
            assert_eq!(
                endpoint_total + loop_total,
                self.edge_count * 2,
                "edge counter diverged",
            );
        }
    }
}

impl<N: Node, V> GraphView<N> for ValueGraph<N, V> {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn allows_self_loops(&self) -> bool {
        self.allows_self_loops
    }

    fn node_order(&self) -> ElementOrder {
        self.nodes.order()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.nodes.keys())
    }

    fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    fn adjacent_nodes<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        Box::new(self.checked_connections(node).adjacent_nodes())
    }

    fn predecessors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        Box::new(self.checked_connections(node).predecessors())
    }

    fn successors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        Box::new(self.checked_connections(node).successors())
    }

    fn degree(&self, node: &N) -> usize {
        let connections = self.checked_connections(node);
        if self.directed {
            connections
                .predecessor_count()
                .saturating_add(connections.successor_count())
        } else {
            let self_loop = usize::from(connections.value(node).is_some());
            connections.successor_count() + self_loop
        }
    }

    fn in_degree(&self, node: &N) -> usize {
        if self.directed {
            self.checked_connections(node).predecessor_count()
        } else {
            self.degree(node)
        }
    }

    fn out_degree(&self, node: &N) -> usize {
        if self.directed {
            self.checked_connections(node).successor_count()
        } else {
            self.degree(node)
        }
    }

    fn has_edge_connecting(&self, node_u: &N, node_v: &N) -> bool {
        self.nodes
            .get(node_u)
            .is_some_and(|connections| connections.has_successor(node_v))
    }
}

impl<N: Node, V> ValueGraphView<N, V> for ValueGraph<N, V> {
    fn edge_value<'a>(&'a self, node_u: &N, node_v: &N) -> Option<&'a V> {
        self.nodes.get(node_u)?.value(node_v)
    }
}

impl<N: Node, V: PartialEq> PartialEq for ValueGraph<N, V> {
    /// Two value graphs are equal when they agree on directedness, node
    /// set, and valued edge set — order policies and insertion history are
    /// irrelevant.
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed
            || self.edge_count != other.edge_count
            || self.nodes.len() != other.nodes.len()
        {
            return false;
        }
        self.nodes.iter().all(|(node, connections)| {
            let Some(other_connections) = other.nodes.get(node) else {
                return false;
            };
            connections.successor_count() == other_connections.successor_count()
                && connections
                    .successor_entries()
                    .all(|(successor, value)| other_connections.value(successor) == Some(value))
        })
    }
}

impl<N: Node, V: Eq> Eq for ValueGraph<N, V> {}

impl<N, V> fmt::Debug for ValueGraph<N, V>
where
    N: Node + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: Vec<_> = self
            .edges()
            .map(|pair| {
                let value = self.edge_value(pair.node_u(), pair.node_v());
                (pair, value)
            })
            .collect();
        f.debug_struct("ValueGraph")
            .field("directed", &self.directed)
            .field("allows_self_loops", &self.allows_self_loops)
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .field("edges", &edges)
            .finish()
    }
}
