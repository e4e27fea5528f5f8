//! The mutable network container: identity-bearing, possibly parallel
//! edges.

use std::collections::HashSet;
use std::fmt;

use tracing::trace;

use super::{EdgeId, NetworkView, Node};
use crate::connections::NetConnections;
use crate::endpoints::EndpointPair;
use crate::error::{GraphError, Result};
use crate::map::CachedMap;
use crate::order::ElementOrder;

/// A mutable network built by [`NetworkBuilder`](crate::NetworkBuilder).
///
/// Unlike [`Graph`](crate::Graph), every edge is a first-class value
/// satisfying [`EdgeId`]; two nodes may be connected by several distinct
/// parallel edges when the network was built with
/// `allows_parallel_edges(true)`.
///
/// Each edge is stored once in an edge registry mapping it to its
/// *reference node* — the source for a directed edge, the first-supplied
/// endpoint otherwise — and once in each endpoint's connections. Every
/// mutation either fully applies or is rejected with a [`GraphError`]
/// before any state changes.
#[derive(Clone)]
pub struct Network<N, E> {
    directed: bool,
    allows_self_loops: bool,
    allows_parallel_edges: bool,
    nodes: CachedMap<N, NetConnections<N, E>>,
    edges: CachedMap<E, N>,
}

impl<N, E> Network<N, E>
where
    N: Node,
    E: EdgeId,
{
    #[allow(clippy::fn_params_excessive_bools)]
    pub(crate) fn with_config(
        directed: bool,
        allows_self_loops: bool,
        allows_parallel_edges: bool,
        node_order: ElementOrder,
        edge_order: ElementOrder,
        expected_node_count: usize,
        expected_edge_count: usize,
    ) -> Self {
        Network {
            directed,
            allows_self_loops,
            allows_parallel_edges,
            nodes: CachedMap::with_capacity(node_order, expected_node_count),
            edges: CachedMap::with_capacity(edge_order, expected_edge_count),
        }
    }

    fn checked_connections(&self, node: &N) -> &NetConnections<N, E> {
        match self.nodes.get(node) {
            Some(connections) => connections,
            None => panic!("node is not an element of this network"),
        }
    }

    fn connections_mut(&mut self, node: &N) -> &mut NetConnections<N, E> {
        self.nodes
            .get_mut(node)
            .expect("connections exist for every network node")
    }

    /// The reference node and far endpoint of `edge`.
    ///
    /// # Panics
    /// Panics when `edge` is not an element of this network.
    fn endpoints_of(&self, edge: &E) -> (&N, &N) {
        let reference = match self.edges.get(edge) {
            Some(node) => node,
            None => panic!("edge is not an element of this network"),
        };
        let adjacent = self.checked_connections(reference).adjacent_node(edge);
        (reference, adjacent)
    }

    /// Adds `node` if not already present. Returns `true` when the network
    /// was modified.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.nodes.contains_key(&node) {
            return false;
        }
        let connections =
            NetConnections::new(self.directed, self.nodes.order(), self.allows_parallel_edges);
        self.nodes.insert(node, connections);
        true
    }

    /// Adds `edge` connecting `u` to `v`, implicitly adding missing
    /// endpoint nodes. Returns `true` when the network was modified —
    /// `false` means `edge` already connects exactly this pair.
    ///
    /// Rejected, leaving the network unmodified, with:
    ///
    /// - [`GraphError::EdgeEndpointsMismatch`] when `edge` is already
    ///   present but connects a different pair;
    /// - [`GraphError::ParallelEdgesDisallowed`] when `u` and `v` are
    ///   already connected and parallel edges are off;
    /// - [`GraphError::SelfLoopsDisallowed`] when `u == v` and self-loops
    ///   are off.
    pub fn add_edge(&mut self, node_u: N, node_v: N, edge: E) -> Result<bool> {
        if self.edges.contains_key(&edge) {
            let (reference, adjacent) = self.endpoints_of(&edge);
            let connects_same_pair = if self.directed {
                *reference == node_u && *adjacent == node_v
            } else {
                (*reference == node_u && *adjacent == node_v)
                    || (*reference == node_v && *adjacent == node_u)
            };
            return if connects_same_pair {
                Ok(false)
            } else {
                Err(GraphError::EdgeEndpointsMismatch)
            };
        }
        if !self.allows_parallel_edges && self.has_edge_connecting(&node_u, &node_v) {
            return Err(GraphError::ParallelEdgesDisallowed);
        }
        if !self.allows_self_loops && node_u == node_v {
            return Err(GraphError::SelfLoopsDisallowed);
        }
        let is_self_loop = node_u == node_v;
        self.add_node(node_u.clone());
        self.add_node(node_v.clone());
        self.connections_mut(&node_u)
            .add_out_edge(edge.clone(), node_v.clone());
        self.connections_mut(&node_v)
            .add_in_edge(edge.clone(), node_u.clone(), is_self_loop);
        self.edges.insert(edge, node_u);
        trace!(edge_count = self.edges.len(), "edge added");
        Ok(true)
    }

    /// Removes `edge`. Returns `true` when the network was modified.
    pub fn remove_edge(&mut self, edge: &E) -> bool {
        let Some(reference) = self.edges.get(edge).cloned() else {
            return false;
        };
        let adjacent = self
            .checked_connections(&reference)
            .adjacent_node(edge)
            .clone();
        let is_self_loop = reference == adjacent;
        self.connections_mut(&reference).remove_out_edge(edge);
        self.connections_mut(&adjacent)
            .remove_in_edge(edge, is_self_loop);
        self.edges.remove(edge);
        trace!(edge_count = self.edges.len(), "edge removed");
        true
    }

    /// Removes `node` and every edge incident to it. Returns `true` when
    /// the network was modified.
    pub fn remove_node(&mut self, node: &N) -> bool {
        let Some(connections) = self.nodes.get(node) else {
            return false;
        };
        // Snapshot before tearing down: removal mutates the live edge
        // maps this iterator would otherwise walk.
        let incident: Vec<E> = connections.incident_edges().cloned().collect();
        for edge in &incident {
            self.remove_edge(edge);
        }
        self.nodes.remove(node);
        trace!(node_count = self.nodes.len(), "node removed");
        true
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// A copy of this network with every directed edge reversed, keeping
    /// edge identities. For an undirected network this is simply a copy.
    /// Returns a new network, not a view.
    pub fn transposed(&self) -> Self {
        let mut result = Network::with_config(
            self.directed,
            self.allows_self_loops,
            self.allows_parallel_edges,
            self.nodes.order(),
            self.edges.order(),
            self.nodes.len(),
            self.edges.len(),
        );
        for node in self.nodes.keys() {
            result.add_node(node.clone());
        }
        for edge in self.edges.keys() {
            let (reference, adjacent) = self.endpoints_of(edge);
            result
                .add_edge(adjacent.clone(), reference.clone(), edge.clone())
                .expect("transposing preserves every edge policy");
        }
        result
    }

    /// The subnetwork induced by `nodes`: those nodes and every edge with
    /// both endpoints among them. Returns a new network, not a view.
    ///
    /// # Panics
    /// Panics when a requested node is not an element of this network.
    pub fn induced_subgraph<I>(&self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut subnetwork = Network::with_config(
            self.directed,
            self.allows_self_loops,
            self.allows_parallel_edges,
            self.nodes.order(),
            self.edges.order(),
            0,
            0,
        );
        for node in nodes {
            assert!(
                self.nodes.contains_key(&node),
                "node is not an element of this network"
            );
            subnetwork.add_node(node);
        }
        let members: Vec<N> = subnetwork.nodes.keys().cloned().collect();
        for node in &members {
            let out_edges: Vec<E> = self
                .checked_connections(node)
                .out_edges()
                .cloned()
                .collect();
            for edge in out_edges {
                let (reference, adjacent) = self.endpoints_of(&edge);
                let far = if reference == node { adjacent } else { reference };
                if subnetwork.nodes.contains_key(far) {
                    subnetwork
                        .add_edge(node.clone(), far.clone(), edge)
                        .expect("subnetwork inherits every edge policy");
                }
            }
        }
        subnetwork
    }

    /// A mutable copy of `source`: same configuration, nodes, and
    /// identified edges.
    pub fn copy_of<X>(source: &X) -> Self
    where
        X: NetworkView<N, E>,
    {
        let mut result = Network::with_config(
            source.is_directed(),
            source.allows_self_loops(),
            source.allows_parallel_edges(),
            source.node_order(),
            source.edge_order(),
            source.node_count(),
            source.edge_count(),
        );
        for node in source.nodes() {
            result.add_node(node.clone());
        }
        for edge in source.edges() {
            let (node_u, node_v) = source.incident_nodes(edge).into_nodes();
            result
                .add_edge(node_u, node_v, edge.clone())
                .expect("copy inherits every edge policy");
        }
        result
    }

    /// Checks the container's bookkeeping against its actual contents,
    /// panicking on any divergence. Intended for tests.
    pub fn validate_invariants(&self) {
        let mut incident_total = 0usize;
        let mut loop_total = 0usize;
        for (node, connections) in self.nodes.iter() {
            for neighbor in connections.adjacent_nodes() {
                assert!(
                    self.nodes.contains_key(neighbor),
                    "adjacency references a node that is not in the network",
                );
            }
            for edge in connections.incident_edges() {
                assert!(
                    self.edges.contains_key(edge),
                    "connections reference an edge that is not registered",
                );
            }
            incident_total += connections.incident_edge_count();
            loop_total += connections.loop_count(node);
        }
        // Every non-loop edge is incident to two nodes, every loop to one.
        assert_eq!(
            incident_total + loop_total,
            self.edges.len() * 2,
            "edge registry diverged from per-node incidence",
        );
    }
}

impl<N, E> NetworkView<N, E> for Network<N, E>
where
    N: Node,
    E: EdgeId,
{
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn allows_self_loops(&self) -> bool {
        self.allows_self_loops
    }

    fn allows_parallel_edges(&self) -> bool {
        self.allows_parallel_edges
    }

    fn node_order(&self) -> ElementOrder {
        self.nodes.order()
    }

    fn edge_order(&self) -> ElementOrder {
        self.edges.order()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.nodes.keys())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.edges.keys())
    }

    fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.edges.contains_key(edge)
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

    fn incident_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        Box::new(self.checked_connections(node).incident_edges())
    }

    fn in_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        Box::new(self.checked_connections(node).in_edges())
    }

    fn out_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        Box::new(self.checked_connections(node).out_edges())
    }

    fn degree(&self, node: &N) -> usize {
        let connections = self.checked_connections(node);
        if self.directed {
            connections
                .in_edge_count()
                .saturating_add(connections.out_edge_count())
        } else {
            connections.incident_edge_count() + connections.loop_count(node)
        }
    }

    fn in_degree(&self, node: &N) -> usize {
        if self.directed {
            self.checked_connections(node).in_edge_count()
        } else {
            self.degree(node)
        }
    }

    fn out_degree(&self, node: &N) -> usize {
        if self.directed {
            self.checked_connections(node).out_edge_count()
        } else {
            self.degree(node)
        }
    }

    fn incident_nodes(&self, edge: &E) -> EndpointPair<N> {
        let (reference, adjacent) = self.endpoints_of(edge);
        if self.directed {
            EndpointPair::ordered(reference.clone(), adjacent.clone())
        } else {
            EndpointPair::unordered(reference.clone(), adjacent.clone())
        }
    }

    fn adjacent_edges<'a>(&'a self, edge: &E) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        let (reference, adjacent) = self.endpoints_of(edge);
        let mut seen: HashSet<&E> = HashSet::new();
        let mut result: Vec<&E> = Vec::new();
        for incident in self
            .checked_connections(reference)
            .incident_edges()
            .chain(self.checked_connections(adjacent).incident_edges())
        {
            if incident != edge && seen.insert(incident) {
                result.push(incident);
            }
        }
        Box::new(result.into_iter())
    }

    fn edges_connecting<'a>(
        &'a self,
        node_u: &N,
        node_v: &N,
    ) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        let connections = self.checked_connections(node_u);
        assert!(
            self.nodes.contains_key(node_v),
            "node is not an element of this network"
        );
        Box::new(connections.edges_connecting(node_v))
    }

    fn edge_connecting<'a>(&'a self, node_u: &N, node_v: &N) -> Result<Option<&'a E>> {
        let mut connecting = self.edges_connecting(node_u, node_v);
        let first = connecting.next();
        if connecting.next().is_some() {
            return Err(GraphError::AmbiguousEdge);
        }
        Ok(first)
    }

    fn has_edge_connecting(&self, node_u: &N, node_v: &N) -> bool {
        self.nodes
            .get(node_u)
            .is_some_and(|connections| connections.has_successor(node_v))
    }
}

impl<N, E> PartialEq for Network<N, E>
where
    N: Node,
    E: EdgeId,
{
    /// Two networks are equal when they agree on directedness, node set,
    /// and the mapping from edge identity to endpoints — order policies
    /// and insertion history are irrelevant.
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed
            || self.nodes.len() != other.nodes.len()
            || self.edges.len() != other.edges.len()
        {
            return false;
        }
        self.nodes.keys().all(|node| other.nodes.contains_key(node))
            && self.edges.keys().all(|edge| {
                other.contains_edge(edge)
                    && self.incident_nodes(edge) == other.incident_nodes(edge)
            })
    }
}

impl<N: Node, E: EdgeId> Eq for Network<N, E> {}

impl<N, E> fmt::Debug for Network<N, E>
where
    N: Node + fmt::Debug,
    E: EdgeId + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: Vec<_> = self
            .edges
            .keys()
            .map(|edge| (edge, self.incident_nodes(edge)))
            .collect();
        f.debug_struct("Network")
            .field("directed", &self.directed)
            .field("allows_self_loops", &self.allows_self_loops)
            .field("allows_parallel_edges", &self.allows_parallel_edges)
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .field("edges", &edges)
            .finish()
    }
}
