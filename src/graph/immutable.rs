//! Immutable snapshot counterparts of the mutable containers.
//!
//! A snapshot exposes no mutation surface at all, which together with the
//! self-validating read caches makes shared concurrent reads safe: once
//! frozen, nothing about the structure can change.

use std::fmt;

use super::network::Network;
use super::simple::Graph;
use super::value_graph::ValueGraph;
use super::{EdgeId, GraphView, NetworkView, Node, ValueGraphView};
use crate::endpoints::EndpointPair;
use crate::error::Result;
use crate::order::ElementOrder;

/// An immutable snapshot of a graph, created by
/// [`copy_of`](ImmutableGraph::copy_of) or by freezing a [`Graph`] with
/// `From`.
#[derive(Clone)]
pub struct ImmutableGraph<N> {
    inner: Graph<N>,
}

impl<N: Node> PartialEq for ImmutableGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<N: Node> Eq for ImmutableGraph<N> {}

impl<N: Node> ImmutableGraph<N> {
    /// Snapshots `source`: same configuration, nodes, and edges. Later
    /// changes to `source` are not reflected.
    pub fn copy_of<G: GraphView<N>>(source: &G) -> Self {
        ImmutableGraph {
            inner: Graph::copy_of(source),
        }
    }
}

impl<N: Node> From<Graph<N>> for ImmutableGraph<N> {
    /// Freezes an existing graph without copying it.
    fn from(graph: Graph<N>) -> Self {
        ImmutableGraph { inner: graph }
    }
}

impl<N: Node> GraphView<N> for ImmutableGraph<N> {
    fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    fn allows_self_loops(&self) -> bool {
        self.inner.allows_self_loops()
    }

    fn node_order(&self) -> ElementOrder {
        self.inner.node_order()
    }

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        self.inner.nodes()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.inner.contains_node(node)
    }

    fn adjacent_nodes<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.inner.adjacent_nodes(node)
    }

    fn predecessors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.inner.predecessors(node)
    }

    fn successors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.inner.successors(node)
    }

    fn degree(&self, node: &N) -> usize {
        self.inner.degree(node)
    }

    fn in_degree(&self, node: &N) -> usize {
        self.inner.in_degree(node)
    }

    fn out_degree(&self, node: &N) -> usize {
        self.inner.out_degree(node)
    }

    fn has_edge_connecting(&self, node_u: &N, node_v: &N) -> bool {
        self.inner.has_edge_connecting(node_u, node_v)
    }
}

impl<N: Node + fmt::Debug> fmt::Debug for ImmutableGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImmutableGraph").field(&self.inner).finish()
    }
}

/// An immutable snapshot of a value graph.
#[derive(Clone)]
pub struct ImmutableValueGraph<N, V> {
    inner: ValueGraph<N, V>,
}

impl<N: Node, V: PartialEq> PartialEq for ImmutableValueGraph<N, V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<N: Node, V: Eq> Eq for ImmutableValueGraph<N, V> {}

impl<N: Node, V: Clone> ImmutableValueGraph<N, V> {
    /// Snapshots `source`: same configuration, nodes, edges, and edge
    /// values. Later changes to `source` are not reflected.
    pub fn copy_of<G: ValueGraphView<N, V>>(source: &G) -> Self {
        ImmutableValueGraph {
            inner: ValueGraph::copy_of(source),
        }
    }
}

impl<N: Node, V> From<ValueGraph<N, V>> for ImmutableValueGraph<N, V> {
    /// Freezes an existing value graph without copying it.
    fn from(graph: ValueGraph<N, V>) -> Self {
        ImmutableValueGraph { inner: graph }
    }
}

impl<N: Node, V> GraphView<N> for ImmutableValueGraph<N, V> {
    fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    fn allows_self_loops(&self) -> bool {
        self.inner.allows_self_loops()
    }

    fn node_order(&self) -> ElementOrder {
        self.inner.node_order()
    }

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        self.inner.nodes()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.inner.contains_node(node)
    }

    fn adjacent_nodes<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.inner.adjacent_nodes(node)
    }

    fn predecessors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.inner.predecessors(node)
    }

    fn successors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.inner.successors(node)
    }

    fn degree(&self, node: &N) -> usize {
        self.inner.degree(node)
    }

    fn in_degree(&self, node: &N) -> usize {
        self.inner.in_degree(node)
    }

    fn out_degree(&self, node: &N) -> usize {
        self.inner.out_degree(node)
    }

    fn has_edge_connecting(&self, node_u: &N, node_v: &N) -> bool {
        self.inner.has_edge_connecting(node_u, node_v)
    }
}

impl<N: Node, V> ValueGraphView<N, V> for ImmutableValueGraph<N, V> {
    fn edge_value<'a>(&'a self, node_u: &N, node_v: &N) -> Option<&'a V> {
        self.inner.edge_value(node_u, node_v)
    }
}

impl<N, V> fmt::Debug for ImmutableValueGraph<N, V>
where
    N: Node + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImmutableValueGraph")
            .field(&self.inner)
            .finish()
    }
}

/// An immutable snapshot of a network.
#[derive(Clone)]
pub struct ImmutableNetwork<N, E> {
    inner: Network<N, E>,
}

impl<N: Node, E: EdgeId> PartialEq for ImmutableNetwork<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<N: Node, E: EdgeId> Eq for ImmutableNetwork<N, E> {}

impl<N: Node, E: EdgeId> ImmutableNetwork<N, E> {
    /// Snapshots `source`: same configuration, nodes, and identified
    /// edges. Later changes to `source` are not reflected.
    pub fn copy_of<X: NetworkView<N, E>>(source: &X) -> Self {
        ImmutableNetwork {
            inner: Network::copy_of(source),
        }
    }
}

impl<N: Node, E: EdgeId> From<Network<N, E>> for ImmutableNetwork<N, E> {
    /// Freezes an existing network without copying it.
    fn from(network: Network<N, E>) -> Self {
        ImmutableNetwork { inner: network }
    }
}

impl<N, E> NetworkView<N, E> for ImmutableNetwork<N, E>
where
    N: Node,
    E: EdgeId,
{
    fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    fn allows_self_loops(&self) -> bool {
        self.inner.allows_self_loops()
    }

    fn allows_parallel_edges(&self) -> bool {
        self.inner.allows_parallel_edges()
    }

    fn node_order(&self) -> ElementOrder {
        self.inner.node_order()
    }

    fn edge_order(&self) -> ElementOrder {
        self.inner.edge_order()
    }

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        self.inner.nodes()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        self.inner.edges()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.inner.contains_node(node)
    }

    fn contains_edge(&self, edge: &E) -> bool {
        self.inner.contains_edge(edge)
    }

    fn adjacent_nodes<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.inner.adjacent_nodes(node)
    }

    fn predecessors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.inner.predecessors(node)
    }

    fn successors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.inner.successors(node)
    }

    fn incident_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        self.inner.incident_edges(node)
    }

    fn in_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        self.inner.in_edges(node)
    }

    fn out_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        self.inner.out_edges(node)
    }

    fn degree(&self, node: &N) -> usize {
        self.inner.degree(node)
    }

    fn in_degree(&self, node: &N) -> usize {
        self.inner.in_degree(node)
    }

    fn out_degree(&self, node: &N) -> usize {
        self.inner.out_degree(node)
    }

    fn incident_nodes(&self, edge: &E) -> EndpointPair<N> {
        self.inner.incident_nodes(edge)
    }

    fn adjacent_edges<'a>(&'a self, edge: &E) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        self.inner.adjacent_edges(edge)
    }

    fn edges_connecting<'a>(
        &'a self,
        node_u: &N,
        node_v: &N,
    ) -> Box<dyn Iterator<Item = &'a E> + 'a> {
        self.inner.edges_connecting(node_u, node_v)
    }

    fn edge_connecting<'a>(&'a self, node_u: &N, node_v: &N) -> Result<Option<&'a E>> {
        self.inner.edge_connecting(node_u, node_v)
    }

    fn has_edge_connecting(&self, node_u: &N, node_v: &N) -> bool {
        self.inner.has_edge_connecting(node_u, node_v)
    }
}

impl<N, E> fmt::Debug for ImmutableNetwork<N, E>
where
    N: Node + fmt::Debug,
    E: EdgeId + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImmutableNetwork").field(&self.inner).finish()
    }
}
