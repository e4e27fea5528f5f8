//! Graph containers and their read surfaces.
//!
//! Three containers cover the three edge models:
//!
//! - [`Graph`] — anonymous edges identified by their endpoints;
//! - [`ValueGraph`] — anonymous edges carrying one value each;
//! - [`Network`] — identity-bearing edges, optionally parallel.
//!
//! Each container has an immutable snapshot counterpart built with
//! `copy_of`. The read surface lives on the [`GraphView`],
//! [`ValueGraphView`], and [`NetworkView`] traits so algorithms work
//! across mutable and immutable containers alike; mutation and
//! construction are inherent to the mutable types.

mod build;
mod edges;
mod immutable;
mod network;
mod simple;
mod value_graph;

pub use build::{GraphBuilder, NetworkBuilder, ValueGraphBuilder};
pub use edges::EndpointPairs;
pub use immutable::{ImmutableGraph, ImmutableNetwork, ImmutableValueGraph};
pub use network::Network;
pub use simple::Graph;
pub use value_graph::ValueGraph;

use std::hash::Hash;

use crate::endpoints::EndpointPair;
use crate::error::Result;
use crate::order::ElementOrder;

/// Contract for node identifiers.
///
/// `Clone` because a node is duplicated into the adjacency entries of its
/// neighbors; `Eq + Hash` for the hashed backing maps; `Ord` for sorted
/// iteration order and canonical unordered endpoint pairs. Implemented
/// automatically for every qualifying type.
pub trait Node: Clone + Eq + Hash + Ord {}
impl<T: Clone + Eq + Hash + Ord> Node for T {}

/// Contract for edge identifiers in a [`Network`]. Same bounds as
/// [`Node`], implemented automatically.
pub trait EdgeId: Clone + Eq + Hash + Ord {}
impl<T: Clone + Eq + Hash + Ord> EdgeId for T {}

/// Read-only view of a graph: directed or undirected, edges identified by
/// their endpoints.
///
/// All accessors returning iterators borrow the graph for the duration of
/// iteration; the borrow checker rules out mutation while a view is alive,
/// so a view can never observe a half-applied operation.
pub trait GraphView<N: Node> {
    /// Whether edges are ordered pairs.
    fn is_directed(&self) -> bool;

    /// Whether an edge may connect a node to itself.
    fn allows_self_loops(&self) -> bool;

    /// The iteration-order policy of [`nodes`](GraphView::nodes).
    fn node_order(&self) -> ElementOrder;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// All nodes, in [`node_order`](GraphView::node_order).
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Whether `node` is an element of this graph.
    fn contains_node(&self, node: &N) -> bool;

    /// All nodes connected to `node` by any edge, each reported once.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this graph.
    fn adjacent_nodes<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a>;

    /// All nodes with an edge into `node`. Identical to
    /// [`adjacent_nodes`](GraphView::adjacent_nodes) in an undirected
    /// graph.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this graph.
    fn predecessors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a>;

    /// All nodes with an edge out of `node`. Identical to
    /// [`adjacent_nodes`](GraphView::adjacent_nodes) in an undirected
    /// graph.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this graph.
    fn successors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a>;

    /// Number of edge endpoints at `node`: in-degree plus out-degree for a
    /// directed graph (saturating), adjacency-set size plus one per
    /// self-loop for an undirected graph — a self-loop contributes 2.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this graph.
    fn degree(&self, node: &N) -> usize;

    /// Number of incoming edges; equals [`degree`](GraphView::degree) in an
    /// undirected graph.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this graph.
    fn in_degree(&self, node: &N) -> usize;

    /// Number of outgoing edges; equals [`degree`](GraphView::degree) in an
    /// undirected graph.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this graph.
    fn out_degree(&self, node: &N) -> usize;

    /// Whether an edge `u -> v` (or `{u, v}` when undirected) exists.
    /// `false` when either node is absent — never panics.
    fn has_edge_connecting(&self, node_u: &N, node_v: &N) -> bool;

    /// All edges as endpoint pairs: ordered pairs for a directed graph,
    /// unordered pairs (each edge reported once) for an undirected graph.
    fn edges(&self) -> EndpointPairs<'_, N, Self>
    where
        Self: Sized,
    {
        EndpointPairs::new(self)
    }
}

/// Read-only view of a graph whose edges carry values.
pub trait ValueGraphView<N: Node, V>: GraphView<N> {
    /// The value of the edge `u -> v` (or `{u, v}` when undirected), or
    /// `None` when no such edge exists or either node is absent.
    fn edge_value<'a>(&'a self, node_u: &N, node_v: &N) -> Option<&'a V>;
}

/// Read-only view of a network: edges are first-class identities, possibly
/// parallel.
pub trait NetworkView<N: Node, E: EdgeId> {
    /// Whether edges are ordered pairs.
    fn is_directed(&self) -> bool;

    /// Whether an edge may connect a node to itself.
    fn allows_self_loops(&self) -> bool;

    /// Whether two distinct edges may connect the same node pair.
    fn allows_parallel_edges(&self) -> bool;

    /// The iteration-order policy of [`nodes`](NetworkView::nodes).
    fn node_order(&self) -> ElementOrder;

    /// The iteration-order policy of [`edges`](NetworkView::edges).
    fn edge_order(&self) -> ElementOrder;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges; parallel edges all count.
    fn edge_count(&self) -> usize;

    /// All nodes, in [`node_order`](NetworkView::node_order).
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// All edge identities, in [`edge_order`](NetworkView::edge_order).
    fn edges(&self) -> Box<dyn Iterator<Item = &E> + '_>;

    /// Whether `node` is an element of this network.
    fn contains_node(&self, node: &N) -> bool;

    /// Whether `edge` is an element of this network.
    fn contains_edge(&self, edge: &E) -> bool;

    /// All nodes connected to `node` by any edge, each reported once.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this network.
    fn adjacent_nodes<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a>;

    /// All nodes with an edge into `node`.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this network.
    fn predecessors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a>;

    /// All nodes with an edge out of `node`.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this network.
    fn successors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a>;

    /// All edges touching `node`; a self-loop is reported once.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this network.
    fn incident_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a E> + 'a>;

    /// All edges into `node`; a self-loop is included.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this network.
    fn in_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a E> + 'a>;

    /// All edges out of `node`; a self-loop is included.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this network.
    fn out_edges<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a E> + 'a>;

    /// Number of incident edge endpoints at `node`; a self-loop
    /// contributes 2.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this network.
    fn degree(&self, node: &N) -> usize;

    /// Number of incoming edges; equals [`degree`](NetworkView::degree) in
    /// an undirected network.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this network.
    fn in_degree(&self, node: &N) -> usize;

    /// Number of outgoing edges; equals [`degree`](NetworkView::degree) in
    /// an undirected network.
    ///
    /// # Panics
    /// Panics when `node` is not an element of this network.
    fn out_degree(&self, node: &N) -> usize;

    /// The two nodes `edge` connects.
    ///
    /// # Panics
    /// Panics when `edge` is not an element of this network.
    fn incident_nodes(&self, edge: &E) -> EndpointPair<N>;

    /// All edges sharing an endpoint with `edge`, excluding `edge` itself.
    ///
    /// # Panics
    /// Panics when `edge` is not an element of this network.
    fn adjacent_edges<'a>(&'a self, edge: &E) -> Box<dyn Iterator<Item = &'a E> + 'a>;

    /// All edges connecting `u` to `v` (direction-sensitive in a directed
    /// network).
    ///
    /// # Panics
    /// Panics when either node is not an element of this network.
    fn edges_connecting<'a>(
        &'a self,
        node_u: &N,
        node_v: &N,
    ) -> Box<dyn Iterator<Item = &'a E> + 'a>;

    /// The single edge connecting `u` to `v`, `Ok(None)` when there is
    /// none, or [`GraphError::AmbiguousEdge`](crate::GraphError) when
    /// parallel edges make the choice ambiguous.
    ///
    /// # Panics
    /// Panics when either node is not an element of this network.
    fn edge_connecting<'a>(&'a self, node_u: &N, node_v: &N) -> Result<Option<&'a E>>;

    /// Whether at least one edge connects `u` to `v`. `false` when either
    /// node is absent — never panics.
    fn has_edge_connecting(&self, node_u: &N, node_v: &N) -> bool;
}
