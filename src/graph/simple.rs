//! The mutable graph container with anonymous, value-less edges.

use std::fmt;

use super::value_graph::ValueGraph;
use super::{GraphView, Node};
use crate::error::Result;
use crate::order::ElementOrder;

/// A mutable graph whose edges are identified purely by their endpoints,
/// built by [`GraphBuilder`](crate::GraphBuilder).
///
/// Implemented as a [`ValueGraph`] whose edges carry `()`; the two types
/// share all connectivity behavior.
#[derive(Clone)]
pub struct Graph<N> {
    base: ValueGraph<N, ()>,
}

impl<N: Node> PartialEq for Graph<N> {
    /// Two graphs are equal when they agree on directedness, node set, and
    /// edge set — order policies and insertion history are irrelevant.
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<N: Node> Eq for Graph<N> {}

impl<N: Node> Graph<N> {
    pub(crate) fn from_base(base: ValueGraph<N, ()>) -> Self {
        Graph { base }
    }

    /// Adds `node` if not already present. Returns `true` when the graph
    /// was modified.
    pub fn add_node(&mut self, node: N) -> bool {
        self.base.add_node(node)
    }

    /// Adds the edge `u -> v` (or `{u, v}` when undirected), implicitly
    /// adding missing endpoints. Returns `true` when the graph was
    /// modified — `false` means the edge was already present and nothing
    /// changed.
    ///
    /// Rejected with
    /// [`GraphError::SelfLoopsDisallowed`](crate::GraphError) when
    /// `u == v` and the graph was not built with
    /// `allows_self_loops(true)`; the graph is left unmodified.
    pub fn put_edge(&mut self, node_u: N, node_v: N) -> Result<bool> {
        self.base
            .put_edge_value(node_u, node_v, ())
            .map(|previous| previous.is_none())
    }

    /// Removes the edge between `u` and `v`. Returns `true` when the graph
    /// was modified.
    pub fn remove_edge(&mut self, node_u: &N, node_v: &N) -> bool {
        self.base.remove_edge(node_u, node_v).is_some()
    }

    /// Removes `node` and every edge incident to it. Returns `true` when
    /// the graph was modified.
    pub fn remove_node(&mut self, node: &N) -> bool {
        self.base.remove_node(node)
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.base.clear();
    }

    /// A copy of this graph with every directed edge reversed. For an
    /// undirected graph this is simply a copy. Returns a new graph, not a
    /// view.
    pub fn transposed(&self) -> Self {
        Graph {
            base: self.base.transposed(),
        }
    }

    /// The subgraph induced by `nodes`: those nodes and every edge of this
    /// graph with both endpoints among them. Returns a new graph, not a
    /// view.
    ///
    /// # Panics
    /// Panics when a requested node is not an element of this graph.
    pub fn induced_subgraph<I>(&self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        Graph {
            base: self.base.induced_subgraph(nodes),
        }
    }

    /// A mutable copy of `source`: same configuration, nodes, and edges.
    pub fn copy_of<G>(source: &G) -> Self
    where
        G: GraphView<N>,
    {
        let mut base = ValueGraph::with_config(
            source.is_directed(),
            source.allows_self_loops(),
            source.node_order(),
            source.node_count(),
        );
        for node in source.nodes() {
            base.add_node(node.clone());
        }
        for pair in source.edges() {
            let (node_u, node_v) = pair.into_nodes();
            base.put_edge_value(node_u.clone(), node_v.clone(), ())
                .expect("copy inherits the self-loop policy");
        }
        Graph { base }
    }

    /// Checks the container's bookkeeping against its actual contents,
    /// panicking on any divergence. Intended for tests.
    pub fn validate_invariants(&self) {
        self.base.validate_invariants();
    }
}

impl<N: Node> GraphView<N> for Graph<N> {
    fn is_directed(&self) -> bool {
        self.base.is_directed()
    }

    fn allows_self_loops(&self) -> bool {
        self.base.allows_self_loops()
    }

    fn node_order(&self) -> ElementOrder {
        self.base.node_order()
    }

    fn node_count(&self) -> usize {
        self.base.node_count()
    }

    fn edge_count(&self) -> usize {
        self.base.edge_count()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        self.base.nodes()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.base.contains_node(node)
    }

    fn adjacent_nodes<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.base.adjacent_nodes(node)
    }

    fn predecessors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.base.predecessors(node)
    }

    fn successors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = &'a N> + 'a> {
        self.base.successors(node)
    }

    fn degree(&self, node: &N) -> usize {
        self.base.degree(node)
    }

    fn in_degree(&self, node: &N) -> usize {
        self.base.in_degree(node)
    }

    fn out_degree(&self, node: &N) -> usize {
        self.base.out_degree(node)
    }

    fn has_edge_connecting(&self, node_u: &N, node_v: &N) -> bool {
        self.base.has_edge_connecting(node_u, node_v)
    }
}

impl<N> fmt::Debug for Graph<N>
where
    N: Node + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.base.is_directed())
            .field("allows_self_loops", &self.base.allows_self_loops())
            .field("nodes", &self.base.nodes().collect::<Vec<_>>())
            .field("edges", &self.base.edges().collect::<Vec<_>>())
            .finish()
    }
}
