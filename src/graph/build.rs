//! Plain-configuration builders for the three container types.
//!
//! A builder is an ordinary struct: every chained call returns `Self`
//! unchanged in type, and nothing is fixed until `build` creates the
//! container. Directedness is chosen by the constructor
//! (`directed()` / `undirected()`); self-loops and parallel edges default
//! to disallowed; iteration orders default to insertion order.

use super::network::Network;
use super::simple::Graph;
use super::value_graph::ValueGraph;
use super::{EdgeId, GraphView, NetworkView, Node};
use crate::error::Result;
use crate::order::ElementOrder;

/// Builder for [`Graph`].
///
/// ```
/// use trellis::{GraphBuilder, GraphView};
///
/// let mut graph = GraphBuilder::directed()
///     .allows_self_loops(true)
///     .build::<&str>();
/// graph.put_edge("a", "b").unwrap();
/// assert!(graph.has_edge_connecting(&"a", &"b"));
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    directed: bool,
    allows_self_loops: bool,
    node_order: ElementOrder,
    expected_node_count: usize,
}

impl GraphBuilder {
    /// Starts configuration of a graph with directed edges.
    pub fn directed() -> Self {
        GraphBuilder {
            directed: true,
            allows_self_loops: false,
            node_order: ElementOrder::Insertion,
            expected_node_count: 0,
        }
    }

    /// Starts configuration of a graph with undirected edges.
    pub fn undirected() -> Self {
        GraphBuilder {
            directed: false,
            ..Self::directed()
        }
    }

    /// Starts from the configuration of an existing graph: directedness,
    /// self-loop policy, and node order are copied.
    pub fn from_graph<N: Node>(graph: &impl GraphView<N>) -> Self {
        GraphBuilder {
            directed: graph.is_directed(),
            allows_self_loops: graph.allows_self_loops(),
            node_order: graph.node_order(),
            expected_node_count: 0,
        }
    }

    /// Whether an edge may connect a node to itself. Defaults to `false`.
    #[must_use]
    pub fn allows_self_loops(mut self, allowed: bool) -> Self {
        self.allows_self_loops = allowed;
        self
    }

    /// Iteration-order policy for nodes. Defaults to insertion order.
    #[must_use]
    pub fn node_order(mut self, order: ElementOrder) -> Self {
        self.node_order = order;
        self
    }

    /// Pre-sizes the node container.
    #[must_use]
    pub fn expected_node_count(mut self, count: usize) -> Self {
        self.expected_node_count = count;
        self
    }

    /// Builds an empty graph with this configuration.
    pub fn build<N: Node>(&self) -> Graph<N> {
        Graph::from_base(ValueGraph::with_config(
            self.directed,
            self.allows_self_loops,
            self.node_order,
            self.expected_node_count,
        ))
    }

    /// Builds a graph containing the given edges; endpoints are added as
    /// nodes implicitly.
    pub fn build_from_edges<N, I>(&self, edges: I) -> Result<Graph<N>>
    where
        N: Node,
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = self.build();
        for (node_u, node_v) in edges {
            graph.put_edge(node_u, node_v)?;
        }
        Ok(graph)
    }
}

/// Builder for [`ValueGraph`].
#[derive(Clone, Debug)]
pub struct ValueGraphBuilder {
    directed: bool,
    allows_self_loops: bool,
    node_order: ElementOrder,
    expected_node_count: usize,
}

impl ValueGraphBuilder {
    /// Starts configuration of a value graph with directed edges.
    pub fn directed() -> Self {
        ValueGraphBuilder {
            directed: true,
            allows_self_loops: false,
            node_order: ElementOrder::Insertion,
            expected_node_count: 0,
        }
    }

    /// Starts configuration of a value graph with undirected edges.
    pub fn undirected() -> Self {
        ValueGraphBuilder {
            directed: false,
            ..Self::directed()
        }
    }

    /// Starts from the configuration of an existing graph.
    pub fn from_graph<N: Node>(graph: &impl GraphView<N>) -> Self {
        ValueGraphBuilder {
            directed: graph.is_directed(),
            allows_self_loops: graph.allows_self_loops(),
            node_order: graph.node_order(),
            expected_node_count: 0,
        }
    }

    /// Whether an edge may connect a node to itself. Defaults to `false`.
    #[must_use]
    pub fn allows_self_loops(mut self, allowed: bool) -> Self {
        self.allows_self_loops = allowed;
        self
    }

    /// Iteration-order policy for nodes. Defaults to insertion order.
    #[must_use]
    pub fn node_order(mut self, order: ElementOrder) -> Self {
        self.node_order = order;
        self
    }

    /// Pre-sizes the node container.
    #[must_use]
    pub fn expected_node_count(mut self, count: usize) -> Self {
        self.expected_node_count = count;
        self
    }

    /// Builds an empty value graph with this configuration.
    pub fn build<N: Node, V>(&self) -> ValueGraph<N, V> {
        ValueGraph::with_config(
            self.directed,
            self.allows_self_loops,
            self.node_order,
            self.expected_node_count,
        )
    }

    /// Builds a value graph containing the given valued edges.
    pub fn build_from_edges<N, V, I>(&self, edges: I) -> Result<ValueGraph<N, V>>
    where
        N: Node,
        V: Clone,
        I: IntoIterator<Item = (N, N, V)>,
    {
        let mut graph = self.build();
        for (node_u, node_v, value) in edges {
            graph.put_edge_value(node_u, node_v, value)?;
        }
        Ok(graph)
    }
}

/// Builder for [`Network`].
#[derive(Clone, Debug)]
pub struct NetworkBuilder {
    directed: bool,
    allows_self_loops: bool,
    allows_parallel_edges: bool,
    node_order: ElementOrder,
    edge_order: ElementOrder,
    expected_node_count: usize,
    expected_edge_count: usize,
}

impl NetworkBuilder {
    /// Starts configuration of a network with directed edges.
    pub fn directed() -> Self {
        NetworkBuilder {
            directed: true,
            allows_self_loops: false,
            allows_parallel_edges: false,
            node_order: ElementOrder::Insertion,
            edge_order: ElementOrder::Insertion,
            expected_node_count: 0,
            expected_edge_count: 0,
        }
    }

    /// Starts configuration of a network with undirected edges.
    pub fn undirected() -> Self {
        NetworkBuilder {
            directed: false,
            ..Self::directed()
        }
    }

    /// Starts from the configuration of an existing network.
    pub fn from_network<N: Node, E: EdgeId>(network: &impl NetworkView<N, E>) -> Self {
        NetworkBuilder {
            directed: network.is_directed(),
            allows_self_loops: network.allows_self_loops(),
            allows_parallel_edges: network.allows_parallel_edges(),
            node_order: network.node_order(),
            edge_order: network.edge_order(),
            expected_node_count: 0,
            expected_edge_count: 0,
        }
    }

    /// Whether an edge may connect a node to itself. Defaults to `false`.
    #[must_use]
    pub fn allows_self_loops(mut self, allowed: bool) -> Self {
        self.allows_self_loops = allowed;
        self
    }

    /// Whether two distinct edges may connect the same node pair. Defaults
    /// to `false`.
    #[must_use]
    pub fn allows_parallel_edges(mut self, allowed: bool) -> Self {
        self.allows_parallel_edges = allowed;
        self
    }

    /// Iteration-order policy for nodes. Defaults to insertion order.
    #[must_use]
    pub fn node_order(mut self, order: ElementOrder) -> Self {
        self.node_order = order;
        self
    }

    /// Iteration-order policy for edges. Defaults to insertion order.
    #[must_use]
    pub fn edge_order(mut self, order: ElementOrder) -> Self {
        self.edge_order = order;
        self
    }

    /// Pre-sizes the node container.
    #[must_use]
    pub fn expected_node_count(mut self, count: usize) -> Self {
        self.expected_node_count = count;
        self
    }

    /// Pre-sizes the edge container.
    #[must_use]
    pub fn expected_edge_count(mut self, count: usize) -> Self {
        self.expected_edge_count = count;
        self
    }

    /// Builds an empty network with this configuration.
    pub fn build<N: Node, E: EdgeId>(&self) -> Network<N, E> {
        Network::with_config(
            self.directed,
            self.allows_self_loops,
            self.allows_parallel_edges,
            self.node_order,
            self.edge_order,
            self.expected_node_count,
            self.expected_edge_count,
        )
    }

    /// Builds a network containing the given identified edges.
    pub fn build_from_edges<N, E, I>(&self, edges: I) -> Result<Network<N, E>>
    where
        N: Node,
        E: EdgeId,
        I: IntoIterator<Item = (N, N, E)>,
    {
        let mut network = self.build();
        for (node_u, node_v, edge) in edges {
            network.add_edge(node_u, node_v, edge)?;
        }
        Ok(network)
    }
}
