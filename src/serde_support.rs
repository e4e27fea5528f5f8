//! Serialization for the mutable containers, behind `feature = "serde"`.
//!
//! A graph serializes as its configuration plus explicit node and edge
//! lists, and deserializes by replaying them through the normal mutation
//! surface — so a deserialized graph is structurally identical to the
//! original and policy violations in hand-edited input surface as
//! deserialization errors.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::graph::{
    EdgeId, Graph, GraphBuilder, GraphView, Network, NetworkBuilder, NetworkView, Node, ValueGraph,
    ValueGraphBuilder, ValueGraphView,
};
use crate::order::ElementOrder;

#[derive(Serialize)]
struct GraphRepr<'a, N> {
    directed: bool,
    allows_self_loops: bool,
    node_order: ElementOrder,
    nodes: Vec<&'a N>,
    edges: Vec<(&'a N, &'a N)>,
}

#[derive(Deserialize)]
struct GraphReprOwned<N> {
    directed: bool,
    allows_self_loops: bool,
    node_order: ElementOrder,
    nodes: Vec<N>,
    edges: Vec<(N, N)>,
}

impl<N> Serialize for Graph<N>
where
    N: Node + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphRepr {
            directed: self.is_directed(),
            allows_self_loops: self.allows_self_loops(),
            node_order: self.node_order(),
            nodes: self.nodes().collect(),
            edges: self.edges().map(EndpointPairExt::as_tuple).collect(),
        }
        .serialize(serializer)
    }
}

impl<'de, N> Deserialize<'de> for Graph<N>
where
    N: Node + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GraphReprOwned::deserialize(deserializer)?;
        let builder = if repr.directed {
            GraphBuilder::directed()
        } else {
            GraphBuilder::undirected()
        };
        let mut graph = builder
            .allows_self_loops(repr.allows_self_loops)
            .node_order(repr.node_order)
            .expected_node_count(repr.nodes.len())
            .build();
        for node in repr.nodes {
            graph.add_node(node);
        }
        for (node_u, node_v) in repr.edges {
            graph.put_edge(node_u, node_v).map_err(D::Error::custom)?;
        }
        Ok(graph)
    }
}

#[derive(Serialize)]
struct ValueGraphRepr<'a, N, V> {
    directed: bool,
    allows_self_loops: bool,
    node_order: ElementOrder,
    nodes: Vec<&'a N>,
    edges: Vec<(&'a N, &'a N, &'a V)>,
}

#[derive(Deserialize)]
struct ValueGraphReprOwned<N, V> {
    directed: bool,
    allows_self_loops: bool,
    node_order: ElementOrder,
    nodes: Vec<N>,
    edges: Vec<(N, N, V)>,
}

impl<N, V> Serialize for ValueGraph<N, V>
where
    N: Node + Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let edges = self
            .edges()
            .map(|pair| {
                let (node_u, node_v) = pair.into_nodes();
                let value = self
                    .edge_value(node_u, node_v)
                    .expect("enumerated edge carries a value");
                (node_u, node_v, value)
            })
            .collect();
        ValueGraphRepr {
            directed: self.is_directed(),
            allows_self_loops: self.allows_self_loops(),
            node_order: self.node_order(),
            nodes: self.nodes().collect(),
            edges,
        }
        .serialize(serializer)
    }
}

impl<'de, N, V> Deserialize<'de> for ValueGraph<N, V>
where
    N: Node + Deserialize<'de>,
    V: Clone + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ValueGraphReprOwned::deserialize(deserializer)?;
        let builder = if repr.directed {
            ValueGraphBuilder::directed()
        } else {
            ValueGraphBuilder::undirected()
        };
        let mut graph = builder
            .allows_self_loops(repr.allows_self_loops)
            .node_order(repr.node_order)
            .expected_node_count(repr.nodes.len())
            .build();
        for node in repr.nodes {
            graph.add_node(node);
        }
        for (node_u, node_v, value) in repr.edges {
            graph
                .put_edge_value(node_u, node_v, value)
                .map_err(D::Error::custom)?;
        }
        Ok(graph)
    }
}

#[derive(Serialize)]
struct NetworkRepr<'a, N, E> {
    directed: bool,
    allows_self_loops: bool,
    allows_parallel_edges: bool,
    node_order: ElementOrder,
    edge_order: ElementOrder,
    nodes: Vec<&'a N>,
    edges: Vec<(&'a E, N, N)>,
}

#[derive(Deserialize)]
struct NetworkReprOwned<N, E> {
    directed: bool,
    allows_self_loops: bool,
    allows_parallel_edges: bool,
    node_order: ElementOrder,
    edge_order: ElementOrder,
    nodes: Vec<N>,
    edges: Vec<(E, N, N)>,
}

impl<N, E> Serialize for Network<N, E>
where
    N: Node + Serialize,
    E: EdgeId + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let edges = NetworkView::edges(self)
            .map(|edge| {
                let (node_u, node_v) = self.incident_nodes(edge).into_nodes();
                (edge, node_u, node_v)
            })
            .collect();
        NetworkRepr {
            directed: self.is_directed(),
            allows_self_loops: self.allows_self_loops(),
            allows_parallel_edges: self.allows_parallel_edges(),
            node_order: self.node_order(),
            edge_order: self.edge_order(),
            nodes: self.nodes().collect(),
            edges,
        }
        .serialize(serializer)
    }
}

impl<'de, N, E> Deserialize<'de> for Network<N, E>
where
    N: Node + Deserialize<'de>,
    E: EdgeId + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = NetworkReprOwned::deserialize(deserializer)?;
        let builder = if repr.directed {
            NetworkBuilder::directed()
        } else {
            NetworkBuilder::undirected()
        };
        let mut network = builder
            .allows_self_loops(repr.allows_self_loops)
            .allows_parallel_edges(repr.allows_parallel_edges)
            .node_order(repr.node_order)
            .edge_order(repr.edge_order)
            .expected_node_count(repr.nodes.len())
            .expected_edge_count(repr.edges.len())
            .build();
        for node in repr.nodes {
            network.add_node(node);
        }
        for (edge, node_u, node_v) in repr.edges {
            network
                .add_edge(node_u, node_v, edge)
                .map_err(D::Error::custom)?;
        }
        Ok(network)
    }
}

/// Borrow-friendly destructuring of an endpoint pair into a serializable
/// tuple.
trait EndpointPairExt<'a, N> {
    fn as_tuple(self) -> (&'a N, &'a N);
}

impl<'a, N> EndpointPairExt<'a, N> for crate::endpoints::EndpointPair<&'a N> {
    fn as_tuple(self) -> (&'a N, &'a N) {
        self.into_nodes()
    }
}
