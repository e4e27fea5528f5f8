//! Per-node storage for networks, keyed by edge identity.
//!
//! Parallel edges force the maps to be keyed by edge rather than by
//! neighbor. The adjacency *index* — how a connections object answers
//! "which nodes am I adjacent to?" in O(1) — depends on the parallel-edge
//! policy: without parallel edges at most one edge exists per node pair,
//! so a node↔edge bijection works and doubles as an O(1) single-edge
//! lookup; with parallel edges neighbors repeat and a counting multiset
//! tracks them instead.

use std::collections::HashMap;
use std::hash::Hash;

use super::multiset::CountingMultiset;
use crate::iter::Either;
use crate::map::ElementMap;
use crate::order::ElementOrder;

/// O(1) adjacency view of one edge direction, chosen by parallel-edge
/// policy.
#[derive(Clone, Debug)]
pub(crate) enum AdjacencyIndex<N, E> {
    /// At most one edge per neighbor: a bijection from neighbor to that
    /// edge.
    Unique(HashMap<N, E>),
    /// Parallel edges allowed: occurrences counted per neighbor.
    Counted(CountingMultiset<N>),
}

impl<N, E> AdjacencyIndex<N, E>
where
    N: Eq + Hash,
    E: Clone,
{
    fn new(parallel: bool) -> Self {
        if parallel {
            AdjacencyIndex::Counted(CountingMultiset::new())
        } else {
            AdjacencyIndex::Unique(HashMap::new())
        }
    }

    fn record(&mut self, node: N, edge: &E) {
        match self {
            AdjacencyIndex::Unique(map) => {
                map.insert(node, edge.clone());
            }
            AdjacencyIndex::Counted(set) => {
                set.add(node);
            }
        }
    }

    fn erase(&mut self, node: &N) {
        match self {
            AdjacencyIndex::Unique(map) => {
                map.remove(node)
                    .map(|_| ())
                    .expect("erased a neighbor with no recorded edge");
            }
            AdjacencyIndex::Counted(set) => set.remove(node),
        }
    }

    fn contains(&self, node: &N) -> bool {
        match self {
            AdjacencyIndex::Unique(map) => map.contains_key(node),
            AdjacencyIndex::Counted(set) => set.contains(node),
        }
    }

    fn count(&self, node: &N) -> usize {
        match self {
            AdjacencyIndex::Unique(map) => usize::from(map.contains_key(node)),
            AdjacencyIndex::Counted(set) => set.count(node),
        }
    }

    fn distinct(&self) -> impl Iterator<Item = &N> {
        match self {
            AdjacencyIndex::Unique(map) => Either::Left(map.keys()),
            AdjacencyIndex::Counted(set) => Either::Right(set.distinct()),
        }
    }
}

/// Directed network connections: separate in-edge and out-edge maps plus a
/// self-loop counter, since a loop edge appears in both maps but must count
/// once toward incident-edge totals.
#[derive(Clone, Debug)]
pub(crate) struct DirectedNetConnections<N, E> {
    in_edges: ElementMap<E, N>,
    out_edges: ElementMap<E, N>,
    predecessors: AdjacencyIndex<N, E>,
    successors: AdjacencyIndex<N, E>,
    self_loop_count: usize,
}

impl<N, E> DirectedNetConnections<N, E>
where
    N: Clone + Eq + Hash + Ord,
    E: Clone + Eq + Hash + Ord,
{
    pub(crate) fn new(order: ElementOrder, parallel: bool) -> Self {
        DirectedNetConnections {
            in_edges: ElementMap::new(order),
            out_edges: ElementMap::new(order),
            predecessors: AdjacencyIndex::new(parallel),
            successors: AdjacencyIndex::new(parallel),
            self_loop_count: 0,
        }
    }

    pub(crate) fn adjacent_nodes(&self) -> impl Iterator<Item = &N> {
        let successors = &self.successors;
        self.successors
            .distinct()
            .chain(
                self.predecessors
                    .distinct()
                    .filter(move |node| !successors.contains(*node)),
            )
    }

    pub(crate) fn predecessors(&self) -> impl Iterator<Item = &N> {
        self.predecessors.distinct()
    }

    pub(crate) fn successors(&self) -> impl Iterator<Item = &N> {
        self.successors.distinct()
    }

    pub(crate) fn incident_edges(&self) -> impl Iterator<Item = &E> {
        let out_edges = &self.out_edges;
        self.out_edges
            .keys()
            .chain(
                self.in_edges
                    .keys()
                    .filter(move |edge| !out_edges.contains_key(*edge)),
            )
    }

    /// Incident-edge total: a self-loop sits in both maps but is one edge.
    pub(crate) fn incident_edge_count(&self) -> usize {
        self.in_edges.len() + self.out_edges.len() - self.self_loop_count
    }

    pub(crate) fn in_edges(&self) -> impl Iterator<Item = &E> {
        self.in_edges.keys()
    }

    pub(crate) fn out_edges(&self) -> impl Iterator<Item = &E> {
        self.out_edges.keys()
    }

    pub(crate) fn in_edge_count(&self) -> usize {
        self.in_edges.len()
    }

    pub(crate) fn out_edge_count(&self) -> usize {
        self.out_edges.len()
    }

    pub(crate) fn adjacent_node(&self, edge: &E) -> &N {
        self.out_edges
            .get(edge)
            .expect("edge is not an out-edge of its reference node")
    }

    pub(crate) fn edges_connecting(&self, successor: &N) -> impl Iterator<Item = &E> {
        match &self.successors {
            AdjacencyIndex::Unique(map) => Either::Left(map.get(successor).into_iter()),
            AdjacencyIndex::Counted(_) => {
                let successor = successor.clone();
                Either::Right(
                    self.out_edges
                        .iter()
                        .filter(move |(_, target)| **target == successor)
                        .map(|(edge, _)| edge),
                )
            }
        }
    }

    pub(crate) fn has_successor(&self, node: &N) -> bool {
        self.successors.contains(node)
    }

    pub(crate) fn add_out_edge(&mut self, edge: E, target: N) {
        self.successors.record(target.clone(), &edge);
        self.out_edges.insert(edge, target);
    }

    pub(crate) fn add_in_edge(&mut self, edge: E, source: N, is_self_loop: bool) {
        if is_self_loop {
            self.self_loop_count += 1;
        }
        self.predecessors.record(source.clone(), &edge);
        self.in_edges.insert(edge, source);
    }

    pub(crate) fn remove_out_edge(&mut self, edge: &E) {
        let target = self
            .out_edges
            .remove(edge)
            .expect("removed an edge that is not an out-edge of this node");
        self.successors.erase(&target);
    }

    pub(crate) fn remove_in_edge(&mut self, edge: &E, is_self_loop: bool) {
        if is_self_loop {
            self.self_loop_count -= 1;
        }
        let source = self
            .in_edges
            .remove(edge)
            .expect("removed an edge that is not an in-edge of this node");
        self.predecessors.erase(&source);
    }
}

/// Undirected network connections: a single incident-edge map in which a
/// self-loop appears exactly once.
#[derive(Clone, Debug)]
pub(crate) struct UndirectedNetConnections<N, E> {
    incident: ElementMap<E, N>,
    neighbors: AdjacencyIndex<N, E>,
}

impl<N, E> UndirectedNetConnections<N, E>
where
    N: Clone + Eq + Hash + Ord,
    E: Clone + Eq + Hash + Ord,
{
    pub(crate) fn new(order: ElementOrder, parallel: bool) -> Self {
        UndirectedNetConnections {
            incident: ElementMap::new(order),
            neighbors: AdjacencyIndex::new(parallel),
        }
    }

    pub(crate) fn adjacent_nodes(&self) -> impl Iterator<Item = &N> {
        self.neighbors.distinct()
    }

    pub(crate) fn incident_edges(&self) -> impl Iterator<Item = &E> {
        self.incident.keys()
    }

    pub(crate) fn incident_edge_count(&self) -> usize {
        self.incident.len()
    }

    pub(crate) fn adjacent_node(&self, edge: &E) -> &N {
        self.incident
            .get(edge)
            .expect("edge is not incident to its reference node")
    }

    pub(crate) fn edges_connecting(&self, neighbor: &N) -> impl Iterator<Item = &E> {
        match &self.neighbors {
            AdjacencyIndex::Unique(map) => Either::Left(map.get(neighbor).into_iter()),
            AdjacencyIndex::Counted(_) => {
                let neighbor = neighbor.clone();
                Either::Right(
                    self.incident
                        .iter()
                        .filter(move |(_, node)| **node == neighbor)
                        .map(|(edge, _)| edge),
                )
            }
        }
    }

    pub(crate) fn has_neighbor(&self, node: &N) -> bool {
        self.neighbors.contains(node)
    }

    /// Number of self-loop edges at the owning node, which the container
    /// identifies by its own key.
    pub(crate) fn loop_count(&self, own_node: &N) -> usize {
        self.neighbors.count(own_node)
    }

    pub(crate) fn add_out_edge(&mut self, edge: E, node: N) {
        self.neighbors.record(node.clone(), &edge);
        self.incident.insert(edge, node);
    }

    pub(crate) fn add_in_edge(&mut self, edge: E, node: N, is_self_loop: bool) {
        // A self-loop was already recorded by the out-edge insert on this
        // same connections object.
        if !is_self_loop {
            self.add_out_edge(edge, node);
        }
    }

    pub(crate) fn remove_out_edge(&mut self, edge: &E) {
        let node = self
            .incident
            .remove(edge)
            .expect("removed an edge that is not incident to this node");
        self.neighbors.erase(&node);
    }

    pub(crate) fn remove_in_edge(&mut self, edge: &E, is_self_loop: bool) {
        if !is_self_loop {
            self.remove_out_edge(edge);
        }
    }
}

/// Per-node network storage, dispatching between the directed and
/// undirected representations.
#[derive(Clone, Debug)]
pub(crate) enum NetConnections<N, E> {
    Directed(DirectedNetConnections<N, E>),
    Undirected(UndirectedNetConnections<N, E>),
}

impl<N, E> NetConnections<N, E>
where
    N: Clone + Eq + Hash + Ord,
    E: Clone + Eq + Hash + Ord,
{
    pub(crate) fn new(directed: bool, order: ElementOrder, parallel: bool) -> Self {
        if directed {
            NetConnections::Directed(DirectedNetConnections::new(order, parallel))
        } else {
            NetConnections::Undirected(UndirectedNetConnections::new(order, parallel))
        }
    }

    pub(crate) fn adjacent_nodes(&self) -> impl Iterator<Item = &N> {
        match self {
            NetConnections::Directed(c) => Either::Left(c.adjacent_nodes()),
            NetConnections::Undirected(c) => Either::Right(c.adjacent_nodes()),
        }
    }

    pub(crate) fn predecessors(&self) -> impl Iterator<Item = &N> {
        match self {
            NetConnections::Directed(c) => Either::Left(c.predecessors()),
            NetConnections::Undirected(c) => Either::Right(c.adjacent_nodes()),
        }
    }

    pub(crate) fn successors(&self) -> impl Iterator<Item = &N> {
        match self {
            NetConnections::Directed(c) => Either::Left(c.successors()),
            NetConnections::Undirected(c) => Either::Right(c.adjacent_nodes()),
        }
    }

    pub(crate) fn incident_edges(&self) -> impl Iterator<Item = &E> {
        match self {
            NetConnections::Directed(c) => Either::Left(c.incident_edges()),
            NetConnections::Undirected(c) => Either::Right(c.incident_edges()),
        }
    }

    pub(crate) fn incident_edge_count(&self) -> usize {
        match self {
            NetConnections::Directed(c) => c.incident_edge_count(),
            NetConnections::Undirected(c) => c.incident_edge_count(),
        }
    }

    pub(crate) fn in_edges(&self) -> impl Iterator<Item = &E> {
        match self {
            NetConnections::Directed(c) => Either::Left(c.in_edges()),
            NetConnections::Undirected(c) => Either::Right(c.incident_edges()),
        }
    }

    pub(crate) fn out_edges(&self) -> impl Iterator<Item = &E> {
        match self {
            NetConnections::Directed(c) => Either::Left(c.out_edges()),
            NetConnections::Undirected(c) => Either::Right(c.incident_edges()),
        }
    }

    pub(crate) fn in_edge_count(&self) -> usize {
        match self {
            NetConnections::Directed(c) => c.in_edge_count(),
            NetConnections::Undirected(c) => c.incident_edge_count(),
        }
    }

    pub(crate) fn out_edge_count(&self) -> usize {
        match self {
            NetConnections::Directed(c) => c.out_edge_count(),
            NetConnections::Undirected(c) => c.incident_edge_count(),
        }
    }

    pub(crate) fn adjacent_node(&self, edge: &E) -> &N {
        match self {
            NetConnections::Directed(c) => c.adjacent_node(edge),
            NetConnections::Undirected(c) => c.adjacent_node(edge),
        }
    }

    pub(crate) fn edges_connecting(&self, node: &N) -> impl Iterator<Item = &E> {
        match self {
            NetConnections::Directed(c) => Either::Left(c.edges_connecting(node)),
            NetConnections::Undirected(c) => Either::Right(c.edges_connecting(node)),
        }
    }

    pub(crate) fn has_successor(&self, node: &N) -> bool {
        match self {
            NetConnections::Directed(c) => c.has_successor(node),
            NetConnections::Undirected(c) => c.has_neighbor(node),
        }
    }

    /// Self-loop edges at the owning node.
    pub(crate) fn loop_count(&self, own_node: &N) -> usize {
        match self {
            NetConnections::Directed(c) => {
                let _ = own_node;
                c.self_loop_count
            }
            NetConnections::Undirected(c) => c.loop_count(own_node),
        }
    }

    pub(crate) fn add_out_edge(&mut self, edge: E, node: N) {
        match self {
            NetConnections::Directed(c) => c.add_out_edge(edge, node),
            NetConnections::Undirected(c) => c.add_out_edge(edge, node),
        }
    }

    pub(crate) fn add_in_edge(&mut self, edge: E, node: N, is_self_loop: bool) {
        match self {
            NetConnections::Directed(c) => c.add_in_edge(edge, node, is_self_loop),
            NetConnections::Undirected(c) => c.add_in_edge(edge, node, is_self_loop),
        }
    }

    pub(crate) fn remove_out_edge(&mut self, edge: &E) {
        match self {
            NetConnections::Directed(c) => c.remove_out_edge(edge),
            NetConnections::Undirected(c) => c.remove_out_edge(edge),
        }
    }

    pub(crate) fn remove_in_edge(&mut self, edge: &E, is_self_loop: bool) {
        match self {
            NetConnections::Directed(c) => c.remove_in_edge(edge, is_self_loop),
            NetConnections::Undirected(c) => c.remove_in_edge(edge, is_self_loop),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_self_loop_counts_once() {
        let mut c: DirectedNetConnections<&str, u32> =
            DirectedNetConnections::new(ElementOrder::Insertion, false);
        c.add_out_edge(1, "a");
        c.add_in_edge(1, "a", true);
        assert_eq!(c.in_edge_count(), 1);
        assert_eq!(c.out_edge_count(), 1);
        assert_eq!(c.incident_edge_count(), 1);
        assert_eq!(c.incident_edges().count(), 1);
    }

    #[test]
    fn test_directed_incident_edges_union() {
        let mut c: DirectedNetConnections<&str, u32> =
            DirectedNetConnections::new(ElementOrder::Insertion, false);
        c.add_out_edge(1, "b");
        c.add_in_edge(2, "c", false);
        let incident: Vec<_> = c.incident_edges().copied().collect();
        assert_eq!(incident, vec![1, 2]);
        assert_eq!(c.incident_edge_count(), 2);
    }

    #[test]
    fn test_undirected_self_loop_inserted_once() {
        let mut c: UndirectedNetConnections<&str, u32> =
            UndirectedNetConnections::new(ElementOrder::Insertion, false);
        c.add_out_edge(9, "a");
        c.add_in_edge(9, "a", true);
        assert_eq!(c.incident_edge_count(), 1);
        assert_eq!(c.loop_count(&"a"), 1);
    }

    #[test]
    fn test_multi_adjacency_counts_parallel_edges() {
        let mut c: DirectedNetConnections<&str, u32> =
            DirectedNetConnections::new(ElementOrder::Insertion, true);
        c.add_out_edge(1, "b");
        c.add_out_edge(2, "b");
        assert_eq!(c.successors().count(), 1);
        let connecting: Vec<_> = c.edges_connecting(&"b").copied().collect();
        assert_eq!(connecting, vec![1, 2]);
        c.remove_out_edge(&1);
        assert_eq!(c.successors().count(), 1);
        c.remove_out_edge(&2);
        assert_eq!(c.successors().count(), 0);
    }

    #[test]
    fn test_unique_adjacency_single_edge_lookup() {
        let mut c: UndirectedNetConnections<&str, u32> =
            UndirectedNetConnections::new(ElementOrder::Insertion, false);
        c.add_out_edge(4, "b");
        let connecting: Vec<_> = c.edges_connecting(&"b").copied().collect();
        assert_eq!(connecting, vec![4]);
        assert!(c.has_neighbor(&"b"));
        assert!(!c.has_neighbor(&"z"));
    }
}
