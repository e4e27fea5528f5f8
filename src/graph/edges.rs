//! Lazy enumeration of a graph's edges as endpoint pairs.

use std::collections::HashSet;

use super::{GraphView, Node};
use crate::endpoints::EndpointPair;

/// Iterator over every edge of a graph, derived purely from node iteration
/// and per-node successors.
///
/// Directed graphs yield one ordered pair per (node, successor) — every
/// ordered pair is distinct, so no bookkeeping is needed. Undirected graphs
/// yield an unordered pair for every successor *not already exhausted as an
/// origin*: an origin is marked only after all of its neighbors have been
/// produced, so a self-loop (where the successor is the origin itself) is
/// still yielded exactly once. Total work is O(|N| + |E|) with O(|N|)
/// auxiliary space for the origin set.
pub struct EndpointPairs<'a, N, G: ?Sized> {
    graph: &'a G,
    directed: bool,
    nodes: Box<dyn Iterator<Item = &'a N> + 'a>,
    current: Option<(&'a N, Box<dyn Iterator<Item = &'a N> + 'a>)>,
    exhausted_origins: HashSet<&'a N>,
}

impl<'a, N, G> EndpointPairs<'a, N, G>
where
    N: Node,
    G: GraphView<N> + ?Sized,
{
    pub(crate) fn new(graph: &'a G) -> Self {
        EndpointPairs {
            graph,
            directed: graph.is_directed(),
            nodes: graph.nodes(),
            current: None,
            exhausted_origins: HashSet::new(),
        }
    }
}

impl<'a, N, G> Iterator for EndpointPairs<'a, N, G>
where
    N: Node,
    G: GraphView<N> + ?Sized,
{
    type Item = EndpointPair<&'a N>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((origin, successors)) = self.current.as_mut() {
                let origin: &'a N = *origin;
                for successor in successors.by_ref() {
                    if self.directed {
                        return Some(EndpointPair::ordered(origin, successor));
                    }
                    if !self.exhausted_origins.contains(successor) {
                        return Some(EndpointPair::unordered(origin, successor));
                    }
                }
                // The origin joins the exhausted set only now, after its
                // self-loop (if any) has been yielded.
                if !self.directed {
                    self.exhausted_origins.insert(origin);
                }
                self.current = None;
            }
            let origin = self.nodes.next()?;
            self.current = Some((origin, self.graph.successors(origin)));
        }
    }
}
