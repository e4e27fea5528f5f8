//! The two endpoints of a single edge, ordered or unordered.

use std::fmt;

/// The endpoints of an edge: an ordered `(source, target)` pair for a
/// directed edge, or an unordered `{u, v}` pair for an undirected edge.
///
/// Unordered pairs are stored canonically (`node_u() <= node_v()`), so the
/// derived equality and hashing realize unordered-pair semantics:
/// `unordered(a, b) == unordered(b, a)`. An ordered pair never compares
/// equal to an unordered pair, even over the same two nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EndpointPair<T> {
    u: T,
    v: T,
    ordered: bool,
}

impl<T> EndpointPair<T> {
    /// Creates an ordered pair representing a directed edge
    /// `source -> target`.
    #[inline]
    pub fn ordered(source: T, target: T) -> Self {
        EndpointPair {
            u: source,
            v: target,
            ordered: true,
        }
    }

    /// Returns `true` for pairs created with [`EndpointPair::ordered`].
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// The source of a directed edge.
    ///
    /// # Panics
    /// Panics when called on an unordered pair; the endpoints of an
    /// undirected edge have no source/target distinction. Use
    /// [`node_u`](EndpointPair::node_u) / [`node_v`](EndpointPair::node_v)
    /// instead.
    #[inline]
    pub fn source(&self) -> &T {
        assert!(self.ordered, "cannot call source() on an unordered pair");
        &self.u
    }

    /// The target of a directed edge.
    ///
    /// # Panics
    /// Panics when called on an unordered pair, like
    /// [`source`](EndpointPair::source).
    #[inline]
    pub fn target(&self) -> &T {
        assert!(self.ordered, "cannot call target() on an unordered pair");
        &self.v
    }

    /// One endpoint. For an ordered pair this is the source; for an
    /// unordered pair it is the smaller endpoint.
    #[inline]
    pub fn node_u(&self) -> &T {
        &self.u
    }

    /// The other endpoint. For an ordered pair this is the target; for an
    /// unordered pair it is the larger endpoint.
    #[inline]
    pub fn node_v(&self) -> &T {
        &self.v
    }

    /// Destructures the pair into `(node_u, node_v)`.
    #[inline]
    pub fn into_nodes(self) -> (T, T) {
        (self.u, self.v)
    }
}

impl<T: Ord> EndpointPair<T> {
    /// Creates an unordered pair representing an undirected edge between
    /// `a` and `b`.
    ///
    /// The endpoints are stored canonically sorted, so
    /// `unordered(a, b) == unordered(b, a)`.
    #[inline]
    pub fn unordered(a: T, b: T) -> Self {
        let (u, v) = if a <= b { (a, b) } else { (b, a) };
        EndpointPair {
            u,
            v,
            ordered: false,
        }
    }
}

impl<T: PartialEq> EndpointPair<T> {
    /// Returns `true` when both endpoints are the same node.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// Given one endpoint of this pair, returns the other.
    ///
    /// # Panics
    /// Panics when `node` is not an endpoint of this pair.
    #[inline]
    pub fn adjacent_node(&self, node: &T) -> &T {
        if *node == self.u {
            &self.v
        } else if *node == self.v {
            &self.u
        } else {
            panic!("node is not an endpoint of this pair");
        }
    }

    /// Returns `true` when `node` is one of the two endpoints.
    #[inline]
    pub fn contains(&self, node: &T) -> bool {
        *node == self.u || *node == self.v
    }
}

impl<'a, T: Clone> EndpointPair<&'a T> {
    /// Maps a pair of borrowed endpoints to a pair of owned endpoints.
    ///
    /// Canonical ordering of an unordered pair is preserved, since `Ord` on
    /// references delegates to the referent.
    #[inline]
    pub fn cloned(self) -> EndpointPair<T> {
        EndpointPair {
            u: self.u.clone(),
            v: self.v.clone(),
            ordered: self.ordered,
        }
    }
}

impl<T> IntoIterator for EndpointPair<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.u, self.v].into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for EndpointPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ordered {
            write!(f, "<{:?} -> {:?}>", self.u, self.v)
        } else {
            write!(f, "[{:?}, {:?}]", self.u, self.v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_equality_is_symmetric() {
        assert_eq!(EndpointPair::unordered(1, 2), EndpointPair::unordered(2, 1));
        assert_eq!(EndpointPair::unordered("a", "b"), EndpointPair::unordered("b", "a"));
    }

    #[test]
    fn test_ordered_equality_is_directional() {
        assert_ne!(EndpointPair::ordered(1, 2), EndpointPair::ordered(2, 1));
        assert_eq!(EndpointPair::ordered(1, 2), EndpointPair::ordered(1, 2));
    }

    #[test]
    fn test_ordered_never_equals_unordered() {
        assert_ne!(EndpointPair::ordered(1, 2), EndpointPair::unordered(1, 2));
        assert_ne!(EndpointPair::ordered(1, 1), EndpointPair::unordered(1, 1));
    }

    #[test]
    fn test_self_loop() {
        assert!(EndpointPair::ordered(7, 7).is_self_loop());
        assert!(EndpointPair::unordered(7, 7).is_self_loop());
        assert!(!EndpointPair::ordered(7, 8).is_self_loop());
    }

    #[test]
    fn test_adjacent_node() {
        let pair = EndpointPair::unordered(3, 9);
        assert_eq!(*pair.adjacent_node(&3), 9);
        assert_eq!(*pair.adjacent_node(&9), 3);
    }

    #[test]
    #[should_panic(expected = "not an endpoint")]
    fn test_adjacent_node_rejects_non_member() {
        let pair = EndpointPair::ordered(1, 2);
        pair.adjacent_node(&5);
    }

    #[test]
    #[should_panic(expected = "unordered pair")]
    fn test_source_rejects_unordered() {
        let pair = EndpointPair::unordered(1, 2);
        pair.source();
    }

    #[test]
    fn test_into_iterator_yields_both_endpoints() {
        let pair = EndpointPair::ordered('x', 'y');
        let nodes: Vec<char> = pair.into_iter().collect();
        assert_eq!(nodes, vec!['x', 'y']);
    }
}
