//! Iteration-order policies for node and edge containers.

/// The order in which a container reports its elements.
///
/// The policy is fixed when a graph is built (see
/// [`GraphBuilder::node_order`](crate::GraphBuilder::node_order) and
/// friends) and determines the backing storage: unordered and
/// insertion-ordered containers use a hashed index map, sorted containers
/// keep their entries in a sorted vector with binary-search lookup.
///
/// `Unordered` makes no guarantee about iteration order and in exchange
/// allows O(1) swap-removal; `Insertion` reports elements in the order they
/// were first added; `Sorted` reports elements in their natural
/// [`Ord`](std::cmp::Ord) order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementOrder {
    /// No guaranteed order; removal may reorder the remaining elements.
    Unordered,
    /// Elements are reported in the order they were first added.
    #[default]
    Insertion,
    /// Elements are reported in ascending natural order.
    Sorted,
}

impl ElementOrder {
    /// Returns `true` when the policy guarantees a stable reported order.
    #[inline]
    pub fn is_stable(self) -> bool {
        !matches!(self, ElementOrder::Unordered)
    }

    /// Returns `true` for the sorted policy.
    #[inline]
    pub fn is_sorted(self) -> bool {
        matches!(self, ElementOrder::Sorted)
    }
}
