//! # `trellis` - Generic In-Memory Graphs
//!
//! A library of graph data structures keyed by user-supplied node values:
//! directed and undirected graphs, graphs with edge values, and networks
//! with first-class (possibly parallel) edge identities, plus generic
//! traversal and the classic connectivity algorithms.
//!
//! ## The three containers
//!
//! 1. **[`Graph<N>`]** — edges are anonymous and identified by their
//!    endpoints. At most one edge connects any node pair.
//! 2. **[`ValueGraph<N, V>`]** — like `Graph`, but every edge carries one
//!    value (a weight, a label, a capacity).
//! 3. **[`Network<N, E>`]** — every edge is a first-class identity; with
//!    `allows_parallel_edges(true)` several distinct edges may connect the
//!    same pair.
//!
//! Containers are configured through plain builders and queried through
//! the [`GraphView`], [`ValueGraphView`], and [`NetworkView`] traits, so
//! algorithms run unchanged against mutable containers and their
//! immutable snapshots ([`ImmutableGraph`], [`ImmutableValueGraph`],
//! [`ImmutableNetwork`]).
//!
//! ## Semantics worth knowing
//!
//! - **Self-loops and parallel edges are opt-in.** Adding a self-loop to a
//!   container built without `allows_self_loops(true)` is rejected with an
//!   error and no state change; likewise parallel edges on networks.
//! - **Iteration order is a construction-time policy.** Insertion order is
//!   the default; [`ElementOrder::Unordered`] trades order stability for
//!   O(1) removal, [`ElementOrder::Sorted`] reports elements in natural
//!   order.
//! - **Accessors are borrow-scoped.** Query iterators borrow the
//!   container, so the borrow checker rules out mutation mid-iteration —
//!   there are no stale views to reason about.
//! - **Frozen means shareable.** The immutable snapshot types expose no
//!   mutation surface and their internal read caches are self-validating,
//!   so concurrent reads from many threads need no locking.
//!
//! ## Example
//!
//! ```rust
//! use trellis::{algo, GraphBuilder, GraphView};
//!
//! let mut deps = GraphBuilder::directed().build::<&str>();
//! deps.put_edge("parser", "lexer").unwrap();
//! deps.put_edge("compiler", "parser").unwrap();
//!
//! assert_eq!(deps.node_count(), 3);
//! assert!(!algo::has_cycle(&deps));
//! assert!(algo::reachable_nodes(&deps, &"compiler").contains("lexer"));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod algo;
mod connections;
mod endpoints;
mod error;
mod graph;
mod iter;
mod map;
mod order;
#[cfg(feature = "serde")]
mod serde_support;
pub mod traverse;

pub use endpoints::EndpointPair;
pub use error::{GraphError, Result};
pub use graph::{
    EdgeId, EndpointPairs, Graph, GraphBuilder, GraphView, ImmutableGraph, ImmutableNetwork,
    ImmutableValueGraph, Network, NetworkBuilder, NetworkView, Node, ValueGraph, ValueGraphBuilder,
    ValueGraphView,
};
pub use order::ElementOrder;
pub use traverse::Traverser;
