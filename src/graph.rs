//! Hypernym graph and shortest-common-ancestor queries.
//!
//! Synsets are dense integer node ids. An edge `from -> to` reads "`from` is
//! a kind of `to`", so following edges always moves towards more general
//! synsets and the roots are the most general ones.
//!
//! # Components
//!
//! - [`digraph`] - Adjacency-list digraph with multi-source BFS
//! - [`ancestor`] - Shortest common ancestor over nodes and node sets
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use lexigraph::graph::{Digraph, ShortestCommonAncestor};
//!
//! let mut graph = Digraph::new();
//! graph.add_edge(0, 2);
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 3);
//!
//! let sca = ShortestCommonAncestor::new(graph);
//! let a = BTreeSet::from([0]);
//! let b = BTreeSet::from([1]);
//! assert_eq!(sca.ancestor_subset(&a, &b).unwrap(), 2);
//! assert_eq!(sca.length_subset(&a, &b).unwrap(), 2);
//! ```

pub mod ancestor;
pub mod digraph;

pub use ancestor::{Ancestry, ShortestCommonAncestor};
pub use digraph::{Digraph, DistanceMap};

/// Identifier of a single synset node.
pub type NodeId = usize;
