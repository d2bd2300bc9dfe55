//! Shortest common ancestor (SCA) queries over a hypernym digraph.
//!
//! The SCA of two node sets `A` and `B` is the node reachable from both
//! whose summed distance `dist(A, x) + dist(B, x)` is smallest. Each query
//! runs two independent multi-source BFS passes and then scans every node
//! in ascending id order, so ties resolve to the lowest id. Nothing is
//! cached between queries.

use std::collections::BTreeSet;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{LexigraphError, Result};
use crate::graph::NodeId;
use crate::graph::digraph::Digraph;

/// The outcome of an SCA query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ancestry {
    /// The shortest common ancestor.
    pub ancestor: NodeId,
    /// Summed hop count from both sides through `ancestor`.
    pub length: usize,
}

/// Answers SCA queries over an owned [`Digraph`].
#[derive(Debug, Clone)]
pub struct ShortestCommonAncestor {
    graph: Digraph,
}

impl ShortestCommonAncestor {
    /// Take ownership of a fully built graph.
    pub fn new(graph: Digraph) -> Self {
        ShortestCommonAncestor { graph }
    }

    /// Borrow the underlying graph.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Length of the shortest ancestral path between nodes `v` and `w`.
    pub fn length(&self, v: NodeId, w: NodeId) -> Result<usize> {
        self.length_subset(&BTreeSet::from([v]), &BTreeSet::from([w]))
    }

    /// Shortest common ancestor of nodes `v` and `w`.
    pub fn ancestor(&self, v: NodeId, w: NodeId) -> Result<NodeId> {
        self.ancestor_subset(&BTreeSet::from([v]), &BTreeSet::from([w]))
    }

    /// Length of the shortest ancestral path between any node of
    /// `subset_a` and any node of `subset_b`.
    pub fn length_subset(
        &self,
        subset_a: &BTreeSet<NodeId>,
        subset_b: &BTreeSet<NodeId>,
    ) -> Result<usize> {
        self.ancestry_subset(subset_a, subset_b)?
            .map(|ancestry| ancestry.length)
            .ok_or(LexigraphError::NoCommonAncestor)
    }

    /// Shortest common ancestor of `subset_a` and `subset_b`.
    pub fn ancestor_subset(
        &self,
        subset_a: &BTreeSet<NodeId>,
        subset_b: &BTreeSet<NodeId>,
    ) -> Result<NodeId> {
        self.ancestry_subset(subset_a, subset_b)?
            .map(|ancestry| ancestry.ancestor)
            .ok_or(LexigraphError::NoCommonAncestor)
    }

    /// Ancestor and length together, or `None` when no node is reachable
    /// from both sets.
    ///
    /// # Errors
    ///
    /// [`LexigraphError::EmptyInputSet`] if either set is empty and
    /// [`LexigraphError::InvalidNodeId`] if either set names a node outside
    /// the graph.
    pub fn ancestry_subset(
        &self,
        subset_a: &BTreeSet<NodeId>,
        subset_b: &BTreeSet<NodeId>,
    ) -> Result<Option<Ancestry>> {
        let distance_a = self.graph.bfs(subset_a)?;
        let distance_b = self.graph.bfs(subset_b)?;

        let mut best: Option<Ancestry> = None;
        for (id, from_a) in distance_a.iter() {
            let (Some(from_a), Some(from_b)) = (from_a, distance_b.get(id)) else {
                continue;
            };
            let length = from_a + from_b;
            // Strict comparison keeps the lowest id among equal lengths.
            if best.is_none_or(|b| length < b.length) {
                best = Some(Ancestry {
                    ancestor: id,
                    length,
                });
            }
        }

        trace!("sca({subset_a:?}, {subset_b:?}) = {best:?}");
        Ok(best)
    }
}

impl From<Digraph> for ShortestCommonAncestor {
    fn from(graph: Digraph) -> Self {
        ShortestCommonAncestor::new(graph)
    }
}
