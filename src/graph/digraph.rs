//! Adjacency-list directed graph over dense node ids.

use std::collections::{BTreeSet, VecDeque};

use crate::error::{LexigraphError, Result};
use crate::graph::NodeId;

/// A directed graph stored as one successor list per node.
///
/// The node range always covers every id that was registered with
/// [`Digraph::add_node`] or used as either endpoint of an edge, so nodes
/// that only ever appear as edge targets are still valid traversal sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digraph {
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl Digraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Digraph {
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Create a graph with `node_count` isolated nodes.
    pub fn with_node_count(node_count: usize) -> Self {
        Digraph {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Register a node without adding any edges.
    ///
    /// # Panics
    ///
    /// Panics if `id` is `NodeId::MAX`; use [`Digraph::try_add_node`] for
    /// untrusted ids.
    pub fn add_node(&mut self, id: NodeId) {
        if let Err(e) = self.try_add_node(id) {
            panic!("cannot add node: {e}");
        }
    }

    /// Register a node, failing instead of panicking when the node range
    /// cannot grow to include `id`.
    pub fn try_add_node(&mut self, id: NodeId) -> Result<()> {
        self.ensure_node(id)
    }

    /// Append `to` to the successor list of `from`.
    ///
    /// Duplicate edges are stored as given; self-loops and cycles are not
    /// checked.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is `NodeId::MAX`; use
    /// [`Digraph::try_add_edge`] for untrusted ids.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        if let Err(e) = self.try_add_edge(from, to) {
            panic!("cannot add edge {from} -> {to}: {e}");
        }
    }

    /// Append an edge, failing instead of panicking when the node range
    /// cannot grow to include both endpoints.
    pub fn try_add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.ensure_node(from.max(to))?;
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check whether `id` lies inside the node range.
    pub fn contains(&self, id: NodeId) -> bool {
        id < self.adjacency.len()
    }

    /// Successors of `id` in insertion order, or an empty slice for ids
    /// outside the node range.
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes without outgoing edges, in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, successors)| successors.is_empty())
            .map(|(id, _)| id)
    }

    /// Multi-source breadth-first search.
    ///
    /// Every member of `subset` starts at distance 0, so each reached node
    /// gets its hop count from the nearest source regardless of the order
    /// in which sources are seeded.
    pub fn bfs(&self, subset: &BTreeSet<NodeId>) -> Result<DistanceMap> {
        if subset.is_empty() {
            return Err(LexigraphError::EmptyInputSet);
        }

        let mut distances = vec![None; self.node_count()];
        let mut queue = VecDeque::with_capacity(subset.len());

        for &source in subset {
            let slot = distances
                .get_mut(source)
                .ok_or(LexigraphError::InvalidNodeId {
                    id: source,
                    node_count: self.node_count(),
                })?;
            *slot = Some(0);
            queue.push_back(source);
        }

        while let Some(current) = queue.pop_front() {
            let next = distances[current].map(|d: usize| d + 1);
            for &successor in &self.adjacency[current] {
                if distances[successor].is_none() {
                    distances[successor] = next;
                    queue.push_back(successor);
                }
            }
        }

        Ok(DistanceMap { distances })
    }

    fn ensure_node(&mut self, id: NodeId) -> Result<()> {
        if id >= self.adjacency.len() {
            let node_count = id.checked_add(1).ok_or(LexigraphError::InvalidNodeId {
                id,
                node_count: self.adjacency.len(),
            })?;
            self.adjacency.resize_with(node_count, Vec::new);
        }
        Ok(())
    }
}

/// Hop counts produced by one [`Digraph::bfs`] run, indexed by node id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    distances: Vec<Option<usize>>,
}

impl DistanceMap {
    /// Distance to `id`, or `None` if the node was not reached.
    pub fn get(&self, id: NodeId) -> Option<usize> {
        self.distances.get(id).copied().flatten()
    }

    /// Number of node slots (equal to the graph's node count).
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterate `(id, distance)` over every slot in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<usize>)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// Iterate `(id, distance)` over reached nodes only.
    pub fn reached(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.iter().filter_map(|(id, d)| d.map(|d| (id, d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Digraph {
        let mut graph = Digraph::new();
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph
    }

    #[test]
    fn test_add_edge_grows_node_range() {
        let mut graph = Digraph::new();
        assert_eq!(graph.node_count(), 0);

        graph.add_edge(0, 4);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.successors(0), &[4]);
        assert!(graph.successors(4).is_empty());
        assert!(graph.successors(99).is_empty());
    }

    #[test]
    fn test_try_add_rejects_unrepresentable_ids() {
        let mut graph = chain();

        assert!(matches!(
            graph.try_add_edge(0, NodeId::MAX),
            Err(LexigraphError::InvalidNodeId {
                id: NodeId::MAX,
                node_count: 4
            })
        ));
        assert!(graph.try_add_node(NodeId::MAX).is_err());

        // The failed calls leave the graph untouched.
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.successors(0), &[1]);

        graph.try_add_edge(3, 6).unwrap();
        assert_eq!(graph.node_count(), 7);
    }

    #[test]
    #[should_panic(expected = "cannot add edge")]
    fn test_add_edge_panics_on_max_id() {
        let mut graph = Digraph::new();
        graph.add_edge(NodeId::MAX, 0);
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut graph = Digraph::new();
        graph.add_edge(0, 1);
        graph.add_edge(0, 1);

        assert_eq!(graph.successors(0), &[1, 1]);
        assert_eq!(graph.edge_count(), 2);

        let distances = graph.bfs(&BTreeSet::from([0])).unwrap();
        assert_eq!(distances.get(1), Some(1));
    }

    #[test]
    fn test_add_node_and_roots() {
        let mut graph = Digraph::with_node_count(2);
        graph.add_edge(0, 1);
        graph.add_node(5);

        assert_eq!(graph.node_count(), 6);
        assert!(graph.contains(5));
        assert!(!graph.contains(6));
        assert_eq!(graph.roots().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_bfs_single_source() {
        let graph = chain();
        let distances = graph.bfs(&BTreeSet::from([0])).unwrap();

        assert_eq!(distances.len(), 4);
        assert_eq!(distances.get(0), Some(0));
        assert_eq!(distances.get(1), Some(1));
        assert_eq!(distances.get(3), Some(3));
    }

    #[test]
    fn test_bfs_does_not_walk_backwards() {
        let graph = chain();
        let distances = graph.bfs(&BTreeSet::from([2])).unwrap();

        assert_eq!(distances.get(0), None);
        assert_eq!(distances.get(1), None);
        assert_eq!(distances.get(2), Some(0));
        assert_eq!(distances.get(3), Some(1));
        assert_eq!(distances.reached().collect::<Vec<_>>(), vec![(2, 0), (3, 1)]);
    }

    #[test]
    fn test_bfs_multi_source_takes_nearest() {
        // 0 -> 1 -> 2 -> 3 -> 4 and 5 -> 4
        let mut graph = chain();
        graph.add_edge(3, 4);
        graph.add_edge(5, 4);

        let distances = graph.bfs(&BTreeSet::from([0, 5])).unwrap();
        assert_eq!(distances.get(0), Some(0));
        assert_eq!(distances.get(5), Some(0));
        assert_eq!(distances.get(4), Some(1));
        assert_eq!(distances.get(3), Some(3));
    }

    #[test]
    fn test_bfs_empty_subset() {
        let graph = chain();
        let result = graph.bfs(&BTreeSet::new());
        assert!(matches!(result, Err(LexigraphError::EmptyInputSet)));
    }

    #[test]
    fn test_bfs_invalid_node() {
        let graph = chain();
        let result = graph.bfs(&BTreeSet::from([0, 10]));
        assert!(matches!(
            result,
            Err(LexigraphError::InvalidNodeId {
                id: 10,
                node_count: 4
            })
        ));
    }

    #[test]
    fn test_bfs_tolerates_cycles() {
        let mut graph = Digraph::new();
        graph.add_edge(0, 1);
        graph.add_edge(1, 0);
        graph.add_edge(1, 1);

        let distances = graph.bfs(&BTreeSet::from([0])).unwrap();
        assert_eq!(distances.get(0), Some(0));
        assert_eq!(distances.get(1), Some(1));
    }
}
