//! Node and edge records.

use std::sync::Arc;

use netgraph_common::Weight;
use smallvec::SmallVec;

/// A directed, weighted edge to another node.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Target node name.
    pub target: Arc<str>,
    /// Edge weight (distance cost or flow capacity, depending on consumer).
    pub weight: Weight,
}

/// A uniquely named vertex with its ordered outgoing edges.
///
/// The edge sequence preserves insertion order and holds at most one edge
/// per target: upserting an existing target overwrites the weight in place
/// without growing the sequence.
#[derive(Debug, Clone)]
pub struct Node {
    name: Arc<str>,
    edges: SmallVec<[Edge; 4]>,
}

impl Node {
    pub(crate) fn new(name: Arc<str>) -> Self {
        Self {
            name,
            edges: SmallVec::new(),
        }
    }

    /// Returns the node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the shared name allocation, for snapshot construction.
    pub(crate) fn name_shared(&self) -> Arc<str> {
        self.name.clone()
    }

    /// Returns the ordered outgoing edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the out-degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edge to `target`, if one exists.
    #[must_use]
    pub fn edge_to(&self, target: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| &*e.target == target)
    }

    /// Inserts or updates the edge to `target`. Returns `true` if the edge
    /// was newly created, `false` if an existing weight was overwritten.
    pub(crate) fn upsert_edge(&mut self, target: Arc<str>, weight: Weight) -> bool {
        match self.edges.iter_mut().find(|e| e.target == target) {
            Some(edge) => {
                edge.weight = weight;
                false
            }
            None => {
                self.edges.push(Edge { target, weight });
                true
            }
        }
    }

    /// Removes the edge to `target`, shifting subsequent edges down.
    /// Returns `false` if no such edge existed.
    pub(crate) fn remove_edge(&mut self, target: &str) -> bool {
        match self.edges.iter().position(|e| &*e.target == target) {
            Some(ix) => {
                self.edges.remove(ix);
                true
            }
            None => false,
        }
    }

    /// Drops every edge whose target is `target`. Used by cascading node
    /// removal; ordering of the surviving edges is preserved.
    pub(crate) fn drop_edges_to(&mut self, target: &str) {
        self.edges.retain(|e| &*e.target != target);
    }
}
