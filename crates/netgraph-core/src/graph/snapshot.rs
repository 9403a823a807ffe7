//! Immutable, index-addressed adjacency snapshots.

use std::sync::Arc;

use netgraph_common::Weight;
use netgraph_common::utils::hash::FxHashMap;
use smallvec::SmallVec;

use super::model::GraphModel;

/// A read-only view of one graph version, addressed by dense node indices.
///
/// Indices follow the model's node ordering, so `index_of` is also the
/// node's position in `names()`, the position the A* heuristic is defined
/// over. A snapshot is built once per graph version and shared across
/// algorithm invocations; it never observes later mutations.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    names: Vec<Arc<str>>,
    index: FxHashMap<Arc<str>, usize>,
    adjacency: Vec<SmallVec<[(usize, Weight); 4]>>,
    edge_count: usize,
}

impl GraphSnapshot {
    /// Builds a snapshot from the model's current state.
    #[must_use]
    pub fn capture(model: &GraphModel) -> Self {
        let names: Vec<Arc<str>> = model.iter().map(|node| node.name_shared()).collect();
        let index: FxHashMap<Arc<str>, usize> = names
            .iter()
            .enumerate()
            .map(|(ix, name)| (name.clone(), ix))
            .collect();

        let adjacency: Vec<SmallVec<[(usize, Weight); 4]>> = model
            .iter()
            .map(|node| {
                node.edges()
                    .iter()
                    .map(|edge| (index[&*edge.target], edge.weight))
                    .collect()
            })
            .collect();
        let edge_count = adjacency.iter().map(SmallVec::len).sum();

        Self {
            names,
            index,
            adjacency,
            edge_count,
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the snapshot has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns node names in snapshot order.
    #[must_use]
    pub fn names(&self) -> &[Arc<str>] {
        &self.names
    }

    /// Returns the name at a node index.
    #[must_use]
    pub fn name(&self, ix: usize) -> &str {
        &self.names[ix]
    }

    /// Returns the index of a node name, if present.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the ordered `(target index, weight)` pairs of a node.
    #[must_use]
    pub fn neighbors(&self, ix: usize) -> &[(usize, Weight)] {
        &self.adjacency[ix]
    }

    /// Iterates every edge as `(source index, target index, weight)`,
    /// grouped by source in snapshot order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(src, row)| row.iter().map(move |&(dst, w)| (src, dst, w)))
    }
}
