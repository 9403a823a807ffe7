//! The mutable topology model.

use std::sync::Arc;

use indexmap::IndexMap;
use netgraph_common::{Error, Result, Weight};

use super::node::Node;
use super::snapshot::GraphSnapshot;

/// A weighted directed graph keyed by node name.
///
/// The model is the single owner of all node records. Mutation is
/// synchronous and single-writer (`&mut self`); there is no internal
/// locking. Structural errors abort the operation and leave the graph
/// unchanged. Node iteration follows insertion order and stays stable
/// across edge mutations, so one version of the graph always yields the
/// same [`GraphSnapshot`] ordering.
///
/// Self-loops are permitted: an edge may have the same source and target.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    nodes: IndexMap<Arc<str>, Node, ahash::RandomState>,
}

impl GraphModel {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with no edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if `name` is already present.
    pub fn add_node(&mut self, name: &str) -> Result<()> {
        if self.nodes.contains_key(name) {
            return Err(Error::DuplicateNode(name.to_string()));
        }
        let name: Arc<str> = name.into();
        self.nodes.insert(name.clone(), Node::new(name));
        Ok(())
    }

    /// Removes a node and, from every remaining node, any outgoing edge
    /// whose target is the removed name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `name` is absent.
    pub fn remove_node(&mut self, name: &str) -> Result<()> {
        if self.nodes.shift_remove(name).is_none() {
            return Err(Error::UnknownNode(name.to_string()));
        }
        for node in self.nodes.values_mut() {
            node.drop_edges_to(name);
        }
        Ok(())
    }

    /// Inserts an edge, or overwrites the weight of an existing one at its
    /// current position (no growth).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either endpoint is absent; the
    /// graph is left unchanged in that case.
    pub fn upsert_edge(&mut self, source: &str, target: &str, weight: Weight) -> Result<()> {
        // Resolve the target's shared name first so a missing endpoint
        // never leaves a partial edit behind.
        let target_name = self
            .nodes
            .get_key_value(target)
            .map(|(k, _)| k.clone())
            .ok_or_else(|| Error::UnknownNode(target.to_string()))?;
        let node = self
            .nodes
            .get_mut(source)
            .ok_or_else(|| Error::UnknownNode(source.to_string()))?;
        node.upsert_edge(target_name, weight);
        Ok(())
    }

    /// Removes the edge from `source` to `target`, shifting subsequent
    /// edges down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either endpoint is absent, or
    /// [`Error::NoSuchEdge`] if both exist but no edge connects them.
    pub fn remove_edge(&mut self, source: &str, target: &str) -> Result<()> {
        if !self.nodes.contains_key(target) {
            return Err(Error::UnknownNode(target.to_string()));
        }
        let node = self
            .nodes
            .get_mut(source)
            .ok_or_else(|| Error::UnknownNode(source.to_string()))?;
        if node.remove_edge(target) {
            Ok(())
        } else {
            Err(Error::NoSuchEdge {
                src: source.to_string(),
                target: target.to_string(),
            })
        }
    }

    /// Returns `true` if a node with this name exists.
    #[must_use]
    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Returns node names in insertion order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|k| &**k)
    }

    /// Returns the ordered outgoing edges of a node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `name` is absent.
    pub fn neighbors(&self, name: &str) -> Result<&[super::Edge]> {
        self.nodes
            .get(name)
            .map(Node::edges)
            .ok_or_else(|| Error::UnknownNode(name.to_string()))
    }

    /// Returns a node by name.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Returns nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Captures an immutable snapshot of the current graph version.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::capture(self)
    }
}
