//! NetworkDb: an embeddable owner for one mutable topology.

use std::sync::Arc;

use parking_lot::RwLock;

use netgraph_common::{Result, Weight};
use netgraph_core::{GraphDocument, GraphModel, GraphSnapshot};

use crate::algorithms::PathResult;
use crate::compute::{self, Algorithm, AlgorithmRun};

/// Owns a [`GraphModel`] behind an explicit exclusive-access guard and
/// caches one snapshot per graph version.
///
/// The model itself is single-writer and lock-free; this wrapper is the
/// serialization discipline for embedding it behind shared references
/// (an event loop, a request handler). Mutations invalidate the cached
/// snapshot; reads rebuild it lazily and hand out cheap `Arc` clones, so
/// algorithms always run against an immutable copy-on-read view.
#[derive(Debug, Default)]
pub struct NetworkDb {
    model: RwLock<GraphModel>,
    snapshot: RwLock<Option<Arc<GraphSnapshot>>>,
}

impl NetworkDb {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing model.
    #[must_use]
    pub fn from_model(model: GraphModel) -> Self {
        Self {
            model: RwLock::new(model),
            snapshot: RwLock::new(None),
        }
    }

    /// Builds a database from wire records.
    ///
    /// # Errors
    ///
    /// Propagates ingestion errors from [`GraphDocument::build`].
    pub fn from_document(document: &GraphDocument) -> Result<Self> {
        Ok(Self::from_model(document.build()?))
    }

    /// Adds a node. See [`GraphModel::add_node`].
    pub fn add_node(&self, name: &str) -> Result<()> {
        self.mutate(|model| model.add_node(name))
    }

    /// Removes a node and its inbound edges. See [`GraphModel::remove_node`].
    pub fn remove_node(&self, name: &str) -> Result<()> {
        self.mutate(|model| model.remove_node(name))
    }

    /// Inserts or updates an edge. See [`GraphModel::upsert_edge`].
    pub fn upsert_edge(&self, source: &str, target: &str, weight: Weight) -> Result<()> {
        self.mutate(|model| model.upsert_edge(source, target, weight))
    }

    /// Removes an edge. See [`GraphModel::remove_edge`].
    pub fn remove_edge(&self, source: &str, target: &str) -> Result<()> {
        self.mutate(|model| model.remove_edge(source, target))
    }

    /// Returns the snapshot of the current graph version, rebuilding it if
    /// a mutation invalidated the cache.
    pub fn snapshot(&self) -> Arc<GraphSnapshot> {
        if let Some(snapshot) = self.snapshot.read().as_ref() {
            return Arc::clone(snapshot);
        }

        let model = self.model.read();
        let mut slot = self.snapshot.write();
        if let Some(snapshot) = slot.as_ref() {
            return Arc::clone(snapshot);
        }
        tracing::debug!(
            nodes = model.node_count(),
            edges = model.edge_count(),
            "rebuilding snapshot"
        );
        let snapshot = Arc::new(model.snapshot());
        *slot = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Runs one algorithm against the current version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`](netgraph_common::Error::UnknownNode)
    /// if either endpoint is absent.
    pub fn compute(&self, start: &str, end: &str, algorithm: Algorithm) -> Result<PathResult> {
        compute::compute(&self.snapshot(), start, end, algorithm)
    }

    /// Runs all four algorithms against the current version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`](netgraph_common::Error::UnknownNode)
    /// if either endpoint is absent.
    pub fn compute_all(&self, start: &str, end: &str) -> Result<Vec<AlgorithmRun>> {
        compute::compute_all(&self.snapshot(), start, end)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.model.read().node_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.model.read().edge_count()
    }

    /// Emits the current graph as wire records.
    #[must_use]
    pub fn document(&self) -> GraphDocument {
        GraphDocument::from_model(&self.model.read())
    }

    fn mutate<R>(&self, op: impl FnOnce(&mut GraphModel) -> Result<R>) -> Result<R> {
        let mut model = self.model.write();
        let out = op(&mut model)?;
        // Only a successful mutation changes the version.
        *self.snapshot.write() = None;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> NetworkDb {
        let db = NetworkDb::new();
        for name in ["A", "B", "C"] {
            db.add_node(name).unwrap();
        }
        db.upsert_edge("A", "B", 2.0).unwrap();
        db.upsert_edge("B", "C", 3.0).unwrap();
        db.upsert_edge("A", "C", 10.0).unwrap();
        db
    }

    #[test]
    fn test_snapshot_cached_until_mutation() {
        let db = seeded();
        let first = db.snapshot();
        let second = db.snapshot();
        assert!(Arc::ptr_eq(&first, &second));

        db.upsert_edge("A", "B", 1.0).unwrap();
        let third = db.snapshot();
        assert!(!Arc::ptr_eq(&first, &third));
    }

    #[test]
    fn test_failed_mutation_keeps_snapshot() {
        let db = seeded();
        let before = db.snapshot();
        assert!(db.add_node("A").is_err());
        assert!(Arc::ptr_eq(&before, &db.snapshot()));
    }

    #[test]
    fn test_compute_through_db() {
        let db = seeded();
        let result = db.compute("A", "C", Algorithm::Dijkstra).unwrap();
        assert_eq!(result.path, ["A", "B", "C"]);
        assert_eq!(result.total_weight, 5.0);

        // Old snapshots keep answering for their version.
        let old = db.snapshot();
        db.remove_node("B").unwrap();
        assert_eq!(db.compute("A", "C", Algorithm::Dijkstra).unwrap().total_weight, 10.0);
        assert_eq!(
            compute::compute(&old, "A", "C", Algorithm::Dijkstra).unwrap().total_weight,
            5.0
        );
    }

    #[test]
    fn test_document_roundtrip() {
        let db = seeded();
        let doc = db.document();
        let restored = NetworkDb::from_document(&doc).unwrap();
        assert_eq!(restored.node_count(), 3);
        assert_eq!(restored.edge_count(), 3);
    }
}
