//! Wire-format node records.
//!
//! External callers exchange graphs as a sequence of node records, each
//! carrying two index-aligned lists: `connectedNodes` (target names) and
//! `parameters` (the weights of those connections, in the same order). This
//! is the persistence service's JSON contract; inside the model the pair is
//! collapsed into one edge sequence per node.

use netgraph_common::{Error, Result, Weight};
use serde::{Deserialize, Serialize};

use super::model::GraphModel;

/// One node on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    /// Node name.
    pub name: String,
    /// Names of the nodes this one connects to.
    #[serde(default)]
    pub connected_nodes: Vec<String>,
    /// Connection weights, index-aligned with `connected_nodes`.
    #[serde(default)]
    pub parameters: Vec<Weight>,
}

/// A full graph on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
    /// Node records in graph order.
    #[serde(default)]
    pub network_nodes: Vec<NodeRecord>,
}

/// What tolerant ingestion would repair or discard in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentAudit {
    /// Node names that appear more than once (ingestion rejects these).
    pub duplicate_names: Vec<String>,
    /// Connections whose target is not among the document's nodes
    /// (ingestion drops these), as (source, target) pairs.
    pub dropped_connections: Vec<(String, String)>,
    /// Connections with no matching parameter (ingestion assigns weight 0).
    pub padded_weights: usize,
    /// Parameters beyond the length of `connected_nodes` (ignored).
    pub surplus_parameters: usize,
}

impl DocumentAudit {
    /// Returns `true` if the document is structurally clean.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicate_names.is_empty()
            && self.dropped_connections.is_empty()
            && self.padded_weights == 0
            && self.surplus_parameters == 0
    }
}

impl GraphDocument {
    /// Wraps a list of node records.
    #[must_use]
    pub fn new(network_nodes: Vec<NodeRecord>) -> Self {
        Self { network_nodes }
    }

    /// Builds a model from the records. Ingestion is tolerant: connections
    /// to unknown targets are dropped, missing weights default to 0, and
    /// surplus parameters are ignored. A repeated (source, target)
    /// connection collapses to one edge with the last weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] for a repeated node name and
    /// [`Error::MalformedRecord`] for an empty one.
    pub fn build(&self) -> Result<GraphModel> {
        let mut model = GraphModel::new();
        for record in &self.network_nodes {
            if record.name.is_empty() {
                return Err(Error::MalformedRecord {
                    name: String::new(),
                    reason: "node name is empty".to_string(),
                });
            }
            model.add_node(&record.name)?;
        }
        for record in &self.network_nodes {
            for (ix, target) in record.connected_nodes.iter().enumerate() {
                if !model.contains_node(target) {
                    continue;
                }
                let weight = record.parameters.get(ix).copied().unwrap_or(0.0);
                model.upsert_edge(&record.name, target, weight)?;
            }
        }
        Ok(model)
    }

    /// Re-emits a model as wire records with the two lists index-aligned.
    #[must_use]
    pub fn from_model(model: &GraphModel) -> Self {
        let network_nodes = model
            .iter()
            .map(|node| {
                let (connected_nodes, parameters) = node
                    .edges()
                    .iter()
                    .map(|e| (e.target.to_string(), e.weight))
                    .unzip();
                NodeRecord {
                    name: node.name().to_string(),
                    connected_nodes,
                    parameters,
                }
            })
            .collect();
        Self { network_nodes }
    }

    /// Reports what [`build`](Self::build) would repair or discard,
    /// without building anything.
    #[must_use]
    pub fn audit(&self) -> DocumentAudit {
        let mut audit = DocumentAudit::default();
        let mut seen = netgraph_common::utils::hash::FxHashSet::default();
        for record in &self.network_nodes {
            if !seen.insert(record.name.as_str()) {
                audit.duplicate_names.push(record.name.clone());
            }
        }

        for record in &self.network_nodes {
            for (ix, target) in record.connected_nodes.iter().enumerate() {
                if !seen.contains(target.as_str()) {
                    audit
                        .dropped_connections
                        .push((record.name.clone(), target.clone()));
                } else if ix >= record.parameters.len() {
                    audit.padded_weights += 1;
                }
            }
            audit.surplus_parameters += record
                .parameters
                .len()
                .saturating_sub(record.connected_nodes.len());
        }
        audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, targets: &[&str], weights: &[f64]) -> NodeRecord {
        NodeRecord {
            name: name.to_string(),
            connected_nodes: targets.iter().map(|t| (*t).to_string()).collect(),
            parameters: weights.to_vec(),
        }
    }

    #[test]
    fn test_build_and_roundtrip() {
        let doc = GraphDocument::new(vec![
            record("A", &["B", "C"], &[2.0, 10.0]),
            record("B", &["C"], &[3.0]),
            record("C", &[], &[]),
        ]);

        let model = doc.build().unwrap();
        assert_eq!(model.node_count(), 3);
        assert_eq!(model.edge_count(), 3);

        let back = GraphDocument::from_model(&model);
        assert_eq!(back.network_nodes[0].connected_nodes, ["B", "C"]);
        assert_eq!(back.network_nodes[0].parameters, [2.0, 10.0]);
    }

    #[test]
    fn test_build_drops_unknown_targets() {
        let doc = GraphDocument::new(vec![
            record("A", &["B", "ghost"], &[1.0, 9.0]),
            record("B", &[], &[]),
        ]);

        let model = doc.build().unwrap();
        let edges = model.neighbors("A").unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(&*edges[0].target, "B");
    }

    #[test]
    fn test_build_pads_missing_weights() {
        let doc = GraphDocument::new(vec![
            record("A", &["B", "C"], &[5.0]),
            record("B", &[], &[]),
            record("C", &[], &[]),
        ]);

        let model = doc.build().unwrap();
        assert_eq!(model.node("A").unwrap().edge_to("C").unwrap().weight, 0.0);
    }

    #[test]
    fn test_build_rejects_duplicate_names() {
        let doc = GraphDocument::new(vec![record("A", &[], &[]), record("A", &[], &[])]);
        assert!(matches!(doc.build(), Err(Error::DuplicateNode(_))));
    }

    #[test]
    fn test_audit() {
        let doc = GraphDocument::new(vec![
            record("A", &["B", "ghost"], &[1.0]),
            record("B", &["A"], &[]),
            record("B", &[], &[1.0, 2.0]),
        ]);

        let audit = doc.audit();
        assert_eq!(audit.duplicate_names, ["B"]);
        assert_eq!(
            audit.dropped_connections,
            [("A".to_string(), "ghost".to_string())]
        );
        assert_eq!(audit.padded_weights, 1);
        assert_eq!(audit.surplus_parameters, 2);
        assert!(!audit.is_clean());
    }

    #[test]
    fn test_wire_format_field_names() {
        let json = r#"{
            "networkNodes": [
                {"name": "A", "connectedNodes": ["B"], "parameters": [2.5]},
                {"name": "B"}
            ]
        }"#;
        let doc: GraphDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.network_nodes.len(), 2);
        assert_eq!(doc.network_nodes[0].parameters, [2.5]);
        assert!(doc.network_nodes[1].connected_nodes.is_empty());

        let out = serde_json::to_string(&doc).unwrap();
        assert!(out.contains("networkNodes"));
        assert!(out.contains("connectedNodes"));
    }
}
