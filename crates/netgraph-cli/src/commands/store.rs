//! Local graph store commands.
//!
//! A store is a directory of `<id>.json` graph documents with ids assigned
//! sequentially on create: the create/list/get/path surface of a graph
//! persistence service, kept local. `store path` answers with Dijkstra,
//! the store's single authoritative algorithm; the compute command is
//! where the four algorithms can be compared.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use netgraph_common::GraphId;
use netgraph_core::GraphDocument;
use netgraph_engine::{Algorithm, compute};

use crate::output::{self, Format};
use crate::{OutputFormat, StoreCommands};

/// A directory of numbered graph documents.
pub struct GraphStore {
    dir: PathBuf,
}

impl GraphStore {
    /// Opens (creating if needed) a store directory.
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create store at {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn graph_path(&self, id: GraphId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Returns stored graph ids in ascending order.
    pub fn ids(&self) -> Result<Vec<GraphId>> {
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(id) = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .and_then(|stem| stem.parse::<GraphId>().ok())
                {
                    ids.push(id);
                }
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }

    /// Stores a document under the next free id and returns the id.
    pub fn create(&self, document: &GraphDocument) -> Result<GraphId> {
        // Reject documents that would not ingest before assigning an id.
        document.build()?;

        let id = self
            .ids()?
            .last()
            .copied()
            .map_or(GraphId::new(1), GraphId::next);
        let json = serde_json::to_string_pretty(document)?;
        std::fs::write(self.graph_path(id), json)?;
        tracing::debug!(%id, "stored graph");
        Ok(id)
    }

    /// Loads one stored document.
    pub fn get(&self, id: GraphId) -> Result<GraphDocument> {
        let path = self.graph_path(id);
        if !path.exists() {
            bail!("graph {id} not found in {}", self.dir.display());
        }
        super::load_document(&path)
    }
}

/// Run a store subcommand.
pub fn run(cmd: StoreCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    match cmd {
        StoreCommands::Create { file, dir } => {
            let document = super::load_document(&file)?;
            let store = GraphStore::open(&dir)?;
            let id = store.create(&document)?;
            let fmt: Format = format.into();
            match fmt {
                Format::Json => {
                    if !quiet {
                        println!("{}", serde_json::json!({ "id": id }));
                    }
                }
                Format::Table => output::success(&format!("stored graph {id}"), quiet),
            }
            Ok(())
        }
        StoreCommands::List { dir } => {
            let store = GraphStore::open(&dir)?;
            let mut rows = Vec::new();
            for id in store.ids()? {
                let model = store.get(id)?.build()?;
                rows.push((id, model.node_count(), model.edge_count()));
            }

            if quiet {
                return Ok(());
            }
            let fmt: Format = format.into();
            match fmt {
                Format::Json => {
                    let entries: Vec<_> = rows
                        .iter()
                        .map(|(id, nodes, edges)| {
                            serde_json::json!({ "id": id, "nodes": nodes, "edges": edges })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                Format::Table => {
                    let mut table = output::create_table();
                    output::add_header(&mut table, &["Id", "Nodes", "Edges"]);
                    for (id, nodes, edges) in rows {
                        table.add_row(vec![
                            id.to_string(),
                            nodes.to_string(),
                            edges.to_string(),
                        ]);
                    }
                    println!("{table}");
                }
            }
            Ok(())
        }
        StoreCommands::Show { id, dir } => {
            let store = GraphStore::open(&dir)?;
            let document = store.get(id)?;
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&document)?);
            }
            Ok(())
        }
        StoreCommands::Path { id, from, to, dir } => {
            let store = GraphStore::open(&dir)?;
            let model = store.get(id)?.build()?;
            let result = compute(&model.snapshot(), &from, &to, Algorithm::Dijkstra)?;

            if quiet {
                return Ok(());
            }
            let fmt: Format = format.into();
            match fmt {
                Format::Json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                Format::Table => {
                    let items = vec![
                        ("Path", output::render_path(&result.path)),
                        ("Total weight", output::render_weight(result.total_weight)),
                    ];
                    output::print_key_value_table(&items, quiet);
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netgraph_core::NodeRecord;

    fn sample_document() -> GraphDocument {
        GraphDocument::new(vec![
            NodeRecord {
                name: "A".to_string(),
                connected_nodes: vec!["B".to_string()],
                parameters: vec![2.0],
            },
            NodeRecord {
                name: "B".to_string(),
                connected_nodes: vec![],
                parameters: vec![],
            },
        ])
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let tmp = tempfile::tempdir().unwrap();
        let store = GraphStore::open(tmp.path()).unwrap();

        let doc = sample_document();
        assert_eq!(store.create(&doc).unwrap(), GraphId::new(1));
        assert_eq!(store.create(&doc).unwrap(), GraphId::new(2));
        assert_eq!(store.ids().unwrap(), [GraphId::new(1), GraphId::new(2)]);
    }

    #[test]
    fn test_get_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = GraphStore::open(tmp.path()).unwrap();

        let id = store.create(&sample_document()).unwrap();
        let loaded = store.get(id).unwrap();
        assert_eq!(loaded.network_nodes.len(), 2);
        assert_eq!(loaded.network_nodes[0].connected_nodes, ["B"]);
    }

    #[test]
    fn test_get_missing_id_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let store = GraphStore::open(tmp.path()).unwrap();
        assert!(store.get(GraphId::new(42)).is_err());
    }

    #[test]
    fn test_create_rejects_duplicate_names() {
        let tmp = tempfile::tempdir().unwrap();
        let store = GraphStore::open(tmp.path()).unwrap();

        let mut doc = sample_document();
        doc.network_nodes.push(doc.network_nodes[0].clone());
        assert!(store.create(&doc).is_err());
        assert!(store.ids().unwrap().is_empty());
    }
}
