//! Graph info command.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Information about a graph file.
#[derive(Serialize)]
struct GraphInfoOutput {
    node_count: usize,
    edge_count: usize,
    nodes: Vec<NodeInfoOutput>,
}

#[derive(Serialize)]
struct NodeInfoOutput {
    name: String,
    out_degree: usize,
}

/// Run the info command.
pub fn run(path: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let document = super::load_document(path)?;
    let model = document.build()?;

    let info = GraphInfoOutput {
        node_count: model.node_count(),
        edge_count: model.edge_count(),
        nodes: model
            .iter()
            .map(|node| NodeInfoOutput {
                name: node.name().to_string(),
                out_degree: node.degree(),
            })
            .collect(),
    };

    if quiet {
        return Ok(());
    }

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Format::Table => {
            let items = vec![
                ("Nodes", info.node_count.to_string()),
                ("Edges", info.edge_count.to_string()),
            ];
            output::print_key_value_table(&items, quiet);

            let mut table = output::create_table();
            output::add_header(&mut table, &["Node", "Out-degree"]);
            for node in &info.nodes {
                table.add_row(vec![node.name.clone(), node.out_degree.to_string()]);
            }
            println!("{table}");
        }
    }

    Ok(())
}
