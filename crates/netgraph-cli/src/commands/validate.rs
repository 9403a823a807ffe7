//! Graph file validation command.

use std::path::Path;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

/// What the validator found in a graph file.
#[derive(Serialize)]
struct ValidationOutput {
    clean: bool,
    duplicate_names: Vec<String>,
    dropped_connections: Vec<String>,
    padded_weights: usize,
    surplus_parameters: usize,
}

/// Run the validate command.
///
/// Irregularities that tolerant ingestion repairs (unknown targets,
/// missing weights, surplus parameters) are reported; duplicate node
/// names make the file unusable and fail the command.
pub fn run(path: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let document = super::load_document(path)?;
    let audit = document.audit();

    let report = ValidationOutput {
        clean: audit.is_clean(),
        duplicate_names: audit.duplicate_names.clone(),
        dropped_connections: audit
            .dropped_connections
            .iter()
            .map(|(source, target)| format!("{source} → {target}"))
            .collect(),
        padded_weights: audit.padded_weights,
        surplus_parameters: audit.surplus_parameters,
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Format::Table => {
            let items = vec![
                ("Clean", report.clean.to_string()),
                ("Duplicate names", report.duplicate_names.join(", ")),
                (
                    "Dropped connections",
                    report.dropped_connections.join(", "),
                ),
                ("Padded weights", report.padded_weights.to_string()),
                ("Surplus parameters", report.surplus_parameters.to_string()),
            ];
            output::print_key_value_table(&items, quiet);
        }
    }

    if !report.duplicate_names.is_empty() {
        bail!("duplicate node names: {}", report.duplicate_names.join(", "));
    }

    // Confirm the document actually ingests.
    document.build()?;
    output::success("graph file is usable", quiet);
    Ok(())
}
