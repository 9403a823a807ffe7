//! Path/flow computation command.

use std::path::Path;

use anyhow::Result;
use netgraph_engine::{Algorithm, AlgorithmRun, compute, compute_all};

use crate::OutputFormat;
use crate::output::{self, Format};

/// Run the compute command. `algorithm: None` selects comparison mode.
pub fn run(
    file: &Path,
    from: &str,
    to: &str,
    algorithm: Option<Algorithm>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let document = super::load_document(file)?;
    let model = document.build()?;
    let snapshot = model.snapshot();

    let runs: Vec<AlgorithmRun> = match algorithm {
        Some(algorithm) => {
            let result = compute(&snapshot, from, to, algorithm)?;
            vec![AlgorithmRun { algorithm, result }]
        }
        None => compute_all(&snapshot, from, to)?,
    };

    if quiet {
        return Ok(());
    }

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&runs)?);
        }
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Algorithm", "Path", "Weight/Flow"]);
            for run in &runs {
                table.add_row(vec![
                    run.algorithm.label().to_string(),
                    output::render_path(&run.result.path),
                    output::render_weight(run.result.total_weight),
                ]);
            }
            println!("{table}");
        }
    }

    Ok(())
}
