//! CLI command implementations.

pub mod compute;
pub mod info;
pub mod store;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use netgraph_core::GraphDocument;

/// Loads a graph document from a JSON file.
pub(crate) fn load_document(path: &Path) -> Result<GraphDocument> {
    let data =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("failed to parse {}", path.display()))
}
