//! Error taxonomy for netgraph.
//!
//! Structural errors abort the mutation that raised them and leave the graph
//! unchanged. Algorithmic non-results (an unreachable target, a detected
//! negative cycle) are NOT errors: they surface as an empty path with the
//! [`NO_PATH`](crate::types::NO_PATH) sentinel weight.

use thiserror::Error;

/// Errors produced by graph mutations and algorithm invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// A node with this name already exists.
    #[error("node `{0}` already exists")]
    DuplicateNode(String),

    /// An operation referenced a node name not present in the graph.
    #[error("unknown node `{0}`")]
    UnknownNode(String),

    /// Edge removal targeted a (source, target) pair with no edge.
    #[error("no edge from `{src}` to `{target}`")]
    NoSuchEdge {
        /// Source node name.
        src: String,
        /// Target node name.
        target: String,
    },

    /// A wire-format node record violated a structural constraint that
    /// tolerant ingestion cannot repair.
    #[error("malformed node record for `{name}`: {reason}")]
    MalformedRecord {
        /// Name of the offending node record.
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// I/O failure while reading or writing a stored graph.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;
