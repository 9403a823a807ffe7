//! # netgraph-core
//!
//! Core layer for netgraph: the topology model and the structures the
//! algorithms consume. It depends only on `netgraph-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Weighted directed graph model, wire records, snapshots
//! - [`frontier`] - Minimum-priority selection for the search algorithms

pub mod frontier;
pub mod graph;

// Re-export commonly used types
pub use frontier::{MinScored, PriorityFrontier};
pub use graph::{DocumentAudit, Edge, GraphDocument, GraphModel, GraphSnapshot, Node, NodeRecord};
