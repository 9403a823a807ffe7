//! Weighted directed graph model.
//!
//! A graph is a mapping from node name to [`Node`]; each node owns an
//! ordered sequence of outgoing [`Edge`]s with at most one edge per ordered
//! (source, target) pair. Node names are the only identity.
//!
//! Mutation happens through [`GraphModel`] and is single-writer. Algorithms
//! never see the model directly: they consume an immutable [`GraphSnapshot`]
//! built from one version of the graph. [`NodeRecord`] / [`GraphDocument`]
//! are the wire format used to exchange graphs with external callers.

mod model;
mod node;
mod records;
mod snapshot;

pub use model::GraphModel;
pub use node::{Edge, Node};
pub use records::{DocumentAudit, GraphDocument, NodeRecord};
pub use snapshot::GraphSnapshot;
