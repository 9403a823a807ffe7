//! Path and flow algorithms.
//!
//! All algorithms consume a [`GraphSnapshot`](netgraph_core::GraphSnapshot)
//! and a (start, end) pair of node names, and produce a [`PathResult`].
//! They never mutate the graph.
//!
//! ## Algorithm categories
//!
//! - [`shortest_path`] - Dijkstra, A*, Bellman-Ford
//! - [`flow`] - Edmonds-Karp maximum flow
//!
//! A non-result (the target is unreachable, or Bellman-Ford detected a
//! negative cycle) is a normal outcome, reported as an empty path with the
//! [`NO_PATH`](netgraph_common::NO_PATH) sentinel weight, never as an error.

mod flow;
mod shortest_path;

pub use flow::max_flow;
pub use shortest_path::{astar, bellman_ford, dijkstra};

use netgraph_common::{NO_PATH, Weight};
use serde::{Deserialize, Serialize};

/// The outcome of one algorithm run.
///
/// For the path algorithms, `path` runs from start to end inclusive and
/// `total_weight` is the path cost. For max flow, `total_weight` is the
/// accumulated flow value and `path` is the last augmenting path found
/// before termination; it does not represent a flow decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// Node names along the result path.
    pub path: Vec<String>,
    /// Total path weight, flow value, or the no-path sentinel.
    pub total_weight: Weight,
}

impl PathResult {
    /// The empty-path / sentinel-weight non-result.
    #[must_use]
    pub fn no_path() -> Self {
        Self {
            path: Vec::new(),
            total_weight: NO_PATH,
        }
    }

    /// Returns `true` if this is the no-path sentinel.
    #[must_use]
    pub fn is_no_path(&self) -> bool {
        self.path.is_empty() && self.total_weight == NO_PATH
    }
}
