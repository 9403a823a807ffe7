//! Algorithm selection and dispatch.

use netgraph_common::Result;
use netgraph_core::GraphSnapshot;
use serde::{Deserialize, Serialize};

use crate::algorithms::{self, PathResult};

/// The four interchangeable algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Dijkstra's shortest path (non-negative weights).
    Dijkstra,
    /// A* with the positional heuristic.
    Astar,
    /// Bellman-Ford with negative-cycle detection.
    BellmanFord,
    /// Edmonds-Karp maximum flow.
    EdmondsKarp,
}

impl Algorithm {
    /// All algorithms, in comparison-mode order.
    pub const ALL: [Self; 4] = [
        Self::Dijkstra,
        Self::Astar,
        Self::BellmanFord,
        Self::EdmondsKarp,
    ];

    /// The machine-readable selector token.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::Astar => "astar",
            Self::BellmanFord => "bellman-ford",
            Self::EdmondsKarp => "edmonds-karp",
        }
    }

    /// The display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra",
            Self::Astar => "A*",
            Self::BellmanFord => "Bellman-Ford",
            Self::EdmondsKarp => "Edmonds-Karp",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" => Ok(Self::Astar),
            "bellman-ford" => Ok(Self::BellmanFord),
            "edmonds-karp" => Ok(Self::EdmondsKarp),
            other => Err(format!("unknown algorithm `{other}`")),
        }
    }
}

/// One algorithm's labeled outcome in comparison mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmRun {
    /// Which algorithm produced the result.
    pub algorithm: Algorithm,
    /// The result record.
    #[serde(flatten)]
    pub result: PathResult,
}

/// Runs the selected algorithm over one snapshot.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`](netgraph_common::Error::UnknownNode) if
/// either endpoint is absent.
pub fn compute(
    graph: &GraphSnapshot,
    start: &str,
    end: &str,
    algorithm: Algorithm,
) -> Result<PathResult> {
    tracing::debug!(%start, %end, algorithm = algorithm.token(), "computing");
    match algorithm {
        Algorithm::Dijkstra => algorithms::dijkstra(graph, start, end),
        Algorithm::Astar => algorithms::astar(graph, start, end),
        Algorithm::BellmanFord => algorithms::bellman_ford(graph, start, end),
        Algorithm::EdmondsKarp => algorithms::max_flow(graph, start, end),
    }
}

/// Comparison mode: runs all four algorithms and returns one labeled
/// result per algorithm, in [`Algorithm::ALL`] order.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`](netgraph_common::Error::UnknownNode) if
/// either endpoint is absent.
pub fn compute_all(graph: &GraphSnapshot, start: &str, end: &str) -> Result<Vec<AlgorithmRun>> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            compute(graph, start, end, algorithm).map(|result| AlgorithmRun { algorithm, result })
        })
        .collect()
}
