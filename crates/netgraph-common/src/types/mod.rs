//! Core type definitions for netgraph.
//!
//! Node identity is the caller-chosen name (a string); there is no separate
//! node- or edge-id space. The types here are the handful of scalars shared
//! across the workspace.

use serde::{Deserialize, Serialize};

/// Edge weight.
///
/// Interpreted as a distance cost by the path algorithms and as a flow
/// capacity (clamped to non-negative) by the max-flow algorithm. There is
/// exactly one weight per ordered (source, target) pair.
pub type Weight = f64;

/// Sentinel total weight for a non-result: the target is unreachable, or a
/// negative cycle invalidated the distances. Always paired with an empty
/// path. Callers branch on this value, never on an error.
pub const NO_PATH: Weight = -1.0;

/// Identifier for a stored graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct GraphId(u32);

impl GraphId {
    /// Creates a graph id from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GraphId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_id_roundtrip() {
        let id = GraphId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!("7".parse::<GraphId>().unwrap(), id);
        assert_eq!(id.next().value(), 8);
    }
}
