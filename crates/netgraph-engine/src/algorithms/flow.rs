//! Edmonds-Karp maximum flow.

use std::collections::VecDeque;

use netgraph_common::{Error, Result, Weight};
use netgraph_core::GraphSnapshot;

use super::PathResult;

/// Maximum flow from `start` to `end` via Edmonds-Karp.
///
/// Edge weights act as capacities, clamped to `max(weight, 0)`: a
/// negative-weight edge contributes zero capacity, it is not treated as
/// reverse capacity. Each round finds a shortest augmenting path (by edge
/// count) in the residual graph via BFS, pushes the bottleneck along it
/// with the standard forward/backward update, and accumulates the
/// bottleneck into the flow total. Augmentation count is bounded by
/// O(V·E), overall O(V·E²).
///
/// The result's `path` is the last augmenting path found before
/// termination; `total_weight` is the flow value. An exhausted or absent
/// first path yields `(empty, 0)`, not the no-path sentinel.
///
/// The capacity and flow tables are dense V×V, fine for the topology
/// sizes served here; sparse adjacency-keyed maps are the swap-in for
/// bigger graphs.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if either endpoint is absent.
pub fn max_flow(graph: &GraphSnapshot, start: &str, end: &str) -> Result<PathResult> {
    let start_ix = graph
        .index_of(start)
        .ok_or_else(|| Error::UnknownNode(start.to_string()))?;
    let end_ix = graph
        .index_of(end)
        .ok_or_else(|| Error::UnknownNode(end.to_string()))?;
    let n = graph.node_count();

    if start_ix == end_ix {
        // A node trivially reaches itself; no constraint to saturate.
        return Ok(PathResult {
            path: vec![graph.name(start_ix).to_string()],
            total_weight: 0.0,
        });
    }

    let mut capacity = vec![vec![0.0; n]; n];
    let mut flow = vec![vec![0.0; n]; n];
    for (u, v, w) in graph.edges() {
        capacity[u][v] = w.max(0.0);
    }

    let mut total = 0.0;
    let mut last_path: Vec<usize> = Vec::new();

    while let Some(path) = augmenting_path(&capacity, &flow, start_ix, end_ix) {
        let mut bottleneck = Weight::INFINITY;
        for pair in path.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            bottleneck = bottleneck.min(capacity[u][v] - flow[u][v]);
        }

        for pair in path.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            flow[u][v] += bottleneck;
            // Back-edge update allows later rounds to cancel this flow.
            flow[v][u] -= bottleneck;
        }

        total += bottleneck;
        last_path = path;
    }

    Ok(PathResult {
        path: last_path
            .into_iter()
            .map(|ix| graph.name(ix).to_string())
            .collect(),
        total_weight: total,
    })
}

/// Breadth-first search over the residual graph. An edge (u, v) is
/// traversable while `capacity(u, v) - flow(u, v) > 0`. Candidate targets
/// are scanned in node-index order, which fixes which of the equally-short
/// augmenting paths each round reports.
fn augmenting_path(
    capacity: &[Vec<Weight>],
    flow: &[Vec<Weight>],
    start: usize,
    end: usize,
) -> Option<Vec<usize>> {
    let n = capacity.len();
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            let mut path = Vec::new();
            let mut cursor = Some(end);
            while let Some(ix) = cursor {
                path.push(ix);
                cursor = parent[ix];
            }
            path.reverse();
            return Some(path);
        }

        for next in 0..n {
            if !visited[next] && capacity[current][next] - flow[current][next] > 0.0 {
                visited[next] = true;
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    None
}
