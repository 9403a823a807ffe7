//! Shortest path algorithms: Dijkstra, A*, Bellman-Ford.

use netgraph_common::{Error, Result, Weight};
use netgraph_core::{GraphSnapshot, PriorityFrontier};

use super::PathResult;

/// Resolves both endpoints to snapshot indices.
fn endpoints(graph: &GraphSnapshot, start: &str, end: &str) -> Result<(usize, usize)> {
    let start_ix = graph
        .index_of(start)
        .ok_or_else(|| Error::UnknownNode(start.to_string()))?;
    let end_ix = graph
        .index_of(end)
        .ok_or_else(|| Error::UnknownNode(end.to_string()))?;
    Ok((start_ix, end_ix))
}

/// Walks predecessor links back from `end` and returns the path in
/// start-to-end order. Callers only invoke this once `end` is known
/// reachable, so the chain terminates at the start node.
fn reconstruct(graph: &GraphSnapshot, prev: &[Option<usize>], end_ix: usize) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(end_ix);
    while let Some(ix) = current {
        path.push(graph.name(ix).to_string());
        current = prev[ix];
    }
    path.reverse();
    path
}

/// Dijkstra's single-source shortest path.
///
/// Assumes non-negative edge weights; the precondition is not validated,
/// and behavior under negative weights is unspecified. [`bellman_ford`]
/// covers that case. Terminates as soon as `end` is finalized.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if either endpoint is absent.
pub fn dijkstra(graph: &GraphSnapshot, start: &str, end: &str) -> Result<PathResult> {
    let (start_ix, end_ix) = endpoints(graph, start, end)?;
    let n = graph.node_count();

    let mut dist = vec![Weight::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut frontier = PriorityFrontier::new();

    dist[start_ix] = 0.0;
    frontier.insert(start_ix, 0.0);

    while let Some(current) = frontier.extract_min() {
        if finalized[current] {
            // Stale entry left behind by lazy relaxation.
            continue;
        }
        finalized[current] = true;
        if current == end_ix {
            break;
        }

        for &(next, weight) in graph.neighbors(current) {
            if finalized[next] {
                continue;
            }
            let candidate = dist[current] + weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                prev[next] = Some(current);
                frontier.insert(next, candidate);
            }
        }
    }

    if !dist[end_ix].is_finite() {
        return Ok(PathResult::no_path());
    }
    Ok(PathResult {
        path: reconstruct(graph, &prev, end_ix),
        total_weight: dist[end_ix],
    })
}

/// A* search with a positional heuristic.
///
/// The priority is `g(v) + h(v)` where `h(v)` is the distance between the
/// positions of `v` and `end` in the snapshot's node ordering. That
/// ordering has no relationship to edge weights, so the heuristic can
/// overestimate and the result is not guaranteed optimal. Callers wanting
/// a guaranteed shortest path use [`dijkstra`].
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if either endpoint is absent.
pub fn astar(graph: &GraphSnapshot, start: &str, end: &str) -> Result<PathResult> {
    let (start_ix, end_ix) = endpoints(graph, start, end)?;
    let n = graph.node_count();
    let h = |ix: usize| (ix as Weight - end_ix as Weight).abs();

    let mut g_score = vec![Weight::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut frontier = PriorityFrontier::new();

    g_score[start_ix] = 0.0;
    frontier.insert(start_ix, h(start_ix));

    while let Some(current) = frontier.extract_min() {
        if finalized[current] {
            continue;
        }
        finalized[current] = true;
        if current == end_ix {
            break;
        }

        for &(next, weight) in graph.neighbors(current) {
            if finalized[next] {
                continue;
            }
            let tentative = g_score[current] + weight;
            if tentative < g_score[next] {
                g_score[next] = tentative;
                prev[next] = Some(current);
                frontier.insert(next, tentative + h(next));
            }
        }
    }

    if !g_score[end_ix].is_finite() {
        return Ok(PathResult::no_path());
    }
    Ok(PathResult {
        path: reconstruct(graph, &prev, end_ix),
        total_weight: g_score[end_ix],
    })
}

/// Bellman-Ford with negative-cycle detection.
///
/// Runs exactly `|V| - 1` full passes over the edge list with no
/// convergence early-exit, then one more scan: if any edge still relaxes,
/// a negative cycle is reachable through the relaxed structure and the
/// no-path sentinel is returned unconditionally, even when `end` is
/// reachable by a clean path. The detection is global to the edge list,
/// not restricted to the start-to-end subpath.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if either endpoint is absent.
pub fn bellman_ford(graph: &GraphSnapshot, start: &str, end: &str) -> Result<PathResult> {
    let (start_ix, end_ix) = endpoints(graph, start, end)?;
    let n = graph.node_count();

    let mut dist = vec![Weight::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    dist[start_ix] = 0.0;

    let edges: Vec<(usize, usize, Weight)> = graph.edges().collect();

    for _ in 1..n {
        for &(u, v, w) in &edges {
            if dist[u].is_finite() && dist[u] + w < dist[v] {
                dist[v] = dist[u] + w;
                prev[v] = Some(u);
            }
        }
    }

    for &(u, v, w) in &edges {
        if dist[u].is_finite() && dist[u] + w < dist[v] {
            return Ok(PathResult::no_path());
        }
    }

    if !dist[end_ix].is_finite() {
        return Ok(PathResult::no_path());
    }
    Ok(PathResult {
        path: reconstruct(graph, &prev, end_ix),
        total_weight: dist[end_ix],
    })
}
