//! Cross-algorithm properties over generated topologies.

use netgraph_core::{GraphModel, GraphSnapshot};
use netgraph_engine::{Algorithm, bellman_ford, compute, dijkstra, max_flow};
use proptest::prelude::*;

const NAMES: [&str; 6] = ["n0", "n1", "n2", "n3", "n4", "n5"];

/// Builds a graph over the first `n` names from an edge list; endpoints
/// are folded into range, weights are small non-negative integers so f64
/// sums stay exact.
fn build(n: usize, edges: &[(usize, usize, u8)]) -> GraphSnapshot {
    let mut model = GraphModel::new();
    for name in &NAMES[..n] {
        model.add_node(name).unwrap();
    }
    for &(s, t, w) in edges {
        model
            .upsert_edge(NAMES[s % n], NAMES[t % n], f64::from(w))
            .unwrap();
    }
    model.snapshot()
}

fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u8)>)> {
    (2usize..=6).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0usize..6, 0usize..6, 0u8..10), 0..24),
        )
    })
}

proptest! {
    // With only non-negative weights, Dijkstra and Bellman-Ford agree on
    // the total weight for every endpoint pair.
    #[test]
    fn prop_dijkstra_agrees_with_bellman_ford(
        (n, edges) in arb_graph(),
        s in 0usize..6,
        e in 0usize..6,
    ) {
        let snap = build(n, &edges);
        let (start, end) = (NAMES[s % n], NAMES[e % n]);

        let d = dijkstra(&snap, start, end).unwrap();
        let bf = bellman_ford(&snap, start, end).unwrap();
        prop_assert_eq!(d.total_weight, bf.total_weight);
        prop_assert_eq!(d.path.is_empty(), bf.path.is_empty());
    }

    // A reported shortest path must actually cost its total weight.
    #[test]
    fn prop_dijkstra_path_sums_to_total(
        (n, edges) in arb_graph(),
        s in 0usize..6,
        e in 0usize..6,
    ) {
        let snap = build(n, &edges);
        let (start, end) = (NAMES[s % n], NAMES[e % n]);

        let result = dijkstra(&snap, start, end).unwrap();
        if !result.path.is_empty() {
            let mut cost = 0.0;
            for pair in result.path.windows(2) {
                let u = snap.index_of(&pair[0]).unwrap();
                let v = snap.index_of(&pair[1]).unwrap();
                let (_, w) = snap
                    .neighbors(u)
                    .iter()
                    .copied()
                    .find(|&(t, _)| t == v)
                    .unwrap();
                cost += w;
            }
            prop_assert_eq!(cost, result.total_weight);
            prop_assert_eq!(result.path.first().map(String::as_str), Some(start));
            prop_assert_eq!(result.path.last().map(String::as_str), Some(end));
        }
    }

    // Max flow never exceeds the capacity leaving the source.
    #[test]
    fn prop_flow_bounded_by_source_out_capacity(
        (n, edges) in arb_graph(),
        s in 0usize..6,
        e in 0usize..6,
    ) {
        let snap = build(n, &edges);
        let (start, end) = (NAMES[s % n], NAMES[e % n]);
        prop_assume!(start != end);

        let out_capacity: f64 = snap
            .neighbors(snap.index_of(start).unwrap())
            .iter()
            .map(|&(_, w)| w.max(0.0))
            .sum();

        let result = max_flow(&snap, start, end).unwrap();
        prop_assert!(result.total_weight <= out_capacity);
        prop_assert!(result.total_weight >= 0.0);
    }
}

#[test]
fn all_algorithms_agree_when_start_equals_end() {
    let snap = build(2, &[]);
    for algorithm in Algorithm::ALL {
        let result = compute(&snap, "n0", "n0", algorithm).unwrap();
        assert_eq!(result.path, ["n0"]);
        assert_eq!(result.total_weight, 0.0);
    }
}
