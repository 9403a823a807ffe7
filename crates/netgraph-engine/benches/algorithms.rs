//! Benchmarks for the four algorithms over a layered topology.

use criterion::{Criterion, criterion_group, criterion_main};
use netgraph_core::{GraphModel, GraphSnapshot};
use netgraph_engine::{astar, bellman_ford, dijkstra, max_flow};

/// A deterministic layered graph: `layers` ranks of `width` nodes, every
/// node wired to each node of the next rank with a small varying weight.
fn layered(layers: usize, width: usize) -> GraphSnapshot {
    let mut model = GraphModel::new();
    for layer in 0..layers {
        for slot in 0..width {
            model.add_node(&format!("l{layer}s{slot}")).unwrap();
        }
    }
    for layer in 0..layers - 1 {
        for from in 0..width {
            for to in 0..width {
                let weight = ((from * 7 + to * 3 + layer) % 9 + 1) as f64;
                model
                    .upsert_edge(
                        &format!("l{layer}s{from}"),
                        &format!("l{}s{to}", layer + 1),
                        weight,
                    )
                    .unwrap();
            }
        }
    }
    model.snapshot()
}

fn bench_algorithms(c: &mut Criterion) {
    let snap = layered(10, 8);
    let (start, end) = ("l0s0", "l9s7");

    c.bench_function("dijkstra_layered_10x8", |b| {
        b.iter(|| dijkstra(&snap, start, end).unwrap());
    });
    c.bench_function("astar_layered_10x8", |b| {
        b.iter(|| astar(&snap, start, end).unwrap());
    });
    c.bench_function("bellman_ford_layered_10x8", |b| {
        b.iter(|| bellman_ford(&snap, start, end).unwrap());
    });
    c.bench_function("max_flow_layered_10x8", |b| {
        b.iter(|| max_flow(&snap, start, end).unwrap());
    });
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
