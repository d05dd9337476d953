use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::distance_store::DistanceStore;
use crate::graph::Graph;

/// BaseCase(B, {x}) → (B', U).
///
/// A bounded Dijkstra-style expansion from the single source `x`, capped at
/// settling `k+1` vertices under the bound `B`.
pub fn base_case(graph: &impl Graph, bound: f64, source: usize, store: &mut DistanceStore, k: usize) -> (f64, Vec<usize>) {
    debug_assert!(store.distance(source) < bound, "BaseCase precondition: d[x] < B");

    let mut heap = BinaryHeap::new();
    let mut settled: Vec<usize> = Vec::with_capacity(k + 1);
    let mut visited = vec![false; graph.vertex_count()];

    heap.push(Reverse((OrderedFloat(store.distance(source)), source)));

    while settled.len() < k + 1 {
        let Some(Reverse((OrderedFloat(dist_u), u))) = heap.pop() else {
            // No candidate with d < bound remains: termination (b).
            return (bound, settled);
        };

        if visited[u] || dist_u > store.distance(u) || dist_u >= bound {
            continue;
        }
        visited[u] = true;
        settled.push(u);

        for (v, weight) in graph.out_edges(u) {
            let candidate = store.distance(u) + weight;
            store.relax(u, v, weight);
            if candidate <= store.distance(v) && candidate < bound {
                heap.push(Reverse((OrderedFloat(candidate), v)));
            }
        }
    }

    // Termination (a): k+1 vertices settled, in non-decreasing distance order
    // (Dijkstra's own settlement order). B' is the last one's distance; U is
    // the first k. Dropping by rank rather than by distance value matters
    // under ties (e.g. zero-weight edges): a value-based filter would discard
    // every settled vertex tied with the boundary instead of just the one
    // past the cut.
    let new_bound = store.distance(settled[k]);
    settled.truncate(k);

    (new_bound, settled)
}
