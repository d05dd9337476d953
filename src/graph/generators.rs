use crate::graph::{DirectedGraph, MutableGraph};
use rand::Rng;

/// Generates a random directed graph on `n` vertices where each ordered pair
/// `(u, v)` with `u != v` is connected independently with probability `density`,
/// with weights drawn uniformly from `[0, max_weight]`.
///
/// Used by the randomized property test to exercise `sssp` against a
/// reference Dijkstra over many random inputs.
pub fn random_digraph(n: usize, density: f64, max_weight: f64, rng: &mut impl Rng) -> DirectedGraph {
    let mut graph = DirectedGraph::new(n);
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(density) {
                let weight = rng.gen_range(0.0..=max_weight);
                graph.add_edge(u, v, weight).expect("u, v and weight are within bounds by construction");
            }
        }
    }
    graph
}
