//! Fast SSSP — O(m log^(2/3) n) Single-Source Shortest Path
//!
//! Implements the deterministic recursive-partitioning algorithm of
//! Duan, Mao, Mao, Shu & Yin (2025), "Breaking the Sorting Barrier for Directed
//! Single-Source Shortest Paths", for directed graphs with non-negative real
//! edge weights. The core is the Bounded Multi-Source Shortest Path (BMSSP)
//! recursion in [`bmssp`] together with its two primitives, pivot-finding
//! ([`bmssp::pivot`]) and the bounded base case ([`bmssp::base_case`]).
//!
//! [`sssp`] is the public entry point: it owns the [`DistanceStore`] for the
//! call and launches the top-level BMSSP frame at `l = l_max`, `B = +inf`.

pub mod algorithm;
pub mod bmssp;
pub mod bounded_heap;
pub mod distance_store;
pub mod graph;
pub mod params;

pub use algorithm::Dijkstra;
pub use distance_store::DistanceStore;
pub use graph::DirectedGraph;
pub use params::Params;

use graph::Graph;

/// Error types surfaced at the `sssp` boundary: precondition violations are
/// refused here with a clear failure signal; internal invariant violations
/// inside BMSSP itself are programming bugs and panic rather than returning
/// a `Result`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("vertex {0} is out of range for a graph of {1} vertices")]
    InvalidVertex(usize, usize),

    #[error("edge weight {0} is negative")]
    NegativeWeight(f64),

    #[error("source vertex {0} is out of range for a graph of {1} vertices")]
    SourceNotFound(usize, usize),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Computes single-source shortest paths from `source` to every vertex of
/// `graph`.
///
/// Initializes the `DistanceStore` (`d[source] = 0`, everything else `+inf`,
/// every predecessor `none`), computes `k`, `t`, `l_max` from `n`, and
/// launches BMSSP at the top level with an unbounded frontier (`B = +inf`,
/// `S = {source}`).
///
/// Returns `(d, pred)`: `d[v]` is the shortest distance from `source` to `v`
/// (or `+inf` if unreachable), and `pred[v]` is a predecessor on some shortest
/// path (`none` for `source` and for unreachable vertices).
pub fn sssp(graph: &impl Graph, source: usize) -> Result<(Vec<f64>, Vec<Option<usize>>)> {
    let n = graph.vertex_count();
    if !graph.has_vertex(source) {
        return Err(Error::SourceNotFound(source, n));
    }

    let params = Params::for_vertex_count(n);
    let mut store = DistanceStore::new(n, source);

    log::debug!(
        "sssp: n={n}, k={}, t={}, l_max={}",
        params.k,
        params.t,
        params.l_max
    );

    bmssp::bmssp(graph, params.l_max, f64::INFINITY, &[source], &mut store, &params);

    Ok(store.into_parts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph::{DirectedGraph, MutableGraph};

    #[test]
    fn rejects_out_of_range_source() {
        let g = DirectedGraph::new(2);
        let err = sssp(&g, 5).unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(5, 2)));
    }

    #[test]
    fn line_graph() {
        let mut g = DirectedGraph::new(5);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        g.add_edge(3, 4, 1.0).unwrap();

        let (d, pred) = sssp(&g, 0).unwrap();
        assert_eq!(d, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(pred, vec![None, Some(0), Some(1), Some(2), Some(3)]);
    }
}
