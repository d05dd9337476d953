use std::fmt::Debug;

/// A directed graph on vertices `0..vertex_count()` with non-negative real edge weights.
///
/// Implementations are read-only from the algorithm's point of view: BMSSP and its
/// helpers only ever call `vertex_count`, `out_edges` and `has_vertex`.
pub trait Graph: Debug {
    /// Number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Number of edges in the graph (counting multi-edges and self-loops).
    fn edge_count(&self) -> usize;

    /// Outgoing `(neighbor, weight)` pairs for `vertex`, in insertion order.
    fn out_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_>;

    /// True if `vertex` is a valid vertex id for this graph.
    fn has_vertex(&self, vertex: usize) -> bool;
}

/// Trait for constructing a graph edge by edge.
pub trait MutableGraph: Graph {
    /// Appends a directed edge `(from, to, weight)`. No de-duplication: multi-edges
    /// and self-loops are both permitted.
    fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> crate::Result<()>;
}
