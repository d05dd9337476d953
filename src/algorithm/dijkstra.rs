use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm, used in this crate as the independent oracle
/// the randomized property tests check `sssp` against, and as a standalone
/// shortest-path algorithm for callers who don't need BMSSP's asymptotics.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }

    pub fn compute_shortest_paths(
        &self,
        graph: &impl Graph,
        source: usize,
    ) -> Result<(Vec<f64>, Vec<Option<usize>>)> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source, graph.vertex_count()));
        }

        let n = graph.vertex_count();
        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = 0.0;

        let mut queue = BinaryHeap::new();
        queue.push(Reverse((OrderedFloat(0.0), source)));

        while let Some(Reverse((OrderedFloat(dist_u), u))) = queue.pop() {
            if dist_u > distances[u] {
                continue;
            }
            for (v, weight) in graph.out_edges(u) {
                let new_dist = dist_u + weight;
                if new_dist < distances[v] {
                    distances[v] = new_dist;
                    predecessors[v] = Some(u);
                    queue.push(Reverse((OrderedFloat(new_dist), v)));
                }
            }
        }

        Ok((distances, predecessors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};

    #[test]
    fn line_graph() {
        let mut g = DirectedGraph::new(3);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        let (d, pred) = Dijkstra::new().compute_shortest_paths(&g, 0).unwrap();
        assert_eq!(d, vec![0.0, 1.0, 2.0]);
        assert_eq!(pred, vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn unreachable_vertex() {
        let mut g = DirectedGraph::new(2);
        g.add_edge(0, 0, 1.0).unwrap(); // self-loop only, vertex 1 unreachable
        let (d, pred) = Dijkstra::new().compute_shortest_paths(&g, 0).unwrap();
        assert_eq!(d[1], f64::INFINITY);
        assert_eq!(pred[1], None);
    }
}
