use std::collections::{HashMap, HashSet};

use crate::distance_store::DistanceStore;
use crate::graph::Graph;

/// FindPivots(B, S) → (P, W).
///
/// Runs `k` Bellman-Ford relaxation passes over the full accumulated work set
/// (every round re-scans every vertex discovered so far, not just the
/// previous round's new frontier, so a later-arriving shorter path can still
/// correct an earlier vertex's distance and propagate to its dependents), then
/// classifies the sources whose shortest-path subtree (within those `k`
/// layers) has size at least `k` as pivots.
pub fn find_pivots(
    graph: &impl Graph,
    bound: f64,
    sources: &[usize],
    store: &mut DistanceStore,
    k: usize,
) -> (Vec<usize>, Vec<usize>) {
    let mut work_set = sources.to_vec();
    let mut in_work_set: HashSet<usize> = sources.iter().copied().collect();
    // Parent pointers scoped to this call: written whenever this call's own
    // relaxation pass finds an edge tight against the current global distance,
    // independent of whatever the shared `DistanceStore::pred` last recorded.
    let mut parent: HashMap<usize, usize> = HashMap::new();

    for _ in 0..k {
        let mut discovered: Vec<usize> = Vec::new();
        for &u in &work_set {
            for (v, weight) in graph.out_edges(u) {
                let candidate = store.distance(u) + weight;
                if candidate >= bound {
                    continue;
                }
                let prior = store.distance(v);
                store.relax(u, v, weight);
                if candidate <= prior {
                    parent.insert(v, u);
                    if in_work_set.insert(v) {
                        discovered.push(v);
                    }
                }
            }
        }
        if discovered.is_empty() {
            break;
        }
        work_set.extend(discovered);

        if work_set.len() > k * sources.len() {
            return (sources.to_vec(), work_set);
        }
    }

    // Build the shortest-path forest from this call's own tight relaxation
    // edges and size each source's tree.
    let source_set: HashSet<usize> = sources.iter().copied().collect();
    let mut tree_size: HashMap<usize, usize> = sources.iter().map(|&s| (s, 1)).collect();

    for &v in &work_set {
        if source_set.contains(&v) {
            continue;
        }
        if let Some(root) = root_in_forest(v, &parent, &source_set) {
            *tree_size.entry(root).or_insert(0) += 1;
        }
    }

    let pivots: Vec<usize> = sources
        .iter()
        .copied()
        .filter(|s| tree_size.get(s).copied().unwrap_or(0) >= k)
        .collect();

    (pivots, work_set)
}

/// Walks this call's own parent pointers from `v` back to the source that
/// roots its tree in the relaxation forest built by `find_pivots`.
fn root_in_forest(v: usize, parent: &HashMap<usize, usize>, source_set: &HashSet<usize>) -> Option<usize> {
    let mut current = v;
    let mut steps = 0;
    loop {
        if source_set.contains(&current) {
            return Some(current);
        }
        match parent.get(&current) {
            Some(&p) if p != current => {
                current = p;
                steps += 1;
                // Guards against a malformed chain; the forest is a DAG over a
                // finite work set so this should never trigger.
                if steps > source_set.len() + 1_000_000 {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};

    #[test]
    fn single_source_line_graph_is_its_own_pivot() {
        let mut g = DirectedGraph::new(4);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        let mut store = DistanceStore::new(4, 0);
        let (pivots, w) = find_pivots(&g, f64::INFINITY, &[0], &mut store, 2);
        assert_eq!(pivots, vec![0]);
        assert!(w.contains(&0));
    }

    #[test]
    fn later_round_correction_propagates_to_dependent_vertex() {
        // 0->1 is a long direct edge; 0->2->1 is a shorter two-hop path that
        // only gets relaxed after 1 has already been (wrongly) reached
        // directly. A single re-scan of just the newest frontier would relax
        // 1->3 off the stale d[1]=10 and never revisit it once 2->1 corrects
        // d[1] to 2. Re-scanning the whole accumulated work set each round
        // lets a later round pick the correction back up.
        let mut g = DirectedGraph::new(4);
        g.add_edge(0, 1, 10.0).unwrap();
        g.add_edge(0, 2, 1.0).unwrap();
        g.add_edge(2, 1, 1.0).unwrap();
        g.add_edge(1, 3, 1.0).unwrap();
        let mut store = DistanceStore::new(4, 0);
        find_pivots(&g, f64::INFINITY, &[0], &mut store, 4);
        assert_eq!(store.distance(1), 2.0);
        assert_eq!(store.distance(2), 1.0);
        assert_eq!(store.distance(3), 3.0);
    }

    #[test]
    fn tie_into_a_vertex_settled_by_an_earlier_call_still_counts_locally() {
        // Simulate an earlier, unrelated call (e.g. an ancestor BMSSP frame)
        // having already settled vertex 1 from vertex 3, leaving
        // DistanceStore::pred[1] pointing outside this call's own source set.
        // This call's source 0 reaches 1 via a tie (same distance, not a
        // strict improvement), so the shared store's `pred` is left
        // untouched by `relax` — but this call's own subtree under 0 must
        // still count 1 and 2 for pivot classification.
        let mut g = DirectedGraph::new(4);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();

        let mut store = DistanceStore::new(4, 0);
        store.relax(0, 3, 0.0); // vertex 3 also sits at distance 0, unrelated to this call
        store.relax(3, 1, 1.0); // d[1] = 1.0, pred[1] = 3
        let pre_existing_pred = store.predecessor(1);

        let (pivots, w) = find_pivots(&g, f64::INFINITY, &[0], &mut store, 2);

        assert_eq!(store.predecessor(1), pre_existing_pred, "tie must not overwrite the shared pred");
        assert_eq!(pivots, vec![0], "0's local subtree (1 and 2) still has size >= k");
        assert!(w.contains(&1) && w.contains(&2));
    }

    #[test]
    fn bound_stops_relaxation() {
        let mut g = DirectedGraph::new(3);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        let mut store = DistanceStore::new(3, 0);
        let (_, w) = find_pivots(&g, 1.5, &[0], &mut store, 5);
        assert!(w.contains(&1));
        assert!(!w.contains(&2));
    }
}
