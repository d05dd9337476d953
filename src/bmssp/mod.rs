pub mod base_case;
pub mod pivot;

use std::collections::HashSet;

use crate::bounded_heap::BoundedHeap;
use crate::distance_store::DistanceStore;
use crate::graph::Graph;
use crate::params::Params;

use base_case::base_case;
use pivot::find_pivots;

/// BMSSP(l, B, S) → (B', U) — the recursive driver.
///
/// Preconditions (enforced by the caller, asserted here): `l >= 0`, every
/// `s in S` has `d[s] < B`, `|S| <= 2^{l*t}`.
///
/// Finds pivots, sizes a `BoundedHeap` at `2^{(l-1)t}`, loops pulling batches
/// and recursing one level down, relaxes outgoing edges of the settled batch,
/// batch-prepends deferred work, and folds `W ∩ {d < B'}` into the result on
/// exit.
pub fn bmssp(
    graph: &impl Graph,
    level: usize,
    bound: f64,
    sources: &[usize],
    store: &mut DistanceStore,
    params: &Params,
) -> (f64, Vec<usize>) {
    debug_assert!(!sources.is_empty(), "BMSSP precondition: S is nonempty");
    debug_assert!(
        sources.iter().all(|&s| store.distance(s) < bound),
        "BMSSP precondition: every s in S has d[s] < B"
    );

    if level == 0 {
        if sources.len() == 1 {
            return base_case(graph, bound, sources[0], store, params.k);
        }
        // Not expected under the calling discipline (|S| == 1 at level 0), but
        // handled anyway: treat each source independently and merge.
        let mut merged_bound = bound;
        let mut merged: HashSet<usize> = HashSet::new();
        for &s in sources {
            if store.distance(s) >= bound {
                continue;
            }
            let (b, settled) = base_case(graph, bound, s, store, params.k);
            merged_bound = merged_bound.min(b);
            merged.extend(settled);
        }
        let mut result: Vec<usize> = merged.into_iter().collect();
        result.sort_unstable();
        return (merged_bound, result);
    }

    let (pivots, w) = find_pivots(graph, bound, sources, store, params.k);

    let capacity = 1usize << ((level - 1) * params.t);
    let mut heap = BoundedHeap::new(capacity, bound);
    for &p in &pivots {
        heap.insert(p, store.distance(p));
    }

    let target = params.k.saturating_mul(1usize << (level * params.t));
    let mut completed: HashSet<usize> = HashSet::new();
    let mut last_sub_bound = bound;

    while !heap.is_empty() && completed.len() < target {
        let (b_i, s_i) = heap.pull();
        let (b_prime_i, u_i) = bmssp(graph, level - 1, b_i, &s_i, store, params);
        completed.extend(u_i.iter().copied());

        let mut batch: Vec<(usize, f64)> = Vec::new();
        for &x in &u_i {
            for (v, w) in graph.out_edges(x) {
                let candidate = store.distance(x) + w;
                store.relax(x, v, w);
                let dv = store.distance(v);
                // A tight edge classifies `v` even when it was already at its
                // optimal distance (e.g. pre-relaxed by an earlier FindPivots
                // pass), not only on a fresh strict improvement.
                if candidate <= dv && !completed.contains(&v) {
                    if dv >= b_i && dv < bound {
                        heap.insert(v, dv);
                    } else if dv >= b_prime_i && dv < b_i {
                        batch.push((v, dv));
                    }
                }
            }
        }
        for &s in &s_i {
            // Only sources the sub-call left unfinished go back to the heap;
            // one it already completed must not be retried forever.
            if completed.contains(&s) {
                continue;
            }
            let ds = store.distance(s);
            if ds >= b_prime_i && ds < b_i {
                batch.push((s, ds));
            }
        }
        heap.batch_prepend(batch);

        last_sub_bound = b_prime_i;
    }

    // The loop exited either because the heap drained (everything under `bound`
    // is done at this level) or because the size cap was hit (work remains).
    let heap_drained = heap.is_empty();
    let new_bound = if heap_drained { bound } else { last_sub_bound };

    for &v in &w {
        if store.distance(v) < new_bound {
            completed.insert(v);
        }
    }

    let mut result: Vec<usize> = completed.into_iter().collect();
    result.sort_unstable();
    (new_bound, result)
}
