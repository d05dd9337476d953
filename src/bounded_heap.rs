use ordered_float::OrderedFloat;
use std::collections::{BTreeMap, HashMap};

/// A priority structure parameterized at construction by a capacity `M` and an
/// upper bound `B`, supporting `insert`, `batch_prepend`, and a batched `pull`.
///
/// Implements the paper's Lemma 3.3 block-linked list: batch-prepended blocks
/// ordered ahead of individually-inserted ones, a binary-search structure over
/// block upper bounds for `insert`'s block lookup, and a block-split-on-overflow
/// policy. Specialized to the concrete `(vertex: usize, key: f64)` pair, with
/// `capacity`/`bound` fixed for the life of the heap instead of passed per-call.
#[derive(Debug)]
pub struct BoundedHeap {
    capacity: usize,
    bound: f64,
    keys: HashMap<usize, f64>,
    /// Batch-prepended blocks, always ordered ahead of `d1_blocks`.
    d0_blocks: Vec<Block>,
    /// Individually-inserted blocks, kept in a binary search tree on upper bound.
    d1_blocks: Vec<Block>,
    upper_bounds: BTreeMap<OrderedFloat<f64>, usize>,
}

#[derive(Debug, Clone)]
struct Block {
    pairs: Vec<(usize, f64)>,
    upper_bound: f64,
}

impl BoundedHeap {
    /// Creates an empty heap with the given pull batch size `capacity` and the
    /// distance bound `bound` that every inserted key must stay strictly below.
    pub fn new(capacity: usize, bound: f64) -> Self {
        BoundedHeap {
            capacity: capacity.max(1),
            bound,
            keys: HashMap::new(),
            d0_blocks: Vec::new(),
            d1_blocks: vec![Block {
                pairs: Vec::new(),
                upper_bound: bound,
            }],
            upper_bounds: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.keys.contains_key(&vertex)
    }

    /// Inserts `(vertex, key)`, keeping the smaller key if `vertex` is already
    /// present. Panics if `key >= bound`: inserting a key outside the heap's
    /// declared range is a caller bug with no runtime recovery.
    pub fn insert(&mut self, vertex: usize, key: f64) {
        assert!(
            key < self.bound,
            "BoundedHeap::insert: key {key} is not below the heap's bound {}",
            self.bound
        );
        if let Some(&old) = self.keys.get(&vertex) {
            if key >= old {
                return;
            }
            self.remove_from_blocks(vertex);
        }
        self.keys.insert(vertex, key);

        let block_idx = self.block_for(key);
        self.d1_blocks[block_idx].pairs.push((vertex, key));
        if self.d1_blocks[block_idx].pairs.len() > self.capacity {
            self.split_block(block_idx);
        }
    }

    /// Inserts `pairs` at the "front" of the heap. Every key must be smaller than
    /// any key currently in the heap (or the heap must be empty) — the caller
    /// (BMSSP) only ever batch-prepends keys below the current pull bound.
    pub fn batch_prepend(&mut self, pairs: Vec<(usize, f64)>) {
        if pairs.is_empty() {
            return;
        }

        let mut smallest: HashMap<usize, f64> = HashMap::new();
        for (vertex, key) in pairs {
            smallest
                .entry(vertex)
                .and_modify(|existing| {
                    if key < *existing {
                        *existing = key;
                    }
                })
                .or_insert(key);
        }

        for (&vertex, &key) in smallest.iter() {
            if let Some(&old) = self.keys.get(&vertex) {
                if key >= old {
                    continue;
                }
                self.remove_from_blocks(vertex);
            }
            self.keys.insert(vertex, key);
        }

        let mut fresh: Vec<(usize, f64)> = smallest.into_iter().collect();
        if fresh.len() <= self.capacity {
            if let Some(max_key) = fresh.iter().map(|&(_, k)| k).fold(None, |acc: Option<f64>, k| {
                Some(acc.map_or(k, |a| a.max(k)))
            }) {
                self.d0_blocks.push(Block {
                    pairs: fresh,
                    upper_bound: max_key,
                });
            }
        } else {
            fresh.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
            let target_size = (self.capacity / 2).max(1);
            let mut new_blocks: Vec<Block> = fresh
                .chunks(target_size)
                .map(|chunk| Block {
                    pairs: chunk.to_vec(),
                    upper_bound: chunk.iter().map(|&(_, k)| k).fold(f64::MIN, f64::max),
                })
                .collect();
            new_blocks.append(&mut self.d0_blocks);
            self.d0_blocks = new_blocks;
        }
    }

    /// Pulls a batch: if at most `capacity` entries remain, drains everything
    /// and returns `(bound, all vertices)`; otherwise
    /// removes the `capacity` smallest-keyed vertices and returns them alongside
    /// the smallest key still remaining.
    pub fn pull(&mut self) -> (f64, Vec<usize>) {
        if self.keys.len() <= self.capacity {
            let vertices: Vec<usize> = self.keys.keys().copied().collect();
            self.keys.clear();
            self.d0_blocks.clear();
            self.d1_blocks = vec![Block {
                pairs: Vec::new(),
                upper_bound: self.bound,
            }];
            self.upper_bounds.clear();
            return (self.bound, vertices);
        }

        let mut all: Vec<(usize, f64)> = Vec::with_capacity(self.keys.len());
        for block in self.d0_blocks.drain(..) {
            all.extend(block.pairs);
        }
        for block in self.d1_blocks.drain(..) {
            all.extend(block.pairs);
        }
        all.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());

        // Widen the cut past any run of entries tied with the boundary key, so
        // every popped key stays strictly below `next_bound` as guaranteed.
        let mut cut = self.capacity;
        while cut < all.len() && all[cut].1 == all[cut - 1].1 {
            cut += 1;
        }

        let taken: Vec<(usize, f64)> = all.drain(..cut).collect();
        let next_bound = all.first().map(|&(_, k)| k).unwrap_or(self.bound);

        for (vertex, _) in &taken {
            self.keys.remove(vertex);
        }

        self.d1_blocks = vec![Block {
            pairs: all,
            upper_bound: self.bound,
        }];
        self.upper_bounds.clear();
        self.rebuild_upper_bounds();

        (next_bound, taken.into_iter().map(|(v, _)| v).collect())
    }

    fn block_for(&self, key: f64) -> usize {
        match self.upper_bounds.range(OrderedFloat(key)..).next() {
            Some((_, &idx)) => idx,
            None => self.d1_blocks.len() - 1,
        }
    }

    fn split_block(&mut self, block_idx: usize) {
        let block = &mut self.d1_blocks[block_idx];
        block.pairs.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
        let median = block.pairs.len() / 2;
        let median_key = block.pairs[median].1;

        let upper_half = Block {
            pairs: block.pairs.split_off(median),
            upper_bound: block.upper_bound,
        };
        block.upper_bound = median_key;
        self.d1_blocks.insert(block_idx + 1, upper_half);
        self.rebuild_upper_bounds();
    }

    fn remove_from_blocks(&mut self, vertex: usize) {
        for block in self.d0_blocks.iter_mut().chain(self.d1_blocks.iter_mut()) {
            block.pairs.retain(|&(v, _)| v != vertex);
        }
        self.d0_blocks.retain(|b| !b.pairs.is_empty());
        if self.d1_blocks.len() > 1 {
            self.d1_blocks.retain(|b| !b.pairs.is_empty());
            if self.d1_blocks.is_empty() {
                self.d1_blocks.push(Block {
                    pairs: Vec::new(),
                    upper_bound: self.bound,
                });
            }
        }
        self.rebuild_upper_bounds();
    }

    fn rebuild_upper_bounds(&mut self) {
        self.upper_bounds.clear();
        for (idx, block) in self.d1_blocks.iter().enumerate() {
            self.upper_bounds.insert(OrderedFloat(block.upper_bound), idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_smaller_key() {
        let mut heap = BoundedHeap::new(4, f64::INFINITY);
        heap.insert(1, 10.0);
        heap.insert(1, 3.0);
        assert_eq!(heap.len(), 1);
        let (_, x) = heap.pull();
        assert_eq!(x, vec![1]);
    }

    #[test]
    fn pull_under_capacity_drains_with_unchanged_bound() {
        let mut heap = BoundedHeap::new(10, 100.0);
        heap.insert(1, 1.0);
        heap.insert(2, 2.0);
        let (bound, mut vertices) = heap.pull();
        vertices.sort();
        assert_eq!(bound, 100.0);
        assert_eq!(vertices, vec![1, 2]);
        assert!(heap.is_empty());
    }

    #[test]
    fn pull_over_capacity_returns_smallest_m() {
        let mut heap = BoundedHeap::new(2, 100.0);
        heap.insert(1, 1.0);
        heap.insert(2, 2.0);
        heap.insert(3, 3.0);
        let (bound, mut vertices) = heap.pull();
        vertices.sort();
        assert_eq!(vertices, vec![1, 2]);
        assert_eq!(bound, 3.0);
        assert_eq!(heap.len(), 1);
    }

    #[test]
    #[should_panic]
    fn insert_at_or_above_bound_panics() {
        let mut heap = BoundedHeap::new(4, 10.0);
        heap.insert(1, 10.0);
    }

    #[test]
    fn batch_prepend_merges_duplicates_to_smallest() {
        let mut heap = BoundedHeap::new(4, 100.0);
        heap.batch_prepend(vec![(1, 5.0), (1, 2.0), (2, 9.0)]);
        assert_eq!(heap.len(), 2);
        let (_, mut vertices) = heap.pull();
        vertices.sort();
        assert_eq!(vertices, vec![1, 2]);
    }
}
