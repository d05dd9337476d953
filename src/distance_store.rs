/// Process-wide tentative-distance and predecessor arrays for a single `sssp` call.
///
/// `d[v]` only ever decreases (monotonicity invariant); `pred[v]` is updated
/// only alongside a strict improvement to `d[v]` (predecessor consistency
/// invariant). The two arrays are combined into one owning struct rather than
/// threaded as separate `&mut` parameters through every call.
#[derive(Debug)]
pub struct DistanceStore {
    d: Vec<f64>,
    pred: Vec<Option<usize>>,
}

impl DistanceStore {
    /// Creates a store of size `n` with `d[source] = 0` and every other distance
    /// `+inf`, all predecessors `none`.
    pub fn new(n: usize, source: usize) -> Self {
        let mut d = vec![f64::INFINITY; n];
        d[source] = 0.0;
        DistanceStore {
            d,
            pred: vec![None; n],
        }
    }

    pub fn distance(&self, v: usize) -> f64 {
        self.d[v]
    }

    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.pred[v]
    }

    /// If `d[u] + w < d[v]`, updates `d[v]` and `pred[v]` and returns `true`.
    /// Ties (`d[u] + w == d[v]`) are not improvements — relaxation uses strict `<`.
    pub fn relax(&mut self, u: usize, v: usize, w: f64) -> bool {
        let candidate = self.d[u] + w;
        if candidate < self.d[v] {
            self.d[v] = candidate;
            self.pred[v] = Some(u);
            true
        } else {
            false
        }
    }

    /// Consumes the store, returning the raw `(d, pred)` arrays for the `sssp`
    /// caller.
    pub fn into_parts(self) -> (Vec<f64>, Vec<Option<usize>>) {
        (self.d, self.pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_starts_at_zero() {
        let store = DistanceStore::new(3, 1);
        assert_eq!(store.distance(0), f64::INFINITY);
        assert_eq!(store.distance(1), 0.0);
        assert_eq!(store.predecessor(1), None);
    }

    #[test]
    fn relax_only_on_strict_improvement() {
        let mut store = DistanceStore::new(2, 0);
        assert!(store.relax(0, 1, 5.0));
        assert_eq!(store.distance(1), 5.0);
        assert_eq!(store.predecessor(1), Some(0));

        // Equal distance is not an improvement.
        assert!(!store.relax(0, 1, 5.0));
        assert_eq!(store.predecessor(1), Some(0));

        // Worse distance is not an improvement.
        assert!(!store.relax(0, 1, 6.0));
    }
}
