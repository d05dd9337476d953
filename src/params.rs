/// The three constants computed once from `n` at the top of `sssp`: pivot budget
/// `k`, batch-size exponent `t`, and recursion depth `l_max`.
///
/// Uses floor (rather than ceil) for `k` and `t`, following the textbook
/// asymptotic derivation literally instead of a tuned constant-factor variant —
/// see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub k: usize,
    pub t: usize,
    pub l_max: usize,
}

impl Params {
    /// `k = floor(log2(max(n,2))^(1/3))`, `t = floor(log2(max(n,2))^(2/3))`,
    /// `l_max = ceil(log2(max(n,2)) / t)`, each floored at 1.
    pub fn for_vertex_count(n: usize) -> Self {
        let log_n = (n.max(2) as f64).log2();
        let k = (log_n.powf(1.0 / 3.0)).floor().max(1.0) as usize;
        let t = (log_n.powf(2.0 / 3.0)).floor().max(1.0) as usize;
        let l_max = (log_n / t as f64).ceil().max(1.0) as usize;
        Params { k, t, l_max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_graphs_get_minimum_params() {
        let p = Params::for_vertex_count(1);
        assert_eq!(p.k, 1);
        assert_eq!(p.t, 1);
        assert_eq!(p.l_max, 1);
    }

    #[test]
    fn params_grow_with_n() {
        let p = Params::for_vertex_count(1_000_000);
        assert!(p.k >= 2);
        assert!(p.t >= 2);
        assert!(p.l_max >= 1);
    }
}
