use crate::gens::*;

/// `G(n,p)` graphs generate every possible directed edge `(u, v)` with `u != v` of a graph with
/// `n` nodes with probability `p` independent from each other. Every generated edge is assigned a
/// weight drawn uniformly from `1..=max_weight` (defaults to `1`).
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: u64,
    p: Option<f64>,
    max_weight: Weight,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: None,
            max_weight: DEFAULT_WEIGHT,
        }
    }
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a probability");
        self.p = Some(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl MaxWeightGen for Gnp {
    fn max_weight(mut self, w: Weight) -> Self {
        assert!(w > 0, "zero-weight edges cannot be represented");
        self.max_weight = w;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random weighted `G(n,p)` edges in ascending
    /// `(u, v)` order
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = (Slot, Slot, Weight)> {
        assert!(self.n > 0, "At least one node must be generated!");
        let Some(p) = self.p else {
            panic!("Probability of Gnp was not set!");
        };

        let n = self.n;
        let max_weight = self.max_weight;

        (0..n * n).filter_map(move |x| {
            let (u, v) = (x / n, x % n);
            if u == v || !rng.random_bool(p) {
                return None;
            }

            Some((u as Slot, v as Slot, rng.random_range(1..=max_weight)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert!(Gnp::new().nodes(10).prob(0.0).generate(rng).is_empty());

        let edges = Gnp::new().nodes(10).prob(1.0).max_weight(5).generate(rng);
        assert_eq!(edges.len(), 90);
        assert!(edges.iter().all(|&(u, v, w)| u != v && (1..=5).contains(&w)));

        let pairs = edges.iter().map(|&(u, v, _)| (u, v)).collect_vec();
        assert!(pairs.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let gen_with_seed = |seed| {
            let rng = &mut Pcg64Mcg::seed_from_u64(seed);
            Gnp::new().nodes(30).prob(0.2).max_weight(100).generate(rng)
        };

        assert_eq!(gen_with_seed(7), gen_with_seed(7));
    }

    #[test]
    fn random_graph_uses_slots_as_nodes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let graph = MatrixGraph::<Slot>::gnp(rng, 20, 0.5, 9);

        assert!(graph.is_full());
        for u in graph.slots() {
            assert_eq!(graph.node_at(u), Some(&u));
            assert_eq!(graph.weight_at(u, u), None);
        }
        assert!(graph.edges().all(|e| (1..=9).contains(&e.weight())));
    }

    #[test]
    #[should_panic]
    fn missing_probability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let _ = Gnp::new().nodes(3).generate(rng);
    }
}
