use super::*;

/// `G(n,p)` graphs contain every possible edge between distinct vertices independently with
/// probability `p`. Undirected graphs consider every unordered pair once, directed graphs
/// every ordered pair.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
    directed: bool,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not a probability **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "invalid probability {prob}");
        self.p = prob;
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl DirectedGen for Gnp {
    fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

impl GraphGenerator for Gnp {
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        let mut graph = numbered_vertices(self.n, self.directed);

        for u in 0..self.n {
            let first = if self.directed { 0 } else { u + 1 };
            for v in first..self.n {
                if u != v && rng.random_bool(self.p) {
                    graph.add_edge(format!("v{u}"), format!("v{v}"));
                }
            }
        }

        graph
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        let empty = Graph::gnp(rng, 6, 0.0, false);
        assert_eq!(empty.number_of_vertices(), 6);
        assert_eq!(empty.number_of_edges(), 0);

        let complete = Graph::gnp(rng, 6, 1.0, false);
        assert_eq!(complete.number_of_edges(), 15);
        assert!(complete.edges.iter().all(|e| !e.is_loop()));

        let complete = Graph::gnp(rng, 6, 1.0, true);
        assert_eq!(complete.number_of_edges(), 30);
        assert!(complete.edges.iter().all(|e| e.directed));
    }
}
