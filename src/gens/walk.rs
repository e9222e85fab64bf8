use super::*;

/// Random walk generator: starting at a uniform vertex, every step moves to a uniformly chosen
/// vertex (possibly the current one) and records the step as an edge.
///
/// By construction the resulting multigraph has an Euler path (or a circuit if the walk
/// returns to its origin), which makes it a convenient source of positive instances.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomWalk {
    n: NumNodes,
    steps: usize,
    directed: bool,
}

impl RandomWalk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of steps (= edges) of the walk
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }
}

impl NumNodesGen for RandomWalk {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl DirectedGen for RandomWalk {
    fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

impl GraphGenerator for RandomWalk {
    /// ** Panics if `n == 0` **
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        let mut graph = numbered_vertices(self.n, self.directed);

        let mut u = rng.random_range(0..self.n);
        for _ in 0..self.steps {
            let v = rng.random_range(0..self.n);
            graph.add_edge(format!("v{u}"), format!("v{v}"));
            u = v;
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
    fn consecutive_steps_share_endpoints() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let graph = Graph::random_trail(rng, 4, 25, true);

        assert_eq!(graph.number_of_edges(), 25);
        for (a, b) in graph.edges.iter().zip(graph.edges.iter().skip(1)) {
            assert_eq!(a.target, b.source);
        }
    }
}
