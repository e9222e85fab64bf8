/*!
# Graph Generators

Generators that populate a [`Graph`] model, either with deterministic substructures
(paths, cycles, cliques, stars, bicliques) addressed by vertex keys, or randomly.

Random generators follow a builder pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters (e.g., `.nodes(n).prob(p).directed(false)`).
3. Generate a graph via `generate(rng)`.

The [`RandomGraph`] trait wraps the builders into one-line constructors on [`Graph`].
Randomly generated vertices are keyed `v0, v1, ...`.
*/

use rand::Rng;

use crate::{model::*, node::*};

mod gnp;
mod substructures;
mod walk;

pub use gnp::*;
pub use substructures::*;
pub use walk::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that produce either directed or undirected graphs.
pub trait DirectedGen {
    /// Sets the directedness of the generated graph.
    fn directed(self, directed: bool) -> Self;
}

/// General trait for a configurable random graph generator
pub trait GraphGenerator {
    /// Generates a fresh random graph
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng;
}

/// Creates a graph with `n` isolated vertices keyed `v0, ..., v{n-1}`
pub(crate) fn numbered_vertices(n: NumNodes, directed: bool) -> Graph {
    let mut graph = Graph::new(directed);
    graph.vertices = (0..n).map(|i| Vertex::new(format!("v{i}"))).collect();
    graph
}

/// Constructors for common random models
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph without self-loops
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng;

    /// Creates a graph whose edges are the steps of a random walk of length `steps` over `n`
    /// vertices. The walk itself is an Euler trail of the resulting multigraph.
    fn random_trail<R>(rng: &mut R, n: NumNodes, steps: usize, directed: bool) -> Self
    where
        R: Rng;
}

impl RandomGraph for Graph {
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng,
    {
        Gnp::new().nodes(n).prob(p).directed(directed).generate(rng)
    }

    fn random_trail<R>(rng: &mut R, n: NumNodes, steps: usize, directed: bool) -> Self
    where
        R: Rng,
    {
        RandomWalk::new()
            .nodes(n)
            .steps(steps)
            .directed(directed)
            .generate(rng)
    }
}
