use std::sync::atomic::{AtomicBool, Ordering};

use super::*;
use crate::error::Error;

/// Computes an optimal coloring by probing `m = 1, 2, ...` colors and running a backtracking
/// search for each `m`. Vertices are assigned in input order, each trying colors `1..=m`.
/// Terminates at the latest with `m = n`.
///
/// Exponential; only meant for small graphs or as a reference for the heuristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactColoring<'a> {
    cancel: Option<&'a AtomicBool>,
}

impl<'a> ExactColoring<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts the search with [`Error::Cancelled`] once `flag` is set
    pub fn cancel_on(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Returns an optimal color per node, or `None` if cancelled
    fn search(&self, graph: &AdjacencyMap) -> Option<Vec<Color>> {
        let n = graph.len();
        if n == 0 {
            return Some(Vec::new());
        }

        for m in 1..=n as Color {
            match self.try_with(graph, m) {
                Probe::Colored(colors) => {
                    tracing::debug!(chromatic_number = m, "exact coloring found");
                    return Some(colors);
                }
                Probe::Infeasible => tracing::trace!(colors = m, "not colorable"),
                Probe::Cancelled => return None,
            }
        }

        // unreachable as `m = n` always succeeds
        Some((1..=n as Color).collect())
    }

    /// Backtracking over nodes `0..n` with colors `1..=m`
    fn try_with(&self, graph: &AdjacencyMap, m: Color) -> Probe {
        let n = graph.len();
        let mut colors = vec![0 as Color; n];
        let mut i = 0usize;

        loop {
            if self.is_cancelled() {
                return Probe::Cancelled;
            }

            let u = i as Node;
            let next =
                (colors[i] + 1..=m).find(|&c| neighbor_colors(graph, &colors, u).all(|x| x != c));

            match next {
                Some(c) => {
                    colors[i] = c;
                    i += 1;
                    if i == n {
                        return Probe::Colored(colors);
                    }
                }
                None => {
                    colors[i] = 0;
                    if i == 0 {
                        return Probe::Infeasible;
                    }
                    i -= 1;
                }
            }
        }
    }

    /// Like [`ColoringAlgorithm::color_nodes`] but infallible when no cancel flag is set
    pub fn try_assign(&self, graph: &AdjacencyMap) -> Result<Vec<Color>> {
        self.search(graph).ok_or(Error::Cancelled)
    }
}

enum Probe {
    Colored(Vec<Color>),
    Infeasible,
    Cancelled,
}

impl ColoringAlgorithm for ExactColoring<'_> {
    fn color_nodes(&self, graph: &AdjacencyMap) -> Result<Vec<Color>> {
        self.try_assign(graph)
    }
}

/// Colors the undirected interpretation of the graph with the minimum number of colors
pub fn backtracking_coloring(vertices: &[Vertex], edges: &[GraphEdge]) -> Coloring {
    let graph = build_adjacency(vertices, edges, false);
    // without a cancel flag the search always completes
    let colors = ExactColoring::new()
        .search(&graph)
        .unwrap_or_else(|| (1..=graph.number_of_nodes()).collect());
    Coloring::from_node_colors(&graph, &colors)
}
