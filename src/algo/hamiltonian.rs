/*!
# Hamiltonian Paths

Depth-first backtracking search for a path that visits every vertex exactly once.

Every vertex is tried as origin in input order; the partial path is extended by neighbors in
adjacency-list order and the first complete path is returned. The search is exponential in
the worst case and meant for graphs with tens of vertices.

Instead of recursing, the search keeps an explicit frame per path position holding the index
of the next arc to try. This bounds the stack usage and allows cooperative cancellation via
[`HamiltonianSearch::cancel_on`]:

```rust
use std::sync::atomic::AtomicBool;
use graphtour::{algo::*, gens::*, prelude::*};

let mut graph = Graph::new(false);
graph.connect_path(["A", "B", "C", "D", "E"]);
let adj = AdjacencyMap::from_graph(&graph);

let stop = AtomicBool::new(false);
let result = HamiltonianSearch::new().cancel_on(&stop).run(&adj).unwrap();
assert_eq!(result.path, ["A", "B", "C", "D", "E"]);
```

The graph without vertices is considered to have the (empty) Hamiltonian path.
*/

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use super::*;
use crate::error::{Error, Result};

/// Outcome of a single search
enum Search {
    Found(Vec<Node>),
    Exhausted,
    Cancelled,
}

/// Configurable backtracking search
#[derive(Debug, Clone, Copy, Default)]
pub struct HamiltonianSearch<'a> {
    cancel: Option<&'a AtomicBool>,
}

impl<'a> HamiltonianSearch<'a> {
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

    /// Runs the search on `graph`
    pub fn run(&self, graph: &AdjacencyMap) -> Result<HamiltonianResult> {
        match self.search(graph) {
            Search::Found(path) => Ok(HamiltonianResult::found(graph, path)),
            Search::Exhausted => Ok(HamiltonianResult::not_found()),
            Search::Cancelled => Err(Error::Cancelled),
        }
    }

    fn search<G: ArcList>(&self, graph: &G) -> Search {
        let n = graph.len();
        let mut visited = graph.vertex_bitset_unset();
        let mut path: Vec<Node> = Vec::with_capacity(n);
        // frames[i] is the next arc of path[i] to try
        let mut frames: Vec<usize> = Vec::with_capacity(n);

        if n == 0 {
            return Search::Found(path);
        }

        for origin in graph.vertices() {
            visited.set(origin as usize, true);
            path.push(origin);
            frames.push(0);

            while let (Some(&u), Some(cursor)) = (path.last(), frames.last_mut()) {
                if path.len() == n {
                    return Search::Found(path);
                }
                if self.is_cancelled() {
                    return Search::Cancelled;
                }

                let arcs = graph.arcs_of(u);
                let mut next = None;
                while let Some(arc) = arcs.get(*cursor) {
                    *cursor += 1;
                    if !visited[arc.head as usize] {
                        next = Some(arc.head);
                        break;
                    }
                }

                if let Some(v) = next {
                    visited.set(v as usize, true);
                    path.push(v);
                    frames.push(0);
                } else {
                    visited.set(u as usize, false);
                    path.pop();
                    frames.pop();
                }
            }
        }

        Search::Exhausted
    }
}

/// Result of [`find_hamiltonian_path`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HamiltonianResult {
    pub exists: bool,
    pub path: Vec<VertexKey>,
    pub message: String,
}

impl HamiltonianResult {
    fn found(graph: &AdjacencyMap, path: Vec<Node>) -> Self {
        Self {
            exists: true,
            path: graph.key_index().keys_of(path),
            message: "Hamiltonian Path found.".to_string(),
        }
    }

    fn not_found() -> Self {
        Self {
            exists: false,
            path: Vec::new(),
            message: "No Hamiltonian Path found.".to_string(),
        }
    }
}

/// Searches a path visiting every vertex exactly once
pub fn find_hamiltonian_path(
    vertices: &[Vertex],
    edges: &[GraphEdge],
    directed: bool,
) -> HamiltonianResult {
    let adjacency = build_adjacency(vertices, edges, directed);
    let result = match HamiltonianSearch::new().search(&adjacency) {
        Search::Found(path) => HamiltonianResult::found(&adjacency, path),
        Search::Exhausted | Search::Cancelled => HamiltonianResult::not_found(),
    };

    tracing::debug!(
        vertices = adjacency.number_of_nodes(),
        exists = result.exists,
        "hamiltonian search finished"
    );
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, model::Graph};

    fn hamiltonian(graph: &Graph) -> HamiltonianResult {
        find_hamiltonian_path(&graph.vertices, &graph.edges, graph.directed)
    }

    #[test]
    fn chain() {
        let mut graph = Graph::new(false);
        graph.connect_path(["A", "B", "C", "D", "E"]);

        let result = hamiltonian(&graph);
        assert!(result.exists);
        assert_eq!(result.path, ["A", "B", "C", "D", "E"]);
        assert_eq!(result.message, "Hamiltonian Path found.");
    }

    #[test]
    fn chain_from_the_middle() {
        // "C" comes first, so the search has to backtrack to another origin
        let mut graph = Graph::new(false);
        for key in ["C", "A", "B", "D", "E"] {
            graph.add_vertex(Vertex::new(key));
        }
        graph.connect_path(["A", "B", "C", "D", "E"]);

        let result = hamiltonian(&graph);
        assert!(result.exists);
        assert_eq!(result.path, ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn complete_graphs() {
        for n in 1..8 {
            let keys = (0..n).map(|i| format!("v{i}")).collect::<Vec<_>>();
            for directed in [false, true] {
                let mut graph = Graph::new(directed);
                graph.connect_clique(keys.iter().map(String::as_str));

                let result = hamiltonian(&graph);
                assert!(result.exists);
                assert_eq!(result.path.len(), n);
            }
        }
    }

    #[test]
    fn isolated_vertex_fails() {
        let mut graph = Graph::new(false);
        graph.connect_clique(["A", "B", "C"]);
        graph.add_vertex(Vertex::new("D"));

        let result = hamiltonian(&graph);
        assert!(!result.exists);
        assert!(result.path.is_empty());
        assert_eq!(result.message, "No Hamiltonian Path found.");
    }

    #[test]
    fn direction_matters() {
        let mut graph = Graph::new(true);
        graph.connect_star("X", ["A", "B"]);
        assert!(!hamiltonian(&graph).exists);

        graph.add_edge("A", "X");
        assert_eq!(hamiltonian(&graph).path, ["A", "X", "B"]);
    }

    #[test]
    fn empty_graph_is_vacuous() {
        let result = hamiltonian(&Graph::new(false));
        assert!(result.exists);
        assert!(result.path.is_empty());
    }

    #[test]
    fn cancellation() {
        let mut graph = Graph::new(false);
        graph.connect_cycle(["A", "B", "C", "D"]);
        let adj = AdjacencyMap::from_graph(&graph);

        let flag = AtomicBool::new(true);
        let search = HamiltonianSearch::new().cancel_on(&flag);
        assert!(matches!(search.run(&adj), Err(Error::Cancelled)));

        flag.store(false, Ordering::Relaxed);
        let result = search.run(&adj).unwrap();
        assert_eq!(result.path, ["A", "B", "C", "D"]);
    }
}
