/*!
# Eulerian Paths and Circuits

Classification of a graph's Eulerian status from its degrees, followed by the construction of
the trail with Hierholzer's algorithm.

**Directed graphs** are classified by `out - in` of every vertex:
- all vertices balanced: a *circuit* exists, starting at the first vertex with edges,
- exactly one vertex with `+1` and one with `-1`: a *path* exists, starting at the `+1` vertex,
- anything else (in particular any `|out - in| > 1`): no trail.

**Undirected graphs** are classified by the number of odd-degree vertices: `0` yields a
circuit, `2` a path starting at the first odd vertex, everything else no trail.

Degree conditions do not see connectivity. If they hold but the edges spread over several
components, Hierholzer cannot consume every edge from the start vertex; such graphs are
reported as having no trail.

```rust
use graphtour::{algo::*, gens::*, prelude::*};

let mut graph = Graph::new(false);
graph.connect_cycle(["A", "B", "C", "D"]);

let euler = check_euler(&graph.vertices, &graph.edges, false);
assert!(euler.exists && euler.is_circuit);
assert_eq!(euler.path.len(), 5);
assert_eq!(euler.path.first(), euler.path.last());
```
*/

use serde::{Deserialize, Serialize};

use super::*;

/// Why a graph has no Euler trail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulerObstruction {
    /// A vertex of a directed graph has `|out - in| > 1`
    DegreeMismatch,
    /// A directed graph has the wrong number of unbalanced vertices
    Unbalanced,
    /// An undirected graph has this many odd-degree vertices (neither 0 nor 2)
    OddVertices(usize),
    /// Degree conditions hold but not all edges are reachable from the start vertex
    Disconnected,
}

/// Outcome of the degree-based classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulerStatus {
    /// Every vertex is balanced (even). `start` is `None` only for the empty graph.
    Circuit { start: Option<Node> },
    /// Exactly one start and one end vertex are unbalanced (odd)
    Path { start: Node },
    /// No trail exists
    Impossible(EulerObstruction),
}

impl EulerStatus {
    fn message(&self, directed: bool) -> String {
        match (self, directed) {
            (EulerStatus::Circuit { .. }, true) => {
                "Euler Circuit exists (All vertices balanced).".to_string()
            }
            (EulerStatus::Circuit { .. }, false) => {
                "Euler Circuit exists (All vertices even degree).".to_string()
            }
            (EulerStatus::Path { .. }, true) => "Euler Path exists.".to_string(),
            (EulerStatus::Path { .. }, false) => "Euler Path exists (2 odd vertices).".to_string(),
            (EulerStatus::Impossible(obstruction), _) => match obstruction {
                EulerObstruction::DegreeMismatch => {
                    "Degrees do not satisfy Euler conditions.".to_string()
                }
                EulerObstruction::Unbalanced => "No Euler Path/Circuit.".to_string(),
                EulerObstruction::OddVertices(k) => {
                    format!("No Euler Path/Circuit ({k} odd vertices).")
                }
                EulerObstruction::Disconnected => {
                    "No Euler Path/Circuit (edges span more than one component).".to_string()
                }
            },
        }
    }
}

/// Degree-based Euler classification
pub trait EulerClassification: AdjacencyList + GraphType {
    /// Classifies the graph by its degrees; see the module documentation for the rules.
    fn euler_status(&self) -> EulerStatus;
}

impl<G> EulerClassification for G
where
    G: AdjacencyList + GraphType,
{
    fn euler_status(&self) -> EulerStatus {
        let circuit = || EulerStatus::Circuit {
            start: self
                .first_vertex_with_neighbors()
                .or_else(|| self.vertices().next()),
        };

        if self.is_undirected() {
            let odd = self.odd_degree_vertices();
            return match odd.len() {
                0 => circuit(),
                2 => EulerStatus::Path { start: odd[0] },
                k => EulerStatus::Impossible(EulerObstruction::OddVertices(k)),
            };
        }

        let mut start = None;
        let mut num_starts = 0usize;
        let mut num_ends = 0usize;
        for (u, degree) in self.degree_records().into_iter().enumerate() {
            match degree.excess() {
                0 => {}
                1 => {
                    num_starts += 1;
                    start.get_or_insert(u as Node);
                }
                -1 => num_ends += 1,
                _ => return EulerStatus::Impossible(EulerObstruction::DegreeMismatch),
            }
        }

        match (num_starts, num_ends, start) {
            (0, 0, _) => circuit(),
            (1, 1, Some(start)) => EulerStatus::Path { start },
            _ => EulerStatus::Impossible(EulerObstruction::Unbalanced),
        }
    }
}

/// A walk in node indices together with the edges it traverses.
/// `edges[i]` connects `nodes[i]` and `nodes[i + 1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EulerTrail {
    pub nodes: Vec<Node>,
    pub edges: Vec<EdgeIndex>,
}

/// Iterative Hierholzer's algorithm.
///
/// Every node keeps a cursor into its (immutable) arc list, and a global bitset marks consumed
/// edges. An undirected edge is reachable from both endpoints but is consumed the first time
/// it is traversed from either of them.
pub struct Hierholzer<'a, G>
where
    G: ArcList + GraphEdgeOrder,
{
    graph: &'a G,
    cursors: Vec<usize>,
    used: EdgeBitSet,
}

impl<'a, G> Hierholzer<'a, G>
where
    G: ArcList + GraphEdgeOrder,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            cursors: vec![0; graph.len()],
            used: graph.edge_bitset_unset(),
        }
    }

    /// Consumes and returns the next unused arc leaving `u`
    fn next_unused_arc(&mut self, u: Node) -> Option<Arc> {
        let graph = self.graph;
        let arcs = graph.arcs_of(u);
        let cursor = &mut self.cursors[u as usize];

        while let Some(arc) = arcs.get(*cursor) {
            *cursor += 1;
            if !self.used.replace(arc.edge as usize, true) {
                return Some(*arc);
            }
        }
        None
    }

    /// Builds the trail starting at `start` by consuming edges until the start's component
    /// is exhausted. If the degree conditions hold and all edges are reachable, the trail
    /// uses every edge exactly once.
    /// ** Panics if `start >= n` **
    pub fn trail_from(mut self, start: Node) -> EulerTrail {
        let m = self.graph.number_of_edges() as usize;
        let mut nodes = Vec::with_capacity(m + 1);
        let mut edges = Vec::with_capacity(m);

        let mut stack: Vec<(Node, Option<EdgeIndex>)> = vec![(start, None)];
        while let Some(&(u, via)) = stack.last() {
            if let Some(arc) = self.next_unused_arc(u) {
                stack.push((arc.head, Some(arc.edge)));
            } else {
                stack.pop();
                nodes.push(u);
                edges.extend(via);
            }
        }

        nodes.reverse();
        edges.reverse();
        EulerTrail { nodes, edges }
    }
}

/// Result of [`check_euler`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerResult {
    pub exists: bool,
    pub is_circuit: bool,
    pub message: String,
    pub start_vertex: Option<VertexKey>,
    /// Vertex keys of the trail; `|E| + 1` entries if a trail exists
    pub path: Vec<VertexKey>,
    /// Edge ids in traversal order; `edge_trail[i]` connects `path[i]` and `path[i + 1]`
    pub edge_trail: Vec<String>,
}

impl EulerResult {
    fn none(message: String) -> Self {
        Self {
            exists: false,
            is_circuit: false,
            message,
            start_vertex: None,
            path: Vec::new(),
            edge_trail: Vec::new(),
        }
    }

    /// Classifies `adjacency` and, if a trail exists, constructs it
    pub fn from_adjacency(adjacency: &AdjacencyMap) -> Self {
        let directed = adjacency.is_directed();
        let status = adjacency.euler_status();
        tracing::debug!(?status, directed, "euler classification");

        let (start, is_circuit) = match status {
            EulerStatus::Circuit { start: None } => {
                return Self {
                    exists: true,
                    is_circuit: true,
                    message: status.message(directed),
                    start_vertex: None,
                    path: Vec::new(),
                    edge_trail: Vec::new(),
                };
            }
            EulerStatus::Circuit { start: Some(start) } => (start, true),
            EulerStatus::Path { start } => (start, false),
            EulerStatus::Impossible(_) => return Self::none(status.message(directed)),
        };

        let trail = Hierholzer::new(adjacency).trail_from(start);
        if trail.edges.len() != adjacency.number_of_edges() as usize {
            tracing::debug!(
                consumed = trail.edges.len(),
                edges = adjacency.number_of_edges(),
                "trail does not cover all edges"
            );
            return Self::none(
                EulerStatus::Impossible(EulerObstruction::Disconnected).message(directed),
            );
        }

        Self {
            exists: true,
            is_circuit,
            message: status.message(directed),
            start_vertex: Some(adjacency.key_of(start).to_string()),
            path: adjacency.key_index().keys_of(trail.nodes),
            edge_trail: trail
                .edges
                .into_iter()
                .map(|e| adjacency.edge_id(e).to_string())
                .collect(),
        }
    }
}

/// Classifies the Eulerian status of the graph and constructs the path/circuit if one exists
pub fn check_euler(vertices: &[Vertex], edges: &[GraphEdge], directed: bool) -> EulerResult {
    EulerResult::from_adjacency(&build_adjacency(vertices, edges, directed))
}
