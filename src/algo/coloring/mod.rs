/*!
# Vertex Coloring

Four strategies that assign positive colors to vertices such that no two adjacent vertices
share a color:

- [`GreedyColoring`]: Welsh-Powell, smallest free color in descending-degree order,
- [`ExactColoring`]: backtracking search for the chromatic number,
- [`DsaturColoring`]: most saturated vertex first,
- [`BalancedColoring`]: bounded number of slots, spreading vertices evenly across them.

Conflicts are always symmetric: every strategy colors the **undirected** interpretation of the
edge set, regardless of the graph's directedness. Self-loops are ignored, a vertex never
conflicts with itself.

All strategies produce the same result shape, a [`Coloring`]. Internally colors are computed
per node with `0` marking uncolored nodes; `0` never appears in a finished coloring.

```rust
use graphtour::{algo::*, gens::*, prelude::*};

let mut graph = Graph::new(false);
graph.connect_clique(["A", "B", "C", "D"]);

let coloring = greedy_coloring(&graph.vertices, &graph.edges);
assert_eq!(coloring.max_color, 4);
assert!(coloring.is_proper(&graph.edges));
```
*/

mod balanced;
mod dsatur;
mod exact;
mod greedy;

pub use balanced::*;
pub use dsatur::*;
pub use exact::*;
pub use greedy::*;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::*;
use crate::error::Result;

/// Number of slots of the default week grid (5 days a 10 hours)
pub const DEFAULT_MAX_SLOTS: Color = 50;

/// A color per vertex and the largest color used
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    /// Colors keyed by vertex, in vertex input order
    pub colors: IndexMap<VertexKey, Color>,
    /// Largest assigned color; `0` iff no vertex is colored
    pub max_color: Color,
}

impl Coloring {
    /// Translates per-node colors back to vertex keys
    pub fn from_node_colors(graph: &AdjacencyMap, node_colors: &[Color]) -> Self {
        debug_assert_eq!(node_colors.len(), graph.len());
        Self {
            colors: graph
                .vertices()
                .map(|u| (graph.key_of(u).to_string(), node_colors[u as usize]))
                .collect(),
            max_color: node_colors.iter().copied().max().unwrap_or(0),
        }
    }

    /// Returns the color of `key`, if the vertex is colored
    pub fn color_of(&self, key: &str) -> Option<Color> {
        self.colors.get(key).copied()
    }

    /// Returns the number of distinct colors in use
    pub fn number_of_colors(&self) -> usize {
        self.colors.values().collect::<fxhash::FxHashSet<_>>().len()
    }

    /// Returns how often each color is used, indexed by color up to the largest one assigned.
    /// Entry `0` counts uncolored entries and is zero for colorings produced by this crate.
    pub fn usage(&self) -> Vec<usize> {
        let largest = self.colors.values().copied().max().unwrap_or(0);
        let mut usage = vec![0; largest as usize + 1];
        for &c in self.colors.values() {
            usage[c as usize] += 1;
        }
        usage
    }

    /// Returns all non-loop edges whose endpoints are colored alike
    pub fn conflicts<'a>(&'a self, edges: &'a [GraphEdge]) -> impl Iterator<Item = &'a GraphEdge> {
        edges.iter().filter(|e| {
            !e.is_loop()
                && matches!(
                    (self.color_of(&e.source), self.color_of(&e.target)),
                    (Some(a), Some(b)) if a == b
                )
        })
    }

    /// Returns *true* if no edge connects two vertices of the same color
    pub fn is_proper(&self, edges: &[GraphEdge]) -> bool {
        self.conflicts(edges).next().is_none()
    }
}

/// A strategy that colors an undirected adjacency representation
pub trait ColoringAlgorithm {
    /// Returns a color per node, indexed by node
    fn color_nodes(&self, graph: &AdjacencyMap) -> Result<Vec<Color>>;

    /// Colors the undirected interpretation of the given vertices and edges
    fn color(&self, vertices: &[Vertex], edges: &[GraphEdge]) -> Result<Coloring> {
        let graph = build_adjacency(vertices, edges, false);
        let node_colors = self.color_nodes(&graph)?;
        let coloring = Coloring::from_node_colors(&graph, &node_colors);

        tracing::debug!(
            vertices = graph.number_of_nodes(),
            max_color = coloring.max_color,
            "coloring finished"
        );
        Ok(coloring)
    }
}

/// Selects one of the coloring strategies, e.g. from a configuration file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "strategy")]
pub enum ColoringStrategy {
    #[default]
    Greedy,
    Exact,
    Dsatur,
    Balanced {
        #[serde(default = "default_max_slots")]
        max_slots: Color,
    },
}

fn default_max_slots() -> Color {
    DEFAULT_MAX_SLOTS
}

impl ColoringStrategy {
    /// Colors the graph with the selected strategy
    pub fn color(&self, vertices: &[Vertex], edges: &[GraphEdge]) -> Coloring {
        match *self {
            Self::Greedy => greedy_coloring(vertices, edges),
            Self::Exact => backtracking_coloring(vertices, edges),
            Self::Dsatur => dsatur_coloring(vertices, edges),
            Self::Balanced { max_slots } => balanced_coloring(vertices, edges, max_slots),
        }
    }
}

/// Returns the colors of all neighbors of `u` except `u` itself; uncolored neighbors yield `0`
fn neighbor_colors<'a>(
    graph: &'a AdjacencyMap,
    colors: &'a [Color],
    u: Node,
) -> impl Iterator<Item = Color> + 'a {
    graph
        .neighbors_of(u)
        .filter(move |&v| v != u)
        .map(move |v| colors[v as usize])
}

/// Returns the smallest color `>= 1` not contained in `taken`; zeros are ignored
fn smallest_free_color<I>(taken: I) -> Color
where
    I: IntoIterator<Item = Color>,
{
    smallest_free_color_from(1, taken)
}

/// Returns the smallest color `>= first` not contained in `taken`
fn smallest_free_color_from<I>(first: Color, taken: I) -> Color
where
    I: IntoIterator<Item = Color>,
{
    let mut taken: SmallVec<[Color; 8]> = taken.into_iter().filter(|&c| c >= first).collect();
    taken.sort_unstable();
    taken.dedup();

    let mut candidate = first;
    for c in taken {
        if c != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}
