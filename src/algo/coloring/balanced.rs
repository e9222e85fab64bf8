use fxhash::FxHashSet;

use super::*;

/// Load-distributing coloring for timetabling, where colors are a bounded number of slots.
///
/// Vertices are processed in descending-degree order (ties in input order). Each vertex gets,
/// among the slots `1..=max_slots` free of its neighbors, the one used least so far, with ties
/// going to the smallest slot. This spreads vertices evenly over the week instead of packing
/// them into the first slots.
///
/// If every slot is taken by a neighbor, the vertex overflows to the smallest free color above
/// `max_slots`. Overflow colors are not balanced.
#[derive(Debug, Clone, Copy)]
pub struct BalancedColoring {
    max_slots: Color,
}

impl Default for BalancedColoring {
    fn default() -> Self {
        Self {
            max_slots: DEFAULT_MAX_SLOTS,
        }
    }
}

impl BalancedColoring {
    /// Creates a new coloring with [`DEFAULT_MAX_SLOTS`] slots
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the number of regular slots
    pub fn max_slots(mut self, max_slots: Color) -> Self {
        self.max_slots = max_slots;
        self
    }

    /// Returns a color per node
    pub fn assign(&self, graph: &AdjacencyMap) -> Vec<Color> {
        let mut colors = vec![0 as Color; graph.len()];
        let mut usage = vec![0usize; self.max_slots as usize + 1];
        let mut overflows = 0usize;

        for u in graph.vertices_by_descending_degree() {
            let taken: FxHashSet<Color> = neighbor_colors(graph, &colors, u)
                .filter(|&c| c > 0)
                .collect();

            let slot = (1..=self.max_slots)
                .filter(|s| !taken.contains(s))
                .min_by_key(|&s| (usage[s as usize], s));

            colors[u as usize] = match slot {
                Some(slot) => {
                    usage[slot as usize] += 1;
                    slot
                }
                None => {
                    overflows += 1;
                    smallest_free_color_from(self.max_slots + 1, taken.iter().copied())
                }
            };
        }

        if overflows > 0 {
            tracing::warn!(
                overflows,
                max_slots = self.max_slots,
                "vertices did not fit into the available slots"
            );
        }

        colors
    }
}

impl ColoringAlgorithm for BalancedColoring {
    fn color_nodes(&self, graph: &AdjacencyMap) -> Result<Vec<Color>> {
        Ok(self.assign(graph))
    }
}

/// Colors the undirected interpretation of the graph with [`BalancedColoring`]
pub fn balanced_coloring(vertices: &[Vertex], edges: &[GraphEdge], max_slots: Color) -> Coloring {
    let graph = build_adjacency(vertices, edges, false);
    Coloring::from_node_colors(
        &graph,
        &BalancedColoring::new().max_slots(max_slots).assign(&graph),
    )
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;
    use crate::{gens::*, model::Graph};

    fn isolated(n: usize) -> Graph {
        let mut graph = Graph::new(false);
        for i in 0..n {
            graph.add_vertex(Vertex::new(format!("v{i}")));
        }
        graph
    }

    #[test]
    fn round_robin_on_isolated_vertices() {
        let graph = isolated(12);
        let coloring = balanced_coloring(&graph.vertices, &graph.edges, 5);

        assert_eq!(
            coloring.colors.values().copied().collect_vec(),
            [1, 2, 3, 4, 5, 1, 2, 3, 4, 5, 1, 2]
        );
        assert_eq!(coloring.usage(), [0, 3, 3, 2, 2, 2]);
    }

    #[test]
    fn fewer_vertices_than_slots_are_distinct() {
        let graph = isolated(7);
        let coloring = balanced_coloring(&graph.vertices, &graph.edges, DEFAULT_MAX_SLOTS);
        assert_eq!(coloring.number_of_colors(), 7);
        assert_eq!(coloring.max_color, 7);
    }

    #[test]
    fn overflow_beyond_max_slots() {
        let mut graph = Graph::new(false);
        graph.connect_clique(["A", "B", "C", "D"]);

        let coloring = balanced_coloring(&graph.vertices, &graph.edges, 2);
        assert!(coloring.is_proper(&graph.edges));
        assert_eq!(coloring.max_color, 4);
        assert_eq!(coloring.color_of("C"), Some(3));
        assert_eq!(coloring.color_of("D"), Some(4));
    }

    #[test]
    fn zero_slots_overflow_everything() {
        let mut graph = Graph::new(false);
        graph.connect_path(["A", "B"]);

        let coloring = balanced_coloring(&graph.vertices, &graph.edges, 0);
        assert!(coloring.is_proper(&graph.edges));
        assert_eq!(coloring.max_color, 2);
    }
}
