use super::*;

/// Welsh-Powell: vertices in descending-degree order (ties in input order) receive the
/// smallest color not used by an already colored neighbor. Uses at most `Δ + 1` colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyColoring;

impl GreedyColoring {
    pub fn new() -> Self {
        Self
    }

    /// Returns a color per node
    pub fn assign(&self, graph: &AdjacencyMap) -> Vec<Color> {
        let mut colors = vec![0; graph.len()];
        for u in graph.vertices_by_descending_degree() {
            colors[u as usize] = smallest_free_color(neighbor_colors(graph, &colors, u));
        }
        colors
    }
}

impl ColoringAlgorithm for GreedyColoring {
    fn color_nodes(&self, graph: &AdjacencyMap) -> Result<Vec<Color>> {
        Ok(self.assign(graph))
    }
}

/// Colors the undirected interpretation of the graph with [`GreedyColoring`]
pub fn greedy_coloring(vertices: &[Vertex], edges: &[GraphEdge]) -> Coloring {
    let graph = build_adjacency(vertices, edges, false);
    Coloring::from_node_colors(&graph, &GreedyColoring::new().assign(&graph))
}
