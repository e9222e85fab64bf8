use std::cmp::Reverse;

use fxhash::FxHashSet;

use super::*;

/// DSATUR: repeatedly colors the uncolored vertex with the most distinct colors among its
/// neighbors (its saturation), breaking ties by higher degree and then by input order. The
/// chosen vertex receives the smallest color not present in its neighborhood.
#[derive(Debug, Clone, Copy, Default)]
pub struct DsaturColoring;

impl DsaturColoring {
    pub fn new() -> Self {
        Self
    }

    /// Returns a color per node
    pub fn assign(&self, graph: &AdjacencyMap) -> Vec<Color> {
        let mut colors = vec![0 as Color; graph.len()];
        let mut saturation = vec![FxHashSet::<Color>::default(); graph.len()];

        for _ in graph.vertices() {
            let Some(u) = graph
                .vertices()
                .filter(|&u| colors[u as usize] == 0)
                .max_by_key(|&u| {
                    (
                        saturation[u as usize].len(),
                        graph.degree_of(u),
                        Reverse(u),
                    )
                })
            else {
                break;
            };

            let color = smallest_free_color(saturation[u as usize].iter().copied());
            colors[u as usize] = color;

            for v in graph.neighbors_of(u).filter(|&v| v != u) {
                saturation[v as usize].insert(color);
            }
        }

        colors
    }
}

impl ColoringAlgorithm for DsaturColoring {
    fn color_nodes(&self, graph: &AdjacencyMap) -> Result<Vec<Color>> {
        Ok(self.assign(graph))
    }
}

/// Colors the undirected interpretation of the graph with [`DsaturColoring`]
pub fn dsatur_coloring(vertices: &[Vertex], edges: &[GraphEdge]) -> Coloring {
    let graph = build_adjacency(vertices, edges, false);
    Coloring::from_node_colors(&graph, &DsaturColoring::new().assign(&graph))
}
