/*!
# Adjacency Representation

[`AdjacencyMap`] is the single graph representation all algorithms run on. It is built
fresh from a vertex list, an edge list and an explicit directedness flag:

- every vertex gets a (possibly empty) neighbor list, in vertex input order,
- each edge `(s, t)` appends `t` to the list of `s`, and for undirected graphs also `s` to
  the list of `t`,
- edges that reference unknown vertices are skipped silently,
- self-loops are kept; an undirected loop lists its vertex twice in its own list.

Each neighbor entry is an [`Arc`] that remembers which edge it stems from, so algorithms that
consume edges (Hierholzer) can track edge identity rather than endpoint pairs.

```rust
use graphtour::prelude::*;

let mut graph = Graph::new(false);
for key in ["A", "B", "C"] {
    graph.add_vertex(Vertex::new(key));
}
graph.add_edge("A", "B");
graph.add_edge("B", "C");
graph.add_edge("C", "Z"); // unknown endpoint, skipped

let adj = build_adjacency(&graph.vertices, &graph.edges, false);
assert_eq!(adj.number_of_edges(), 2);
assert_eq!(adj.to_key_map()["B"], vec!["A".to_string(), "C".to_string()]);
```
*/

mod keys;

pub use keys::*;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::{
    edge::*,
    model::{Graph, GraphEdge, Vertex},
    node::*,
    ops::*,
};

/// A neighbor entry: the neighbor itself and the edge leading there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arc {
    pub head: Node,
    pub edge: EdgeIndex,
}

/// Neighbor list of a single vertex; most vertices in the targeted graphs have few neighbors
pub type ArcNeighborhood = SmallVec<[Arc; 4]>;

/// Adjacency lists over dense node indices plus the key index to translate back
#[derive(Debug, Clone)]
pub struct AdjacencyMap {
    index: KeyIndex,
    nbs: Vec<ArcNeighborhood>,
    edge_ids: Vec<String>,
    directed: bool,
}

impl AdjacencyMap {
    /// Builds the adjacency representation of the given vertices and edges.
    /// Per-edge directedness flags are ignored in favor of `directed`.
    pub fn build(vertices: &[Vertex], edges: &[GraphEdge], directed: bool) -> Self {
        let index = KeyIndex::from_vertices(vertices);
        let mut adj = Self {
            nbs: vec![ArcNeighborhood::new(); index.len() as usize],
            index,
            edge_ids: Vec::with_capacity(edges.len()),
            directed,
        };

        for edge in edges {
            let (Some(u), Some(v)) = (
                adj.index.node_of(&edge.source),
                adj.index.node_of(&edge.target),
            ) else {
                tracing::trace!(edge = %edge.id, source = %edge.source, target = %edge.target, "edge references unknown vertex, skipped");
                continue;
            };

            let e = adj.edge_ids.len() as EdgeIndex;
            adj.nbs[u as usize].push(Arc { head: v, edge: e });
            if !directed {
                adj.nbs[v as usize].push(Arc { head: u, edge: e });
            }

            adj.edge_ids.push(edge.id.clone());
        }

        tracing::debug!(
            vertices = adj.number_of_nodes(),
            edges = adj.number_of_edges(),
            skipped = edges.len() - adj.edge_ids.len(),
            directed,
            "built adjacency"
        );

        adj
    }

    /// Builds the adjacency representation of a graph snapshot using its own directedness
    pub fn from_graph(graph: &Graph) -> Self {
        Self::build(&graph.vertices, &graph.edges, graph.directed)
    }

    /// Returns the key index of the vertices
    pub fn key_index(&self) -> &KeyIndex {
        &self.index
    }

    /// Returns the key of `u`
    /// ** Panics if `u >= n` **
    pub fn key_of(&self, u: Node) -> &str {
        self.index.key_of(u)
    }

    /// Returns the node of `key` if the vertex exists
    pub fn node_of(&self, key: &str) -> Option<Node> {
        self.index.node_of(key)
    }

    /// Returns the caller's id of an accepted edge
    /// ** Panics if `e >= m` **
    pub fn edge_id(&self, e: EdgeIndex) -> &str {
        &self.edge_ids[e as usize]
    }

    /// Returns the neighbor keys of `key` in insertion order, or `None` for unknown keys
    pub fn neighbor_keys(&self, key: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let u = self.node_of(key)?;
        Some(self.neighbors_of(u).map(|v| self.key_of(v)))
    }

    /// Returns the adjacency as an ordered map `key -> neighbor keys`.
    /// Every vertex has an entry, even if its list is empty.
    pub fn to_key_map(&self) -> IndexMap<VertexKey, Vec<VertexKey>> {
        self.vertices()
            .map(|u| {
                (
                    self.key_of(u).to_string(),
                    self.index.keys_of(self.neighbors_of(u)),
                )
            })
            .collect()
    }
}

/// Builds the adjacency representation honoring `directed`; see [`AdjacencyMap::build`]
pub fn build_adjacency(vertices: &[Vertex], edges: &[GraphEdge], directed: bool) -> AdjacencyMap {
    AdjacencyMap::build(vertices, edges, directed)
}

impl GraphNodeOrder for AdjacencyMap {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjacencyMap {
    fn number_of_edges(&self) -> NumEdges {
        self.edge_ids.len() as NumEdges
    }
}

impl GraphType for AdjacencyMap {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl AdjacencyList for AdjacencyMap {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|arc| arc.head)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl ArcList for AdjacencyMap {
    fn arcs_of(&self, u: Node) -> &[Arc] {
        &self.nbs[u as usize]
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    fn graph(keys: &[&str], edges: &[(&str, &str)]) -> (Vec<Vertex>, Vec<GraphEdge>) {
        let vertices = keys.iter().map(|&k| Vertex::new(k)).collect_vec();
        let edges = edges
            .iter()
            .enumerate()
            .map(|(i, &(s, t))| GraphEdge::new(format!("e{i}"), s, t, false))
            .collect_vec();
        (vertices, edges)
    }

    #[test]
    fn undirected_mirrors_edges() {
        let (vertices, edges) = graph(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C")]);
        let adj = build_adjacency(&vertices, &edges, false);

        assert!(adj.is_undirected());
        assert_eq!(adj.number_of_nodes(), 4);
        assert_eq!(adj.number_of_edges(), 2);

        let map = adj.to_key_map();
        assert_eq!(map.keys().collect_vec(), ["A", "B", "C", "D"]);
        assert_eq!(map["A"], ["B"]);
        assert_eq!(map["B"], ["A", "C"]);
        assert_eq!(map["C"], ["B"]);
        assert!(map["D"].is_empty());

        assert_eq!(adj.arcs_of(1)[1], Arc { head: 2, edge: 1 });
        assert_eq!(adj.edge_id(1), "e1");
    }

    #[test]
    fn directed_keeps_orientation() {
        let (vertices, edges) = graph(&["A", "B"], &[("A", "B"), ("A", "B"), ("B", "B")]);
        let adj = build_adjacency(&vertices, &edges, true);

        assert!(adj.is_directed());
        assert_eq!(adj.neighbor_keys("A").unwrap().collect_vec(), ["B", "B"]);
        assert_eq!(adj.neighbor_keys("B").unwrap().collect_vec(), ["B"]);
        assert!(adj.neighbor_keys("Z").is_none());
    }

    #[test]
    fn unknown_endpoints_are_skipped() {
        let (vertices, edges) = graph(&["A", "B"], &[("A", "X"), ("Y", "B"), ("A", "B")]);
        let adj = build_adjacency(&vertices, &edges, false);

        assert_eq!(adj.number_of_edges(), 1);
        assert_eq!(adj.edge_id(0), "e2");
        assert_eq!(adj.degrees().collect_vec(), [1, 1]);
    }

    #[test]
    fn undirected_loop_is_listed_twice() {
        let (vertices, edges) = graph(&["A"], &[("A", "A")]);
        let adj = build_adjacency(&vertices, &edges, false);

        assert_eq!(adj.degree_of(0), 2);
        assert_eq!(adj.neighbors_of(0).collect_vec(), [0, 0]);
    }

    #[test]
    fn descending_degree_order_is_stable() {
        let (vertices, edges) = graph(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("C", "D"), ("C", "B")],
        );
        let adj = build_adjacency(&vertices, &edges, false);

        assert_eq!(adj.vertices_by_descending_degree(), [1, 2, 0, 3]);
        assert_eq!(adj.max_degree(), 2);
        assert_eq!(adj.vertices_with_neighbors().count(), 4);
    }
}
