/*!
# Graph Model

Plain data describing a graph as supplied by a caller: a vertex list, an edge list and a
single graph-level directedness mode. The model carries no algorithmic behavior; every
algorithm builds its own [`AdjacencyMap`](crate::repr::AdjacencyMap) from a snapshot of it
and never mutates the caller's data.

Optional fields (labels, colors, widths) exist only for the caller's benefit and are ignored
by all algorithms.
*/

use serde::{Deserialize, Serialize};

use crate::{algo::Coloring, node::VertexKey};

/// A color or time slot. Valid colors are `1..`, `0` is never assigned.
pub type Color = u32;

/// A vertex identified by a unique key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub key: VertexKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Vertex {
    pub fn new<S: Into<VertexKey>>(key: S) -> Self {
        Self {
            key: key.into(),
            label: None,
            color: None,
        }
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the label if present and the key otherwise
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

/// An edge between two vertex keys.
///
/// `directed` and the visualization fields are preserved for the caller; the algorithms only
/// honor the directedness passed to them explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: VertexKey,
    pub target: VertexKey,
    #[serde(default)]
    pub directed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl GraphEdge {
    pub fn new<I, S, T>(id: I, source: S, target: T, directed: bool) -> Self
    where
        I: Into<String>,
        S: Into<VertexKey>,
        T: Into<VertexKey>,
    {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            directed,
            color: None,
            width: None,
        }
    }

    /// Returns *true* if source and target coincide
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A snapshot of a graph: vertices, edges and the graph-level directedness
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
    #[serde(default)]
    pub directed: bool,
}

impl Graph {
    /// Creates an empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            directed,
        }
    }

    /// Returns the number of vertices
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if a vertex with the given key exists
    pub fn has_vertex(&self, key: &str) -> bool {
        self.vertices.iter().any(|v| v.key == key)
    }

    /// Returns the vertex with the given key
    pub fn vertex(&self, key: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.key == key)
    }

    /// Adds a vertex unless one with the same key already exists.
    /// Returns *true* if the vertex was already present.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.has_vertex(&vertex.key) {
            return true;
        }
        self.vertices.push(vertex);
        false
    }

    /// Adds the edge `(source, target)` with the next free id `e{i}`, inheriting the
    /// graph's directedness. Returns the id of the new edge.
    ///
    /// Endpoints are not required to exist; unknown endpoints are skipped by the algorithms.
    pub fn add_edge<S, T>(&mut self, source: S, target: T) -> String
    where
        S: Into<VertexKey>,
        T: Into<VertexKey>,
    {
        let mut i = self.edges.len();
        let mut id = format!("e{i}");
        while self.edges.iter().any(|e| e.id == id) {
            i += 1;
            id = format!("e{i}");
        }

        self.edges
            .push(GraphEdge::new(id.clone(), source, target, self.directed));
        id
    }

    /// Returns a copy of the graph whose vertices carry the colors of `coloring`.
    /// Vertices missing from the coloring lose their color.
    pub fn with_coloring(&self, coloring: &Coloring) -> Graph {
        let mut graph = self.clone();
        for vertex in &mut graph.vertices {
            vertex.color = coloring.color_of(&vertex.key);
        }
        graph
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn edge_ids_stay_unique() {
        let mut graph = Graph::new(false);
        assert!(!graph.add_vertex(Vertex::new("A")));
        assert!(!graph.add_vertex(Vertex::new("B").with_label("Bee")));
        assert!(graph.add_vertex(Vertex::new("A")));

        assert_eq!(graph.add_edge("A", "B"), "e0");
        graph.edges.push(GraphEdge::new("e2", "B", "A", false));
        assert_eq!(graph.add_edge("B", "B"), "e3");

        assert_eq!(graph.number_of_vertices(), 2);
        assert_eq!(graph.number_of_edges(), 3);
        assert!(graph.edges[2].is_loop());
        assert_eq!(graph.vertex("B").map(Vertex::display_name), Some("Bee"));
        assert_eq!(graph.vertex("A").map(Vertex::display_name), Some("A"));
    }

    #[test]
    fn json_shape() {
        let json = r#"{
            "vertices": [{"key": "A"}, {"key": "B", "label": "Bee"}],
            "edges": [{"id": "x", "source": "A", "target": "B", "width": 2.0}],
            "directed": true
        }"#;

        let graph: Graph = serde_json::from_str(json).unwrap();
        assert!(graph.directed);
        assert_eq!(graph.vertices[1].label.as_deref(), Some("Bee"));
        assert!(!graph.edges[0].directed);
        assert_eq!(graph.edges[0].width, Some(2.0));
        assert_eq!(graph.edges[0].color, None);
    }
}
