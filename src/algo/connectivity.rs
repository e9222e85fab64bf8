use super::*;

/// Reachability checks built on [`BFS`]
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns *true* if a BFS from the first node reaches every node.
    /// For directed graphs the search follows edge direction.
    /// The empty graph is connected.
    fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        self.bfs(0).count() == self.len()
    }

    /// Returns the first node in input order with a non-empty neighbor list
    fn first_vertex_with_neighbors(&self) -> Option<Node> {
        self.vertices_with_neighbors().next()
    }
}

impl<G: AdjacencyList> Connectivity for G {}

/// BFS from the first vertex of `vertices` over `adjacency`; returns *true* iff every vertex
/// of `vertices` is reached. An empty vertex list is vacuously connected.
///
/// This is a utility and not a precondition of the other algorithms: disconnected graphs
/// simply fail their respective existence checks.
pub fn is_connected(adjacency: &AdjacencyMap, vertices: &[Vertex]) -> bool {
    let Some(first) = vertices.first() else {
        return true;
    };
    let Some(start) = adjacency.node_of(&first.key) else {
        return false;
    };

    let mut bfs = adjacency.bfs(start);
    bfs.by_ref().for_each(drop);

    vertices.iter().all(|vertex| {
        adjacency
            .node_of(&vertex.key)
            .is_some_and(|u| bfs.did_visit_node(u))
    })
}
