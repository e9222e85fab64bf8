/*!
Breadth-first traversal over an adjacency representation.

[`BFS`] is a lazy iterator that yields nodes in the order they are discovered. Its
visited-set stays queryable after (or during) the sweep.
*/

use std::collections::VecDeque;

use super::*;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new BFS starting at `start`
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set(start as usize, true);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }

    /// Returns *true* if `u` was already discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for v in self.graph.neighbors_of(u) {
            if !self.visited.replace(v as usize, true) {
                self.queue.push_back(v);
            }
        }
        Some(u)
    }
}

/// Exposes traversal algorithms directly as methods on graph data structures
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a breadth-first search iterator starting at `start`
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}
