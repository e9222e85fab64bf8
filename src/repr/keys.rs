/*!
# Key Index

Maps the caller's string vertex keys to dense [`Node`] indices and back.
Nodes are assigned in order of first appearance, so iterating `0..n` reproduces the
vertex input order.
*/

use std::fmt;

use fxhash::FxHashMap;

use crate::{model::Vertex, node::*};

/// Bidirectional mapping `VertexKey <-> Node`
#[derive(Clone, Default)]
pub struct KeyIndex {
    keys: Vec<VertexKey>,
    nodes: FxHashMap<VertexKey, Node>,
}

impl KeyIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes the keys of all vertices; repeated keys keep their first node.
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let mut index = Self::new();
        for vertex in vertices {
            if index.try_insert(&vertex.key).is_none() {
                tracing::warn!(key = %vertex.key, "duplicate vertex key ignored");
            }
        }
        index
    }

    /// Inserts a key and returns its new node.
    /// Returns `None` if the key was already present.
    pub fn try_insert(&mut self, key: &str) -> Option<Node> {
        if self.nodes.contains_key(key) {
            return None;
        }

        let node = self.keys.len() as Node;
        self.keys.push(key.to_string());
        self.nodes.insert(key.to_string(), node);
        Some(node)
    }

    /// Returns the node of `key` if it is indexed
    pub fn node_of(&self, key: &str) -> Option<Node> {
        self.nodes.get(key).copied()
    }

    /// Returns the key of `u`
    /// ** Panics if `u >= n` **
    pub fn key_of(&self, u: Node) -> &str {
        &self.keys[u as usize]
    }

    /// Returns all keys in node order
    pub fn keys(&self) -> &[VertexKey] {
        &self.keys
    }

    /// Maps a sequence of nodes to owned keys
    pub fn keys_of<I>(&self, nodes: I) -> Vec<VertexKey>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes
            .into_iter()
            .map(|u| self.key_of(u).to_string())
            .collect()
    }

    /// Returns the number of indexed keys
    pub fn len(&self) -> NumNodes {
        self.keys.len() as NumNodes
    }

    /// Returns *true* if no key is indexed
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Debug for KeyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.keys.iter().enumerate())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let vertices = ["b", "a", "b", "c"].map(Vertex::new);
        let index = KeyIndex::from_vertices(&vertices);

        assert_eq!(index.len(), 3);
        assert_eq!(index.node_of("b"), Some(0));
        assert_eq!(index.node_of("a"), Some(1));
        assert_eq!(index.node_of("c"), Some(2));
        assert_eq!(index.node_of("d"), None);
        assert_eq!(index.key_of(2), "c");
        assert_eq!(index.keys_of([2, 0]), vec!["c".to_string(), "b".to_string()]);
    }
}
