/*!
# Substructure Generators

Adds common motifs to an existing [`Graph`], addressed by vertex keys:

- **Paths** and **Cycles**
- **Cliques** and **Bicliques**
- **Stars**

Vertices that are mentioned but missing are appended in order of first mention, and every
edge gets the next free id and the graph's directedness.

# Example

```rust
use graphtour::{prelude::*, gens::*};

let mut g = Graph::new(false);
g.connect_path(["A", "B", "C"]);
g.connect_cycle(["C", "D", "E"]);

assert_eq!(g.number_of_vertices(), 5);
assert_eq!(g.number_of_edges(), 5);
assert_eq!(g.edges[2].source, "C");
assert_eq!(g.edges[4].target, "C");
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing graph
pub trait GeneratorSubstructures {
    /// Connects the given vertices in order with a **simple path**.
    fn connect_path<P>(&mut self, keys: P)
    where
        P: IntoIterator<Item: Into<VertexKey>>;

    /// Connects the given vertices with a **cycle**: consecutive vertices are connected, and
    /// the last vertex is connected back to the first. A single vertex receives a self-loop.
    fn connect_cycle<C>(&mut self, keys: C)
    where
        C: IntoIterator<Item: Into<VertexKey>>;

    /// Connects all given vertices into a **clique** without self-loops.
    /// Directed graphs receive both orientations of every pair.
    fn connect_clique<C>(&mut self, keys: C)
    where
        C: IntoIterator<Item: Into<VertexKey>>;

    /// Connects `center` to every leaf
    fn connect_star<L>(&mut self, center: impl Into<VertexKey>, leaves: L)
    where
        L: IntoIterator<Item: Into<VertexKey>>;

    /// Connects every vertex of `left` to every vertex of `right`
    fn connect_biclique<A, B>(&mut self, left: A, right: B)
    where
        A: IntoIterator<Item: Into<VertexKey>>,
        B: IntoIterator<Item: Into<VertexKey>>;
}

/// Adds all missing vertices and returns the keys in the given order
fn mention<I>(graph: &mut Graph, keys: I) -> Vec<VertexKey>
where
    I: IntoIterator<Item: Into<VertexKey>>,
{
    keys.into_iter()
        .map(|key| {
            let key: VertexKey = key.into();
            graph.add_vertex(Vertex::new(key.clone()));
            key
        })
        .collect_vec()
}

impl GeneratorSubstructures for Graph {
    fn connect_path<P>(&mut self, keys: P)
    where
        P: IntoIterator<Item: Into<VertexKey>>,
    {
        for (u, v) in mention(self, keys).into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, keys: C)
    where
        C: IntoIterator<Item: Into<VertexKey>>,
    {
        let keys = mention(self, keys);
        if let Some(first) = keys.first() {
            for (u, v) in keys.iter().tuple_windows() {
                self.add_edge(u.as_str(), v.as_str());
            }
            self.add_edge(keys[keys.len() - 1].as_str(), first.as_str());
        }
    }

    fn connect_clique<C>(&mut self, keys: C)
    where
        C: IntoIterator<Item: Into<VertexKey>>,
    {
        let keys = mention(self, keys);
        for (i, u) in keys.iter().enumerate() {
            for (j, v) in keys.iter().enumerate() {
                if i == j || (!self.directed && j < i) {
                    continue;
                }
                self.add_edge(u.as_str(), v.as_str());
            }
        }
    }

    fn connect_star<L>(&mut self, center: impl Into<VertexKey>, leaves: L)
    where
        L: IntoIterator<Item: Into<VertexKey>>,
    {
        let center: VertexKey = center.into();
        self.add_vertex(Vertex::new(center.clone()));
        for leaf in mention(self, leaves) {
            self.add_edge(center.as_str(), leaf);
        }
    }

    fn connect_biclique<A, B>(&mut self, left: A, right: B)
    where
        A: IntoIterator<Item: Into<VertexKey>>,
        B: IntoIterator<Item: Into<VertexKey>>,
    {
        let left = mention(self, left);
        let right = mention(self, right);
        for (u, v) in left.iter().cartesian_product(right.iter()) {
            self.add_edge(u.as_str(), v.as_str());
        }
    }
}
