/*!
`graphtour` analyzes small, string-keyed graphs:

- **Euler trails**: classification by degrees and construction with Hierholzer's algorithm,
- **Hamiltonian paths**: backtracking search with optional cancellation,
- **Vertex coloring**: greedy (Welsh-Powell), exact, DSATUR and a slot-balancing variant,
- **Connectivity**: breadth-first reachability,
- **Timetabling**: conflict graphs of classes, exams or course sections colored into a
  week grid.

# Representation

Callers describe a graph as a [`Graph`](model::Graph) model: a list of vertices with unique
string keys, a list of edges between keys, and one directedness flag for the whole graph.
Algorithms never work on the model directly. They build an
[`AdjacencyMap`](repr::AdjacencyMap) from a snapshot of it, which numbers the vertices
`0..n` in input order (`Node = u32`) and keeps, for every vertex, the list of neighbors
together with the edge each entry stems from. Results are translated back to keys.

### Directed vs Undirected

- In an **undirected** graph every edge is listed at both endpoints.
- In a **directed** graph an edge is only listed at its source.
- Coloring always uses the undirected interpretation, as conflicts are symmetric.

Edges referencing unknown vertices are skipped, self-loops and parallel edges are kept.

# Design

Algorithms are provided as configurable structs using the *Builder* / *Setter* pattern
(e.g. `BalancedColoring::new().max_slots(40)`) and, for the common cases, as plain functions
taking vertex and edge lists that return serializable, keyed results:

```rust
use graphtour::{prelude::*, gens::*};

let mut graph = Graph::new(false);
graph.connect_cycle(["A", "B", "C", "D"]);

let euler = graphtour::check_euler(&graph.vertices, &graph.edges, graph.directed);
assert!(euler.is_circuit);

let coloring = graphtour::dsatur_coloring(&graph.vertices, &graph.edges);
assert_eq!(coloring.max_color, 2);
```

"No trail" or "no path" are regular results carrying a message. Errors are reserved for
IO, cancelled searches and slot lookups outside a week grid.

# Usage

- [`prelude`] includes nodes, edges, the graph model, graph operation traits and the
  adjacency representation,
- [`algo`] includes all algorithms,
- [`gens`] includes generators for substructures (paths, cycles, cliques, ...) and random graphs,
- [`io`] includes readers and writers for JSON and a hand-typed text format,
- [`schedule`] includes week grids, conflict graph builders and timetables.

The library emits `tracing` events but never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod model;
pub mod node;
pub mod ops;
pub mod repr;
pub mod schedule;
#[cfg(test)]
pub(crate) mod testing;

pub use algo::{
    backtracking_coloring, balanced_coloring, check_euler, degrees, dsatur_coloring,
    find_hamiltonian_path, greedy_coloring, is_connected,
};
pub use error::{Error, Result};
pub use repr::build_adjacency;

/// `graphtour::prelude` includes definitions for nodes, edges and the graph model, all basic
/// graph operation traits as well as the adjacency representation.
pub mod prelude {
    pub use super::{edge::*, model::*, node::*, ops::*, repr::*};
}
