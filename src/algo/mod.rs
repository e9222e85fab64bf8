/*!
# Graph Algorithms

All algorithms run on an [`AdjacencyMap`] built from a snapshot of the caller's graph and never
touch the caller's data. They are re-exported at the top level of this module, so you can
simply do:
```rust
use graphtour::algo::*;
```

Each family comes in two flavors: a configurable struct or trait working on node indices
(e.g. [`HamiltonianSearch`], [`Hierholzer`], [`ColoringAlgorithm`]) and a plain function taking
vertex and edge lists that returns a keyed, serializable result (e.g. [`check_euler`]).

Algorithms are total: "no trail" or "no path" are regular results with a message.
*/

mod coloring;
mod connectivity;
mod degree;
mod euler;
mod hamiltonian;
mod traversal;

use crate::prelude::*;

pub use coloring::*;
pub use connectivity::*;
pub use degree::*;
pub use euler::*;
pub use hamiltonian::*;
pub use traversal::*;
