/*!
# Edge Indices

Edges keep the caller's string ids in the [`Graph`](crate::model::Graph) model. Inside an
[`AdjacencyMap`](crate::repr::AdjacencyMap) every accepted edge gets a dense index instead, so
algorithms consuming edges can mark them in a bitset.
*/

use bitvec::vec::BitVec;

/// Index of an accepted edge inside an [`AdjacencyMap`](crate::repr::AdjacencyMap).
/// Edges are numbered `0..m` in input order, skipping edges with unknown endpoints.
pub type EdgeIndex = u32;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// A BitSet over edge indices, indexed by `e as usize`
pub type EdgeBitSet = BitVec;
