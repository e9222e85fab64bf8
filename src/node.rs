/*!
# Node Representation

Vertices of a [`Graph`](crate::model::Graph) are addressed by string keys, but every algorithm
runs on a dense numbering `0..n` assigned in vertex input order by the
[`KeyIndex`](crate::repr::KeyIndex). We choose `Node = u32` as the graphs handled here are
small and this keeps neighbor lists compact.
*/

use bitvec::vec::BitVec;

/// Dense vertex index in `0..n`, assigned in input order
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes, indexed by `u as usize`
pub type NodeBitSet = BitVec;

/// Stable string identifier of a vertex as supplied by the caller
pub type VertexKey = String;
