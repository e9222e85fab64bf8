use bitvec::vec::BitVec;
use itertools::Itertools;

use crate::{edge::*, node::*, repr::Arc};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in input order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        BitVec::repeat(false, self.len())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns empty bitset with one entry per edge
    fn edge_bitset_unset(&self) -> EdgeBitSet {
        BitVec::repeat(false, self.number_of_edges() as usize)
    }
}

/// Runtime directedness of an adjacency representation
pub trait GraphType {
    /// Returns *true* if every edge was inserted in one direction only
    fn is_directed(&self) -> bool;

    /// Returns *true* if every edge was mirrored into both endpoint lists
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (out-)neighbors of a given vertex in insertion order.
    /// Parallel edges and loops show up as repeated entries.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the length of the neighbor list of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all vertices in input order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns all vertices sorted by descending degree.
    /// Ties keep input order as the sort is stable.
    fn vertices_by_descending_degree(&self) -> Vec<Node> {
        self.vertices()
            .sorted_by_key(|&u| std::cmp::Reverse(self.degree_of(u)))
            .collect_vec()
    }
}

/// Access to the neighbor entries together with the edge each of them stems from
pub trait ArcList: AdjacencyList {
    /// Returns the arcs leaving `u` in insertion order.
    /// ** Panics if `u >= n` **
    fn arcs_of(&self, u: Node) -> &[Arc];
}
