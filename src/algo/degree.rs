/*!
# Degree Analysis

In- and out-degrees derived from an adjacency representation. The out-degree of a vertex is
the length of its neighbor list, and every neighbor reference counts towards the in-degree of
that neighbor. As undirected adjacency lists are mirrored, undirected graphs end up with
`in == out` for every vertex; callers wanting the undirected degree should read `out`.
*/

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::*;

/// In- and out-degree of a single vertex
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Degree {
    #[serde(rename = "in")]
    pub in_degree: NumNodes,
    #[serde(rename = "out")]
    pub out_degree: NumNodes,
}

impl Degree {
    /// Returns `out - in`
    pub fn excess(&self) -> i64 {
        self.out_degree as i64 - self.in_degree as i64
    }

    /// Returns *true* if `out == in`
    pub fn is_balanced(&self) -> bool {
        self.in_degree == self.out_degree
    }

    /// Returns *true* if the out-degree is odd
    pub fn is_odd(&self) -> bool {
        self.out_degree % 2 == 1
    }
}

/// Trait for computing per-vertex degree records
pub trait DegreeAnalysis: AdjacencyList {
    /// Returns the degree record of every node, indexed by node
    fn degree_records(&self) -> Vec<Degree> {
        let mut records = vec![Degree::default(); self.len()];
        for u in self.vertices() {
            records[u as usize].out_degree = self.degree_of(u);
            for v in self.neighbors_of(u) {
                records[v as usize].in_degree += 1;
            }
        }
        records
    }

    /// Returns all nodes with an odd out-degree in input order
    fn odd_degree_vertices(&self) -> Vec<Node> {
        self.vertices()
            .filter(|&u| self.degree_of(u) % 2 == 1)
            .collect()
    }
}

impl<G: AdjacencyList> DegreeAnalysis for G {}

/// Returns the degree record of every vertex keyed by vertex key, in vertex input order
pub fn degrees(adjacency: &AdjacencyMap) -> IndexMap<VertexKey, Degree> {
    adjacency
        .degree_records()
        .into_iter()
        .enumerate()
        .map(|(u, degree)| (adjacency.key_of(u as Node).to_string(), degree))
        .collect()
}
