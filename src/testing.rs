use fxhash::FxHashSet;

use crate::{algo::*, model::*};

/// Asserts that `result` describes an Euler trail of `graph`: it starts at the declared start
/// vertex, consists of `|E| + 1` vertices, uses every edge exactly once, and consecutive
/// vertices are joined by the edge listed between them.
pub(crate) fn assert_euler_trail(graph: &Graph, result: &EulerResult) {
    assert!(result.exists, "{}", result.message);
    assert_eq!(result.path.len(), graph.number_of_edges() + 1);
    assert_eq!(result.edge_trail.len(), graph.number_of_edges());
    assert_eq!(result.path.first(), result.start_vertex.as_ref());
    if result.is_circuit {
        assert_eq!(result.path.first(), result.path.last());
    }

    let used: FxHashSet<&str> = result.edge_trail.iter().map(String::as_str).collect();
    assert_eq!(used.len(), graph.number_of_edges(), "edge used twice");

    for (i, id) in result.edge_trail.iter().enumerate() {
        let edge = graph
            .edges
            .iter()
            .find(|e| &e.id == id)
            .unwrap_or_else(|| panic!("unknown edge {id}"));

        let (u, v) = (&result.path[i], &result.path[i + 1]);
        let forward = edge.source == *u && edge.target == *v;
        let backward = edge.source == *v && edge.target == *u;
        assert!(
            forward || (!graph.directed && backward),
            "edge {id} does not join {u} and {v}"
        );
    }
}

/// Asserts that every vertex of `graph` is colored with a positive color, no edge joins two
/// vertices of the same color, and `max_color` is the largest color used
pub(crate) fn assert_proper_coloring(graph: &Graph, coloring: &Coloring) {
    assert_eq!(coloring.colors.len(), graph.number_of_vertices());
    for vertex in &graph.vertices {
        assert!(coloring.color_of(&vertex.key).is_some_and(|c| c > 0));
    }

    let conflicts = coloring.conflicts(&graph.edges).collect::<Vec<_>>();
    assert!(conflicts.is_empty(), "conflicting edges: {conflicts:?}");

    assert_eq!(
        coloring.max_color,
        coloring.colors.values().copied().max().unwrap_or(0)
    );
}

/// Every coloring strategy should pass the same property tests
macro_rules! test_coloring_strategy {
    ($env:ident, $algo:expr, $max_n:literal) => {
        mod $env {
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            use crate::{algo::*, gens::*, model::*, testing::assert_proper_coloring};

            fn color(graph: &Graph) -> Coloring {
                $algo.color(&graph.vertices, &graph.edges).unwrap()
            }

            #[test]
            fn proper_on_random_graphs() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);

                for n in [1, $max_n / 2, $max_n] {
                    for p in [0.1, 0.3, 0.6] {
                        for directed in [false, true] {
                            let graph = Graph::gnp(rng, n, p, directed);
                            assert_proper_coloring(&graph, &color(&graph));
                        }
                    }
                }
            }

            #[test]
            fn empty_graph() {
                let coloring = color(&Graph::new(false));
                assert!(coloring.colors.is_empty());
                assert_eq!(coloring.max_color, 0);
            }

            #[test]
            fn isolated_vertices() {
                let rng = &mut Pcg64Mcg::seed_from_u64(6);
                let graph = Graph::gnp(rng, 8, 0.0, false);
                assert_proper_coloring(&graph, &color(&graph));
            }

            #[test]
            fn complete_graph() {
                let mut graph = Graph::new(false);
                graph.connect_clique(["A", "B", "C", "D", "E"]);

                let coloring = color(&graph);
                assert_proper_coloring(&graph, &coloring);
                assert_eq!(coloring.max_color, 5);
            }

            #[test]
            fn duplicate_and_dangling_input() {
                let mut graph = Graph::new(false);
                graph.connect_path(["A", "B", "C"]);
                graph.add_edge("C", "nowhere");
                graph.add_edge("A", "B");

                assert_proper_coloring(&graph, &color(&graph));
            }
        }
    };
}

pub(crate) use test_coloring_strategy;
