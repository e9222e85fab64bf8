use graphtour::{algo::*, gens::*, prelude::*, schedule::*};
use itertools::Itertools;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

fn square() -> Graph {
    let mut graph = Graph::new(false);
    graph.connect_cycle(["A", "B", "C", "D"]);
    graph
}

#[test]
fn square_has_euler_circuit() {
    let graph = square();
    let result = check_euler(&graph.vertices, &graph.edges, false);

    assert!(result.exists);
    assert!(result.is_circuit);
    assert_eq!(result.path.len(), 5);
    assert_eq!(result.path.first(), result.path.last());
    assert_eq!(result.edge_trail.iter().unique().count(), 4);
}

#[test]
fn path_graph_has_euler_path() {
    let mut graph = Graph::new(false);
    graph.connect_path(["A", "B", "C"]);
    let result = check_euler(&graph.vertices, &graph.edges, false);

    assert!(result.exists);
    assert!(!result.is_circuit);
    assert!(result.path == ["A", "B", "C"] || result.path == ["C", "B", "A"]);
}

#[test]
fn star_has_no_euler_trail() {
    let mut graph = Graph::new(false);
    graph.connect_star("X", ["A", "B", "C", "D"]);
    let result = check_euler(&graph.vertices, &graph.edges, false);

    assert!(!result.exists);
    assert!(result.message.contains("4 odd vertices"));
}

#[test]
fn complete_graph_on_four_vertices() {
    let mut graph = Graph::new(false);
    graph.connect_clique(["A", "B", "C", "D"]);

    assert_eq!(backtracking_coloring(&graph.vertices, &graph.edges).max_color, 4);
    assert_eq!(greedy_coloring(&graph.vertices, &graph.edges).max_color, 4);
}

#[test]
fn complete_bipartite_is_two_colorable() {
    let mut graph = Graph::new(false);
    graph.connect_biclique(["a", "b", "c"], ["x", "y", "z"]);

    let coloring = backtracking_coloring(&graph.vertices, &graph.edges);
    assert_eq!(coloring.max_color, 2);
    assert!(coloring.is_proper(&graph.edges));
}

#[test]
fn chain_has_hamiltonian_path() {
    let mut graph = Graph::new(false);
    graph.connect_path(["A", "B", "C", "D", "E"]);
    let result = find_hamiltonian_path(&graph.vertices, &graph.edges, false);

    assert!(result.exists);
    assert!(
        result.path == ["A", "B", "C", "D", "E"] || result.path == ["E", "D", "C", "B", "A"]
    );
}

#[test]
fn adjacency_and_degrees() {
    let mut graph = square();
    graph.add_edge("A", "ghost");

    let adjacency = build_adjacency(&graph.vertices, &graph.edges, true);
    assert_eq!(adjacency.number_of_edges(), 4);
    assert_eq!(adjacency.to_key_map()["D"], ["A"]);

    let degrees = degrees(&adjacency);
    assert!(degrees.values().all(|d| d.in_degree == 1 && d.out_degree == 1));
    assert!(is_connected(&adjacency, &graph.vertices));

    let json = serde_json::to_value(&degrees).unwrap();
    assert_eq!(json["A"]["in"], 1);
}

#[test]
fn exact_coloring_is_optimal() {
    let rng = &mut Pcg64Mcg::seed_from_u64(1234);

    for n in [5, 8, 10] {
        for p in [0.25, 0.5, 0.75] {
            let graph = Graph::gnp(rng, n, p, false);
            let exact = backtracking_coloring(&graph.vertices, &graph.edges).max_color;

            for strategy in [
                ColoringStrategy::Greedy,
                ColoringStrategy::Dsatur,
                ColoringStrategy::Balanced { max_slots: 50 },
            ] {
                let other = strategy.color(&graph.vertices, &graph.edges);
                assert!(other.is_proper(&graph.edges));
                assert!(exact <= other.max_color);
            }
        }
    }
}

#[test]
fn greedy_stays_within_max_degree_plus_one() {
    let rng = &mut Pcg64Mcg::seed_from_u64(99);

    for n in [10, 30, 60] {
        for p in [0.05, 0.2, 0.5] {
            let graph = Graph::gnp(rng, n, p, false);
            let max_degree = AdjacencyMap::from_graph(&graph).max_degree();
            let coloring = greedy_coloring(&graph.vertices, &graph.edges);
            assert!(coloring.max_color <= max_degree + 1);
        }
    }
}

#[test]
fn balanced_spreads_isolated_vertices() {
    for (n, max_slots) in [(7, 10), (25, 10), (50, 50), (53, 50)] {
        let graph = Graph::gnp(&mut Pcg64Mcg::seed_from_u64(0), n, 0.0, false);
        let coloring = balanced_coloring(&graph.vertices, &graph.edges, max_slots);

        let lower = n / max_slots;
        let upper = n.div_ceil(max_slots);
        let usage = coloring.usage();
        assert!(usage[1..].iter().all(|&k| k as u32 >= lower && k as u32 <= upper));
        assert_eq!(coloring.number_of_colors() as u32, n.min(max_slots));
    }
}

#[test]
fn hamiltonian_on_complete_and_isolated() {
    for n in 1..7 {
        let keys = (0..n).map(|i| format!("v{i}")).collect_vec();
        let mut graph = Graph::new(false);
        graph.connect_clique(keys.iter().map(String::as_str));
        assert!(find_hamiltonian_path(&graph.vertices, &graph.edges, false).exists);

        graph.add_vertex(Vertex::new("isolated"));
        assert!(!find_hamiltonian_path(&graph.vertices, &graph.edges, false).exists);
    }
}

#[test]
fn exam_timetable() {
    let conflicts = ConflictGraphBuilder::new()
        .exam_plan("Sem 1: Math 101, Eng 101, CS 101\nSem 2: Physics 101, Chem 101, Bio 101");
    let grid = WeekGrid::default();
    let coloring = ColoringStrategy::Balanced {
        max_slots: grid.slot_count(),
    }
    .color(&conflicts.graph.vertices, &conflicts.graph.edges);
    assert!(coloring.is_proper(&conflicts.graph.edges));

    let timetable = Timetable::new(&grid, &conflicts.graph, &coloring);
    assert!(timetable.overflow().is_empty());
    assert_eq!(timetable.number_of_used_slots(), 6);

    let mut csv = Vec::new();
    timetable.write_csv(&mut csv).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    assert!(csv.starts_with("Time,Mon,Tue,Wed,Thu,Fri\n8:00 AM,Math 101,,,,\n"));
    assert_eq!(csv.lines().count(), 11);
}

#[test]
fn colored_graph_roundtrip() {
    let graph = square();
    let coloring = dsatur_coloring(&graph.vertices, &graph.edges);
    let colored = graph.with_coloring(&coloring);

    assert_eq!(colored.vertex("A").and_then(|v| v.color), Some(1));
    assert_eq!(colored.vertex("B").and_then(|v| v.color), Some(2));
    assert!(graph.vertices.iter().all(|v| v.color.is_none()));
}
