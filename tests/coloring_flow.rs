use packing_coloring::coloring::probe::colors_within_radius;
use packing_coloring::{
    approximate_packing_coloring, level_order, spanning_tree, tree_center, Color, ColoringConfig,
    ColoringError, ColoringOutcome, DisjointSet, Graph, PackingColorer, PhaseOnePolicy, ReuseBound,
};
use std::collections::VecDeque;

fn path_edges(n: u32) -> Vec<(u32, u32)> {
    (1..n).map(|i| (i, i + 1)).collect()
}

fn star_edges(n: u32) -> Vec<(u32, u32)> {
    (2..=n).map(|leaf| (1, leaf)).collect()
}

fn bfs_distances(graph: &Graph, source: u32) -> Vec<Option<u32>> {
    let mut distances = vec![None; graph.nodes as usize + 1];
    let mut queue = VecDeque::new();
    distances[source as usize] = Some(0);
    queue.push_back(source);
    while let Some(vertex) = queue.pop_front() {
        let d = distances[vertex as usize].unwrap();
        for &neighbor in graph.neighbors(vertex) {
            if distances[neighbor as usize].is_none() {
                distances[neighbor as usize] = Some(d + 1);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

fn eccentricity(graph: &Graph, vertex: u32) -> u32 {
    bfs_distances(graph, vertex)
        .iter()
        .skip(1)
        .map(|d| d.expect("graph must be connected"))
        .max()
        .unwrap()
}

fn tree_radius(graph: &Graph) -> u32 {
    (1..=graph.nodes)
        .map(|v| eccentricity(graph, v))
        .min()
        .unwrap()
}

/// Every pair sharing a reusable color must sit at distance greater than
/// that color's id.
fn assert_packing_property(graph: &Graph, outcome: &ColoringOutcome) {
    for u in 1..=graph.nodes {
        let Some(cu) = outcome.color(u).reusable_id() else {
            continue;
        };
        let distances = bfs_distances(graph, u);
        for v in (u + 1)..=graph.nodes {
            if outcome.color(v).reusable_id() == Some(cu) {
                let d = distances[v as usize].expect("graph must be connected");
                assert!(
                    d > cu,
                    "vertices {u} and {v} share color {cu} at distance {d}"
                );
            }
        }
    }
}

fn assert_totality(outcome: &ColoringOutcome, nodes: u32) {
    for v in 1..=nodes {
        assert!(
            outcome.color(v).is_colored(),
            "vertex {v} left uncolored"
        );
    }
}

#[test]
fn disjoint_set_find_is_idempotent() {
    let mut ds = DisjointSet::new(8);
    assert!(ds.union(1, 2));
    assert!(ds.union(2, 3));
    assert!(ds.union(5, 6));

    for v in 1..=8 {
        let root = ds.find(v);
        assert_eq!(ds.find(root), root);
    }
    assert_eq!(ds.find(1), ds.find(3));
    assert_eq!(ds.find(5), ds.find(6));
    assert_ne!(ds.find(1), ds.find(5));
}

#[test]
fn disjoint_set_union_detects_cycles() {
    let mut ds = DisjointSet::new(4);
    assert!(ds.union(1, 2));
    assert!(ds.union(3, 4));
    assert!(ds.union(2, 3));

    let root_before = ds.find(1);
    let size_before = ds.set_size(1);
    assert!(!ds.union(1, 4), "joining an already-joined pair must fail");
    assert_eq!(ds.find(1), root_before);
    assert_eq!(ds.set_size(1), size_before);
    assert_eq!(ds.set_size(1), 4);
}

#[test]
fn spanning_tree_has_n_minus_one_edges_and_no_cycles() {
    // 6 vertices, 9 edges, several cycles.
    let edges = [
        (1, 2),
        (2, 3),
        (3, 1),
        (3, 4),
        (4, 5),
        (5, 6),
        (6, 4),
        (2, 5),
        (1, 6),
    ];
    let graph = Graph::from_edges(6, &edges).unwrap();
    let tree = spanning_tree(&graph).unwrap();

    assert_eq!(tree.edge_count(), 5);
    let mut ds = DisjointSet::new(6);
    for &(from, to) in &tree.edges {
        assert!(ds.union(from, to), "spanning tree contains a cycle");
    }
}

#[test]
fn spanning_tree_rejects_disconnected_input() {
    let graph = Graph::from_edges(5, &[(1, 2), (2, 3), (4, 5)]).unwrap();
    assert!(matches!(
        spanning_tree(&graph),
        Err(ColoringError::DisconnectedGraph { nodes: 5, edges: 3 })
    ));
}

#[test]
fn level_order_layers_match_bfs_distance() {
    let graph = Graph::from_edges(7, &[(1, 2), (1, 3), (2, 4), (2, 5), (3, 6), (6, 7)]).unwrap();
    let layers = level_order(&graph, 1).unwrap();
    let distances = bfs_distances(&graph, 1);

    let mut seen = vec![0u32; 8];
    for (depth, layer) in layers.iter().enumerate() {
        for &vertex in layer {
            seen[vertex as usize] += 1;
            assert_eq!(distances[vertex as usize], Some(depth as u32));
        }
    }
    for v in 1..=7 {
        assert_eq!(seen[v as usize], 1, "vertex {v} must appear in one layer");
    }
}

#[test]
fn level_order_rejects_out_of_range_root() {
    let graph = Graph::from_edges(3, &[(1, 2), (2, 3)]).unwrap();
    assert!(matches!(
        level_order(&graph, 0),
        Err(ColoringError::InvalidRoot { root: 0, nodes: 3 })
    ));
    assert!(matches!(
        level_order(&graph, 4),
        Err(ColoringError::InvalidRoot { root: 4, nodes: 3 })
    ));
}

#[test]
fn tree_center_minimizes_eccentricity() {
    let path = Graph::from_edges(5, &path_edges(5)).unwrap();
    let center = tree_center(&path);
    assert_eq!(eccentricity(&path, center), tree_radius(&path));
    assert_eq!(center, 3);

    let star = Graph::from_edges(9, &star_edges(9)).unwrap();
    assert_eq!(tree_center(&star), 1);

    // Caterpillar with an off-center long spine.
    let caterpillar =
        Graph::from_edges(8, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (3, 7), (4, 8)]).unwrap();
    let center = tree_center(&caterpillar);
    assert_eq!(eccentricity(&caterpillar, center), tree_radius(&caterpillar));
}

#[test]
fn tree_center_two_center_tie_break_is_deterministic() {
    // Even path: two centers (3 and 4); the selector must always return the
    // same one rather than choosing at random.
    let path = Graph::from_edges(6, &path_edges(6)).unwrap();
    let first = tree_center(&path);
    assert_eq!(eccentricity(&path, first), tree_radius(&path));
    for _ in 0..10 {
        assert_eq!(tree_center(&path), first);
    }
}

#[test]
fn path_scenario_under_parity_policy() {
    let config = ColoringConfig {
        phase_one: PhaseOnePolicy::Parity,
        reuse_bound: ReuseBound::LayerDerived,
        probe_budget: None,
    };
    let graph = Graph::from_edges(5, &path_edges(5)).unwrap();
    let layers = level_order(&graph, 3).unwrap();
    assert_eq!(layers, vec![vec![3], vec![2, 4], vec![1, 5]]);

    let outcome = approximate_packing_coloring(5, &path_edges(5), Some(3), &config).unwrap();
    assert_eq!(outcome.root, 3);
    assert_eq!(outcome.color(2), Color::Reusable(1));
    assert_eq!(outcome.color(4), Color::Reusable(1));
    assert_eq!(outcome.uniquely_used, 0);
    assert_totality(&outcome, 5);
    assert_packing_property(&graph, &outcome);
}

#[test]
fn single_vertex_tree_colors_with_one() {
    let outcome = approximate_packing_coloring(1, &[], None, &ColoringConfig::default()).unwrap();
    assert_eq!(outcome.root, 1);
    assert_eq!(outcome.color(1), Color::Reusable(1));
    assert_eq!(outcome.uniquely_used, 0);
}

#[test]
fn star_graph_triggers_unique_escape() {
    // Rooted at a leaf so the other leaves sit two layers deep and compete
    // for reusable colors at mutual distance 2; with the node-fraction bound
    // of 20 / 10 = 2, most of them must take the unique escape.
    let nodes = 20;
    let config = ColoringConfig {
        phase_one: PhaseOnePolicy::Parity,
        reuse_bound: ReuseBound::NodeFraction { divisor: 10 },
        probe_budget: None,
    };
    let graph = Graph::from_edges(nodes, &star_edges(nodes)).unwrap();
    let outcome = approximate_packing_coloring(nodes, &star_edges(nodes), Some(2), &config).unwrap();

    assert!(outcome.uniquely_used > 0);
    assert_totality(&outcome, nodes);
    assert_packing_property(&graph, &outcome);
}

#[test]
fn largest_layer_policy_respects_depth_adjacency() {
    // Layers from root 1: [1], [2, 3], [4, 5, 6, 7]. The greedy policy
    // colors the deepest (largest) layer, skips the middle one, then takes
    // the root layer.
    let edges = [(1, 2), (1, 3), (2, 4), (2, 5), (2, 6), (2, 7)];
    let config = ColoringConfig {
        phase_one: PhaseOnePolicy::LargestLayerFirst,
        reuse_bound: ReuseBound::LayerDerived,
        probe_budget: None,
    };
    let graph = Graph::from_edges(7, &edges).unwrap();
    let outcome = approximate_packing_coloring(7, &edges, Some(1), &config).unwrap();

    for vertex in [1, 4, 5, 6, 7] {
        assert_eq!(outcome.color(vertex), Color::Reusable(1));
    }
    assert_ne!(outcome.color(2), Color::Reusable(1));
    assert_ne!(outcome.color(3), Color::Reusable(1));
    assert_totality(&outcome, 7);
    assert_packing_property(&graph, &outcome);
}

#[test]
fn empty_graph_is_rejected() {
    assert!(matches!(
        Graph::from_edges(0, &[]),
        Err(ColoringError::EmptyGraph)
    ));
    assert!(matches!(
        approximate_packing_coloring(0, &[], None, &ColoringConfig::default()),
        Err(ColoringError::EmptyGraph)
    ));
}

#[test]
fn vertex_out_of_range_is_rejected() {
    assert!(matches!(
        Graph::from_edges(5, &[(1, 2), (2, 7)]),
        Err(ColoringError::VertexOutOfRange {
            from: 2,
            to: 7,
            nodes: 5
        })
    ));
}

#[test]
fn invalid_root_is_rejected() {
    let result = approximate_packing_coloring(
        5,
        &path_edges(5),
        Some(9),
        &ColoringConfig::default(),
    );
    assert!(matches!(
        result,
        Err(ColoringError::InvalidRoot { root: 9, nodes: 5 })
    ));
}

#[test]
fn disconnected_tree_is_rejected_by_engine() {
    // Bypass the spanning-tree builder to hit the engine's own layering
    // check: a forest handed directly to the colorer must fail.
    let forest = Graph::from_edges(5, &[(1, 2), (4, 5)]).unwrap();
    let result = PackingColorer::new(forest, ColoringConfig::default()).assign(Some(1));
    assert!(matches!(
        result,
        Err(ColoringError::DisconnectedGraph { nodes: 5, .. })
    ));
}

#[test]
fn probe_collects_colors_within_radius_only() {
    let graph = Graph::from_edges(5, &path_edges(5)).unwrap();
    let mut colors = vec![Color::Uncolored; 6];
    colors[1] = Color::Reusable(4);
    colors[3] = Color::Reusable(2);
    colors[5] = Color::Reusable(7);
    colors[4] = Color::Unique;

    let found = colors_within_radius(&graph, &colors, 2, 1);
    assert!(found.contains(&0), "own uncolored sentinel must be included");
    assert!(found.contains(&4));
    assert!(found.contains(&2));
    assert!(!found.contains(&7), "color 7 lies beyond the radius");

    let found = colors_within_radius(&graph, &colors, 2, 3);
    assert!(found.contains(&7));
    assert!(
        !found.contains(&u32::MAX),
        "unique colors contribute no conflict id"
    );
}

#[test]
fn exhausted_probe_budget_escapes_to_unique_colors() {
    let nodes = 9;
    let config = ColoringConfig {
        phase_one: PhaseOnePolicy::Parity,
        reuse_bound: ReuseBound::LayerDerived,
        probe_budget: Some(2),
    };
    let graph = Graph::from_edges(nodes, &path_edges(nodes)).unwrap();
    let outcome = approximate_packing_coloring(nodes, &path_edges(nodes), None, &config).unwrap();

    // The run must still color everything; vertices past the budget simply
    // consume unique colors, which are always valid.
    assert_totality(&outcome, nodes);
    assert!(outcome.uniquely_used > 0);
    assert_packing_property(&graph, &outcome);
}

#[test]
fn outcome_statistics_are_consistent() {
    let config = ColoringConfig {
        phase_one: PhaseOnePolicy::Parity,
        reuse_bound: ReuseBound::LayerDerived,
        probe_budget: None,
    };
    let outcome = approximate_packing_coloring(5, &path_edges(5), Some(3), &config).unwrap();

    let histogram = outcome.color_histogram();
    assert_eq!(histogram.get(&1), Some(&2));
    assert_eq!(
        histogram.values().sum::<u32>() + outcome.uniquely_used,
        5,
        "every vertex is either reusable-colored or uniquely colored"
    );
    assert_eq!(
        outcome.total_colors(),
        outcome.max_reusable_color() + outcome.uniquely_used
    );
    let ones = f64::from(histogram[&1]);
    assert!((outcome.color_one_fraction() - ones / 5.0).abs() < 1e-9);
}
