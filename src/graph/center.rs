use crate::graph::graph::Graph;

/// Selects a tree center to use as the coloring root.
///
/// Iterative leaf-peeling: strip the current set of leaves one full round at
/// a time, decrementing neighbor degrees, until at most two vertices remain.
/// The survivors are the midpoint of every longest path, which keeps the BFS
/// layers as shallow as possible for the coloring stage.
///
/// Peeling must proceed in whole rounds rather than draining one shared
/// queue: the round structure is what guarantees the survivor's eccentricity
/// equals the tree radius.
///
/// When two centers survive, the first one encountered is returned — a
/// fixed, reproducible tie-break, not a random choice.
pub fn tree_center(graph: &Graph) -> u32 {
    let mut degree = graph.degrees();

    let mut frontier: Vec<u32> = (1..=graph.nodes)
        .filter(|&v| degree[v as usize] == 1)
        .collect();

    // Single vertex (or no leaves at all): nothing to peel.
    if frontier.is_empty() {
        return 1;
    }

    let mut remaining = graph.nodes;
    while remaining > 2 && !frontier.is_empty() {
        let mut next = Vec::new();
        for &leaf in &frontier {
            remaining -= 1;
            degree[leaf as usize] = 0;
            for &neighbor in graph.neighbors(leaf) {
                if degree[neighbor as usize] > 0 {
                    degree[neighbor as usize] -= 1;
                    if degree[neighbor as usize] == 1 {
                        next.push(neighbor);
                    }
                }
            }
        }
        frontier = next;
    }

    frontier.first().copied().unwrap_or(1)
}
