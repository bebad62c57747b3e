use crate::error::ColoringError;
use crate::graph::Graph;
use std::collections::VecDeque;

/// BFS layering of a tree from `root`: layer `d` holds the vertices at
/// distance `d`, in discovery order.
///
/// The visited marker is defensive — a tree BFS inherently reaches each
/// vertex once, but the marker keeps the traversal safe if the input ever
/// carries a stray extra edge.
pub fn level_order(graph: &Graph, root: u32) -> Result<Vec<Vec<u32>>, ColoringError> {
    if root == 0 || root > graph.nodes {
        return Err(ColoringError::InvalidRoot {
            root,
            nodes: graph.nodes,
        });
    }

    let mut layers: Vec<Vec<u32>> = Vec::new();
    let mut visited = vec![false; graph.nodes as usize + 1];
    let mut queue: VecDeque<(u32, usize)> = VecDeque::new();

    queue.push_back((root, 0));
    visited[root as usize] = true;

    while let Some((vertex, depth)) = queue.pop_front() {
        if depth >= layers.len() {
            layers.push(Vec::new());
        }
        layers[depth].push(vertex);

        for &neighbor in graph.neighbors(vertex) {
            if !visited[neighbor as usize] {
                visited[neighbor as usize] = true;
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    Ok(layers)
}
