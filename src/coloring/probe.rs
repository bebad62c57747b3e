use crate::coloring::color::Color;
use crate::graph::Graph;
use std::collections::{HashSet, VecDeque};

/// Collects every color id within `radius` of `start` (inclusive of the
/// starting vertex's own color).
///
/// Bounded BFS with visited markers; a pure read that mutates no colors.
/// The uncolored sentinel contributes id 0, which never collides with a
/// candidate color since candidates start at 1.
pub fn colors_within_radius(
    graph: &Graph,
    colors: &[Color],
    start: u32,
    radius: u32,
) -> HashSet<u32> {
    colors_within_radius_counted(graph, colors, start, radius).0
}

/// Same probe, additionally reporting how many vertices the traversal
/// visited so the engine can charge its optional probe budget.
pub fn colors_within_radius_counted(
    graph: &Graph,
    colors: &[Color],
    start: u32,
    radius: u32,
) -> (HashSet<u32>, u64) {
    let mut found = HashSet::new();
    let mut visited = vec![false; graph.nodes as usize + 1];
    let mut queue: VecDeque<(u32, u32)> = VecDeque::new();
    let mut visit_count = 0u64;

    queue.push_back((start, 0));
    visited[start as usize] = true;

    while let Some((vertex, distance)) = queue.pop_front() {
        visit_count += 1;
        if let Some(id) = colors[vertex as usize].conflict_id() {
            found.insert(id);
        }

        if distance < radius {
            for &neighbor in graph.neighbors(vertex) {
                if !visited[neighbor as usize] {
                    visited[neighbor as usize] = true;
                    queue.push_back((neighbor, distance + 1));
                }
            }
        }
    }

    (found, visit_count)
}
