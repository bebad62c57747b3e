use crate::error::ColoringError;
use crate::graph::disjoint_set::DisjointSet;
use crate::graph::graph::Graph;

/// Reduces an arbitrary edge set to a spanning tree over the same vertices.
///
/// Unweighted Kruskal: edges are considered in input order and kept exactly
/// when they join two previously separate components, so the input order
/// determines which spanning tree results. Any spanning tree is acceptable
/// here, not a minimum-weight one.
///
/// Fails with `DisconnectedGraph` when the input does not connect all
/// vertices — the result would be a spanning forest, which the coloring
/// pipeline cannot consume.
pub fn spanning_tree(graph: &Graph) -> Result<Graph, ColoringError> {
    if graph.nodes == 0 {
        return Err(ColoringError::EmptyGraph);
    }

    let mut components = DisjointSet::new(graph.nodes);
    let mut tree = Graph::new(graph.nodes);

    for &(from, to) in &graph.edges {
        if components.union(from, to) {
            tree.add_edge(from, to);
        }
    }

    if tree.edge_count() != graph.nodes as usize - 1 {
        return Err(ColoringError::DisconnectedGraph {
            nodes: graph.nodes,
            edges: tree.edge_count(),
        });
    }

    Ok(tree)
}
