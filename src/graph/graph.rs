use crate::error::ColoringError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Undirected graph over vertex ids `1..=nodes`.
///
/// Slot 0 of every per-vertex vector is an unused sentinel region, matching
/// the 1-based vertex ids the coloring pipeline works with. Each undirected
/// edge is stored once in `edges` (input order preserved) and twice in
/// `adjacency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: u32,
    pub adjacency: Vec<Vec<u32>>,
    pub edges: Vec<(u32, u32)>,
}

impl Graph {
    pub fn new(nodes: u32) -> Self {
        Graph {
            nodes,
            adjacency: vec![Vec::new(); nodes as usize + 1],
            edges: Vec::new(),
        }
    }

    /// Builds a graph from the in-memory input boundary, validating every
    /// edge endpoint eagerly.
    pub fn from_edges(nodes: u32, edges: &[(u32, u32)]) -> Result<Self, ColoringError> {
        if nodes == 0 {
            return Err(ColoringError::EmptyGraph);
        }

        let mut graph = Graph::new(nodes);
        for &(from, to) in edges {
            if from == 0 || from > nodes || to == 0 || to > nodes {
                return Err(ColoringError::VertexOutOfRange { from, to, nodes });
            }
            graph.add_edge(from, to);
        }

        Ok(graph)
    }

    /// Adds an undirected edge. Endpoints must already be validated ids.
    pub fn add_edge(&mut self, from: u32, to: u32) {
        debug_assert!(from >= 1 && from <= self.nodes);
        debug_assert!(to >= 1 && to <= self.nodes);

        self.adjacency[from as usize].push(to);
        self.adjacency[to as usize].push(from);
        self.edges.push((from, to));
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn neighbors(&self, vertex: u32) -> &[u32] {
        &self.adjacency[vertex as usize]
    }

    /// Per-vertex degree counts computed from the edge list (slot 0 unused).
    pub fn degrees(&self) -> Vec<u32> {
        let mut degree = vec![0u32; self.nodes as usize + 1];
        for &(from, to) in &self.edges {
            degree[from as usize] += 1;
            degree[to as usize] += 1;
        }
        degree
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in 1..=self.nodes {
            write!(f, "{} ->", vertex)?;
            for neighbor in self.neighbors(vertex) {
                write!(f, " {}", neighbor)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
