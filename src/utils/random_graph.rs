use crate::error::ColoringError;
use crate::graph::{spanning_tree, Graph};
use rand::{rng, Rng};
use serde::{Deserialize, Serialize};

/// How many times `random_tree_instance` re-samples before giving up on
/// drawing a connected graph.
pub const MAX_GENERATION_ATTEMPTS: u32 = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceParameters {
    pub nodes: u32,
    pub edge_probability: f64,
    pub sampled_edges: usize,
    pub tree_edges: usize,
}

/// Edge probability drawn uniformly from `[log2(n)/n, 2*log2(n)/n]`, just
/// above the G(n,p) connectivity threshold so most samples come out
/// connected without being dense.
pub fn choose_probability(nodes: u32, rng: &mut impl Rng) -> f64 {
    let threshold = (nodes as f64).log2() / nodes as f64;
    threshold + rng.random::<f64>() * threshold
}

/// Erdos-Renyi G(n,p) sample: every unordered vertex pair `i < j` becomes an
/// edge independently with probability `p`.
pub fn generate_gnp(nodes: u32, probability: f64, rng: &mut impl Rng) -> Graph {
    let mut graph = Graph::new(nodes);
    for i in 1..=nodes {
        for j in (i + 1)..=nodes {
            if rng.random::<f64>() <= probability {
                graph.add_edge(i, j);
            }
        }
    }
    graph
}

/// Samples random graphs until one is connected, then reduces it to its
/// spanning tree. Uses the thread-local generator; tests that need
/// reproducibility go through `random_tree_instance_with` and a seeded rng.
pub fn random_tree_instance(
    nodes: u32,
    probability: Option<f64>,
) -> Result<(Graph, InstanceParameters), ColoringError> {
    let mut rng = rng();
    random_tree_instance_with(nodes, probability, &mut rng)
}

pub fn random_tree_instance_with(
    nodes: u32,
    probability: Option<f64>,
    rng: &mut impl Rng,
) -> Result<(Graph, InstanceParameters), ColoringError> {
    if nodes == 0 {
        return Err(ColoringError::EmptyGraph);
    }

    let mut last_error = ColoringError::DisconnectedGraph { nodes, edges: 0 };

    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let p = probability.unwrap_or_else(|| choose_probability(nodes, rng));
        let sample = generate_gnp(nodes, p, rng);
        match spanning_tree(&sample) {
            Ok(tree) => {
                let params = InstanceParameters {
                    nodes,
                    edge_probability: p,
                    sampled_edges: sample.edge_count(),
                    tree_edges: tree.edge_count(),
                };
                return Ok((tree, params));
            }
            Err(err) => last_error = err,
        }
    }

    Err(last_error)
}
