pub mod color;
pub mod engine;
pub mod levels;
pub mod probe;

pub use color::Color;
pub use engine::{ColoringConfig, ColoringOutcome, PackingColorer, PhaseOnePolicy, ReuseBound};
pub use levels::level_order;
pub use probe::colors_within_radius;

use crate::error::ColoringError;
use crate::graph::{spanning_tree, Graph};

/// Full pipeline over the in-memory input boundary: validate the edge set,
/// reduce it to a spanning tree, then run the packing-coloring engine.
///
/// When `root` is `None` the engine picks the tree center itself.
pub fn approximate_packing_coloring(
    nodes: u32,
    edges: &[(u32, u32)],
    root: Option<u32>,
    config: &ColoringConfig,
) -> Result<ColoringOutcome, ColoringError> {
    let graph = Graph::from_edges(nodes, edges)?;
    let tree = spanning_tree(&graph)?;
    PackingColorer::new(tree, config.clone()).assign(root)
}
