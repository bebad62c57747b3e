use thiserror::Error;

/// Structural input problems surfaced at component boundaries.
///
/// None of these are retried inside the core: they describe malformed input,
/// not transient conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringError {
    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("edge ({from}, {to}) references a vertex outside 1..={nodes}")]
    VertexOutOfRange { from: u32, to: u32, nodes: u32 },

    #[error("root {root} is outside the vertex range 1..={nodes}")]
    InvalidRoot { root: u32, nodes: u32 },

    #[error("graph is disconnected: {edges} spanning edges for {nodes} vertices")]
    DisconnectedGraph { nodes: u32, edges: usize },
}
