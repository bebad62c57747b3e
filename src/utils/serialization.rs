use crate::graph::Graph;
use crate::utils::random_graph::InstanceParameters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// A generated tree instance as written to disk: the spanning tree itself
/// plus the sampling metadata, when the instance came from the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphInstance {
    pub graph: Graph,
    pub metadata: Option<InstanceParameters>,
}

impl GraphInstance {
    pub fn new(graph: Graph) -> Self {
        GraphInstance {
            graph,
            metadata: None,
        }
    }

    pub fn with_metadata(graph: Graph, metadata: InstanceParameters) -> Self {
        GraphInstance {
            graph,
            metadata: Some(metadata),
        }
    }
}

pub fn save_graph_instance<P: AsRef<Path>>(path: P, instance: &GraphInstance) -> io::Result<()> {
    let bytes = bincode::serialize(instance)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("serialize instance: {err}")))?;
    fs::write(path, bytes)
}

pub fn load_graph_instance<P: AsRef<Path>>(path: P) -> io::Result<GraphInstance> {
    let bytes = fs::read(path)?;
    bincode::deserialize(&bytes)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("deserialize instance: {err}")))
}
