pub mod coloring;
pub mod error;
pub mod graph;
pub mod utils;

pub use coloring::{
    approximate_packing_coloring, colors_within_radius, level_order, Color, ColoringConfig,
    ColoringOutcome, PackingColorer, PhaseOnePolicy, ReuseBound,
};
pub use error::ColoringError;
pub use graph::{spanning_tree, tree_center, DisjointSet, Graph};
pub use utils::random_graph::{
    choose_probability, generate_gnp, random_tree_instance, random_tree_instance_with,
    InstanceParameters,
};
pub use utils::serialization::{load_graph_instance, save_graph_instance, GraphInstance};
