pub mod random_graph;
pub mod serialization;
