pub mod center;
pub mod disjoint_set;
pub mod graph;
pub mod spanning;

pub use center::tree_center;
pub use disjoint_set::DisjointSet;
pub use graph::Graph;
pub use spanning::spanning_tree;
