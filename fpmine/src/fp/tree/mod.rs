// Tree module - FP-tree data structure, structural primitives and
// conditional tree extraction

mod cut;
mod tree;
mod tree_ops;

pub use tree::{FPNode, FPTree};
