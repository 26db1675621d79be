pub mod builder;
pub mod config;
pub mod encoder;
pub mod error;
pub mod mining;
pub mod storage;
pub mod tree;

pub use builder::build_fp_tree;
pub use config::{MinSupport, MiningConfig};
pub use encoder::{ItemEncoder, Ranking, matrix_to_transactions};
pub use error::{FpError, FpResult};
pub use mining::{fp_growth, fp_growth_labels, mine};
pub use storage::{FrequentLevel, ItemsetStorage, MiningResult};
pub use tree::{FPNode, FPTree};
