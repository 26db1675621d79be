use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FpError {
    /// A transaction is not strictly ascending by item id.
    #[error("invalid transaction #{index}: {reason}")]
    InvalidTransaction { index: usize, reason: String },

    /// `cut` was asked for an item that does not meet the support threshold.
    #[error("item {item} has support {support} below the minimum of {min_support}")]
    UnsupportedTarget {
        item: usize,
        support: usize,
        min_support: usize,
    },

    /// The header table and the tree structure disagree. Always a bug.
    #[error("index integrity violation: {0}")]
    IndexIntegrityViolation(String),

    /// `merge` was given nodes that cannot be coalesced.
    #[error("cannot merge node {a} into node {b}")]
    InvalidMerge { a: usize, b: usize },

    #[error("invalid minimum support: {0}")]
    InvalidMinSupport(String),
}

pub type FpResult<T> = Result<T, FpError>;
