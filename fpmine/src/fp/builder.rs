use super::error::{FpError, FpResult};
use super::tree::FPTree;

/// Build an FP-tree from encoded transactions.
///
/// Every transaction must be strictly ascending by item id, which also rules
/// out duplicates. No pruning happens here; unsupported items stay in the
/// tree until [`FPTree::prune`] or a [`FPTree::cut`] removes them.
pub fn build_fp_tree<T: AsRef<[usize]>>(
    transactions: &[T],
    min_support: usize,
) -> FpResult<FPTree> {
    if min_support == 0 {
        return Err(FpError::InvalidMinSupport("count must be positive".to_string()));
    }
    let mut fp_tree = FPTree::new(min_support);

    for (index, transaction) in transactions.iter().enumerate() {
        let transaction = transaction.as_ref();
        validate_transaction(transaction)
            .map_err(|reason| FpError::InvalidTransaction { index, reason })?;
        fp_tree.insert_transaction(transaction, 1);
    }

    log::debug!(
        "built fp-tree from {} transactions: {} nodes, {} items, min support {}",
        transactions.len(),
        fp_tree.node_count(),
        fp_tree.item_support().len(),
        min_support
    );

    Ok(fp_tree)
}

fn validate_transaction(transaction: &[usize]) -> Result<(), String> {
    for pair in transaction.windows(2) {
        if pair[0] == pair[1] {
            return Err(format!("duplicate item {}", pair[0]));
        }
        if pair[0] > pair[1] {
            return Err(format!("item {} follows {}", pair[1], pair[0]));
        }
    }
    Ok(())
}

impl FPTree {
    pub fn from_transactions<T: AsRef<[usize]>>(
        transactions: &[T],
        min_support: usize,
    ) -> FpResult<Self> {
        build_fp_tree(transactions, min_support)
    }
}
