use super::builder::build_fp_tree;
use super::config::MiningConfig;
use super::encoder::ItemEncoder;
use super::error::FpResult;
use super::storage::{FrequentLevel, MiningResult, add_pattern_to_result, merge_levels};
use super::tree::FPTree;
use rayon::prelude::*;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

/// Mine every frequent itemset from encoded transactions.
///
/// Builds the tree, prunes unsupported items from it and hands it to
/// [`mine`] with an empty suffix.
pub fn fp_growth<T: AsRef<[usize]>>(
    transactions: &[T],
    config: &MiningConfig,
) -> FpResult<MiningResult> {
    let min_count = config.min_support.resolve(transactions.len())?;
    let mut fp_tree = build_fp_tree(transactions, min_count)?;
    fp_tree.prune();
    if config.verify_integrity {
        fp_tree.verify_integrity()?;
    }

    let result = mine(&fp_tree, &[], config)?;
    log::debug!(
        "mined {} itemsets from {} transactions (min support {})",
        result.len(),
        transactions.len(),
        min_count
    );
    Ok(result)
}

/// Mine labelled transactions, assigning item ids by descending frequency.
pub fn fp_growth_labels<T, R>(
    transactions: &[R],
    config: &MiningConfig,
) -> FpResult<Vec<(Vec<T>, usize)>>
where
    T: Clone + Eq + Hash + Ord,
    R: AsRef<[T]>,
{
    let encoder = ItemEncoder::fit(transactions);
    let encoded = encoder.encode_all(transactions);
    let result = fp_growth(&encoded, config)?;

    Ok(result
        .iter()
        .filter_map(|(itemset, support)| {
            encoder
                .decode_itemset(itemset)
                .map(|labels| (labels, support))
        })
        .collect())
}

/// Enumerate all frequent itemsets of `fp_tree`, each extended by `suffix`.
///
/// Items are processed in descending id order. The itemset and time limits
/// of `config` are checked before each item of this call, never inside the
/// recursion below it.
pub fn mine(fp_tree: &FPTree, suffix: &[usize], config: &MiningConfig) -> FpResult<MiningResult> {
    let frequent_items = fp_tree.frequent_items();
    let started = Instant::now();
    let emitted = AtomicUsize::new(0);
    let stopped = AtomicBool::new(false);

    let mine_item = |item: usize| -> FpResult<Option<Vec<FrequentLevel>>> {
        let over_count = config
            .max_itemsets
            .is_some_and(|limit| emitted.load(Ordering::Relaxed) >= limit);
        let over_time = config
            .time_limit
            .is_some_and(|limit| started.elapsed() >= limit);
        if over_count || over_time || stopped.load(Ordering::Relaxed) {
            stopped.store(true, Ordering::Relaxed);
            return Ok(None);
        }

        let mut levels = Vec::new();
        mine_item_recursive(fp_tree, item, suffix, config.verify_integrity, &mut levels)?;
        let found: usize = levels.iter().map(FrequentLevel::len).sum();
        emitted.fetch_add(found, Ordering::Relaxed);
        Ok(Some(levels))
    };

    let per_item: Vec<Option<Vec<FrequentLevel>>> = if config.parallel {
        frequent_items
            .par_iter()
            .map(|&item| mine_item(item))
            .collect::<FpResult<_>>()?
    } else {
        frequent_items
            .iter()
            .map(|&item| mine_item(item))
            .collect::<FpResult<_>>()?
    };

    let mut result = MiningResult::default();
    for levels in per_item {
        match levels {
            Some(levels) => merge_levels(&mut result.levels, &levels),
            None => result.truncated = true,
        }
    }

    if result.truncated {
        log::warn!(
            "mining stopped early after {} itemsets ({:?} elapsed)",
            result.len(),
            started.elapsed()
        );
    }
    Ok(result)
}

fn mine_recursive(
    fp_tree: &FPTree,
    suffix: &[usize],
    verify_integrity: bool,
    result: &mut Vec<FrequentLevel>,
) -> FpResult<()> {
    for item in fp_tree.frequent_items() {
        mine_item_recursive(fp_tree, item, suffix, verify_integrity, result)?;
    }
    Ok(())
}

fn mine_item_recursive(
    fp_tree: &FPTree,
    item: usize,
    suffix: &[usize],
    verify_integrity: bool,
    result: &mut Vec<FrequentLevel>,
) -> FpResult<()> {
    let mut pattern = Vec::with_capacity(suffix.len() + 1);
    pattern.push(item);
    pattern.extend_from_slice(suffix);
    add_pattern_to_result(&pattern, fp_tree.support(item), result);

    let cond_tree = fp_tree.cut(item)?;
    if verify_integrity {
        cond_tree.verify_integrity()?;
    }

    if !cond_tree.is_empty() {
        mine_recursive(&cond_tree, &pattern, verify_integrity, result)?;
    }
    Ok(())
}
