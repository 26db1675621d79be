use fpmine::{FPTree, FpError, ItemEncoder, MiningConfig, fp_growth, fp_growth_labels, mine};
use std::collections::BTreeMap;

fn baskets() -> Vec<Vec<&'static str>> {
    vec![
        vec!["whole milk", "rolls", "yogurt"],
        vec!["whole milk", "soda"],
        vec!["rolls", "soda", "yogurt", "whole milk"],
        vec!["other vegetables", "whole milk"],
        vec!["rolls", "yogurt"],
        vec!["whole milk", "yogurt", "other vegetables"],
        vec!["soda"],
        vec!["whole milk", "rolls", "yogurt", "yogurt"],
    ]
}

fn support_by_labels(result: &[(Vec<&'static str>, usize)]) -> BTreeMap<Vec<&'static str>, usize> {
    result
        .iter()
        .map(|(labels, support)| {
            let mut labels = labels.clone();
            labels.sort_unstable();
            (labels, *support)
        })
        .collect()
}

#[test]
fn mines_labelled_baskets() {
    let result = fp_growth_labels(&baskets(), &MiningConfig::count(3)).unwrap();
    let supports = support_by_labels(&result);

    assert_eq!(supports[&vec!["whole milk"]], 6);
    assert_eq!(supports[&vec!["yogurt"]], 5);
    assert_eq!(supports[&vec!["rolls"]], 4);
    assert_eq!(supports[&vec!["soda"]], 3);
    assert_eq!(supports[&vec!["whole milk", "yogurt"]], 4);
    assert_eq!(supports[&vec!["rolls", "yogurt"]], 4);
    assert_eq!(supports[&vec!["rolls", "whole milk"]], 3);
    assert_eq!(supports[&vec!["rolls", "whole milk", "yogurt"]], 3);
    assert!(!supports.contains_key(&vec!["other vegetables"]));
    assert!(!supports.contains_key(&vec!["soda", "whole milk"]));
    assert_eq!(supports.len(), 8);
}

#[test]
fn parallel_and_sequential_agree() {
    let encoder = ItemEncoder::fit(&baskets());
    let encoded = encoder.encode_all(&baskets());

    let sequential = fp_growth(&encoded, &MiningConfig::count(2)).unwrap();
    let parallel = fp_growth(&encoded, &MiningConfig::count(2).with_parallel(true)).unwrap();

    assert_eq!(sequential.to_map(), parallel.to_map());
    assert!(!sequential.is_empty());
}

#[test]
fn conditional_tree_mines_with_suffix() {
    let encoder = ItemEncoder::fit(&baskets());
    let encoded = encoder.encode_all(&baskets());
    let milk = encoder.id_of(&"whole milk").unwrap();
    let yogurt = encoder.id_of(&"yogurt").unwrap();
    let rolls = encoder.id_of(&"rolls").unwrap();

    let mut tree = FPTree::from_transactions(&encoded, 3).unwrap();
    tree.prune();
    let cond = tree.cut(rolls).unwrap();
    cond.verify_integrity().unwrap();
    assert_eq!(cond.num_transactions(), 4);
    assert_eq!(cond.support(milk), 3);
    assert_eq!(cond.support(yogurt), 4);

    let result = mine(&cond, &[rolls], &MiningConfig::count(3)).unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result.support_of(&[rolls, yogurt]), Some(4));
    assert_eq!(result.support_of(&[rolls, milk]), Some(3));
    assert_eq!(result.support_of(&[rolls, milk, yogurt]), Some(3));
}

#[test]
fn rejects_unsorted_input() {
    let transactions = vec![vec![2usize, 1]];
    assert!(matches!(
        fp_growth(&transactions, &MiningConfig::count(1)),
        Err(FpError::InvalidTransaction { index: 0, .. })
    ));
}
