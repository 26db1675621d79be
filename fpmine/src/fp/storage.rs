use std::collections::BTreeMap;

/// Memory-efficient itemset storage using flat arrays
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<usize>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// Frequent itemsets of a single size
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an itemset in sorted order. Returns its position.
    pub fn add_itemset(&mut self, mut items: Vec<usize>, support: usize) -> usize {
        items.sort_unstable();
        items.dedup();

        let start = self.items.len();
        self.offsets.push((start, items.len()));
        self.items.extend_from_slice(&items);
        self.supports.push(support);

        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        let (start, length) = self.offsets[idx];
        &self.items[start..start + length]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Append everything from `other`, rebasing its offsets.
    pub fn extend(&mut self, other: &ItemsetStorage) {
        let base = self.items.len();
        self.items.extend_from_slice(&other.items);
        self.offsets
            .extend(other.offsets.iter().map(|&(start, length)| (start + base, length)));
        self.supports.extend_from_slice(&other.supports);
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: Vec<usize>, support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        self.storage.get_itemset(idx)
    }

    pub fn support(&self, idx: usize) -> usize {
        self.storage.support(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[usize]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    pub fn iter_with_support(&self) -> impl Iterator<Item = (&[usize], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.support(idx)))
    }

    pub fn extend(&mut self, other: &FrequentLevel) {
        debug_assert_eq!(self.itemset_size, other.itemset_size);
        self.storage.extend(&other.storage);
    }
}

pub fn add_pattern_to_result(pattern: &[usize], support: usize, result: &mut Vec<FrequentLevel>) {
    let pattern_size = pattern.len();

    while result.len() < pattern_size {
        result.push(FrequentLevel::new(result.len() + 1));
    }

    if pattern_size > 0 {
        result[pattern_size - 1].add_itemset(pattern.to_vec(), support);
    }
}

/// Append `levels` into `merged`, level by level.
pub fn merge_levels(merged: &mut Vec<FrequentLevel>, levels: &[FrequentLevel]) {
    for level in levels {
        let size = level.itemset_size;
        while merged.len() < size {
            merged.push(FrequentLevel::new(merged.len() + 1));
        }
        merged[size - 1].extend(level);
    }
}

/// Everything one mining run produced.
#[derive(Debug, Clone, Default)]
pub struct MiningResult {
    /// `levels[k]` holds the itemsets of size `k + 1`.
    pub levels: Vec<FrequentLevel>,
    /// Set when mining stopped early because of an itemset or time limit.
    pub truncated: bool,
}

impl MiningResult {
    pub fn len(&self) -> usize {
        self.levels.iter().map(FrequentLevel::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All itemsets with their supports, smallest itemsets first.
    pub fn iter(&self) -> impl Iterator<Item = (&[usize], usize)> {
        self.levels
            .iter()
            .flat_map(|level| level.iter_with_support())
    }

    /// Support of an itemset, if it was found frequent.
    pub fn support_of(&self, itemset: &[usize]) -> Option<usize> {
        let mut sorted = itemset.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let level = self.levels.get(sorted.len().checked_sub(1)?)?;
        level
            .iter_with_support()
            .find(|&(items, _)| items == sorted.as_slice())
            .map(|(_, support)| support)
    }

    pub fn to_map(&self) -> BTreeMap<Vec<usize>, usize> {
        self.iter()
            .map(|(items, support)| (items.to_vec(), support))
            .collect()
    }
}
