use ndarray::ArrayView2;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// How item ids are assigned to labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ranking {
    /// Most frequent label gets id 0, ties broken by label order.
    #[default]
    Frequency,
    /// Ids follow label order.
    Label,
}

/// Maps item labels to dense item ids and back.
#[derive(Debug, Clone)]
pub struct ItemEncoder<T> {
    labels: Vec<T>,
    frequencies: Vec<usize>,
    ids: HashMap<T, usize>,
}

impl<T> ItemEncoder<T>
where
    T: Clone + Eq + Hash + Ord,
{
    pub fn fit<I, R>(transactions: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        Self::fit_with_ranking(transactions, Ranking::Frequency)
    }

    pub fn fit_with_ranking<I, R>(transactions: I, ranking: Ranking) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        let mut item_counts: HashMap<T, usize> = HashMap::new();
        for transaction in transactions {
            // A label repeated within one transaction counts once.
            let distinct: HashSet<&T> = transaction.as_ref().iter().collect();
            for label in distinct {
                *item_counts.entry(label.clone()).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(T, usize)> = item_counts.into_iter().collect();
        match ranking {
            Ranking::Frequency => ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0))),
            Ranking::Label => ranked.sort_by(|a, b| a.0.cmp(&b.0)),
        }

        let ids = ranked
            .iter()
            .enumerate()
            .map(|(id, (label, _))| (label.clone(), id))
            .collect();
        let (labels, frequencies) = ranked.into_iter().unzip();

        Self {
            labels,
            frequencies,
            ids,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn id_of(&self, label: &T) -> Option<usize> {
        self.ids.get(label).copied()
    }

    pub fn decode(&self, id: usize) -> Option<&T> {
        self.labels.get(id)
    }

    /// Number of transactions the label occurred in while fitting.
    pub fn frequency(&self, id: usize) -> Option<usize> {
        self.frequencies.get(id).copied()
    }

    /// Encode one transaction: strictly ascending ids, unknown labels dropped.
    pub fn encode(&self, transaction: &[T]) -> Vec<usize> {
        let mut encoded: Vec<usize> = transaction
            .iter()
            .filter_map(|label| self.id_of(label))
            .collect();
        encoded.sort_unstable();
        encoded.dedup();
        encoded
    }

    pub fn encode_all<I, R>(&self, transactions: I) -> Vec<Vec<usize>>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
    {
        transactions
            .into_iter()
            .map(|transaction| self.encode(transaction.as_ref()))
            .collect()
    }

    /// Map ids back to labels. `None` if any id is unknown.
    pub fn decode_itemset(&self, itemset: &[usize]) -> Option<Vec<T>> {
        itemset
            .iter()
            .map(|&id| self.decode(id).cloned())
            .collect()
    }
}

/// Convert a binary transaction matrix to per-row column indices.
pub fn matrix_to_transactions(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    let num_transactions = transactions.shape()[0];
    let num_items = transactions.shape()[1];

    (0..num_transactions)
        .map(|i| {
            (0..num_items)
                .filter(|&j| transactions[[i, j]] != 0)
                .collect()
        })
        .collect()
}
