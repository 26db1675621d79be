use crate::fp::error::{FpError, FpResult};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

#[derive(Debug, Clone)]
pub struct FPNode {
    /// `None` only for the root sentinel.
    pub item: Option<usize>,
    pub count: usize,
    pub parent: Option<usize>,
    /// Child item id -> arena index, iterated in ascending item order.
    pub children: BTreeMap<usize, usize>,
}

/// Arena backed FP-tree.
///
/// Nodes are addressed by their index in `nodes`. Structural operations may
/// leave unreachable slots behind; only nodes reachable from the root are part
/// of the tree, and the header table only ever refers to those.
#[derive(Debug)]
pub struct FPTree {
    pub(crate) nodes: Vec<FPNode>,
    /// Item id -> every reachable node carrying that item.
    pub(crate) header_table: HashMap<usize, Vec<usize>>,
    /// Item id -> sum of the counts of its nodes.
    pub(crate) item_support: BTreeMap<usize, usize>,
    pub(crate) root_index: usize,
    pub(crate) min_support: usize,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: BTreeMap::new(),
        }
    }

    pub fn new_item(item: usize, count: usize, parent: Option<usize>) -> Self {
        Self {
            item: Some(item),
            count,
            parent,
            children: BTreeMap::new(),
        }
    }
}

impl Clone for FPTree {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

impl FPTree {
    pub fn new(min_support: usize) -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            item_support: BTreeMap::new(),
            root_index: 0,
            min_support,
        }
    }

    pub fn min_support(&self) -> usize {
        self.min_support
    }

    pub fn root_index(&self) -> usize {
        self.root_index
    }

    pub fn root(&self) -> &FPNode {
        &self.nodes[self.root_index]
    }

    pub fn node(&self, index: usize) -> &FPNode {
        &self.nodes[index]
    }

    /// Number of transactions represented by this tree.
    pub fn num_transactions(&self) -> usize {
        self.root().count
    }

    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty()
    }

    /// Aggregate support of `item`, zero if the item is absent.
    pub fn support(&self, item: usize) -> usize {
        self.item_support.get(&item).copied().unwrap_or(0)
    }

    pub fn item_support(&self) -> &BTreeMap<usize, usize> {
        &self.item_support
    }

    /// All nodes carrying `item`.
    pub fn nodes_of(&self, item: usize) -> &[usize] {
        self.header_table
            .get(&item)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_supported(&self, item: usize) -> bool {
        self.support(item) >= self.min_support
    }

    /// Supported items in mining order: descending item id.
    pub fn frequent_items(&self) -> Vec<usize> {
        self.item_support
            .iter()
            .rev()
            .filter(|&(_, &support)| support >= self.min_support)
            .map(|(&item, _)| item)
            .collect()
    }

    /// Indices of every node reachable from the root (root excluded), breadth first.
    pub fn reachable_nodes(&self) -> Vec<usize> {
        let mut reachable = Vec::new();
        let mut queue = VecDeque::from([self.root_index]);
        while let Some(index) = queue.pop_front() {
            for &child in self.nodes[index].children.values() {
                reachable.push(child);
                queue.push_back(child);
            }
        }
        reachable
    }

    pub fn node_count(&self) -> usize {
        self.reachable_nodes().len()
    }

    /// Build a fully independent copy.
    ///
    /// The copy is compacted to reachable nodes only. Its header table and
    /// support table are re-derived from the copied structure, never copied
    /// from `self`.
    pub fn deep_copy(&self) -> FPTree {
        let mut copy = FPTree::new(self.min_support);
        copy.nodes.reserve(self.nodes.len());
        copy.nodes[copy.root_index].count = self.root().count;

        // (source index, copy index)
        let mut queue = VecDeque::from([(self.root_index, copy.root_index)]);
        while let Some((source, target)) = queue.pop_front() {
            for (&item, &source_child) in &self.nodes[source].children {
                let count = self.nodes[source_child].count;
                let target_child = copy.new_child(target, item, count);
                queue.push_back((source_child, target_child));
            }
        }
        copy
    }

    /// Append a node under `parent` and register it in the header table.
    pub(crate) fn new_child(&mut self, parent: usize, item: usize, count: usize) -> usize {
        let index = self.nodes.len();
        self.nodes.push(FPNode::new_item(item, count, Some(parent)));
        self.nodes[parent].children.insert(item, index);
        self.header_table.entry(item).or_default().push(index);
        if count > 0 {
            *self.item_support.entry(item).or_insert(0) += count;
        }
        index
    }

    /// Check that the header table, the support table and the parent links
    /// all agree with the structure reachable from the root.
    pub fn verify_integrity(&self) -> FpResult<()> {
        let violation = |message: String| Err(FpError::IndexIntegrityViolation(message));

        let root = self.root();
        if root.item.is_some() || root.parent.is_some() {
            return violation("root is not a sentinel".to_string());
        }

        let mut reachable: HashMap<usize, usize> = HashMap::new();
        let mut derived_support: BTreeMap<usize, usize> = BTreeMap::new();
        let mut queue = VecDeque::from([self.root_index]);

        while let Some(index) = queue.pop_front() {
            for (&item, &child) in &self.nodes[index].children {
                let node = &self.nodes[child];
                if node.item != Some(item) {
                    return violation(format!(
                        "node {} is keyed as item {} but carries {:?}",
                        child, item, node.item
                    ));
                }
                if node.parent != Some(index) {
                    return violation(format!(
                        "node {} is a child of {} but points to parent {:?}",
                        child, index, node.parent
                    ));
                }
                if reachable.insert(child, item).is_some() {
                    return violation(format!("node {} is reachable twice", child));
                }
                if node.count > 0 {
                    *derived_support.entry(item).or_insert(0) += node.count;
                }
                queue.push_back(child);
            }
        }

        let mut indexed = HashSet::new();
        for (&item, entries) in &self.header_table {
            for &index in entries {
                if reachable.get(&index) != Some(&item) {
                    return violation(format!(
                        "header entry {} for item {} is not a reachable node of that item",
                        index, item
                    ));
                }
                if !indexed.insert(index) {
                    return violation(format!("node {} is indexed twice", index));
                }
            }
        }
        if indexed.len() != reachable.len() {
            return violation(format!(
                "{} reachable nodes but {} header entries",
                reachable.len(),
                indexed.len()
            ));
        }

        let recorded: BTreeMap<usize, usize> = self
            .item_support
            .iter()
            .filter(|&(_, &support)| support > 0)
            .map(|(&item, &support)| (item, support))
            .collect();
        if recorded != derived_support {
            return violation(format!(
                "support table {:?} disagrees with node counts {:?}",
                recorded, derived_support
            ));
        }

        Ok(())
    }
}
