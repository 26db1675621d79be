use super::tree::FPTree;
use crate::fp::error::{FpError, FpResult};

impl FPTree {
    /// Insert one transaction with the given weight.
    ///
    /// The transaction must be strictly ascending by item id; the builder
    /// validates that before calling in.
    pub(crate) fn insert_transaction(&mut self, transaction: &[usize], count: usize) {
        debug_assert!(transaction.windows(2).all(|pair| pair[0] < pair[1]));

        let mut current_index = self.root_index;
        self.nodes[current_index].count += count;

        for &item in transaction {
            let child_index = match self.nodes[current_index].children.get(&item) {
                Some(&child_index) => child_index,
                None => self.new_child(current_index, item, 0),
            };
            self.nodes[child_index].count += count;
            *self.item_support.entry(item).or_insert(0) += count;
            current_index = child_index;
        }
    }

    /// Coalesce node `a` into node `b`, both carrying the same item.
    ///
    /// Children of `a` are visited in ascending item order and either moved
    /// under `b` or merged recursively into `b`'s child of the same item.
    /// `a` is detached and dropped from the header table. Returns `b`.
    ///
    /// Merging a node into itself is a no-op. Detached or out of range nodes,
    /// the root, nodes of different items and nodes on one root path are
    /// rejected with [`FpError::InvalidMerge`].
    pub fn merge(&mut self, a: usize, b: usize) -> FpResult<usize> {
        if a == b && self.attached_item(a).is_some() {
            return Ok(b);
        }
        let same_item = matches!(
            (self.attached_item(a), self.attached_item(b)),
            (Some(item_a), Some(item_b)) if item_a == item_b
        );
        if !same_item || self.is_ancestor(a, b) || self.is_ancestor(b, a) {
            return Err(FpError::InvalidMerge { a, b });
        }
        Ok(self.merge_nodes(a, b))
    }

    fn attached_item(&self, index: usize) -> Option<usize> {
        self.nodes
            .get(index)
            .filter(|node| node.parent.is_some())
            .and_then(|node| node.item)
    }

    fn is_ancestor(&self, ancestor: usize, index: usize) -> bool {
        let mut current = self.nodes[index].parent;
        while let Some(i) = current {
            if i == ancestor {
                return true;
            }
            current = self.nodes[i].parent;
        }
        false
    }

    fn merge_nodes(&mut self, a: usize, b: usize) -> usize {
        self.nodes[b].count += self.nodes[a].count;

        let children = std::mem::take(&mut self.nodes[a].children);
        for (item, child) in children {
            match self.nodes[b].children.get(&item) {
                Some(&existing) => {
                    self.merge_nodes(child, existing);
                }
                None => self.adopt(b, item, child),
            }
        }

        self.retire(a);
        b
    }

    /// Remove every item below the support threshold, splicing its children
    /// up to its parent. The root is never removed.
    pub fn prune(&mut self) {
        let root = self.root_index;
        self.prune_children(root);
    }

    fn prune_children(&mut self, index: usize) {
        let children: Vec<(usize, usize)> = self.nodes[index]
            .children
            .iter()
            .map(|(&item, &child)| (item, child))
            .collect();

        for (item, child) in children {
            self.prune_children(child);
            if self.is_supported(item) {
                continue;
            }

            self.nodes[index].children.remove(&item);
            let grandchildren = std::mem::take(&mut self.nodes[child].children);
            for (grandchild_item, grandchild) in grandchildren {
                match self.nodes[index].children.get(&grandchild_item) {
                    Some(&existing) => {
                        self.merge_nodes(grandchild, existing);
                    }
                    None => self.adopt(index, grandchild_item, grandchild),
                }
            }
            self.nodes[child].parent = None;

            // Every node of this item goes in the same pass, so the entries
            // may already be gone.
            self.item_support.remove(&item);
            self.header_table.remove(&item);
        }
    }

    /// Post-order removal of every node whose count is zero.
    pub fn cleanup_zero(&mut self) {
        let root = self.root_index;
        self.cleanup_zero_from(root);
    }

    fn cleanup_zero_from(&mut self, index: usize) {
        let children: Vec<(usize, usize)> = self.nodes[index]
            .children
            .iter()
            .map(|(&item, &child)| (item, child))
            .collect();

        for (item, child) in children {
            self.cleanup_zero_from(child);
            if self.nodes[child].count == 0 {
                self.nodes[index].children.remove(&item);
                self.discard_subtree(child);
            }
        }
    }

    /// Move `child` under `parent`. A no-op if it is already attached there.
    pub(crate) fn adopt(&mut self, parent: usize, item: usize, child: usize) {
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.insert(item, child);
    }

    /// Drop a node whose count has been moved elsewhere.
    fn retire(&mut self, index: usize) {
        let item = self.nodes[index].item;
        if let Some(parent) = self.nodes[index].parent.take() {
            if let Some(item) = item {
                let siblings = &mut self.nodes[parent].children;
                if siblings.get(&item) == Some(&index) {
                    siblings.remove(&item);
                }
            }
        }
        self.nodes[index].count = 0;
        self.nodes[index].children.clear();
        if let Some(item) = item {
            self.unindex(item, index);
        }
    }

    /// Drop an already detached subtree together with its counts.
    pub(crate) fn discard_subtree(&mut self, index: usize) {
        let mut stack = vec![index];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current];
            node.parent = None;
            stack.extend(std::mem::take(&mut node.children).into_values());
            let count = std::mem::take(&mut node.count);

            if let Some(item) = node.item {
                if let Some(support) = self.item_support.get_mut(&item) {
                    *support = support.saturating_sub(count);
                }
                self.unindex(item, current);
            }
        }
    }

    fn unindex(&mut self, item: usize, index: usize) {
        if let Some(entries) = self.header_table.get_mut(&item) {
            entries.retain(|&entry| entry != index);
            if entries.is_empty() {
                self.header_table.remove(&item);
                self.item_support.remove(&item);
            }
        }
    }
}
