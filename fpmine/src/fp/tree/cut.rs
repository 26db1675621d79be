use super::tree::FPTree;
use crate::fp::error::{FpError, FpResult};
use std::collections::VecDeque;

impl FPTree {
    /// Extract the conditional FP-tree of `target`.
    ///
    /// The result holds, for every transaction containing `target`, the
    /// prefix before `target`, weighted by how many transactions share it.
    /// Items below the support threshold are pruned from it. `self` is left
    /// untouched; the extraction works on a deep copy.
    pub fn cut(&self, target: usize) -> FpResult<FPTree> {
        let support = self.support(target);
        if support < self.min_support {
            return Err(FpError::UnsupportedTarget {
                item: target,
                support,
                min_support: self.min_support,
            });
        }

        let mut cond = self.deep_copy();
        cond.header_table.clear();
        cond.item_support.clear();

        let mut occurrences = Vec::new();
        let mut queue = VecDeque::from([cond.root_index]);
        while let Some(index) = queue.pop_front() {
            let node = &mut cond.nodes[index];
            if node.item == Some(target) {
                occurrences.push(index);
            } else {
                node.count = 0;
            }
            queue.extend(node.children.values().copied());
        }

        for &occurrence in &occurrences {
            let weight = cond.nodes[occurrence].count;
            if weight == 0 {
                continue;
            }

            let mut current = cond.nodes[occurrence].parent;
            while let Some(index) = current {
                let node = &mut cond.nodes[index];
                let first_visit = node.count == 0;
                node.count += weight;
                current = node.parent;

                // The root sentinel only accumulates the weight.
                if let Some(item) = node.item {
                    *cond.item_support.entry(item).or_insert(0) += weight;
                    if first_visit {
                        cond.header_table.entry(item).or_default().push(index);
                    }
                }
            }
        }

        for &occurrence in &occurrences {
            if let Some(parent) = cond.nodes[occurrence].parent {
                cond.nodes[parent].children.remove(&target);
            }
            cond.discard_subtree(occurrence);
        }
        cond.header_table.remove(&target);
        cond.item_support.remove(&target);

        cond.cleanup_zero();
        cond.prune();

        log::trace!(
            "cut item {} (support {}): {} occurrences, {} items left",
            target,
            support,
            occurrences.len(),
            cond.item_support.len()
        );

        Ok(cond)
    }
}
