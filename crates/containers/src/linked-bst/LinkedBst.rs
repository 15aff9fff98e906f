use std::cmp::Ordering;
use std::fmt::Display;

use crate::print::{print_tree, PrintChild, Printable};
use crate::types::Traversal;
use crate::util::{find, first, height, last, next, prev, relocate, remove as unlink, size};

use super::bst_node::BstNode;

/// Unbalanced binary search tree that collapses equal values into one node
/// with an occurrence count.
///
/// Links are `u32`, so at most `u32::MAX` distinct values fit.
pub struct LinkedBst<T> {
    root: Option<u32>,
    nodes: Vec<BstNode<T>>,
    total: usize,
}

impl<T: Ord> LinkedBst<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            nodes: Vec::new(),
            total: 0,
        }
    }

    /// Number of stored values, counting every occurrence.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Number of distinct values (nodes).
    pub fn distinct_len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> usize {
        height(&self.nodes, self.root)
    }

    pub fn contains(&self, value: &T) -> bool {
        find(&self.nodes, self.root, value).is_some()
    }

    /// How many times `value` is currently stored.
    pub fn occurrences(&self, value: &T) -> usize {
        find(&self.nodes, self.root, value).map_or(0, |i| self.nodes[i as usize].count)
    }

    fn push_node(&mut self, value: T, parent: Option<u32>) -> u32 {
        debug_assert!(self.nodes.len() < u32::MAX as usize, "tree arena full");
        let mut node = BstNode::new(value);
        node.p = parent;
        self.nodes.push(node);
        (self.nodes.len() - 1) as u32
    }

    pub fn insert(&mut self, value: T) {
        self.total += 1;
        let Some(mut curr) = self.root else {
            self.root = Some(self.push_node(value, None));
            return;
        };
        loop {
            let n = &self.nodes[curr as usize];
            let (ord, l, r) = (value.cmp(&n.value), n.l, n.r);
            let child = match ord {
                Ordering::Equal => {
                    self.nodes[curr as usize].count += 1;
                    return;
                }
                Ordering::Less => l,
                Ordering::Greater => r,
            };
            match child {
                Some(c) => curr = c,
                None => {
                    let idx = self.push_node(value, Some(curr));
                    if ord == Ordering::Less {
                        self.nodes[curr as usize].l = Some(idx);
                    } else {
                        self.nodes[curr as usize].r = Some(idx);
                    }
                    return;
                }
            }
        }
    }

    /// Removes one occurrence of `value`. The node itself is unlinked once its
    /// count reaches zero. Returns whether anything was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(idx) = find(&self.nodes, self.root, value) else {
            return false;
        };
        self.total -= 1;
        let node = &mut self.nodes[idx as usize];
        if node.count > 1 {
            node.count -= 1;
            return true;
        }
        self.root = unlink(&mut self.nodes, self.root, idx);
        self.release(idx);
        true
    }

    /// Removes every occurrence of `value`, returning how many there were.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let Some(idx) = find(&self.nodes, self.root, value) else {
            return 0;
        };
        let count = self.nodes[idx as usize].count;
        self.total -= count;
        self.root = unlink(&mut self.nodes, self.root, idx);
        self.release(idx);
        count
    }

    /// Drops the already unlinked node at `idx`, moving the last arena node
    /// into its slot.
    fn release(&mut self, idx: u32) {
        let last = (self.nodes.len() - 1) as u32;
        if idx != last {
            self.root = relocate(&mut self.nodes, self.root, last, idx);
        }
        self.nodes.swap_remove(idx as usize);
    }

    pub fn min(&self) -> Option<&T> {
        first(&self.nodes, self.root).map(|i| &self.nodes[i as usize].value)
    }

    pub fn max(&self) -> Option<&T> {
        last(&self.nodes, self.root).map(|i| &self.nodes[i as usize].value)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.total = 0;
    }

    /// Visits every node in the given order, passing the value and its
    /// occurrence count.
    pub fn traverse<'a, F: FnMut(&'a T, usize)>(&'a self, order: Traversal, mut f: F) {
        match order {
            Traversal::Sorted => {
                let mut curr = first(&self.nodes, self.root);
                while let Some(i) = curr {
                    let n = &self.nodes[i as usize];
                    f(&n.value, n.count);
                    curr = next(&self.nodes, i);
                }
            }
            Traversal::Reverse => {
                let mut curr = last(&self.nodes, self.root);
                while let Some(i) = curr {
                    let n = &self.nodes[i as usize];
                    f(&n.value, n.count);
                    curr = prev(&self.nodes, i);
                }
            }
            Traversal::PreOrder | Traversal::PostOrder => self.walk(order, &mut f),
        }
    }

    /// Pre- or post-order walk on an explicit stack. The flag marks a node
    /// whose children have already been queued.
    fn walk<'a, F: FnMut(&'a T, usize)>(&'a self, order: Traversal, f: &mut F) {
        let mut pending: Vec<(u32, bool)> = self.root.map(|r| (r, false)).into_iter().collect();
        while let Some((i, expanded)) = pending.pop() {
            let n = &self.nodes[i as usize];
            if expanded {
                f(&n.value, n.count);
                continue;
            }
            if order == Traversal::PostOrder {
                pending.push((i, true));
            } else {
                f(&n.value, n.count);
            }
            pending.extend(n.r.map(|r| (r, false)));
            pending.extend(n.l.map(|l| (l, false)));
        }
    }

    fn collect(&self, order: Traversal) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.total);
        self.traverse(order, |v, count| {
            out.extend(std::iter::repeat(v).take(count).cloned());
        });
        out
    }

    pub fn sorted(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect(Traversal::Sorted)
    }

    pub fn reverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect(Traversal::Reverse)
    }

    pub fn pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect(Traversal::PreOrder)
    }

    pub fn post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect(Traversal::PostOrder)
    }

    /// Checks parent links, ordering, counts and the cached totals.
    pub fn assert_valid(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            return if self.nodes.is_empty() && self.total == 0 {
                Ok(())
            } else {
                Err("Empty tree with leftover nodes".to_string())
            };
        };
        if self.nodes[root as usize].p.is_some() {
            return Err("Root has parent".to_string());
        }
        let mut total = 0;
        let mut pending: Vec<(u32, Option<&T>, Option<&T>)> = vec![(root, None, None)];
        while let Some((node, lo, hi)) = pending.pop() {
            let n = &self.nodes[node as usize];
            if n.count == 0 {
                return Err(format!("Node {node} has zero occurrences"));
            }
            if lo.is_some_and(|lo| n.value <= *lo) || hi.is_some_and(|hi| n.value >= *hi) {
                return Err(format!("Node order violated at node {node}"));
            }
            for child in [n.l, n.r].into_iter().flatten() {
                if self.nodes[child as usize].p != Some(node) {
                    return Err(format!("Broken parent link on child {child}"));
                }
            }
            total += n.count;
            if let Some(l) = n.l {
                pending.push((l, lo, Some(&n.value)));
            }
            if let Some(r) = n.r {
                pending.push((r, Some(&n.value), hi));
            }
        }
        // Every child's parent link was checked above, so this walk cannot cycle.
        let reachable = size(&self.nodes, self.root);
        if reachable != self.nodes.len() {
            return Err(format!("{} nodes stored but {reachable} reachable", self.nodes.len()));
        }
        if total != self.total {
            return Err(format!("len() is {} but {total} occurrences are reachable", self.total));
        }
        Ok(())
    }
}

impl<T: Ord> Default for LinkedBst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for LinkedBst<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for LinkedBst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord + Display> LinkedBst<T> {
    fn print_node(&self, node: u32, tab: &str, side: &str) -> String {
        let n = &self.nodes[node as usize];
        let l = |tab: &str| n.l.map_or_else(String::new, |l| self.print_node(l, tab, "←"));
        let r = |tab: &str| n.r.map_or_else(String::new, |r| self.print_node(r, tab, "→"));
        let l: Option<&PrintChild> = if n.l.is_some() { Some(&l) } else { None };
        let r: Option<&PrintChild> = if n.r.is_some() { Some(&r) } else { None };
        let times = if n.count > 1 {
            format!(" ×{}", n.count)
        } else {
            String::new()
        };
        format!("{side}{}{times}{}", n.value, print_tree(Some(tab), &[l, r]))
    }
}

/// Rendering recurses once per level; meant for small debug trees.
impl<T: Ord + Display> Printable for LinkedBst<T> {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String {
        let tab = tab.unwrap_or("");
        let Some(root) = self.root else {
            return "LinkedBst ∅".to_string();
        };
        let root = |tab: &str| self.print_node(root, tab, "");
        let root: Option<&PrintChild> = Some(&root);
        format!("LinkedBst{}", print_tree(Some(tab), &[root]))
    }
}
