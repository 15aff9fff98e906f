use std::cmp::Ordering;
use std::fmt::Display;

use crate::config::{ArrayBstConfig, GrowthPolicy, RemovalPolicy};
use crate::growable::GrowableArray;
use crate::print::{print_tree, PrintChild, Printable};
use crate::types::Traversal;

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

/// Binary search tree whose node at index `i` has children at `2i + 1` and
/// `2i + 2`.
///
/// Placement follows BST comparison, not heap balance, so skewed insertion
/// orders leave most of the array empty: a descending run of `n` values needs
/// roughly `2^n` slots. [`crate::linked_bst::LinkedBst`] has no such cost.
///
/// Values are unique; inserting an equal value is a no-op.
pub struct ArrayBst<T> {
    entries: GrowableArray<T>,
    size: usize,
    removal: RemovalPolicy,
}

impl<T: Ord> ArrayBst<T> {
    pub fn new() -> Self {
        Self::with_config(ArrayBstConfig::default())
    }

    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self::with_config(ArrayBstConfig {
            growth: GrowthPolicy::with_capacity(initial_capacity),
            ..ArrayBstConfig::default()
        })
    }

    pub fn with_config(config: ArrayBstConfig) -> Self {
        Self {
            entries: GrowableArray::new(config.growth),
            size: 0,
            removal: config.removal,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn growth_rate(&self) -> usize {
        self.entries.policy().effective_growth_rate()
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal
    }

    /// Array index holding `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let mut pos = 0;
        while let Some(curr) = self.entries.get(pos) {
            pos = match value.cmp(curr) {
                Ordering::Equal => return Some(pos),
                Ordering::Less => left(pos),
                Ordering::Greater => right(pos),
            };
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Inserts `value` at the first empty slot on its search path. Returns
    /// `false` if an equal value is already stored.
    pub fn insert(&mut self, value: T) -> bool {
        let mut pos = 0;
        while let Some(curr) = self.entries.get(pos) {
            pos = match value.cmp(curr) {
                Ordering::Equal => return false,
                Ordering::Less => left(pos),
                Ordering::Greater => right(pos),
            };
        }
        self.entries.put(pos, value);
        self.size += 1;
        true
    }

    /// Removes `value` if present, restructuring per the configured
    /// [`RemovalPolicy`]. Returns whether a value was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(index) = self.index_of(value) else {
            return false;
        };
        let has_left = self.entries.is_occupied(left(index));
        let has_right = self.entries.is_occupied(right(index));
        self.entries.take(index);

        match (has_left, has_right) {
            (false, false) => {}
            (true, false) | (false, true) => {
                let child = if has_left { left(index) } else { right(index) };
                match self.removal {
                    RemovalPolicy::Shallow => self.move_slot(child, index),
                    RemovalPolicy::Relocate => self.lift(child, index),
                }
            }
            (true, true) => {
                let succ = self.leftmost(right(index));
                self.move_slot(succ, index);
                if self.removal == RemovalPolicy::Relocate {
                    // The successor has no left child; its right subtree moves up a level.
                    self.lift(right(succ), succ);
                }
            }
        }
        self.size -= 1;
        true
    }

    pub fn min(&self) -> Option<&T> {
        self.entries.get(0)?;
        self.entries.get(self.leftmost(0))
    }

    pub fn max(&self) -> Option<&T> {
        self.entries.get(0)?;
        self.entries.get(self.rightmost(0))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.size = 0;
    }

    /// Visits every reachable value in the given order.
    pub fn traverse<'a, F: FnMut(&'a T)>(&'a self, order: Traversal, mut f: F) {
        self.walk(0, order, &mut f);
    }

    fn walk<'a, F: FnMut(&'a T)>(&'a self, pos: usize, order: Traversal, f: &mut F) {
        let Some(value) = self.entries.get(pos) else {
            return;
        };
        match order {
            Traversal::Sorted => {
                self.walk(left(pos), order, f);
                f(value);
                self.walk(right(pos), order, f);
            }
            Traversal::Reverse => {
                self.walk(right(pos), order, f);
                f(value);
                self.walk(left(pos), order, f);
            }
            Traversal::PreOrder => {
                f(value);
                self.walk(left(pos), order, f);
                self.walk(right(pos), order, f);
            }
            Traversal::PostOrder => {
                self.walk(left(pos), order, f);
                self.walk(right(pos), order, f);
                f(value);
            }
        }
    }

    fn collect(&self, order: Traversal) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.size);
        self.traverse(order, |v| out.push(v.clone()));
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

    /// Checks the ordering invariant over every reachable slot and that
    /// `len()` matches the number of reachable values.
    pub fn assert_valid(&self) -> Result<(), String> {
        fn check<T: Ord>(
            tree: &ArrayBst<T>,
            pos: usize,
            lo: Option<&T>,
            hi: Option<&T>,
        ) -> Result<usize, String> {
            let Some(value) = tree.entries.get(pos) else {
                return Ok(0);
            };
            if lo.is_some_and(|lo| value <= lo) || hi.is_some_and(|hi| value >= hi) {
                return Err(format!("Node order violated at index {pos}"));
            }
            let l = check(tree, left(pos), lo, Some(value))?;
            let r = check(tree, right(pos), Some(value), hi)?;
            Ok(1 + l + r)
        }

        let reachable = check(self, 0, None, None)?;
        if reachable != self.size {
            return Err(format!(
                "Size mismatch: len() is {} but {reachable} values are reachable",
                self.size
            ));
        }
        Ok(())
    }

    fn leftmost(&self, mut pos: usize) -> usize {
        while self.entries.is_occupied(left(pos)) {
            pos = left(pos);
        }
        pos
    }

    fn rightmost(&self, mut pos: usize) -> usize {
        while self.entries.is_occupied(right(pos)) {
            pos = right(pos);
        }
        pos
    }

    /// Moves the single value at `from` into `to`, leaving `from` empty.
    fn move_slot(&mut self, from: usize, to: usize) {
        if let Some(value) = self.entries.take(from) {
            self.entries.put(to, value);
        }
    }

    /// Re-addresses the whole subtree rooted at `from` so that it is rooted
    /// at `to`, an empty ancestor position.
    fn lift(&mut self, from: usize, to: usize) {
        let mut moved = Vec::new();
        let mut pending = vec![(from, to)];
        while let Some((src, dst)) = pending.pop() {
            if let Some(value) = self.entries.take(src) {
                moved.push((dst, value));
                pending.push((left(src), left(dst)));
                pending.push((right(src), right(dst)));
            }
        }
        // Every source is emptied before any destination is written.
        for (dst, value) in moved {
            self.entries.put(dst, value);
        }
    }
}

impl<T: Ord> Default for ArrayBst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for ArrayBst<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for ArrayBst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord + Display> ArrayBst<T> {
    fn print_slot(&self, pos: usize, tab: &str, side: &str) -> String {
        let Some(value) = self.entries.get(pos) else {
            return String::new();
        };
        let l = |tab: &str| self.print_slot(left(pos), tab, "←");
        let r = |tab: &str| self.print_slot(right(pos), tab, "→");
        let l: Option<&PrintChild> = if self.entries.is_occupied(left(pos)) {
            Some(&l)
        } else {
            None
        };
        let r: Option<&PrintChild> = if self.entries.is_occupied(right(pos)) {
            Some(&r)
        } else {
            None
        };
        format!("{side}[{pos}] {value}{}", print_tree(Some(tab), &[l, r]))
    }
}

impl<T: Ord + Display> Printable for ArrayBst<T> {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String {
        let tab = tab.unwrap_or("");
        if self.entries.get(0).is_none() {
            return "ArrayBst ∅".to_string();
        }
        let root = |tab: &str| self.print_slot(0, tab, "");
        let root: Option<&PrintChild> = Some(&root);
        format!("ArrayBst{}", print_tree(Some(tab), &[root]))
    }
}
