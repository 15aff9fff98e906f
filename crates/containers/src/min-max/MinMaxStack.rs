/// Stack node. Its arena index equals its depth from the bottom, so the
/// node beneath it is always at `index - 1`.
#[derive(Clone, Debug)]
struct MinMaxNode<T> {
    value: T,
    /// Minimum node of the stack just before this node was pushed.
    min_before: Option<u32>,
    /// Maximum node of the stack just before this node was pushed.
    max_before: Option<u32>,
}

/// LIFO stack with O(1) `min()` and `max()`.
///
/// Each node remembers which nodes were the extremes when it was pushed.
/// Those links only ever point deeper into the stack, so they stay valid
/// until the node holding them is popped, and popping the current extreme
/// restores the previous one in O(1).
///
/// On ties the most recently pushed value becomes the reported extreme.
pub struct MinMaxStack<T> {
    nodes: Vec<MinMaxNode<T>>,
    min: Option<u32>,
    max: Option<u32>,
}

impl<T: PartialOrd> MinMaxStack<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            min: None,
            max: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn value_at(&self, idx: Option<u32>) -> Option<&T> {
        idx.map(|i| &self.nodes[i as usize].value)
    }

    pub fn push(&mut self, value: T) {
        let idx = self.nodes.len() as u32;
        let is_min = self.min().map_or(true, |m| value <= *m);
        let is_max = self.max().map_or(true, |m| value >= *m);
        self.nodes.push(MinMaxNode {
            value,
            min_before: self.min,
            max_before: self.max,
        });
        if is_min {
            self.min = Some(idx);
        }
        if is_max {
            self.max = Some(idx);
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        let node = self.nodes.pop()?;
        let idx = Some(self.nodes.len() as u32);
        if self.min == idx {
            self.min = node.min_before;
        }
        if self.max == idx {
            self.max = node.max_before;
        }
        Some(node.value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.nodes.last().map(|n| &n.value)
    }

    pub fn min(&self) -> Option<&T> {
        self.value_at(self.min)
    }

    pub fn max(&self) -> Option<&T> {
        self.value_at(self.max)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.min = None;
        self.max = None;
    }

    /// Top-to-bottom iterator.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.iter().rev().map(|n| &n.value)
    }
}

impl<T: PartialOrd> Default for MinMaxStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> Extend<T> for MinMaxStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
