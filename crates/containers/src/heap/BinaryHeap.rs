use crate::config::GrowthPolicy;
use crate::growable::GrowableArray;

/// Binary min-heap of `(value, priority)` entries.
///
/// Entries occupy slots `1..=len()`; slot 0 is never used so that the parent
/// of `i` is `i / 2` and its children are `2i` and `2i + 1`. The entry with
/// the smallest priority is at slot 1.
pub struct BinaryHeap<T, P = T> {
    entries: GrowableArray<(T, P)>,
    size: usize,
}

impl<T, P: PartialOrd> BinaryHeap<T, P> {
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self::with_policy(GrowthPolicy::with_capacity(initial_capacity))
    }

    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            entries: GrowableArray::new(policy),
            size: 0,
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

    pub fn insert_pair(&mut self, value: T, priority: P) {
        self.size += 1;
        self.entries.put(self.size, (value, priority));
        self.percolate_up(self.size);
    }

    /// Removes and returns the value with the smallest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_pair().map(|(value, _)| value)
    }

    pub fn pop_pair(&mut self) -> Option<(T, P)> {
        if self.size == 0 {
            return None;
        }
        let top = self.entries.take(1);
        if self.size > 1 {
            if let Some(last) = self.entries.take(self.size) {
                self.entries.put(1, last);
            }
        }
        self.size -= 1;
        self.percolate_down(1);
        top
    }

    pub fn peek(&self) -> Option<&T> {
        self.peek_pair().map(|(value, _)| value)
    }

    pub fn peek_pair(&self) -> Option<(&T, &P)> {
        self.entries.get(1).map(|(value, priority)| (value, priority))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.size = 0;
    }

    /// Entries in slot order, which is not priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &P)> + '_ {
        (1..=self.size).filter_map(move |i| self.entries.get(i).map(|(v, p)| (v, p)))
    }

    /// Checks that every parent's priority is at most its children's.
    pub fn assert_valid(&self) -> Result<(), String> {
        for i in 2..=self.size {
            if !self.entries.is_occupied(i) {
                return Err(format!("Empty slot {i} inside heap extent"));
            }
            if self.less(i, i / 2) {
                return Err(format!("Heap order violated between slot {} and {i}", i / 2));
            }
        }
        Ok(())
    }

    /// Whether slot `a` has a strictly smaller priority than slot `b`.
    fn less(&self, a: usize, b: usize) -> bool {
        match (self.entries.get(a), self.entries.get(b)) {
            (Some((_, pa)), Some((_, pb))) => pa < pb,
            _ => false,
        }
    }

    fn percolate_up(&mut self, mut i: usize) {
        while i > 1 && self.less(i, i / 2) {
            self.entries.swap(i, i / 2);
            i /= 2;
        }
    }

    fn percolate_down(&mut self, mut i: usize) {
        loop {
            let (l, r) = (2 * i, 2 * i + 1);
            let mut smallest = i;
            if l <= self.size && self.less(l, smallest) {
                smallest = l;
            }
            if r <= self.size && self.less(r, smallest) {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T: Clone + PartialOrd> BinaryHeap<T, T> {
    /// Inserts a value that is its own priority.
    pub fn push(&mut self, value: T) {
        let priority = value.clone();
        self.insert_pair(value, priority);
    }
}

impl<T, P: PartialOrd> Default for BinaryHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PartialOrd> Extend<(T, P)> for BinaryHeap<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.insert_pair(value, priority);
        }
    }
}

impl<T, P: PartialOrd> FromIterator<(T, P)> for BinaryHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
