use super::min_max_stack::MinMaxStack;

/// FIFO queue with O(1) `min()` / `max()` built from two [`MinMaxStack`]s.
///
/// Pushes go to `push_stack`. When `pop_stack` runs dry, the whole of
/// `push_stack` is moved onto it, reversing the order so its top is the
/// oldest element. Each element is moved at most once, so `pop` is
/// amortized O(1).
pub struct MinMaxQueue<T> {
    push_stack: MinMaxStack<T>,
    pop_stack: MinMaxStack<T>,
}

impl<T: PartialOrd> MinMaxQueue<T> {
    pub fn new() -> Self {
        Self {
            push_stack: MinMaxStack::new(),
            pop_stack: MinMaxStack::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.push_stack.len() + self.pop_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.push_stack.is_empty() && self.pop_stack.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.push_stack.push(value);
    }

    fn transfer(&mut self) {
        if self.pop_stack.is_empty() {
            while let Some(value) = self.push_stack.pop() {
                self.pop_stack.push(value);
            }
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.transfer();
        self.pop_stack.pop()
    }

    /// Oldest element.
    pub fn front(&mut self) -> Option<&T> {
        self.transfer();
        self.pop_stack.peek()
    }

    /// Smallest element. On a tie between the two halves the newer one
    /// (from `push_stack`) is returned.
    pub fn min(&self) -> Option<&T> {
        match (self.push_stack.min(), self.pop_stack.min()) {
            (Some(a), Some(b)) => Some(if a <= b { a } else { b }),
            (a, b) => a.or(b),
        }
    }

    /// Largest element. Ties resolve to `push_stack` as in [`Self::min`].
    pub fn max(&self) -> Option<&T> {
        match (self.push_stack.max(), self.pop_stack.max()) {
            (Some(a), Some(b)) => Some(if a >= b { a } else { b }),
            (a, b) => a.or(b),
        }
    }

    pub fn clear(&mut self) {
        self.push_stack.clear();
        self.pop_stack.clear();
    }
}

impl<T: PartialOrd> Default for MinMaxQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> Extend<T> for MinMaxQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
