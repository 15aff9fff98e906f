//! Capacity-growing slot buffer behind the array-backed containers.
//!
//! Every slot is either empty (`None`) or holds one element. Growth appends
//! empty slots and never moves occupied ones, so index arithmetic stays valid
//! across reallocation.

use crate::config::GrowthPolicy;

#[derive(Clone, Debug)]
pub struct GrowableArray<T> {
    slots: Vec<Option<T>>,
    policy: GrowthPolicy,
}

impl<T> GrowableArray<T> {
    pub fn new(policy: GrowthPolicy) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(policy.initial_capacity, || None);
        Self { slots, policy }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Element at `idx`, or `None` for an empty or out-of-range slot.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    pub fn is_occupied(&self, idx: usize) -> bool {
        self.get(idx).is_some()
    }

    /// Empties slot `idx`, returning what it held.
    pub fn take(&mut self, idx: usize) -> Option<T> {
        self.slots.get_mut(idx).and_then(Option::take)
    }

    /// Stores `value` at `idx`, growing first if `idx` is past capacity.
    /// Returns the previous occupant.
    pub fn put(&mut self, idx: usize, value: T) -> Option<T> {
        self.ensure_index(idx);
        self.slots[idx].replace(value)
    }

    /// Swaps two slots. Both must be within capacity.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    /// One growth step: `capacity * growth_rate + 1`.
    pub fn grow(&mut self) {
        let next = self.policy.next_capacity(self.slots.len());
        self.slots.resize_with(next, || None);
    }

    /// Grows until `idx` is addressable.
    pub fn ensure_index(&mut self, idx: usize) {
        while idx >= self.slots.len() {
            self.grow();
        }
    }

    /// Empties every slot. Capacity is kept.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Occupied slots with their indices, in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (i, v)))
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new(GrowthPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_at_initial_capacity() {
        let arr = GrowableArray::<i32>::new(GrowthPolicy::with_capacity(4));
        assert_eq!(arr.capacity(), 4);
        assert!((0..4).all(|i| !arr.is_occupied(i)));
        assert_eq!(arr.get(10), None);
    }

    #[test]
    fn zero_capacity_grows_to_one() {
        let mut arr = GrowableArray::new(GrowthPolicy::with_capacity(0));
        assert_eq!(arr.capacity(), 0);
        arr.put(0, 'a');
        assert_eq!(arr.capacity(), 1);
        assert_eq!(arr.get(0), Some(&'a'));
    }

    #[test]
    fn growth_keeps_positions() {
        let mut arr = GrowableArray::new(GrowthPolicy::with_capacity(3));
        arr.put(0, 10);
        arr.put(2, 30);
        arr.put(3, 40);
        assert_eq!(arr.capacity(), 7);
        arr.put(20, 200);
        assert_eq!(arr.capacity(), 31);
        let occupied: Vec<_> = arr.occupied().map(|(i, v)| (i, *v)).collect();
        assert_eq!(occupied, vec![(0, 10), (2, 30), (3, 40), (20, 200)]);
    }

    #[test]
    fn configured_rate_applies() {
        let mut arr = GrowableArray::<u8>::new(GrowthPolicy {
            initial_capacity: 2,
            growth_rate: 3,
        });
        arr.grow();
        assert_eq!(arr.capacity(), 7);
    }

    #[test]
    fn take_put_and_clear() {
        let mut arr = GrowableArray::default();
        assert_eq!(arr.put(1, "x"), None);
        assert_eq!(arr.put(1, "y"), Some("x"));
        assert_eq!(arr.take(1), Some("y"));
        assert_eq!(arr.take(1), None);
        assert_eq!(arr.take(99), None);
        arr.put(5, "z");
        arr.clear();
        assert_eq!(arr.capacity(), 10);
        assert_eq!(arr.occupied().count(), 0);
    }
}
