//! Array-backed binary min-heap.

#[path = "BinaryHeap.rs"]
pub mod binary_heap;

pub use binary_heap::BinaryHeap;
