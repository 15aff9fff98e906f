//! Binary search tree stored in a growable array with heap-style addressing.

#[path = "ArrayBst.rs"]
pub mod array_bst_impl;

pub use array_bst_impl::ArrayBst;
