//! Pointer-style binary search tree with per-value occurrence counts.

#[path = "BstNode.rs"]
pub mod bst_node;
#[path = "LinkedBst.rs"]
pub mod linked_bst_impl;

pub use bst_node::BstNode;
pub use linked_bst_impl::LinkedBst;
