//! Shared node and traversal definitions.
//!
//! Linked structures keep their nodes in a `Vec` arena owned by the container
//! and express every link as an `Option<u32>` index into that arena. Nothing
//! outside the container can hold a link, so a removed node cannot be kept
//! alive by a stale reference.

/// Tree links (`p`, `l`, `r`) plus the stored value.
///
/// Implemented by arena nodes so the helpers in [`crate::util`] can walk and
/// relink any binary tree layout.
pub trait Node {
    type Value;

    fn value(&self) -> &Self::Value;
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Visiting order for binary tree traversals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Left, node, right: ascending order.
    Sorted,
    /// Right, node, left: descending order.
    Reverse,
    /// Node, left, right.
    PreOrder,
    /// Left, right, node.
    PostOrder,
}
