//! In-memory container library.
//!
//! Every structure is a single-threaded value type that owns its storage
//! outright. Lookups on empty or missing data return `None`, removals of
//! absent values are no-ops reporting `false`, and buffer growth is never
//! visible to the caller.
//!
//! Linked structures keep their nodes in a `Vec` arena and link them with
//! `Option<u32>` indices rather than shared pointers.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] trait for arena tree nodes, [`Traversal`] orders |
//! | [`util`] | `first`, `last`, `next`, `prev`, `find`, `remove` over arena trees |
//! | [`growable`] | [`GrowableArray`], the slot buffer behind array-backed containers |
//! | [`config`] | [`GrowthPolicy`], [`RemovalPolicy`], [`ArrayBstConfig`] |
//! | [`print`] | [`Printable`] debug dumps |
//! | [`array_bst`] | [`ArrayBst`]: BST with heap-style array addressing |
//! | [`heap`] | [`BinaryHeap`]: 1-based array min-heap of `(value, priority)` |
//! | [`list`] | [`LinkedList`], [`Stack`], [`Queue`] |
//! | [`min_max`] | [`MinMaxStack`], [`MinMaxQueue`] |
//! | [`linked_bst`] | [`LinkedBst`]: node-linked BST with occurrence counts |
//! | [`trie`] | [`Trie`] |

#[path = "array-bst/mod.rs"]
pub mod array_bst;
pub mod config;
pub mod growable;
pub mod heap;
#[path = "linked-bst/mod.rs"]
pub mod linked_bst;
pub mod list;
#[path = "min-max/mod.rs"]
pub mod min_max;
pub mod print;
pub mod trie;
pub mod types;
pub mod util;

pub use array_bst::ArrayBst;
pub use config::{ArrayBstConfig, ConfigError, GrowthPolicy, RemovalPolicy};
pub use growable::GrowableArray;
pub use heap::BinaryHeap;
pub use linked_bst::LinkedBst;
pub use list::{LinkedList, Queue, Stack};
pub use min_max::{MinMaxQueue, MinMaxStack};
pub use print::Printable;
pub use trie::Trie;
pub use types::{Node, Traversal};
