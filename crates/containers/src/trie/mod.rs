//! Character-indexed prefix tree.

#[path = "Trie.rs"]
pub mod trie_impl;
#[path = "TrieNode.rs"]
pub mod trie_node;

pub use trie_impl::Trie;
pub use trie_node::TrieNode;
