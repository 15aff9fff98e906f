use std::collections::BTreeMap;

/// Arena node of a [`super::Trie`].
#[derive(Clone, Debug, Default)]
pub struct TrieNode {
    /// Character on the edge leading here; `None` only for the root.
    pub ch: Option<char>,
    /// Whether the path ending here was added as a complete word.
    pub ends_word: bool,
    pub is_root: bool,
    /// Child arena indices keyed by their edge character.
    pub children: BTreeMap<char, u32>,
}

impl TrieNode {
    pub fn new(ch: char) -> Self {
        Self {
            ch: Some(ch),
            ..Self::default()
        }
    }

    pub fn root() -> Self {
        Self {
            is_root: true,
            ..Self::default()
        }
    }

    pub fn child(&self, ch: char) -> Option<u32> {
        self.children.get(&ch).copied()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
