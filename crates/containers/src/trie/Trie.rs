use crate::print::{print_tree, PrintChild, Printable};

use super::trie_node::TrieNode;

const ROOT: u32 = 0;

/// Prefix tree over strings, one edge per `char`.
///
/// Every query treats the empty string as absent: `add("")` stores nothing,
/// and `contains("")` / `is_prefix("")` are `false`.
///
/// Node links are `u32`, so the trie holds at most `u32::MAX` nodes.
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            words: 0,
        }
    }

    /// Number of distinct words added.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn root_index(&self) -> u32 {
        ROOT
    }

    pub fn node(&self, idx: u32) -> &TrieNode {
        &self.nodes[idx as usize]
    }

    /// Adds `word`, creating missing nodes along its path. Returns `false` if
    /// the word was empty or already present.
    pub fn add<S: AsRef<str>>(&mut self, word: S) -> bool {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }
        let mut curr = ROOT;
        for ch in word.chars() {
            curr = match self.nodes[curr as usize].child(ch) {
                Some(child) => child,
                None => {
                    debug_assert!(self.nodes.len() < u32::MAX as usize, "trie arena full");
                    let child = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::new(ch));
                    self.nodes[curr as usize].children.insert(ch, child);
                    child
                }
            };
        }
        let node = &mut self.nodes[curr as usize];
        if node.ends_word {
            return false;
        }
        node.ends_word = true;
        self.words += 1;
        true
    }

    /// Follows `s` from the root. Returns how many characters matched and,
    /// if all of them did, the node at the end of the path.
    fn descend(&self, s: &str) -> (usize, Option<u32>) {
        let mut curr = ROOT;
        let mut matched = 0;
        for ch in s.chars() {
            match self.nodes[curr as usize].child(ch) {
                Some(child) => {
                    curr = child;
                    matched += 1;
                }
                None => return (matched, None),
            }
        }
        (matched, Some(curr))
    }

    /// Whether `word` itself was added.
    pub fn contains<S: AsRef<str>>(&self, word: S) -> bool {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }
        match self.descend(word) {
            (_, Some(node)) => self.nodes[node as usize].ends_word,
            _ => false,
        }
    }

    /// Whether `prefix` is a prefix of some added word (including the word
    /// itself).
    pub fn is_prefix<S: AsRef<str>>(&self, prefix: S) -> bool {
        let prefix = prefix.as_ref();
        !prefix.is_empty() && self.descend(prefix).1.is_some()
    }

    /// Number of leading characters of `s` that form a path in the trie.
    pub fn longest_prefix_length<S: AsRef<str>>(&self, s: S) -> usize {
        self.descend(s.as_ref()).0
    }

    /// The leading part of `s` that forms a path in the trie.
    pub fn longest_common_prefix<'s>(&self, s: &'s str) -> &'s str {
        let matched = self.longest_prefix_length(s);
        let end = s.char_indices().nth(matched).map_or(s.len(), |(i, _)| i);
        &s[..end]
    }

    /// All added words in ascending `char` order.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.words);
        self.collect_words(ROOT, String::new(), &mut out);
        out
    }

    /// Added words starting with `prefix`, in ascending `char` order. An empty
    /// prefix matches every word.
    pub fn words_with_prefix<S: AsRef<str>>(&self, prefix: S) -> Vec<String> {
        let prefix = prefix.as_ref();
        let mut out = Vec::new();
        if let (_, Some(node)) = self.descend(prefix) {
            self.collect_words(node, prefix.to_string(), &mut out);
        }
        out
    }

    /// Depth-first from `start`, whose path spells `prefix`. Children are
    /// stacked in reverse so words come out in ascending order.
    fn collect_words(&self, start: u32, prefix: String, out: &mut Vec<String>) {
        let mut buf = prefix;
        let mut pending = vec![(start, buf.len())];
        while let Some((node, len)) = pending.pop() {
            buf.truncate(len);
            let n = &self.nodes[node as usize];
            if node != start {
                buf.extend(n.ch);
            }
            if n.ends_word {
                out.push(buf.clone());
            }
            for &child in n.children.values().rev() {
                pending.push((child, buf.len()));
            }
        }
    }

    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[ROOT as usize].children.clear();
        self.words = 0;
    }

    fn print_node(&self, node: u32, tab: &str) -> String {
        let n = &self.nodes[node as usize];
        let label = n.ch.map_or_else(String::new, String::from);
        let marker = if n.ends_word { " ●" } else { "" };
        let render: Vec<_> = n
            .children
            .values()
            .map(|&child| move |tab: &str| self.print_node(child, tab))
            .collect();
        let children: Vec<Option<&PrintChild>> =
            render.iter().map(|f| Some(f as &PrintChild)).collect();
        format!("{label}{marker}{}", print_tree(Some(tab), &children))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl Printable for Trie {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String {
        format!("Trie{}", self.print_node(ROOT, tab.unwrap_or("")))
    }
}
