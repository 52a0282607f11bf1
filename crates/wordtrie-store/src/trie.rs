// Arena-backed trie over the dictionary alphabet.
//
// All nodes live in one `Vec<Node>` owned by the trie; children are referred
// to by index. Each node is reachable through exactly one parent slot, and
// dropping the vector releases every node once, in a single operation,
// however deep the tree is.

use wordtrie_core::alphabet::{edge_index, find_invalid};

use crate::node::{Node, NodeId};

/// Arena index of the root node.
const ROOT: usize = 0;

/// Error type for a single insertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    /// The word contains a character outside the dictionary alphabet.
    #[error("character {ch:?} at position {position} is outside the dictionary alphabet")]
    InvalidCharacter { position: usize, ch: char },

    /// The node arena could not grow.
    #[error("out of memory while allocating trie nodes")]
    OutOfMemory,
}

/// Size figures for a built trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieStats {
    /// Insertion events that set a terminal flag (duplicates counted).
    pub words: usize,
    /// Nodes marked terminal, i.e. distinct stored words.
    pub distinct_words: usize,
    /// Nodes in the arena, root included.
    pub nodes: usize,
    /// Heap bytes reserved for the node arena.
    pub heap_bytes: usize,
}

/// A prefix tree of words over the 27-symbol alphabet.
pub struct Trie {
    nodes: Vec<Node>,
    word_count: usize,
    distinct_words: usize,
}

impl std::fmt::Debug for Trie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("word_count", &self.word_count)
            .field("distinct_words", &self.distinct_words)
            .field("node_count", &self.nodes.len())
            .finish()
    }
}

impl Trie {
    /// Create a trie holding only the root node.
    pub fn new() -> Result<Self, InsertError> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve(1)
            .map_err(|_| InsertError::OutOfMemory)?;
        nodes.push(Node::EMPTY);
        Ok(Self {
            nodes,
            word_count: 0,
            distinct_words: 0,
        })
    }

    /// Insert a word, creating the missing nodes along its path.
    ///
    /// The final node is marked terminal and the word count is incremented
    /// on every call, including when the word was already present. Returns
    /// `true` if the word was not stored before.
    ///
    /// The word is validated before any node is created, so a rejected word
    /// leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) -> Result<bool, InsertError> {
        if let Some((position, ch)) = find_invalid(word) {
            return Err(InsertError::InvalidCharacter { position, ch });
        }

        let mut current = ROOT;
        for (position, ch) in word.chars().enumerate() {
            let edge = edge_index(ch).ok_or(InsertError::InvalidCharacter { position, ch })?;
            current = match self.nodes[current].child(edge) {
                Some(child) => child.index(),
                None => {
                    let child = self.alloc_node()?;
                    self.nodes[current].set_child(edge, child);
                    child.index()
                }
            };
        }

        let added = self.nodes[current].mark_terminal();
        self.word_count += 1;
        if added {
            self.distinct_words += 1;
        }
        Ok(added)
    }

    /// Check whether `word` was inserted as a complete word.
    ///
    /// The empty string is never a member, and a word containing a character
    /// outside the alphabet cannot be stored, so both return `false`. The walk
    /// stops at the first missing edge.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &self.nodes[ROOT];
        for ch in word.chars() {
            let Some(child) = edge_index(ch).and_then(|edge| node.child(edge)) else {
                return false;
            };
            node = &self.nodes[child.index()];
        }
        node.is_terminal()
    }

    /// Number of insertion events (duplicates included).
    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of distinct stored words.
    #[inline]
    pub fn distinct_words(&self) -> usize {
        self.distinct_words
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The root node (the empty prefix).
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    /// Resolve a child handle.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Word, node and heap figures for this trie.
    pub fn stats(&self) -> TrieStats {
        TrieStats {
            words: self.word_count,
            distinct_words: self.distinct_words,
            nodes: self.nodes.len(),
            heap_bytes: self.nodes.capacity() * size_of::<Node>(),
        }
    }

    fn alloc_node(&mut self) -> Result<NodeId, InsertError> {
        let id = NodeId::from_index(self.nodes.len()).ok_or(InsertError::OutOfMemory)?;
        self.nodes
            .try_reserve(1)
            .map_err(|_| InsertError::OutOfMemory)?;
        self.nodes.push(Node::EMPTY);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> Trie {
        let mut trie = Trie::new().unwrap();
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    #[test]
    fn new_trie_has_only_root() {
        let trie = Trie::new().unwrap();
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.word_count(), 0);
        assert!(!trie.root().is_terminal());
        assert_eq!(trie.root().children().count(), 0);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = build(&["cat", "car", "care"]);
        // root, c, a, t, r, e
        assert_eq!(trie.node_count(), 6);
        assert_eq!(trie.word_count(), 3);
        assert_eq!(trie.root().children().count(), 1);
    }

    #[test]
    fn contains_exact_words_only() {
        let trie = build(&["cat", "car", "care", "dog"]);
        assert!(trie.contains("cat"));
        assert!(trie.contains("car"));
        assert!(trie.contains("care"));
        assert!(trie.contains("dog"));
        assert!(!trie.contains("c"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("card"));
        assert!(!trie.contains("cares"));
        assert!(!trie.contains("do"));
        assert!(!trie.contains("bird"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let trie = build(&["Hello"]);
        assert!(trie.contains("hello"));
        assert!(trie.contains("HELLO"));
        assert!(trie.contains("hElLo"));
    }

    #[test]
    fn apostrophe_is_a_distinct_edge() {
        let trie = build(&["don't"]);
        assert!(trie.contains("don't"));
        assert!(!trie.contains("dont"));
        assert!(!trie.contains("don"));
    }

    #[test]
    fn empty_query_is_never_found() {
        let mut trie = build(&["a"]);
        assert!(!trie.contains(""));
        // Inserting the empty word marks the root, but lookups still refuse it.
        assert_eq!(trie.insert(""), Ok(true));
        assert!(trie.root().is_terminal());
        assert!(!trie.contains(""));
        assert_eq!(trie.word_count(), 2);
    }

    #[test]
    fn queries_outside_alphabet_are_absent() {
        let trie = build(&["cat"]);
        assert!(!trie.contains("c4t"));
        assert!(!trie.contains("cat!"));
        assert!(!trie.contains("c\u{00E4}t"));
    }

    #[test]
    fn duplicate_insert_counts_every_event() {
        let mut trie = Trie::new().unwrap();
        assert_eq!(trie.insert("cat"), Ok(true));
        assert_eq!(trie.insert("CAT"), Ok(false));
        assert_eq!(trie.word_count(), 2);
        assert_eq!(trie.distinct_words(), 1);
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn invalid_word_leaves_trie_untouched() {
        let mut trie = build(&["cat"]);
        let before = trie.stats();
        assert_eq!(
            trie.insert("cab1e"),
            Err(InsertError::InvalidCharacter { position: 3, ch: '1' })
        );
        assert_eq!(trie.stats(), before);
        assert!(!trie.contains("cab"));
    }

    #[test]
    fn node_handles_resolve() {
        let trie = build(&["ab"]);
        let a = trie.root().child(0).unwrap();
        let b = trie.node(a).child(1).unwrap();
        assert!(!trie.node(a).is_terminal());
        assert!(trie.node(b).is_terminal());
    }

    #[test]
    fn deep_word_drops_without_recursion() {
        let word = "a".repeat(200_000);
        let mut trie = Trie::new().unwrap();
        trie.insert(&word).unwrap();
        assert!(trie.contains(&word));
        assert!(!trie.contains(&word[1..]));
        assert_eq!(trie.node_count(), 200_001);
        drop(trie);
    }

    #[test]
    fn stats_track_arena() {
        let trie = build(&["to", "too", "to"]);
        let stats = trie.stats();
        assert_eq!(stats.words, 3);
        assert_eq!(stats.distinct_words, 2);
        assert_eq!(stats.nodes, 4);
        assert!(stats.heap_bytes >= 4 * size_of::<Node>());
    }
}
