// Trie node layout and arena handles.

use std::num::NonZeroU32;

use wordtrie_core::alphabet::ALPHABET_SIZE;

/// Handle to a non-root node in the trie arena.
///
/// The root always lives at index 0 and is never the child of another node,
/// so every child handle is non-zero and `Option<NodeId>` stays 4 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Create a handle for an arena index, or `None` for the root index or an
    /// index that does not fit in 32 bits.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().and_then(NonZeroU32::new).map(Self)
    }

    /// Position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0.get() as usize
    }
}

/// One prefix position in the trie.
///
/// A node has one child slot per alphabet symbol, indexed by
/// [`edge_index`](wordtrie_core::alphabet::edge_index). `terminal` is set
/// when the prefix spelled by the path to this node is itself a stored word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    terminal: bool,
    children: [Option<NodeId>; ALPHABET_SIZE],
}

impl Node {
    /// A non-terminal node with no children.
    pub const EMPTY: Node = Node {
        terminal: false,
        children: [None; ALPHABET_SIZE],
    };

    /// Whether a stored word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The child reached over `edge`, if any.
    #[inline]
    pub fn child(&self, edge: u8) -> Option<NodeId> {
        self.children.get(usize::from(edge)).copied().flatten()
    }

    /// Iterate over `(edge, child)` pairs of the present children.
    pub fn children(&self) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(edge, child)| child.map(|id| (edge as u8, id)))
    }

    /// Attach `child` at `edge`. The slot must be empty.
    #[inline]
    pub(crate) fn set_child(&mut self, edge: u8, child: NodeId) {
        let slot = &mut self.children[usize::from(edge)];
        debug_assert!(slot.is_none(), "child slot {edge} already occupied");
        *slot = Some(child);
    }

    /// Mark this node as the end of a word. Returns `true` if it was not
    /// terminal before.
    #[inline]
    pub(crate) fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.terminal, true)
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::EMPTY
    }
}
