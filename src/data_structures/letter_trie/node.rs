//! Node implementation for the Letter Trie.
//!
//! This module provides the `TrieNode` structure and the `Letter` index type used
//! by the Letter Trie. Each node has one child slot per letter of the a-z alphabet,
//! so child lookup is a direct array index rather than a search.

use super::Points;

/// Number of letters in the supported alphabet (a-z).
pub const ALPHABET_LENGTH: usize = 26;

/// A letter of the a-z alphabet, stored as its slot index.
///
/// Construction case-folds ASCII input, so `'Q'` and `'q'` are the same letter.
/// Anything outside the ASCII letters is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Normalizes a character into a letter, or `None` if it is not an ASCII letter.
    pub fn new(character: char) -> Option<Self> {
        let folded = character.to_ascii_lowercase();
        if folded.is_ascii_lowercase() {
            Some(Self(folded as u8 - b'a'))
        } else {
            None
        }
    }

    /// Slot index of this letter (0 for `a`, 25 for `z`).
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Lowercase character for this letter.
    pub fn as_char(self) -> char {
        char::from(b'a' + self.0)
    }
}

/// Handle to a node slot inside a [`NodeArena`](super::arena::NodeArena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A node in the Letter Trie.
///
/// Each node represents one letter of a key path. Nodes holding a value are entries;
/// nodes without a value only exist as prefixes of longer keys.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Child slots indexed by letter
    pub(crate) children: [Option<NodeId>; ALPHABET_LENGTH],

    /// Node this one was created under; `None` for the root
    pub(crate) parent: Option<NodeId>,

    /// Letter this node stands for among its siblings (a sentinel for the root)
    pub(crate) label: char,

    /// Points stored under the key spelled by the path to this node
    pub(crate) value: Option<Points>,
}

impl TrieNode {
    /// Creates a root node carrying the given sentinel label.
    pub fn root(label: char) -> Self {
        Self {
            children: [None; ALPHABET_LENGTH],
            parent: None,
            label,
            value: None,
        }
    }

    /// Creates a node for `letter` below `parent`.
    pub fn child_of(parent: NodeId, letter: Letter) -> Self {
        Self {
            children: [None; ALPHABET_LENGTH],
            parent: Some(parent),
            label: letter.as_char(),
            value: None,
        }
    }

    /// Returns the child at the slot for `letter`.
    pub fn child(&self, letter: Letter) -> Option<NodeId> {
        self.children[letter.index()]
    }

    /// Whether any child slot is occupied.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Existing children in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().flatten().copied()
    }

    /// The letter this node represents, `None` for the root.
    pub fn letter(&self) -> Option<Letter> {
        self.parent.and(Letter::new(self.label))
    }

    /// Points stored at this node.
    pub fn value(&self) -> Option<Points> {
        self.value
    }

    /// Parent of this node.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Label character of this node.
    pub fn label(&self) -> char {
        self.label
    }
}
