//! Letter Trie Implementation
//!
//! This module provides a prefix tree that maps names spelled with the letters a-z
//! to integer points. Keys are case-insensitive. Shared prefixes are stored once,
//! and deleting an entry prunes every node that no longer leads to an entry, so the
//! tree stays minimal after any sequence of operations.
//!
//! # Example
//!
//! ```
//! use points_trie_lib::data_structures::letter_trie::LetterTrie;
//!
//! let mut trie = LetterTrie::new();
//! assert!(trie.add("ab", 3).unwrap());
//! assert!(trie.add("ac", 5).unwrap());
//! assert_eq!(trie.points("AB").unwrap(), Some(3));
//! assert_eq!(trie.render(), "+(a(b[3]c[5]))");
//! ```

mod arena;
mod error;
mod node;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use arena::NodeArena;
pub use error::{LetterTrieError, LetterTrieResult};
pub use node::{Letter, NodeId, TrieNode, ALPHABET_LENGTH};

/// Value type stored under each key.
pub type Points = i32;

/// Largest `max_key_length` a configuration may set.
pub const MAX_KEY_LENGTH_LIMIT: usize = 1 << 16;

/// Configuration options for the Letter Trie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterTrieConfig {
    /// Sentinel label rendered for the root node
    pub root_label: char,

    /// Maximum number of letters in a key
    pub max_key_length: usize,
}

impl Default for LetterTrieConfig {
    fn default() -> Self {
        Self {
            root_label: '+',
            max_key_length: 4096,
        }
    }
}

/// Letter Trie mapping case-insensitive a-z names to points.
///
/// Key features:
/// * Constant-time child lookup through a 26-slot table per node
/// * Duplicate keys are rejected by [`add`](Self::add), never overwritten
/// * Automatic pruning of nodes that no longer lead to an entry
/// * Canonical text rendering of the tree shape
///
/// The trie is a plain owned value with no internal locking; wrap it in a lock to
/// share it between threads.
#[derive(Debug, Clone)]
pub struct LetterTrie {
    /// Storage owning the root and every other node
    nodes: NodeArena,

    /// Configuration options
    config: LetterTrieConfig,
}

impl LetterTrie {
    /// Creates a new empty `LetterTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LetterTrieConfig::default())
    }

    /// Creates a new empty `LetterTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LetterTrieConfig) -> Self {
        Self {
            nodes: NodeArena::new(config.root_label),
            config,
        }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &LetterTrieConfig {
        &self.config
    }

    /// Adds a new entry.
    ///
    /// # Arguments
    ///
    /// * `key` - The name to add.
    /// * `value` - The points to store under the name.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The entry was added.
    /// * `Ok(false)` - The key already holds points; nothing was changed.
    /// * `Err(LetterTrieError)` - The key is empty, too long or not made of letters.
    pub fn add<K: AsRef<str>>(&mut self, key: K, value: Points) -> LetterTrieResult<bool> {
        let letters = self.parse_key(key.as_ref())?;
        let root = self.nodes.root();

        if let Some(existing) = self.nodes.find(root, &letters) {
            if self.nodes.value(existing).is_some() {
                debug!(key = key.as_ref(), "rejected duplicate key");
                return Ok(false);
            }
        }

        let stored = self
            .nodes
            .ensure_path(root, &letters)
            .is_some_and(|terminal| self.nodes.set_value(terminal, Some(value)));
        if stored {
            debug!(key = key.as_ref(), value, "added entry");
        }
        Ok(stored)
    }

    /// Deletes an entry and prunes nodes that no longer lead to any entry.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The entry was deleted.
    /// * `Ok(false)` - The key is absent or only exists as a prefix of longer keys.
    /// * `Err(LetterTrieError)` - The key is empty, too long or not made of letters.
    pub fn delete<K: AsRef<str>>(&mut self, key: K) -> LetterTrieResult<bool> {
        let Some(target) = self.entry_node(key.as_ref())? else {
            return Ok(false);
        };

        let pruned = self.nodes.delete_node(target);
        debug!(key = key.as_ref(), pruned, "deleted entry");
        Ok(true)
    }

    /// Overwrites the points of an existing entry. Never creates an entry.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The points were changed.
    /// * `Ok(false)` - The key is absent or holds no points.
    /// * `Err(LetterTrieError)` - The key is empty, too long or not made of letters.
    pub fn change<K: AsRef<str>>(&mut self, key: K, value: Points) -> LetterTrieResult<bool> {
        let Some(target) = self.entry_node(key.as_ref())? else {
            return Ok(false);
        };

        debug!(key = key.as_ref(), value, "changed entry");
        Ok(self.nodes.set_value(target, Some(value)))
    }

    /// Returns the points stored under `key`, if it is an entry.
    pub fn points<K: AsRef<str>>(&self, key: K) -> LetterTrieResult<Option<Points>> {
        Ok(self
            .entry_node(key.as_ref())?
            .and_then(|node| self.nodes.value(node)))
    }

    /// Returns whether `key` is an entry.
    pub fn contains<K: AsRef<str>>(&self, key: K) -> LetterTrieResult<bool> {
        Ok(self.entry_node(key.as_ref())?.is_some())
    }

    /// Renders the whole tree, e.g. `+(a(b[3]c[5]))` for `ab -> 3` and `ac -> 5`.
    pub fn render(&self) -> String {
        self.nodes.render(self.nodes.root())
    }

    /// Returns `true` if the trie holds no entries.
    pub fn is_empty(&self) -> bool {
        !self.nodes.has_children(self.nodes.root())
    }

    /// Number of live nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Discards every entry by replacing the tree with a fresh root.
    pub fn reset(&mut self) {
        self.nodes = NodeArena::new(self.config.root_label);
        debug!("trie reset");
    }

    /// Node holding points for `key`, `None` if absent or a pure prefix.
    fn entry_node(&self, key: &str) -> LetterTrieResult<Option<NodeId>> {
        let letters = self.parse_key(key)?;
        Ok(self
            .nodes
            .find(self.nodes.root(), &letters)
            .filter(|&node| self.nodes.value(node).is_some()))
    }

    fn parse_key(&self, key: &str) -> LetterTrieResult<Vec<Letter>> {
        if key.is_empty() {
            return Err(LetterTrieError::EmptyKey);
        }

        let letters = key
            .chars()
            .enumerate()
            .map(|(position, character)| {
                Letter::new(character).ok_or(LetterTrieError::InvalidCharacter {
                    character,
                    position,
                })
            })
            .collect::<LetterTrieResult<Vec<_>>>()?;

        if letters.len() > self.config.max_key_length {
            return Err(LetterTrieError::KeyTooLong {
                length: letters.len(),
                max_length: self.config.max_key_length,
            });
        }

        Ok(letters)
    }
}

impl Default for LetterTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LetterTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
