//! Data structures for the Points Trie.
//!
//! This module contains the trie engine. All implementations adhere to the
//! project requirements:
//! - No unsafe code
//! - Iterative traversal wherever the key length drives the depth
//! - Explicit error types for rejected input

pub mod letter_trie;

// Re-export common data structures
pub use letter_trie::{LetterTrie, LetterTrieConfig, LetterTrieError, LetterTrieResult, Points};
