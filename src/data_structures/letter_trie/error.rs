//! Error types for the Letter Trie.
//!
//! This module defines the error types that can occur during Letter Trie operations.
//! Missing, duplicate and valueless keys are ordinary outcomes and are reported
//! through `bool`/`Option` results instead.

/// Errors that can occur in Letter Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LetterTrieError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key contains a character outside the a-z alphabet.
    #[error("Character '{character}' at position {position} is not a letter from a to z")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Zero-based character position inside the key.
        position: usize,
    },

    /// Error when a key exceeds the maximum length allowed.
    #[error("Key of length {length} exceeds maximum key length of {max_length}")]
    KeyTooLong {
        /// Number of letters in the rejected key.
        length: usize,
        /// The maximum allowed length.
        max_length: usize,
    },
}

/// Result type for Letter Trie operations
pub type LetterTrieResult<T> = Result<T, LetterTrieError>;
