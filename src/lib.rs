//! Points Trie Library
//!
//! This library contains the core components of the Points Trie: a letter-indexed
//! prefix tree mapping names to points, its configuration and error types, and the
//! interactive shell driving it. The binary crate is a thin wrapper around these
//! components.
//!
//! # Architecture
//!
//! - [`data_structures::letter_trie`]: the trie engine (nodes, pruning, rendering)
//! - [`shell`]: command parsing and the read-eval-print loop
//! - [`config`]: layered configuration with validation
//! - [`error`]: error types and reporting

#![forbid(unsafe_code)]

pub mod config;
pub mod data_structures;
pub mod error;
pub mod shell;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;
