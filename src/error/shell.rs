//! Shell error module.
//!
//! This module defines the errors reported by the interactive shell. The display
//! text of each variant is exactly the line printed to the user.

use crate::data_structures::letter_trie::LetterTrieError;
use std::io;
use thiserror::Error;

/// Errors that can occur while handling a shell line.
#[derive(Error, Debug)]
pub enum ShellError {
    /// The line contains something other than lowercase letters, digits and spaces.
    #[error("Error! Only use lowercase letters.")]
    OnlyLowercase,

    /// The line is blank.
    #[error("Error! No command.")]
    NoCommand,

    /// The command word is not a prefix of any known command.
    #[error("Error! Invalid command.")]
    InvalidCommand,

    /// A name argument contains a digit.
    #[error("Error! Names cannot contain numbers.")]
    NameContainsNumbers,

    /// The name argument is missing.
    #[error("Error! No Name.")]
    NoName,

    /// The points argument is missing or not an integer.
    #[error("Error! No points.")]
    NoPoints,

    /// `add` was called for a name that already holds points.
    #[error("Error! '{0}' is already allocated.")]
    AlreadyAllocated(String),

    /// `change` or `delete` was called for a name without points.
    #[error("Error! '{0}' could not be found.")]
    NotFound(String),

    /// `points` was called for a name without points.
    #[error("Error! '{0}' could not be found or does not have any points.")]
    NoPointsFor(String),

    /// The trie rejected a key that passed line validation.
    #[error("Error! {0}")]
    Trie(#[from] LetterTrieError),

    /// Reading input or writing output failed.
    #[error("Shell I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;
