//! Test modules for the Points Trie.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests for the trie engine using proptest
//! - Transcript tests for the interactive shell
//! - Shared fixtures and strategies

pub mod config_tests;
pub mod shell_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    capture_logs, create_test_dir, entries_strategy, key_strategy, MockErrorReporter,
    TestFixture,
};
