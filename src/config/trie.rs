//! Trie configuration module.
//!
//! The trie section of the configuration file maps directly onto
//! [`LetterTrieConfig`]; this module adds its validation rules.

use super::{ConfigResult, Validate};
use crate::data_structures::letter_trie::{LetterTrieConfig, MAX_KEY_LENGTH_LIMIT};
use crate::error::config::ConfigError;

/// Characters with a meaning in rendered output.
const RENDER_DELIMITERS: [char; 4] = ['(', ')', '[', ']'];

impl Validate for LetterTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        let label = self.root_label;
        if label.is_ascii_alphabetic()
            || label.is_whitespace()
            || label.is_control()
            || RENDER_DELIMITERS.contains(&label)
        {
            return Err(ConfigError::ValidationError(format!(
                "root_label {label:?} must be a visible character outside a-z and ()[]"
            )));
        }

        if self.max_key_length == 0 || self.max_key_length > MAX_KEY_LENGTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_key_length".to_string(),
                message: format!("must be between 1 and {MAX_KEY_LENGTH_LIMIT}"),
            });
        }

        Ok(())
    }
}
