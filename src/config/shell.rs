//! Shell configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Interactive shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt written before each input line
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "trie> ".to_string(),
        }
    }
}

impl Validate for ShellConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prompt.contains(|c: char| c == '\n' || c == '\r') {
            return Err(ConfigError::ValidationError(
                "prompt must not contain line breaks".to_string(),
            ));
        }

        Ok(())
    }
}
