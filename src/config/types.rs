//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::palette;
use crate::style::ColorChoice;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    /// Extra named colors, checked before the built-in palette.
    #[serde(default)]
    pub palette: BTreeMap<String, u8>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Append a timestamp unless a command-line flag says otherwise
    #[serde(default = "default_timestamp")]
    pub timestamp: bool,
    /// When to emit escape sequences
    #[serde(default)]
    pub color: ColorChoice,
}

pub fn default_timestamp() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            timestamp: default_timestamp(),
            color: ColorChoice::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns `Ok(())` when every palette alias is usable, or an error
    /// describing the first invalid entry.
    pub fn validate(&self) -> Result<(), String> {
        for name in self.palette.keys() {
            let normalized = palette::normalize(name);
            if normalized.is_empty() {
                return Err("palette names must not be empty".to_string());
            }
            if normalized.chars().any(char::is_whitespace) {
                return Err(format!("palette name '{}' contains whitespace", name));
            }
        }
        Ok(())
    }
}
