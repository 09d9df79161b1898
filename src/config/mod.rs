//! Configuration management for alia

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::RenderError;
use crate::palette::{self, NamedColor};

impl Config {
    /// Get the config file path (~/.config/alia/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/alia)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Resolve a color name against the configured palette, then the
    /// built-in one.
    pub fn resolve_color(&self, name: &str) -> Result<u8, RenderError> {
        let wanted = palette::normalize(name);
        if let Some((alias, code)) = self
            .palette
            .iter()
            .find(|(alias, _)| palette::normalize(alias) == wanted)
        {
            debug!(alias = %alias, code, "resolved configured color");
            return Ok(*code);
        }
        palette::lookup(name)
    }

    /// Every usable color name: configured aliases first, then built-ins.
    pub fn color_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.palette.keys().cloned().collect();
        for name in NamedColor::names() {
            if !names.iter().any(|n| palette::normalize(n) == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Add or update a palette alias. Returns the previous code, if any.
    pub fn set_color(&mut self, name: &str, code: u8) -> Option<u8> {
        self.palette.insert(palette::normalize(name), code)
    }

    /// Remove a palette alias
    pub fn remove_color(&mut self, name: &str) -> bool {
        self.palette.remove(&palette::normalize(name)).is_some()
    }
}
