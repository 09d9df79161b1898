//! Command handlers for the alia CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod colors;
pub mod completions;
pub mod config;
pub mod inspect;
pub mod print;
pub mod tokens;

use anyhow::Result;

use alia::{ColorChoice, Config, Renderer};

/// Loaded configuration plus a renderer honouring the color choice.
pub struct Context {
    pub config: Config,
    pub renderer: Renderer,
}

impl Context {
    /// Load the config; a `--color` flag overrides `[output].color`.
    pub fn load(color: Option<ColorChoice>) -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config, color))
    }

    /// Build from an already loaded config.
    pub fn with_config(config: Config, color: Option<ColorChoice>) -> Self {
        let choice = color.unwrap_or(config.output.color);
        Self {
            renderer: Renderer::with_encoder(choice.encoder()),
            config,
        }
    }
}
