//! Style codes and their terminal encodings.
//!
//! The renderer only ever speaks in [`StyleCode`]s. A [`StyleEncoder`] turns
//! them into the bytes a terminal understands:
//! - [`AnsiEncoder`] emits SGR escape sequences (256-color foreground)
//! - [`PlainEncoder`] emits nothing, so tags are consumed without styling

use serde::{Deserialize, Serialize};

/// ANSI escape sequences used by [`AnsiEncoder`].
pub mod ansi {
    /// Bold on (SGR 1)
    pub const BOLD: &str = "\x1b[1m";
    /// Bold and dim off (SGR 22)
    pub const BOLD_DIM_RESET: &str = "\x1b[22m";
    /// Underline on (SGR 4)
    pub const UNDERLINE: &str = "\x1b[4m";
    /// Underline off (SGR 24)
    pub const UNDERLINE_RESET: &str = "\x1b[24m";
    /// Default foreground (SGR 39)
    pub const FG_RESET: &str = "\x1b[39m";
    /// Reset all attributes (SGR 0)
    pub const RESET: &str = "\x1b[0m";

    /// 256-color foreground (SGR 38;5;n)
    pub fn fg(code: u8) -> String {
        format!("\x1b[38;5;{}m", code)
    }
}

/// An abstract terminal styling instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCode {
    /// Set the foreground to a 256-color palette entry.
    Foreground(u8),
    Bold,
    /// Turn off bold and dim.
    BoldDimReset,
    Underline,
    UnderlineReset,
    /// Return the foreground to the terminal default.
    ForegroundReset,
    /// Reset every attribute.
    Reset,
}

/// Maps a [`StyleCode`] to its concrete representation.
pub trait StyleEncoder {
    fn encode(&self, code: StyleCode) -> String;
}

/// Encodes styles as ANSI SGR escape sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiEncoder;

impl StyleEncoder for AnsiEncoder {
    fn encode(&self, code: StyleCode) -> String {
        match code {
            StyleCode::Foreground(n) => ansi::fg(n),
            StyleCode::Bold => ansi::BOLD.to_string(),
            StyleCode::BoldDimReset => ansi::BOLD_DIM_RESET.to_string(),
            StyleCode::Underline => ansi::UNDERLINE.to_string(),
            StyleCode::UnderlineReset => ansi::UNDERLINE_RESET.to_string(),
            StyleCode::ForegroundReset => ansi::FG_RESET.to_string(),
            StyleCode::Reset => ansi::RESET.to_string(),
        }
    }
}

/// Encodes every style as the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainEncoder;

impl StyleEncoder for PlainEncoder {
    fn encode(&self, _code: StyleCode) -> String {
        String::new()
    }
}

/// When to emit escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal (honours NO_COLOR and FORCE_COLOR)
    #[default]
    Auto,
    /// Always emit escape sequences
    Always,
    /// Never emit escape sequences
    Never,
}

impl ColorChoice {
    /// Decide whether output should be styled.
    pub fn use_color(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if env_flag_set("NO_COLOR") {
                    false
                } else if env_flag_set("FORCE_COLOR") {
                    true
                } else {
                    atty::is(atty::Stream::Stdout)
                }
            }
        }
    }

    /// Build the encoder matching this choice.
    pub fn encoder(self) -> Box<dyn StyleEncoder + Send + Sync> {
        if self.use_color() {
            Box::new(AnsiEncoder)
        } else {
            Box::new(PlainEncoder)
        }
    }
}

/// An environment flag counts as set when present and non-empty.
fn env_flag_set(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|v| !v.is_empty())
}
