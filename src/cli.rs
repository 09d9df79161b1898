//! CLI definitions for alia
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::style::ColorChoice;

/// Build clap styles for help output.
///
/// - Blue: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Blue.on_default() | Effects::BOLD)
        .usage(AnsiColor::Blue.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "alia")]
#[command(about = "Print text in color using lightweight inline markup")]
#[command(long_about = "alia - print text in color using lightweight inline markup.

Inline tags style part of a message:
    <b>...</b>      bold
    <u>...</u>      underline
    <N>...</N>      256-color foreground N (markup command only)

Closing a bold or underline region inside `say`/`code` returns to the
message color. A timestamp is appended unless disabled with -T or in the
config file (~/.config/alia/config.toml).

QUICK START:
    alia say green \"<b>done</b> in 3s\"
    alia code 202 \"warming up\"
    alia markup \"<33>blue</33> and <196>red</196>\"
    alia colors")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// When to emit color escape sequences
    #[arg(long = "color", id = "color_choice", value_name = "COLOR", global = true, value_enum)]
    pub color: Option<ColorChoice>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Timestamp flags shared by the printing commands.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct TimestampArgs {
    /// Append the current time
    #[arg(short = 't', long, conflicts_with = "no_timestamp")]
    pub timestamp: bool,
    /// Do not append the current time
    #[arg(short = 'T', long)]
    pub no_timestamp: bool,
}

impl TimestampArgs {
    /// Flags win over the configured default.
    pub fn resolve(self, default: bool) -> bool {
        if self.timestamp {
            true
        } else if self.no_timestamp {
            false
        } else {
            default
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print text in a named color
    #[command(long_about = "Print text in a named color.

COLOR is a built-in name (see `alia names`) or an alias from the
[palette] section of the config file. <b> and <u> tags are honoured.

EXAMPLES:
    alia say blue \"deploying\"
    alia say light-pink \"<u>note</u>: cache is cold\" -T")]
    Say {
        /// Color name (e.g., blue, light_pink)
        color: String,
        /// Text to print
        text: String,
        #[command(flatten)]
        timestamp: TimestampArgs,
    },

    /// Print text in a numeric 256-color code
    #[command(long_about = "Print text in a numeric 256-color code.

EXAMPLE:
    alia code 202 \"<b>warning</b> disk at 91%\"")]
    Code {
        /// Color code (0-255)
        code: u8,
        /// Text to print
        text: String,
        #[command(flatten)]
        timestamp: TimestampArgs,
    },

    /// Print text with inline <N>...</N> color tags
    #[command(long_about = "Print text with inline numeric color tags.

<N> switches the foreground to color N (0-255) and any </N> switches it
back to the default; the digits in the closing tag are not checked.
<b>...</b> makes text bold; </u> ends an underline with a full reset,
which also drops the current color. The timestamp is drawn in gray.

EXAMPLE:
    alia markup \"<40>ok</40> <b>12</b> files, <196>1 failed</196>\"")]
    Markup {
        /// Text with markup
        text: String,
        #[command(flatten)]
        timestamp: TimestampArgs,
    },

    /// Preview the 256-color palette
    Colors {
        /// Preview a single code instead of all 256
        code: Option<u8>,
    },

    /// List named colors
    Names,

    /// Show how text is split into markup tokens
    Tokens {
        /// Text with markup
        text: String,
        /// Only recognize <b> and <u> (the say/code dialect)
        #[arg(long)]
        single: bool,
        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe the styles in already-rendered text
    #[command(long_about = "Describe the styles in already-rendered text.

Reads TEXT, or standard input when TEXT is omitted, and prints it with
escape sequences replaced by readable markers such as [fg=33] and [-].

EXAMPLE:
    alia markup \"<33>hi</33>\" -T --color always | alia inspect")]
    Inspect {
        /// Rendered text (reads stdin if omitted)
        text: Option<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Add or update a palette alias
    SetColor {
        /// Alias name
        name: String,
        /// Color code (0-255)
        code: u8,
    },
    /// Remove a palette alias
    RemoveColor {
        /// Alias name
        name: String,
    },
}
