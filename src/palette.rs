//! Built-in named colors.
//!
//! A fixed, read-only table from names like `blue` or `light_pink` to
//! 256-color palette codes.

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// A color with a well-known name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Blue,
    LightBlue,
    Teal,
    LightTeal,
    Gray,
    Red,
    DarkRed,
    Green,
    LightGreen,
    Purple,
    Violet,
    Magenta,
    Pink,
    LightPink,
    Orange,
}

impl NamedColor {
    /// Every named color, in display order.
    pub const ALL: [NamedColor; 15] = [
        NamedColor::Blue,
        NamedColor::LightBlue,
        NamedColor::Teal,
        NamedColor::LightTeal,
        NamedColor::Gray,
        NamedColor::Red,
        NamedColor::DarkRed,
        NamedColor::Green,
        NamedColor::LightGreen,
        NamedColor::Purple,
        NamedColor::Violet,
        NamedColor::Magenta,
        NamedColor::Pink,
        NamedColor::LightPink,
        NamedColor::Orange,
    ];

    /// The canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Blue => "blue",
            NamedColor::LightBlue => "light_blue",
            NamedColor::Teal => "teal",
            NamedColor::LightTeal => "light_teal",
            NamedColor::Gray => "gray",
            NamedColor::Red => "red",
            NamedColor::DarkRed => "dark_red",
            NamedColor::Green => "green",
            NamedColor::LightGreen => "light_green",
            NamedColor::Purple => "purple",
            NamedColor::Violet => "violet",
            NamedColor::Magenta => "magenta",
            NamedColor::Pink => "pink",
            NamedColor::LightPink => "light_pink",
            NamedColor::Orange => "orange",
        }
    }

    /// The 256-color palette code.
    pub fn code(self) -> u8 {
        match self {
            NamedColor::Blue => 33,
            NamedColor::LightBlue => 39,
            NamedColor::Teal => 30,
            NamedColor::LightTeal => 32,
            NamedColor::Gray => 246,
            NamedColor::Red => 196,
            NamedColor::DarkRed => 160,
            NamedColor::Green => 40,
            // Shares teal's code.
            NamedColor::LightGreen => 30,
            NamedColor::Purple => 57,
            NamedColor::Violet => 63,
            NamedColor::Magenta => 198,
            NamedColor::Pink => 200,
            NamedColor::LightPink => 205,
            NamedColor::Orange => 202,
        }
    }

    /// Find a color by name.
    ///
    /// Matching ignores ASCII case and surrounding whitespace, and accepts
    /// `-` in place of `_` (`light-blue` finds `light_blue`).
    pub fn lookup(name: &str) -> Result<Self, RenderError> {
        let normalized = normalize(name);
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| RenderError::unknown_color(name))
    }

    /// All canonical names, in display order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|c| c.name())
    }
}

/// Look up the palette code for a named color.
pub fn lookup(name: &str) -> Result<u8, RenderError> {
    NamedColor::lookup(name).map(NamedColor::code)
}

/// Normalize a color name for comparison.
pub fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}
