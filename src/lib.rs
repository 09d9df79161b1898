//! alia - inline markup for colored terminal output
//!
//! Renders strings like `"<b>done</b> in 3s"` or `"<33>blue</33> plain"` into
//! ANSI-styled text, with an optional timestamp suffix.
//!
//! ```
//! let out = alia::render_named("<b>ok</b> all good", "green", false)?;
//! assert!(out.starts_with("\x1b[38;5;40m"));
//! # Ok::<(), alia::RenderError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod markup;
pub mod palette;
pub mod render;
pub mod style;
pub mod text;

pub use config::Config;
pub use error::RenderError;
pub use markup::{MarkupToken, Mode};
pub use palette::NamedColor;
pub use render::{preview_color, render, render_markup, render_named, RenderRequest, Renderer};
pub use style::{AnsiEncoder, ColorChoice, PlainEncoder, StyleCode, StyleEncoder};
