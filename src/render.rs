//! Markup rendering.
//!
//! [`Renderer`] turns text with inline tags into styled output in one of two
//! modes:
//!
//! - **Single-color** ([`Renderer::render`]): the whole string is wrapped in
//!   one foreground color. `<b>` and `<u>` switch bold/underline on; their
//!   closing tags reset everything and re-apply the ambient color, so text
//!   after a closed region keeps the caller's color.
//! - **Multi-color** ([`Renderer::render_markup`]): `<N>...</N>` picks a
//!   256-color foreground inline. `</N>` and `</b>` reset only their own
//!   attribute; `</u>` resets everything, including the active color.
//!
//! Both modes end with a full reset so no style leaks into later output.

use std::io::{self, Write};

use chrono::{Local, NaiveDateTime};
use tracing::trace;

use crate::error::RenderError;
use crate::markup::{self, MarkupToken, Mode};
use crate::palette;
use crate::style::{AnsiEncoder, StyleCode, StyleEncoder};

/// Timestamp layout appended when a timestamp is requested.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Foreground used for the multi-color timestamp block (gray).
pub const TIMESTAMP_COLOR: u8 = 246;

/// Everything needed for one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest<'a> {
    pub text: &'a str,
    pub include_timestamp: bool,
    /// `Some` selects single-color mode, `None` the multi-color renderer.
    pub color: Option<u8>,
}

impl<'a> RenderRequest<'a> {
    /// A single-color request.
    pub fn colored(text: &'a str, color: u8, include_timestamp: bool) -> Self {
        Self {
            text,
            include_timestamp,
            color: Some(color),
        }
    }

    /// A multi-color markup request.
    pub fn markup(text: &'a str, include_timestamp: bool) -> Self {
        Self {
            text,
            include_timestamp,
            color: None,
        }
    }
}

/// Renders markup with a given encoder and clock.
pub struct Renderer {
    encoder: Box<dyn StyleEncoder + Send + Sync>,
    clock: fn() -> NaiveDateTime,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl Renderer {
    /// ANSI output, local wall-clock timestamps.
    pub fn new() -> Self {
        Self::with_encoder(Box::new(AnsiEncoder))
    }

    /// Use a specific encoder.
    pub fn with_encoder(encoder: Box<dyn StyleEncoder + Send + Sync>) -> Self {
        Self {
            encoder,
            clock: local_now,
        }
    }

    /// Replace the timestamp source (for deterministic output).
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    fn encode(&self, code: StyleCode) -> String {
        self.encoder.encode(code)
    }

    fn timestamp(&self) -> String {
        (self.clock)().format(TIMESTAMP_FORMAT).to_string()
    }

    /// Wrap `text` in one color, honouring `<b>` and `<u>`.
    pub fn render(&self, text: &str, color: u8, include_timestamp: bool) -> String {
        trace!(color, include_timestamp, len = text.len(), "render single-color");

        let text = if include_timestamp {
            format!("{} [{}]", text, self.timestamp())
        } else {
            text.to_string()
        };

        let ambient = self.encode(StyleCode::Foreground(color));
        let reset = self.encode(StyleCode::Reset);
        let body = markup::substitute(&text, Mode::SingleColor, |token| match token {
            MarkupToken::OpenBold => self.encode(StyleCode::Bold),
            MarkupToken::OpenUnderline => self.encode(StyleCode::Underline),
            MarkupToken::CloseBold | MarkupToken::CloseUnderline => {
                format!("{}{}", reset, ambient)
            }
            // Not in the single-color families; substitute never yields these.
            MarkupToken::OpenColor(_) | MarkupToken::CloseColor | MarkupToken::PlainText(_) => {
                String::new()
            }
        });

        format!("{}{}{}", ambient, body, reset)
    }

    /// Look up `name` in the built-in palette, then [`Renderer::render`].
    pub fn render_named(
        &self,
        text: &str,
        name: &str,
        include_timestamp: bool,
    ) -> Result<String, RenderError> {
        let color = palette::lookup(name)?;
        Ok(self.render(text, color, include_timestamp))
    }

    /// Render `<N>...</N>` color tags along with `<b>` and `<u>`.
    pub fn render_markup(&self, text: &str, include_timestamp: bool) -> String {
        trace!(include_timestamp, len = text.len(), "render multi-color");

        let text = if include_timestamp {
            let block = format!(
                "{}[{}]{}",
                self.encode(StyleCode::Foreground(TIMESTAMP_COLOR)),
                self.timestamp(),
                self.encode(StyleCode::ForegroundReset)
            );
            format!("{} {}", text, block)
        } else {
            text.to_string()
        };

        let body = markup::substitute(&text, Mode::MultiColor, |token| match token {
            MarkupToken::OpenColor(code) => self.encode(StyleCode::Foreground(*code)),
            MarkupToken::CloseColor => self.encode(StyleCode::ForegroundReset),
            MarkupToken::OpenBold => self.encode(StyleCode::Bold),
            MarkupToken::CloseBold => self.encode(StyleCode::BoldDimReset),
            MarkupToken::OpenUnderline => self.encode(StyleCode::Underline),
            MarkupToken::CloseUnderline => self.encode(StyleCode::Reset),
            MarkupToken::PlainText(s) => s.clone(),
        });

        format!("{}{}", body, self.encode(StyleCode::Reset))
    }

    /// Dispatch on the request's color.
    pub fn render_request(&self, request: &RenderRequest<'_>) -> String {
        match request.color {
            Some(color) => self.render(request.text, color, request.include_timestamp),
            None => self.render_markup(request.text, request.include_timestamp),
        }
    }

    /// Render a request and write it, with a newline, to `out`.
    pub fn write_request<W: Write>(
        &self,
        out: &mut W,
        request: &RenderRequest<'_>,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.render_request(request))
    }

    /// Render a request and print it to standard output.
    pub fn print(&self, request: &RenderRequest<'_>) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_request(&mut lock, request)
    }

    /// One preview line: `fg(N)` drawn in color N.
    pub fn preview_line(&self, code: u8) -> String {
        format!(
            "{}fg({}){}",
            self.encode(StyleCode::Foreground(code)),
            code,
            self.encode(StyleCode::Reset)
        )
    }

    /// Preview one code, or all 256 when `code` is `None`.
    pub fn write_preview<W: Write>(&self, out: &mut W, code: Option<u8>) -> io::Result<()> {
        match code {
            Some(code) => writeln!(out, "{}", self.preview_line(code)),
            None => {
                for code in 0..=u8::MAX {
                    writeln!(out, "{}", self.preview_line(code))?;
                }
                Ok(())
            }
        }
    }

    /// [`Renderer::write_preview`] to standard output.
    pub fn preview_color(&self, code: Option<u8>) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_preview(&mut lock, code)
    }
}

/// Single-color render with ANSI output.
pub fn render(text: &str, color: u8, include_timestamp: bool) -> String {
    Renderer::new().render(text, color, include_timestamp)
}

/// Named-color render with ANSI output.
pub fn render_named(text: &str, name: &str, include_timestamp: bool) -> Result<String, RenderError> {
    Renderer::new().render_named(text, name, include_timestamp)
}

/// Multi-color markup render with ANSI output.
pub fn render_markup(text: &str, include_timestamp: bool) -> String {
    Renderer::new().render_markup(text, include_timestamp)
}

/// Print a color preview to standard output.
pub fn preview_color(code: Option<u8>) -> io::Result<()> {
    Renderer::new().preview_color(code)
}
